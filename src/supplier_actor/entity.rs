use garde::Validate;

use crate::actor_framework::Entity;
use crate::domain::{describe_report, Supplier, SupplierCreate, SupplierPatch};
use crate::store::SUPPLIERS;

impl Entity for Supplier {
    type CreatePayload = SupplierCreate;
    type Patch = SupplierPatch;
    type Action = ();
    type ActionResult = ();

    const COLLECTION: &'static str = SUPPLIERS;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, payload: SupplierCreate) -> Result<Self, String> {
        payload.validate().map_err(|r| describe_report(&r))?;
        Ok(Self {
            id,
            company: payload.company,
            cnpj: payload.cnpj,
            email: payload.email,
            phone: payload.phone,
            address: payload.address,
            city: payload.city,
            state: payload.state,
            category: payload.category,
            specialized_service: payload.specialized_service,
            delivery_days: payload.delivery_days,
            ..Self::default()
        })
    }

    /// CNPJ is the supplier's legal identity and is not editable.
    fn on_update(&mut self, patch: SupplierPatch) -> Result<(), String> {
        patch.validate().map_err(|r| describe_report(&r))?;
        let city_given = patch.city.is_some();
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(state) = patch.state {
            // A new state invalidates the city picked from the old one.
            if !city_given && state != self.state {
                self.city.clear();
            }
            self.state = state;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(service) = patch.specialized_service {
            self.specialized_service = service;
        }
        if let Some(days) = patch.delivery_days {
            self.delivery_days = days;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
