use garde::Validate;

use crate::actor_framework::Entity;
use crate::domain::{describe_report, Employee, EmployeeCreate, EmployeePatch};
use crate::store::EMPLOYEES;

impl Entity for Employee {
    type CreatePayload = EmployeeCreate;
    type Patch = EmployeePatch;
    type Action = ();
    type ActionResult = ();

    const COLLECTION: &'static str = EMPLOYEES;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, payload: EmployeeCreate) -> Result<Self, String> {
        payload.validate().map_err(|r| describe_report(&r))?;
        Ok(Self {
            id,
            name: payload.name,
            surname: payload.surname,
            role: payload.role,
            email: payload.email,
            phone: payload.phone,
            birth_date: payload.birth_date,
            city: payload.city,
            state: payload.state,
            ..Self::default()
        })
    }

    /// Name and birth date are fixed once registered; the edit form only
    /// exposes contact details, role and location.
    fn on_update(&mut self, patch: EmployeePatch) -> Result<(), String> {
        patch.validate().map_err(|r| describe_report(&r))?;
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
