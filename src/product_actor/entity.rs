use garde::Validate;

use crate::actor_framework::Entity;
use crate::domain::{describe_report, Product, ProductCreate, ProductPatch};
use crate::store::PRODUCTS;

impl Entity for Product {
    type CreatePayload = ProductCreate;
    type Patch = ProductPatch;
    type Action = ();
    type ActionResult = ();

    const COLLECTION: &'static str = PRODUCTS;

    fn id(&self) -> &str {
        &self.id
    }

    /// Creates a new Product from the registration form.
    ///
    /// # Errors
    /// Returns the flattened validation report when a required field is empty,
    /// the stock is zero or the price is not a positive amount.
    fn from_create(id: String, payload: ProductCreate) -> Result<Self, String> {
        payload.validate().map_err(|r| describe_report(&r))?;
        Ok(Self {
            id,
            code: payload.code,
            name: payload.name,
            description: payload.description,
            category: payload.category,
            stock: payload.stock,
            unit_price: payload.unit_price,
            supplier_id: payload.supplier_id,
            registered_on: payload.registered_on,
            ..Self::default()
        })
    }

    /// Updates the product.
    ///
    /// # Fields Updated
    /// - `unit_price`: affects only orders priced after this edit
    /// - `stock`, `name`, `description`, `category`, `supplier_id`
    ///
    /// The product code and registration date are not editable.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        patch.validate().map_err(|r| describe_report(&r))?;
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(unit_price) = patch.unit_price {
            self.unit_price = unit_price;
        }
        if let Some(supplier_id) = patch.supplier_id {
            self.supplier_id = supplier_id;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
