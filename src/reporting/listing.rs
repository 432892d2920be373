use serde::Serialize;

use crate::domain::{Customer, Employee, Order, Product, Supplier};
use crate::formatting::{format_cnpj, format_date_br, format_phone};
use crate::locality::StateNames;
use crate::lookup::RecordIndex;
use crate::pricing::{format_amount, format_currency};

/// Order list row with every soft reference resolved to a name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderListingRow {
    pub id: String,
    pub number: String,
    pub customer: String,
    pub employee: String,
    pub product: String,
    pub quantity: u32,
    pub unit_price: String,
    pub total: String,
    pub status: String,
}

pub fn order_listing(
    orders: &[Order],
    customers: &[Customer],
    employees: &[Employee],
    products: &[Product],
) -> Vec<OrderListingRow> {
    let customers = RecordIndex::new(customers, |c| c.id.as_str());
    let employees = RecordIndex::new(employees, |e| e.id.as_str());
    let products = RecordIndex::new(products, |p| p.id.as_str());

    orders
        .iter()
        .map(|order| OrderListingRow {
            id: order.id.clone(),
            number: order.number.clone(),
            customer: customers
                .label_or_unknown(&order.customer_id, |c| c.name.as_str())
                .to_string(),
            employee: employees
                .label_or_unknown(&order.employee_id, |e| e.name.as_str())
                .to_string(),
            product: products
                .label_or_unknown(&order.product_id, |p| p.name.as_str())
                .to_string(),
            quantity: order.quantity,
            unit_price: format_currency(order.unit_price),
            total: format_currency(order.total.unwrap_or_else(|| order.line_total())),
            status: order.status.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListingRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub category: String,
    pub unit_price: String,
    pub stock: u32,
    pub supplier: String,
    pub registered_on: String,
}

/// Product list; empty cells render as `-`.
pub fn product_listing(products: &[Product], suppliers: &[Supplier]) -> Vec<ProductListingRow> {
    let suppliers = RecordIndex::new(suppliers, |s| s.id.as_str());
    let or_dash = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };

    products
        .iter()
        .map(|product| ProductListingRow {
            id: product.id.clone(),
            code: or_dash(&product.code),
            name: or_dash(&product.name),
            category: or_dash(&product.category),
            unit_price: if product.unit_price > 0.0 {
                format_amount(product.unit_price)
            } else {
                "-".to_string()
            },
            stock: product.stock,
            supplier: if product.supplier_id.is_empty() {
                "-".to_string()
            } else {
                suppliers
                    .label_or_unknown(&product.supplier_id, |s| s.company.as_str())
                    .to_string()
            },
            registered_on: or_dash(&format_date_br(&product.registered_on)),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeListingRow {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub city: String,
    pub state: String,
}

pub fn employee_listing(employees: &[Employee], states: &StateNames) -> Vec<EmployeeListingRow> {
    employees
        .iter()
        .map(|e| EmployeeListingRow {
            id: e.id.clone(),
            name: e.name.clone(),
            surname: e.surname.clone(),
            role: e.role.clone(),
            email: e.email.clone(),
            phone: format_phone(&e.phone),
            birth_date: format_date_br(&e.birth_date),
            city: e.city.clone(),
            state: states.label_or_unknown(&e.state).to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierListingRow {
    pub id: String,
    pub company: String,
    pub cnpj: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub category: String,
    pub delivery: String,
}

pub fn supplier_listing(suppliers: &[Supplier], states: &StateNames) -> Vec<SupplierListingRow> {
    suppliers
        .iter()
        .map(|s| SupplierListingRow {
            id: s.id.clone(),
            company: s.company.clone(),
            cnpj: format_cnpj(&s.cnpj),
            email: s.email.clone(),
            phone: format_phone(&s.phone),
            city: s.city.clone(),
            state: states.label_or_raw(&s.state).to_string(),
            category: s.category.clone(),
            delivery: format!("{} dias", s.delivery_days),
        })
        .collect()
}
