use garde::Validate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::date::iso_date;
use super::{numeric, positive, positive_opt};

/// Represents a product in the catalog (`produtos`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "numeric::text")]
    pub id: String,
    #[serde(rename = "codigoProduto", deserialize_with = "numeric::text")]
    pub code: String,
    #[serde(rename = "nomeProduto", deserialize_with = "numeric::text")]
    pub name: String,
    #[serde(rename = "descricao", deserialize_with = "numeric::text")]
    pub description: String,
    #[serde(rename = "categoria", deserialize_with = "numeric::text")]
    pub category: String,
    /// Units in stock.
    #[serde(rename = "quantidade", deserialize_with = "numeric::count")]
    pub stock: u32,
    #[serde(rename = "precoUnitario", deserialize_with = "numeric::number")]
    pub unit_price: f64,
    /// Soft reference to a supplier id.
    #[serde(rename = "fornecedor", deserialize_with = "numeric::text")]
    pub supplier_id: String,
    #[serde(rename = "dataCadastro", deserialize_with = "numeric::text")]
    pub registered_on: String,
    /// Keys this crate does not model, written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: f64, stock: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            stock,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct ProductCreate {
    #[garde(length(min = 1))]
    pub code: String,
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub description: String,
    #[garde(length(min = 1))]
    pub category: String,
    #[garde(range(min = 1))]
    pub stock: u32,
    #[garde(custom(positive))]
    pub unit_price: f64,
    #[garde(length(min = 1))]
    pub supplier_id: String,
    #[garde(custom(iso_date))]
    pub registered_on: String,
}

/// Product edits. A price change here never reaches orders already placed.
#[derive(Debug, Clone, Default, Validate)]
pub struct ProductPatch {
    #[garde(length(min = 1))]
    pub name: Option<String>,
    #[garde(length(min = 1))]
    pub description: Option<String>,
    #[garde(length(min = 1))]
    pub category: Option<String>,
    #[garde(skip)]
    pub stock: Option<u32>,
    #[garde(custom(positive_opt))]
    pub unit_price: Option<f64>,
    #[garde(length(min = 1))]
    pub supplier_id: Option<String>,
}
