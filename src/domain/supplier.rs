use garde::Validate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::numeric;

/// A supplier (`fornecedores`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Supplier {
    #[serde(deserialize_with = "numeric::text")]
    pub id: String,
    #[serde(rename = "empresa", deserialize_with = "numeric::text")]
    pub company: String,
    #[serde(deserialize_with = "numeric::text")]
    pub cnpj: String,
    #[serde(deserialize_with = "numeric::text")]
    pub email: String,
    #[serde(rename = "telefone", deserialize_with = "numeric::text")]
    pub phone: String,
    #[serde(rename = "endereco", deserialize_with = "numeric::text")]
    pub address: String,
    #[serde(rename = "cidade", deserialize_with = "numeric::text")]
    pub city: String,
    /// State id as returned by the locality service.
    #[serde(rename = "estado", deserialize_with = "numeric::text")]
    pub state: String,
    #[serde(rename = "categoria", deserialize_with = "numeric::text")]
    pub category: String,
    #[serde(rename = "servicoEspecializado", deserialize_with = "numeric::text")]
    pub specialized_service: String,
    /// Delivery lead time in days.
    #[serde(rename = "prazoEntrega", deserialize_with = "numeric::count")]
    pub delivery_days: u32,
    /// Keys this crate does not model, written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Validate)]
pub struct SupplierCreate {
    #[garde(length(min = 1))]
    pub company: String,
    #[garde(length(min = 1))]
    pub cnpj: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub phone: String,
    #[garde(skip)]
    pub address: String,
    #[garde(length(min = 1))]
    pub city: String,
    #[garde(length(min = 1))]
    pub state: String,
    #[garde(skip)]
    pub category: String,
    #[garde(skip)]
    pub specialized_service: String,
    #[garde(skip)]
    pub delivery_days: u32,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct SupplierPatch {
    #[garde(length(min = 1))]
    pub company: Option<String>,
    #[garde(email)]
    pub email: Option<String>,
    #[garde(length(min = 1))]
    pub phone: Option<String>,
    #[garde(skip)]
    pub address: Option<String>,
    #[garde(length(min = 1))]
    pub city: Option<String>,
    #[garde(length(min = 1))]
    pub state: Option<String>,
    #[garde(skip)]
    pub category: Option<String>,
    #[garde(skip)]
    pub specialized_service: Option<String>,
    #[garde(skip)]
    pub delivery_days: Option<u32>,
}
