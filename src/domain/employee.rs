use garde::Validate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::date::iso_date;
use super::numeric;

/// An employee (`funcionarios`). Orders record which employee took them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    #[serde(deserialize_with = "numeric::text")]
    pub id: String,
    #[serde(rename = "nome", deserialize_with = "numeric::text")]
    pub name: String,
    #[serde(rename = "sobrenome", deserialize_with = "numeric::text")]
    pub surname: String,
    #[serde(rename = "cargo", deserialize_with = "numeric::text")]
    pub role: String,
    #[serde(deserialize_with = "numeric::text")]
    pub email: String,
    #[serde(rename = "telefone", deserialize_with = "numeric::text")]
    pub phone: String,
    /// `YYYY-MM-DD`.
    #[serde(rename = "dataNascimento", deserialize_with = "numeric::text")]
    pub birth_date: String,
    #[serde(rename = "cidade", deserialize_with = "numeric::text")]
    pub city: String,
    #[serde(rename = "estado", deserialize_with = "numeric::text")]
    pub state: String,
    /// Keys this crate does not model, written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Validate)]
pub struct EmployeeCreate {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub surname: String,
    #[garde(length(min = 1))]
    pub role: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub phone: String,
    #[garde(custom(iso_date))]
    pub birth_date: String,
    #[garde(length(min = 1))]
    pub city: String,
    #[garde(length(min = 1))]
    pub state: String,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct EmployeePatch {
    #[garde(length(min = 1))]
    pub role: Option<String>,
    #[garde(email)]
    pub email: Option<String>,
    #[garde(length(min = 1))]
    pub phone: Option<String>,
    #[garde(length(min = 1))]
    pub city: Option<String>,
    #[garde(length(min = 1))]
    pub state: Option<String>,
}
