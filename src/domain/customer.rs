use garde::Validate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::date::{iso_date, iso_date_opt};
use super::numeric;

/// A customer (`clientes`). Referenced by orders, never owned by them.
///
/// Customers are students: the form records where and what they study.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    #[serde(deserialize_with = "numeric::text")]
    pub id: String,
    #[serde(rename = "nome", deserialize_with = "numeric::text")]
    pub name: String,
    #[serde(rename = "sobrenome", deserialize_with = "numeric::text")]
    pub surname: String,
    #[serde(deserialize_with = "numeric::text")]
    pub email: String,
    #[serde(rename = "telefone", deserialize_with = "numeric::text")]
    pub phone: String,
    #[serde(rename = "dataNascimento", deserialize_with = "numeric::text")]
    pub birth_date: String,
    #[serde(rename = "faculdade", deserialize_with = "numeric::text")]
    pub college: String,
    #[serde(rename = "curso", deserialize_with = "numeric::text")]
    pub course: String,
    #[serde(rename = "periodo", deserialize_with = "numeric::text")]
    pub period: String,
    #[serde(rename = "matricula", deserialize_with = "numeric::text")]
    pub enrollment: String,
    #[serde(rename = "foto", deserialize_with = "numeric::text")]
    pub photo_url: String,
    /// Keys this crate does not model, written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for registering a customer.
#[derive(Debug, Clone, Validate)]
pub struct CustomerCreate {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub surname: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub phone: String,
    #[garde(custom(iso_date))]
    pub birth_date: String,
    #[garde(length(min = 1))]
    pub college: String,
    #[garde(length(min = 1))]
    pub course: String,
    #[garde(length(min = 1))]
    pub period: String,
    #[garde(length(min = 1))]
    pub enrollment: String,
    #[garde(url)]
    pub photo_url: String,
}

/// Payload for editing a customer; `None` leaves the field as is.
#[derive(Debug, Clone, Default, Validate)]
pub struct CustomerPatch {
    #[garde(length(min = 1))]
    pub name: Option<String>,
    #[garde(length(min = 1))]
    pub surname: Option<String>,
    #[garde(email)]
    pub email: Option<String>,
    #[garde(length(min = 1))]
    pub phone: Option<String>,
    #[garde(custom(iso_date_opt))]
    pub birth_date: Option<String>,
    #[garde(length(min = 1))]
    pub college: Option<String>,
    #[garde(length(min = 1))]
    pub course: Option<String>,
    #[garde(length(min = 1))]
    pub period: Option<String>,
    #[garde(length(min = 1))]
    pub enrollment: Option<String>,
    #[garde(url)]
    pub photo_url: Option<String>,
}
