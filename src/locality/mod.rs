//! Geographic lookup: Brazilian states and their municipalities.
//!
//! Only the cascading state/city pickers and the list screens' state column
//! use this. Lookups are plain request-response with no retry; callers that
//! must stay usable go through [`states_or_empty`] and
//! [`municipalities_or_empty`], which log a failure and return nothing.

mod ibge;

pub use ibge::IbgeLocalityClient;

use std::collections::HashMap;
use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

/// Fallback shown when a record's state id is not among the loaded states.
pub const UNKNOWN_STATE_LABEL: &str = "Estado desconhecido";

#[derive(Debug, Error)]
pub enum LocalityError {
    #[error("Locality request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Locality service returned {status} for {url}")]
    Status { status: u16, url: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub id: u64,
    #[serde(rename = "sigla", default)]
    pub abbreviation: String,
    #[serde(rename = "nome")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Municipality {
    pub id: u64,
    #[serde(rename = "nome")]
    pub name: String,
}

/// Read-only locality source.
pub trait LocalityLookup: Send + Sync {
    fn states(&self) -> impl Future<Output = Result<Vec<State>, LocalityError>> + Send;

    fn municipalities(
        &self,
        state_id: &str,
    ) -> impl Future<Output = Result<Vec<Municipality>, LocalityError>> + Send;
}

pub async fn states_or_empty<L: LocalityLookup>(lookup: &L) -> Vec<State> {
    match lookup.states().await {
        Ok(states) => {
            info!(count = states.len(), "States loaded");
            states
        }
        Err(e) => {
            error!(error = %e, "Failed to load states");
            Vec::new()
        }
    }
}

pub async fn municipalities_or_empty<L: LocalityLookup>(lookup: &L, state_id: &str) -> Vec<Municipality> {
    match lookup.municipalities(state_id).await {
        Ok(cities) => {
            info!(state_id, count = cities.len(), "Municipalities loaded");
            cities
        }
        Err(e) => {
            error!(state_id, error = %e, "Failed to load municipalities");
            Vec::new()
        }
    }
}

/// State id → name, as used by the employee and supplier list screens.
#[derive(Debug, Clone, Default)]
pub struct StateNames {
    names: HashMap<String, String>,
}

impl StateNames {
    pub fn new(states: &[State]) -> Self {
        let names = states
            .iter()
            .map(|s| (s.id.to_string(), s.name.clone()))
            .collect();
        Self { names }
    }

    pub fn get(&self, state_id: &str) -> Option<&str> {
        self.names.get(state_id.trim()).map(String::as_str)
    }

    pub fn label_or_unknown(&self, state_id: &str) -> &str {
        self.get(state_id).unwrap_or(UNKNOWN_STATE_LABEL)
    }

    /// Name if known, otherwise the stored id itself.
    pub fn label_or_raw<'a>(&'a self, state_id: &'a str) -> &'a str {
        self.get(state_id).unwrap_or(state_id)
    }
}
