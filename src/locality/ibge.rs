use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::{LocalityError, LocalityLookup, Municipality, State};

/// HTTP adapter for the IBGE localities API.
#[derive(Clone)]
pub struct IbgeLocalityClient {
    client: reqwest::Client,
    base_url: String,
}

impl IbgeLocalityClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://servicodados.ibge.gov.br/api/v1/localidades";

    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LocalityError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LocalityError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "Sending request");

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(LocalityError::Status {
                status: resp.status().as_u16(),
                url,
            });
        }
        Ok(resp.json::<T>().await?)
    }
}

impl LocalityLookup for IbgeLocalityClient {
    #[instrument(skip(self))]
    async fn states(&self) -> Result<Vec<State>, LocalityError> {
        self.get_json("/estados").await
    }

    #[instrument(skip(self))]
    async fn municipalities(&self, state_id: &str) -> Result<Vec<Municipality>, LocalityError> {
        self.get_json(&format!("/estados/{state_id}/municipios")).await
    }
}
