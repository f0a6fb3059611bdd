//! Geography Service
//!
//! UF and city lists from the public `localidades` API.

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use collector_form::{ApiError, CityRecord, StateRecord};

use super::{endpoint, network_error, read_json};
use crate::config::CONFIG;

#[derive(Clone, Debug)]
pub struct GeographyApi {
    base_url: String,
}

impl GeographyApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn from_config() -> Self {
        Self::new(CONFIG.geography_url.clone())
    }

    pub fn states_url(&self) -> String {
        endpoint(&self.base_url, "localidades/estados")
    }

    pub fn cities_url(&self, uf: &str) -> String {
        cities_url(&self.base_url, uf)
    }

    /// UF codes (`sigla`) in response order
    pub async fn list_states(&self) -> Result<Vec<String>, ApiError> {
        let url = self.states_url();
        log::debug!("[API] GET {}", url);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        let states: Vec<StateRecord> = read_json(response).await?;
        Ok(states.into_iter().map(|s| s.sigla).collect())
    }

    /// City names (`nome`) of one UF in response order
    pub async fn list_cities(&self, uf: &str) -> Result<Vec<String>, ApiError> {
        let url = self.cities_url(uf);
        log::debug!("[API] GET {}", url);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        let cities: Vec<CityRecord> = read_json(response).await?;
        Ok(cities.into_iter().map(|c| c.nome).collect())
    }
}

fn cities_url(base_url: &str, uf: &str) -> String {
    let uf = utf8_percent_encode(uf, NON_ALPHANUMERIC);
    endpoint(base_url, &format!("localidades/estados/{}/municipios", uf))
}
