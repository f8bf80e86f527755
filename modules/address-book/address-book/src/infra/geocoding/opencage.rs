//! OpenCage forward-geocoding client.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::GeocoderConfig;
use crate::domain::geo::Coordinates;
use crate::domain::ports::{GeocodeError, Geocoder};

const SUCCESS_CODE: u16 = 200;

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: ResponseStatus,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct ResponseStatus {
    code: u16,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

/// [`Geocoder`] backed by the OpenCage HTTP API.
///
/// Only the first candidate of each lookup is used.
pub struct OpenCageGeocoder {
    client: reqwest::Client,
    base_url: Url,
    api_key: SecretString,
}

impl OpenCageGeocoder {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Fails when the base URL does not parse or the HTTP client cannot be built.
    pub fn new(config: &GeocoderConfig) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| anyhow::anyhow!("invalid geocoder base_url: {e}"))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("failed to create geocoder HTTP client: {e}"))?;

        Ok(Self {
            client,
            base_url,
            api_key: SecretString::from(config.api_key.clone()),
        })
    }

    fn request_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("key", self.api_key.expose_secret())
            .append_pair("limit", "1")
            .append_pair("no_annotations", "1");
        url
    }
}

fn transport_error(e: reqwest::Error) -> GeocodeError {
    if e.is_timeout() {
        GeocodeError::Timeout
    } else {
        // the request URL carries the API key
        GeocodeError::Transport(e.without_url().to_string())
    }
}

#[async_trait]
impl Geocoder for OpenCageGeocoder {
    async fn geocode(&self, query: &str) -> Result<Coordinates, GeocodeError> {
        debug!(query, "Geocoding address");

        let response = self
            .client
            .get(self.request_url(query))
            .send()
            .await
            .map_err(|e| {
                let err = transport_error(e);
                warn!(error = %err, "OpenCage request failed");
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "OpenCage answered with an error status");
            return Err(GeocodeError::HttpStatus(status.as_u16()));
        }

        let body: GeocodeResponse = response.json().await.map_err(|e| {
            let err = if e.is_timeout() {
                GeocodeError::Timeout
            } else {
                GeocodeError::InvalidResponse(e.without_url().to_string())
            };
            warn!(error = %err, "OpenCage response could not be read");
            err
        })?;

        if body.status.code != SUCCESS_CODE {
            warn!(
                code = body.status.code,
                message = %body.status.message,
                "OpenCage reported a failure"
            );
            return Err(GeocodeError::Provider {
                code: body.status.code,
                message: body.status.message,
            });
        }

        let Some(first) = body.results.into_iter().next() else {
            warn!(query, "OpenCage returned no results");
            return Err(GeocodeError::NoResults);
        };

        Ok(Coordinates::new(first.geometry.lat, first.geometry.lng))
    }
}
