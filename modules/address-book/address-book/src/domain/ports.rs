//! Outbound ports implemented by the infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

use super::geo::Coordinates;

/// Why a geocoding lookup did not produce coordinates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeocodeError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("provider answered with HTTP {0}")]
    HttpStatus(u16),

    #[error("provider reported status {code}: {message}")]
    Provider { code: u16, message: String },

    #[error("no results")]
    NoResults,

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Resolves a free-form address string to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, query: &str) -> Result<Coordinates, GeocodeError>;
}
