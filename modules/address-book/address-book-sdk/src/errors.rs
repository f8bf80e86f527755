//! Public error types for the `address-book` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Errors that can be returned by the `AddressBookApi`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// Address with the specified ID was not found.
    #[error("Address not found: {id}")]
    NotFound { id: i32 },

    /// The request was rejected before reaching the store.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The geocoding provider could not resolve an address.
    #[error("Geocoding failed: {message}")]
    GeocodingFailed { message: String },

    /// An internal error occurred.
    #[error("Internal error")]
    Internal,
}

impl AddressBookError {
    /// Create a `NotFound` error.
    #[must_use]
    pub fn not_found(id: i32) -> Self {
        Self::NotFound { id }
    }

    /// Create a Validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a `GeocodingFailed` error.
    pub fn geocoding_failed(message: impl Into<String>) -> Self {
        Self::GeocodingFailed {
            message: message.into(),
        }
    }

    /// Create an Internal error.
    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
