use address_book_sdk::AddressBookError;
use thiserror::Error;

/// A single rejected field in a request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Address not found: {id}")]
    NotFound { id: i32 },

    #[error("Address ID mismatch: path {path_id}, body {body_id}")]
    IdMismatch { path_id: i32, body_id: i32 },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Invalid payload: {} field(s) rejected", violations.len())]
    InvalidPayload { violations: Vec<FieldViolation> },

    #[error("Geocoding failed: {message}")]
    Geocoding { message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    #[must_use]
    pub fn not_found(id: i32) -> Self {
        Self::NotFound { id }
    }

    #[must_use]
    pub fn id_mismatch(path_id: i32, body_id: i32) -> Self {
        Self::IdMismatch { path_id, body_id }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid_payload(violations: Vec<FieldViolation>) -> Self {
        Self::InvalidPayload { violations }
    }

    pub fn geocoding(message: impl Into<String>) -> Self {
        Self::Geocoding {
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for AddressBookError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::NotFound { id } => AddressBookError::not_found(id),
            DomainError::IdMismatch { .. } => AddressBookError::validation("Address ID mismatch"),
            DomainError::Validation { field, message } => {
                AddressBookError::validation(format!("{field}: {message}"))
            }
            DomainError::InvalidPayload { violations } => AddressBookError::validation(
                violations
                    .iter()
                    .map(|v| format!("{}: {}", v.field, v.message))
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            DomainError::Geocoding { message } => AddressBookError::geocoding_failed(message),
            DomainError::Database { .. } => AddressBookError::internal(),
        }
    }
}
