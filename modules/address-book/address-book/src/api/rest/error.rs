use axum::http::StatusCode;
use modkit_errors::{ErrDef, Problem, ValidationViolation, finalize};

use crate::domain::error::DomainError;

pub const TYPE_NOT_FOUND: &str = "urn:address-book:error:not-found";
pub const TYPE_VALIDATION: &str = "urn:address-book:error:validation";
pub const TYPE_GEOCODING: &str = "urn:address-book:error:geocoding";
pub const TYPE_INTERNAL: &str = "urn:address-book:error:internal";

/// Error catalog of the address book REST API.
pub struct ErrorCode;

impl ErrorCode {
    pub const ADDRESS_NOT_FOUND: ErrDef = ErrDef {
        status: 404,
        title: "Address Not Found",
        code: "ADDRESS_NOT_FOUND",
        type_url: TYPE_NOT_FOUND,
    };
    pub const NO_MATCHING_ADDRESSES: ErrDef = ErrDef {
        status: 404,
        title: "No Matching Addresses",
        code: "NO_MATCHING_ADDRESSES",
        type_url: TYPE_NOT_FOUND,
    };
    pub const ADDRESS_ID_MISMATCH: ErrDef = ErrDef {
        status: 400,
        title: "Address ID Mismatch",
        code: "ADDRESS_ID_MISMATCH",
        type_url: TYPE_VALIDATION,
    };
    pub const VALIDATION_ERROR: ErrDef = ErrDef {
        status: 400,
        title: "Validation Error",
        code: "VALIDATION_ERROR",
        type_url: TYPE_VALIDATION,
    };
    pub const INVALID_PAYLOAD: ErrDef = ErrDef {
        status: 400,
        title: "Invalid Payload",
        code: "INVALID_PAYLOAD",
        type_url: TYPE_VALIDATION,
    };
    pub const INVALID_REQUEST: ErrDef = ErrDef {
        status: 400,
        title: "Invalid Request",
        code: "INVALID_REQUEST",
        type_url: TYPE_VALIDATION,
    };
    pub const GEOCODING_FAILED: ErrDef = ErrDef {
        status: 400,
        title: "Geocoding Failed",
        code: "GEOCODING_FAILED",
        type_url: TYPE_GEOCODING,
    };
    pub const INTERNAL_ERROR: ErrDef = ErrDef {
        status: 500,
        title: "Internal Server Error",
        code: "INTERNAL_ERROR",
        type_url: TYPE_INTERNAL,
    };
}

/// Handler result: success body or an RFC 9457 problem.
pub type ApiResult<T> = Result<T, Problem>;

fn current_trace_id() -> Option<String> {
    tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string())
}

fn violation(field: &str, message: &str) -> ValidationViolation {
    ValidationViolation {
        field: field.to_owned(),
        message: message.to_owned(),
        code: None,
    }
}

/// Problem for a catalog entry, stamped with the request path and trace id.
pub fn problem_for(def: &ErrDef, detail: impl Into<String>, instance: &str) -> Problem {
    finalize(def.as_problem(detail), instance, current_trace_id())
}

/// Map domain error to RFC 9457 Problem
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    match e {
        DomainError::NotFound { id } => problem_for(
            &ErrorCode::ADDRESS_NOT_FOUND,
            format!("Address with id {id} was not found"),
            instance,
        ),
        DomainError::IdMismatch { .. } => {
            problem_for(&ErrorCode::ADDRESS_ID_MISMATCH, "Address ID mismatch", instance)
        }
        DomainError::Validation { field, message } => {
            problem_for(&ErrorCode::VALIDATION_ERROR, message.clone(), instance)
                .with_errors(vec![violation(field, message)])
        }
        DomainError::InvalidPayload { violations } => problem_for(
            &ErrorCode::INVALID_PAYLOAD,
            "Request payload failed validation",
            instance,
        )
        .with_errors(
            violations
                .iter()
                .map(|v| violation(&v.field, &v.message))
                .collect(),
        ),
        DomainError::Geocoding { message } => {
            problem_for(&ErrorCode::GEOCODING_FAILED, message.clone(), instance)
        }
        DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Database error occurred");
            problem_for(
                &ErrorCode::INTERNAL_ERROR,
                "An internal database error occurred",
                instance,
            )
        }
    }
}

/// Map an extractor rejection (path, query or JSON body) to a problem.
///
/// The rejection's own status is kept; only the body format changes.
pub fn rejection_to_problem(status: StatusCode, detail: String, instance: &str) -> Problem {
    let mut problem = problem_for(&ErrorCode::INVALID_REQUEST, detail, instance);
    if status != problem.status {
        problem.status = status;
        if let Some(reason) = status.canonical_reason() {
            reason.clone_into(&mut problem.title);
        }
    }
    problem
}
