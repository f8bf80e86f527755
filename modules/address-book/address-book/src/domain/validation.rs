//! Request-shape checks that run before any store access.

use address_book_sdk::{AddressField, AddressUpdate, NewAddress, SearchParameters, SortOrder};

use super::error::{DomainError, FieldViolation};
use super::fields::AddressFields;

const EMPTY_FIELD: &str = "must not be empty";

/// A search request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    /// Free text, present only when it is not blank.
    pub search_text: Option<String>,
    pub sort_column: Option<AddressField>,
    pub sort_order: SortOrder,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Validate raw search parameters.
///
/// Sort order must be exactly `asc` or `desc` and needs a sort column.
/// A sort column must name a field of the address, in any case.
///
/// # Errors
///
/// Returns [`DomainError::Validation`] naming the offending parameter.
pub fn validate_search(params: &SearchParameters) -> Result<SearchQuery, DomainError> {
    let sort_column = non_blank(params.sort_column.as_deref());

    let sort_order = match non_blank(params.sort_order.as_deref()) {
        None => SortOrder::Asc,
        Some(order) => {
            let parsed = match order {
                "asc" => SortOrder::Asc,
                "desc" => SortOrder::Desc,
                other => {
                    return Err(DomainError::validation(
                        AddressFields::SORT_ORDER,
                        format!("Invalid sort order '{other}'. Expected 'asc' or 'desc'."),
                    ));
                }
            };
            if sort_column.is_none() {
                return Err(DomainError::validation(
                    AddressFields::SORT_ORDER,
                    "Sort order cannot be applied without a SortColumn value",
                ));
            }
            parsed
        }
    };

    let sort_column = sort_column
        .map(|name| {
            AddressField::parse(name).ok_or_else(|| {
                DomainError::validation(
                    AddressFields::SORT_COLUMN,
                    format!("Invalid sort column '{name}'."),
                )
            })
        })
        .transpose()?;

    Ok(SearchQuery {
        search_text: non_blank(params.search_text.as_deref()).map(ToOwned::to_owned),
        sort_column,
        sort_order,
    })
}

fn check_fields(prefix: &str, fields: [(&str, &str); 5], violations: &mut Vec<FieldViolation>) {
    for (name, value) in fields {
        if value.trim().is_empty() {
            violations.push(FieldViolation::new(format!("{prefix}{name}"), EMPTY_FIELD));
        }
    }
}

fn new_address_fields(a: &NewAddress) -> [(&'static str, &str); 5] {
    [
        (AddressFields::STREET, a.street.as_str()),
        (AddressFields::HOUSE_NUMBER, a.house_number.as_str()),
        (AddressFields::ZIP_CODE, a.zip_code.as_str()),
        (AddressFields::CITY, a.city.as_str()),
        (AddressFields::COUNTRY, a.country.as_str()),
    ]
}

/// Validate a batch of new addresses, reporting every empty field.
///
/// Violations are reported as `[index].field`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidPayload`] when any field is empty or blank.
pub fn validate_new_addresses(batch: &[NewAddress]) -> Result<(), DomainError> {
    let mut violations = Vec::new();
    for (index, address) in batch.iter().enumerate() {
        check_fields(
            &format!("[{index}]."),
            new_address_fields(address),
            &mut violations,
        );
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(DomainError::invalid_payload(violations))
    }
}

/// Validate a full replacement payload.
///
/// # Errors
///
/// Returns [`DomainError::InvalidPayload`] when any field is empty or blank.
pub fn validate_update(update: &AddressUpdate) -> Result<(), DomainError> {
    let mut violations = Vec::new();
    check_fields(
        "",
        [
            (AddressFields::STREET, update.street.as_str()),
            (AddressFields::HOUSE_NUMBER, update.house_number.as_str()),
            (AddressFields::ZIP_CODE, update.zip_code.as_str()),
            (AddressFields::CITY, update.city.as_str()),
            (AddressFields::COUNTRY, update.country.as_str()),
        ],
        &mut violations,
    );

    if violations.is_empty() {
        Ok(())
    } else {
        Err(DomainError::invalid_payload(violations))
    }
}
