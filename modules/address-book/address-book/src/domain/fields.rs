//! Explicit mapping from [`AddressField`] to typed accessors.

use std::cmp::Ordering;

use address_book_sdk::{Address, AddressField};

/// Wire names of the address fields, as reported in validation errors.
pub struct AddressFields;

impl AddressFields {
    pub const STREET: &'static str = "street";
    pub const HOUSE_NUMBER: &'static str = "house_number";
    pub const ZIP_CODE: &'static str = "zip_code";
    pub const CITY: &'static str = "city";
    pub const COUNTRY: &'static str = "country";

    pub const SEARCH_TEXT: &'static str = "SearchText";
    pub const SORT_COLUMN: &'static str = "SortColumn";
    pub const SORT_ORDER: &'static str = "SortOrder";
}

/// String value of `field`, or `None` for the integer identifier.
#[must_use]
pub fn text_value(address: &Address, field: AddressField) -> Option<&str> {
    match field {
        AddressField::Id => None,
        AddressField::Street => Some(&address.street),
        AddressField::HouseNumber => Some(&address.house_number),
        AddressField::ZipCode => Some(&address.zip_code),
        AddressField::City => Some(&address.city),
        AddressField::Country => Some(&address.country),
    }
}

/// Natural ordering of two addresses by one field.
///
/// Identifiers compare numerically, strings compare byte-wise.
#[must_use]
pub fn compare_by(field: AddressField, a: &Address, b: &Address) -> Ordering {
    match field {
        AddressField::Id => a.id.cmp(&b.id),
        _ => text_value(a, field).cmp(&text_value(b, field)),
    }
}

/// Case-sensitive substring match against any of the five string fields.
#[must_use]
pub fn matches_text(address: &Address, needle: &str) -> bool {
    AddressField::TEXT_FIELDS
        .into_iter()
        .filter_map(|field| text_value(address, field))
        .any(|value| value.contains(needle))
}
