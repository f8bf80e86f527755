//! In-process ordering of search results.

use address_book_sdk::{Address, AddressField, SortOrder};

use super::fields::compare_by;

/// Stable sort by one field.
pub fn sort_by(addresses: &mut [Address], field: AddressField, order: SortOrder) {
    match order {
        SortOrder::Asc => addresses.sort_by(|a, b| compare_by(field, a, b)),
        SortOrder::Desc => addresses.sort_by(|a, b| compare_by(field, b, a)),
    }
}
