use address_book_sdk::{Address, NewAddress};
use async_trait::async_trait;

use super::error::DomainError;

/// Repository trait for Address persistence operations.
///
/// Storage faults surface as [`DomainError::Database`]; absence is reported
/// through `Option` so callers never branch on errors for "not found".
#[async_trait]
pub trait AddressesRepository: Send + Sync {
    /// Find an address by ID.
    async fn find_by_id(&self, id: i32) -> Result<Option<Address>, DomainError>;

    /// First `limit` addresses in insertion order.
    async fn find_page(&self, limit: u64) -> Result<Vec<Address>, DomainError>;

    /// Addresses with at least one string field containing `text` (case-sensitive).
    async fn find_by_text(&self, text: &str) -> Result<Vec<Address>, DomainError>;

    /// Insert all addresses in one transaction and return them with assigned ids.
    async fn insert_many(&self, addresses: Vec<NewAddress>) -> Result<Vec<Address>, DomainError>;

    /// Overwrite the five fields of the row identified by `address.id`.
    async fn update(&self, address: Address) -> Result<Option<Address>, DomainError>;

    /// Remove an address, returning the removed row.
    async fn delete(&self, id: i32) -> Result<Option<Address>, DomainError>;
}
