//! `AddressBookApi` trait definition.
//!
//! This trait defines the public API for the `address-book` module.

use async_trait::async_trait;

use crate::errors::AddressBookError;
use crate::models::{Address, AddressUpdate, Distance, NewAddress, SearchParameters};

/// Public API trait for the `address-book` module.
///
/// Implemented in-process by the module's local client; other consumers hold it
/// as `Arc<dyn AddressBookApi>`.
#[async_trait]
pub trait AddressBookApi: Send + Sync {
    /// Get an address by ID.
    async fn get_address(&self, id: i32) -> Result<Address, AddressBookError>;

    /// Search, filter and sort addresses.
    ///
    /// Returns an empty list when nothing matches.
    async fn search_addresses(
        &self,
        params: SearchParameters,
    ) -> Result<Vec<Address>, AddressBookError>;

    /// Create one or many addresses atomically.
    async fn create_addresses(
        &self,
        addresses: Vec<NewAddress>,
    ) -> Result<Vec<Address>, AddressBookError>;

    /// Replace all fields of the address stored under `id`.
    async fn update_address(
        &self,
        id: i32,
        update: AddressUpdate,
    ) -> Result<Address, AddressBookError>;

    /// Delete an address, returning the removed record.
    async fn delete_address(&self, id: i32) -> Result<Address, AddressBookError>;

    /// Geocode two stored addresses and compute the distance between them.
    async fn distance(
        &self,
        address1_id: i32,
        address2_id: i32,
    ) -> Result<Distance, AddressBookError>;
}
