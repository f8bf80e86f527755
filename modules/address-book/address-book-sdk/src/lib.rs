//! Address Book SDK
//!
//! This crate provides the public API for the `address-book` module:
//! - `AddressBookApi` trait
//! - Model types for addresses, search parameters and distances
//! - Error type (`AddressBookError`)
//!
//! ## Usage
//!
//! ```ignore
//! use address_book_sdk::AddressBookApi;
//!
//! let address = client.get_address(42).await?;
//! let km = client.distance(1, 2).await?.distance;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod errors;
pub mod models;

pub use api::AddressBookApi;
pub use errors::AddressBookError;
pub use models::{
    Address, AddressField, AddressUpdate, DISTANCE_UNIT_KM, Distance, NewAddress,
    SearchParameters, SortOrder,
};
