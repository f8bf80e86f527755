//! Address Book Module
//!
//! This module provides address management with a REST API, database storage,
//! free-text search and a geocoded distance operation.
//!
//! ## Public API
//!
//! The public API is defined in the `address-book-sdk` crate and re-exported here:
//! - `AddressBookApi` - trait for in-process consumers
//! - `Address`, `NewAddress`, `AddressUpdate`, `SearchParameters`, `Distance` - data models
//! - `AddressBookError` - error types
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
// === PUBLIC API (from SDK) ===
pub use address_book_sdk::{
    Address, AddressBookApi, AddressBookError, AddressUpdate, Distance, NewAddress,
    SearchParameters,
};

// === MODULE DEFINITION ===
pub mod module;
pub use module::AddressBook;

// === LOCAL CLIENT ===
// Local client adapter that implements AddressBookApi
pub mod local_client;

// === INTERNAL MODULES ===
// WARNING: These modules are internal implementation details!
// They are exposed only for comprehensive testing and should NOT be used by external consumers.
// Only use the SDK types for stable public APIs.
#[doc(hidden)]
pub mod api;
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
