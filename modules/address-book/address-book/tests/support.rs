#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Test support utilities for `address-book` integration tests.
//!
//! Provides an in-memory database with migrations applied, seed data and
//! a stub geocoder.

#![allow(dead_code)] // Support module provides utilities that may not all be used

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use address_book::AddressBook;
use address_book::config::AddressBookConfig;
use address_book::domain::geo::Coordinates;
use address_book::domain::ports::{GeocodeError, Geocoder};
use address_book::infra::storage::db;
use address_book_sdk::NewAddress;
use async_trait::async_trait;
use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite database with the schema migrated.
pub async fn inmem_db() -> DatabaseConnection {
    let db = db::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to connect to in-memory database");
    AddressBook::migrate(&db)
        .await
        .expect("Failed to run migrations");
    db
}

pub fn new_address(street: &str, house_number: &str, city: &str) -> NewAddress {
    NewAddress {
        street: street.to_owned(),
        house_number: house_number.to_owned(),
        zip_code: "00001".to_owned(),
        city: city.to_owned(),
        country: "USA".to_owned(),
    }
}

/// The two Springfield addresses used throughout the distance scenarios.
pub fn springfield_pair() -> Vec<NewAddress> {
    vec![
        new_address("Main St", "1", "Springfield"),
        new_address("Main St", "2", "Springfield"),
    ]
}

/// Geocoder answering from a fixed table and counting calls.
#[derive(Default)]
pub struct StubGeocoder {
    answers: HashMap<String, Coordinates>,
    pub calls: AtomicUsize,
}

impl StubGeocoder {
    #[must_use]
    pub fn with(mut self, query: &str, at: Coordinates) -> Self {
        self.answers.insert(query.to_owned(), at);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn geocode(&self, query: &str) -> Result<Coordinates, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .get(query)
            .copied()
            .ok_or(GeocodeError::NoResults)
    }
}

/// Module wired to a fresh database and the given geocoder.
pub async fn module_with(geocoder: Arc<dyn Geocoder>) -> AddressBook {
    let db = inmem_db().await;
    AddressBook::with_geocoder(&AddressBookConfig::default(), db, geocoder)
}
