//! Infrastructure storage layer - database persistence.
//!
//! This module contains ALL SeaORM-specific code and database operations:
//! - `entity` - SeaORM entity definition for the `addresses` table
//! - `mapper` - Conversions between SeaORM models and SDK contract types
//! - `migrations` - Database schema migrations
//! - `sea_orm_repo` - `AddressesRepository` implementation

pub mod db;
pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod sea_orm_repo;

pub use sea_orm_repo::SeaOrmAddressesRepository;
