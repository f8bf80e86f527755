pub mod error;
pub mod fields;
pub mod geo;
pub mod ports;
pub mod repo;
pub mod search;
pub mod service;
pub mod validation;

#[cfg(test)]
mod service_test;
