//! Geocoding provider adapters.

pub mod opencage;

pub use opencage::OpenCageGeocoder;
