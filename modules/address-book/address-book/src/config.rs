use serde::{Deserialize, Serialize};

/// Configuration for the `address-book` module
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AddressBookConfig {
    /// Number of records returned by a search without free text.
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    #[serde(default)]
    pub geocoder: GeocoderConfig,
}

impl Default for AddressBookConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            geocoder: GeocoderConfig::default(),
        }
    }
}

/// Connection settings for the external geocoding provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GeocoderConfig {
    #[serde(default = "default_geocoder_base_url")]
    pub base_url: String,
    /// Provider API key. Never logged; redacted when the config is printed.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_geocoder_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoder_base_url(),
            api_key: String::new(),
            timeout_secs: default_geocoder_timeout_secs(),
        }
    }
}

fn default_page_size() -> u64 {
    20
}

fn default_geocoder_base_url() -> String {
    "https://api.opencagedata.com/geocode/v1/json".to_owned()
}

fn default_geocoder_timeout_secs() -> u64 {
    10
}
