//! Public models for the `address-book` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the `address-book` module and its consumers.

use std::fmt;

/// Unit label attached to every computed distance.
pub const DISTANCE_UNIT_KM: &str = "KM";

/// A stored address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: i32,
    pub street: String,
    pub house_number: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
}

impl Address {
    /// Free-form lookup string handed to the geocoder.
    ///
    /// Fields are joined by commas, in declaration order, without padding.
    #[must_use]
    pub fn lookup_string(&self) -> String {
        [
            self.street.as_str(),
            self.house_number.as_str(),
            self.zip_code.as_str(),
            self.city.as_str(),
            self.country.as_str(),
        ]
        .join(",")
    }
}

/// Data for creating a new address. The identifier is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewAddress {
    pub street: String,
    pub house_number: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
}

/// Full replacement of an existing address.
///
/// `id` is the identifier carried in the request body; it must match the
/// identifier the update is addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressUpdate {
    pub id: i32,
    pub street: String,
    pub house_number: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
}

impl AddressUpdate {
    /// Build the stored representation of this update under `id`.
    #[must_use]
    pub fn into_address(self, id: i32) -> Address {
        Address {
            id,
            street: self.street,
            house_number: self.house_number,
            zip_code: self.zip_code,
            city: self.city,
            country: self.country,
        }
    }
}

/// Fields of [`Address`] that can be named in a sort request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Id,
    Street,
    HouseNumber,
    ZipCode,
    City,
    Country,
}

impl AddressField {
    /// Every field, identifier first.
    pub const ALL: [AddressField; 6] = [
        AddressField::Id,
        AddressField::Street,
        AddressField::HouseNumber,
        AddressField::ZipCode,
        AddressField::City,
        AddressField::Country,
    ];

    /// The five string fields searched by free-text queries.
    pub const TEXT_FIELDS: [AddressField; 5] = [
        AddressField::Street,
        AddressField::HouseNumber,
        AddressField::ZipCode,
        AddressField::City,
        AddressField::Country,
    ];

    /// Resolve a field name case-insensitively.
    ///
    /// `"ZipCode"`, `"zipcode"` and `"zip_code"` all resolve to [`AddressField::ZipCode`].
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(&normalized))
    }

    /// Canonical (`PascalCase`) field name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AddressField::Id => "Id",
            AddressField::Street => "Street",
            AddressField::HouseNumber => "HouseNumber",
            AddressField::ZipCode => "ZipCode",
            AddressField::City => "City",
            AddressField::Country => "Country",
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sort direction for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Raw search request, as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchParameters {
    pub search_text: Option<String>,
    pub sort_column: Option<String>,
    pub sort_order: Option<String>,
}

/// Great-circle distance between two stored addresses.
#[derive(Debug, Clone, PartialEq)]
pub struct Distance {
    /// Distance in kilometers.
    pub distance: f64,
    pub unit: String,
    /// Lookup string of the first address.
    pub origin: String,
    /// Lookup string of the second address.
    pub destination: String,
}
