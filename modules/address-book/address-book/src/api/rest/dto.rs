use address_book_sdk::{Address, AddressUpdate, Distance, NewAddress, SearchParameters};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation message returned by a successful delete.
pub const ADDRESS_REMOVED: &str = "Address removed";

/// REST DTO for address representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct AddressDto {
    pub id: i32,
    pub street: String,
    pub house_number: String,
    pub zip_code: String,
    pub city: String,
    pub country: String,
}

/// REST DTO for creating an address.
///
/// Field names are accepted in `snake_case` or `PascalCase`. A client-supplied
/// id is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewAddressReq {
    #[serde(alias = "Street")]
    pub street: String,
    #[serde(alias = "HouseNumber")]
    pub house_number: String,
    #[serde(alias = "ZipCode")]
    pub zip_code: String,
    #[serde(alias = "City")]
    pub city: String,
    #[serde(alias = "Country")]
    pub country: String,
}

/// REST DTO for replacing an address; `id` must match the path id.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateAddressReq {
    #[serde(alias = "Id")]
    pub id: i32,
    #[serde(alias = "Street")]
    pub street: String,
    #[serde(alias = "HouseNumber")]
    pub house_number: String,
    #[serde(alias = "ZipCode")]
    pub zip_code: String,
    #[serde(alias = "City")]
    pub city: String,
    #[serde(alias = "Country")]
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedAddressDto {
    pub message: String,
    pub address: AddressDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DistanceDto {
    /// Great-circle distance in `unit`.
    pub distance: f64,
    pub unit: String,
    pub origin: String,
    pub destination: String,
}

/// Query parameters of the search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQueryParams {
    #[serde(rename = "SearchText", alias = "searchText", alias = "search_text")]
    pub search_text: Option<String>,
    #[serde(rename = "SortColumn", alias = "sortColumn", alias = "sort_column")]
    pub sort_column: Option<String>,
    #[serde(rename = "SortOrder", alias = "sortOrder", alias = "sort_order")]
    pub sort_order: Option<String>,
}

/// Query parameters of the distance endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceQueryParams {
    #[serde(rename = "address1ID", alias = "address1Id", alias = "address1_id")]
    pub address1_id: i32,
    #[serde(rename = "address2ID", alias = "address2Id", alias = "address2_id")]
    pub address2_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}

// Conversion implementations between REST DTOs and contract models
impl From<Address> for AddressDto {
    fn from(a: Address) -> Self {
        Self {
            id: a.id,
            street: a.street,
            house_number: a.house_number,
            zip_code: a.zip_code,
            city: a.city,
            country: a.country,
        }
    }
}

impl From<NewAddressReq> for NewAddress {
    fn from(req: NewAddressReq) -> Self {
        Self {
            street: req.street,
            house_number: req.house_number,
            zip_code: req.zip_code,
            city: req.city,
            country: req.country,
        }
    }
}

impl From<UpdateAddressReq> for AddressUpdate {
    fn from(req: UpdateAddressReq) -> Self {
        Self {
            id: req.id,
            street: req.street,
            house_number: req.house_number,
            zip_code: req.zip_code,
            city: req.city,
            country: req.country,
        }
    }
}

impl From<SearchQueryParams> for SearchParameters {
    fn from(q: SearchQueryParams) -> Self {
        Self {
            search_text: q.search_text,
            sort_column: q.sort_column,
            sort_order: q.sort_order,
        }
    }
}

impl From<Distance> for DistanceDto {
    fn from(d: Distance) -> Self {
        Self {
            distance: d.distance,
            unit: d.unit,
            origin: d.origin,
            destination: d.destination,
        }
    }
}

impl DeletedAddressDto {
    #[must_use]
    pub fn removed(address: Address) -> Self {
        Self {
            message: ADDRESS_REMOVED.to_owned(),
            address: address.into(),
        }
    }
}
