use modkit_errors::{Problem, ValidationViolation};
use utoipa::OpenApi;

use super::dto::{
    AddressDto, DeletedAddressDto, DistanceDto, HealthDto, NewAddressReq, UpdateAddressReq,
};
use super::handlers;

/// Schema document for the address book REST surface.
#[derive(OpenApi)]
#[openapi(
    info(title = "Address Book API", description = "Address CRUD, search and geocoded distance"),
    paths(
        handlers::get_address,
        handlers::search_addresses,
        handlers::create_addresses,
        handlers::update_address,
        handlers::delete_address,
        handlers::distance,
        handlers::health
    ),
    components(schemas(
        AddressDto,
        NewAddressReq,
        UpdateAddressReq,
        DeletedAddressDto,
        DistanceDto,
        HealthDto,
        Problem,
        ValidationViolation
    )),
    tags(
        (name = "Addresses", description = "Address management"),
        (name = "Health", description = "Liveness")
    )
)]
pub struct ApiDoc;
