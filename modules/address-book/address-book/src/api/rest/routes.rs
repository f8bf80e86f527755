use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};

use crate::domain::repo::AddressesRepository;
use crate::domain::service::Service;

use super::handlers;

/// Build the address book router.
///
/// Static segments (`searchParams`, `distance`, `AddNewAddress`) take
/// precedence over the `{id}` capture.
pub fn router<R: AddressesRepository + 'static>(service: Arc<Service<R>>) -> Router {
    Router::new()
        .route("/addresses/searchParams", get(handlers::search_addresses::<R>))
        .route("/addresses/distance", get(handlers::distance::<R>))
        .route(
            "/addresses/AddNewAddress",
            post(handlers::create_addresses::<R>),
        )
        .route(
            "/addresses/{id}",
            get(handlers::get_address::<R>)
                .put(handlers::update_address::<R>)
                .delete(handlers::delete_address::<R>),
        )
        .route("/health", get(handlers::health))
        .route("/openapi.json", get(handlers::openapi_json))
        .layer(Extension(service))
}
