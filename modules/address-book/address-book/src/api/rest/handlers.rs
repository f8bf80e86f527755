use std::sync::Arc;

use address_book_sdk::{AddressUpdate, NewAddress, SearchParameters};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Extension, Path, Query};
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use modkit_errors::Problem;
use utoipa::OpenApi;

use crate::domain::repo::AddressesRepository;
use crate::domain::service::Service;

use super::dto::{
    AddressDto, DeletedAddressDto, DistanceDto, DistanceQueryParams, HealthDto, NewAddressReq,
    SearchQueryParams, UpdateAddressReq,
};
use super::error::{
    ApiResult, ErrorCode, domain_error_to_problem, problem_for, rejection_to_problem,
};
use super::openapi::ApiDoc;

fn path_id(path: Result<Path<i32>, PathRejection>, uri: &Uri) -> ApiResult<i32> {
    path.map(|Path(id)| id)
        .map_err(|r| rejection_to_problem(r.status(), r.body_text(), uri.path()))
}

fn query<T>(query: Result<Query<T>, QueryRejection>, uri: &Uri) -> ApiResult<T> {
    query
        .map(|Query(q)| q)
        .map_err(|r| rejection_to_problem(r.status(), r.body_text(), uri.path()))
}

fn body<T>(json: Result<Json<T>, JsonRejection>, uri: &Uri) -> ApiResult<T> {
    json.map(|Json(b)| b)
        .map_err(|r| rejection_to_problem(r.status(), r.body_text(), uri.path()))
}

#[utoipa::path(
    get,
    path = "/addresses/{id}",
    tag = "Addresses",
    params(("id" = i32, Path, description = "Address identifier")),
    responses(
        (status = 200, description = "Address found", body = AddressDto),
        (status = 400, description = "Malformed identifier", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Address not found", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Storage failure", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn get_address<R: AddressesRepository + 'static>(
    Extension(svc): Extension<Arc<Service<R>>>,
    uri: Uri,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<AddressDto>> {
    let id = path_id(path, &uri)?;
    let address = svc
        .get_address(id)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(address.into()))
}

#[utoipa::path(
    get,
    path = "/addresses/searchParams",
    tag = "Addresses",
    params(
        ("SearchText" = Option<String>, Query, description = "Substring matched against every text field"),
        ("SortColumn" = Option<String>, Query, description = "Field to sort by, case-insensitive"),
        ("SortOrder" = Option<String>, Query, description = "`asc` or `desc`; requires SortColumn")
    ),
    responses(
        (status = 200, description = "Matching addresses", body = [AddressDto]),
        (status = 400, description = "Invalid sort parameters", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Nothing matched", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Storage failure", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn search_addresses<R: AddressesRepository + 'static>(
    Extension(svc): Extension<Arc<Service<R>>>,
    uri: Uri,
    params: Result<Query<SearchQueryParams>, QueryRejection>,
) -> ApiResult<Json<Vec<AddressDto>>> {
    let params: SearchParameters = query(params, &uri)?.into();
    let found = svc
        .search_addresses(&params)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;

    if found.is_empty() {
        return Err(problem_for(
            &ErrorCode::NO_MATCHING_ADDRESSES,
            "No addresses matched the search parameters",
            uri.path(),
        ));
    }

    Ok(Json(found.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/addresses/AddNewAddress",
    tag = "Addresses",
    request_body = [NewAddressReq],
    responses(
        (status = 201, description = "Addresses stored", body = [AddressDto]),
        (status = 400, description = "Invalid payload", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Storage failure", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn create_addresses<R: AddressesRepository + 'static>(
    Extension(svc): Extension<Arc<Service<R>>>,
    uri: Uri,
    req: Result<Json<Vec<NewAddressReq>>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let batch: Vec<NewAddress> = body(req, &uri)?.into_iter().map(Into::into).collect();
    let created = svc
        .create_addresses(batch)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;

    let body: Vec<AddressDto> = created.into_iter().map(Into::into).collect();
    Ok((StatusCode::CREATED, Json(body)))
}

#[utoipa::path(
    put,
    path = "/addresses/{id}",
    tag = "Addresses",
    params(("id" = i32, Path, description = "Address identifier; must equal the body id")),
    request_body = UpdateAddressReq,
    responses(
        (status = 200, description = "Address updated", body = AddressDto),
        (status = 400, description = "Id mismatch or invalid payload", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Address not found", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Storage failure", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn update_address<R: AddressesRepository + 'static>(
    Extension(svc): Extension<Arc<Service<R>>>,
    uri: Uri,
    path: Result<Path<i32>, PathRejection>,
    req: Result<Json<UpdateAddressReq>, JsonRejection>,
) -> ApiResult<Json<AddressDto>> {
    let id = path_id(path, &uri)?;
    let update: AddressUpdate = body(req, &uri)?.into();
    let updated = svc
        .update_address(id, update)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/addresses/{id}",
    tag = "Addresses",
    params(("id" = i32, Path, description = "Address identifier")),
    responses(
        (status = 200, description = "Address removed", body = DeletedAddressDto),
        (status = 404, description = "Address not found", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Storage failure", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn delete_address<R: AddressesRepository + 'static>(
    Extension(svc): Extension<Arc<Service<R>>>,
    uri: Uri,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<DeletedAddressDto>> {
    let id = path_id(path, &uri)?;
    let removed = svc
        .delete_address(id)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(DeletedAddressDto::removed(removed)))
}

#[utoipa::path(
    get,
    path = "/addresses/distance",
    tag = "Addresses",
    params(
        ("address1ID" = i32, Query, description = "First address"),
        ("address2ID" = i32, Query, description = "Second address")
    ),
    responses(
        (status = 200, description = "Great-circle distance in kilometers", body = DistanceDto),
        (status = 400, description = "Geocoding failed or malformed ids", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Address not found", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Storage failure", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn distance<R: AddressesRepository + 'static>(
    Extension(svc): Extension<Arc<Service<R>>>,
    uri: Uri,
    params: Result<Query<DistanceQueryParams>, QueryRejection>,
) -> ApiResult<Json<DistanceDto>> {
    let params = query(params, &uri)?;
    let result = svc
        .distance(params.address1_id, params.address2_id)
        .await
        .map_err(|e| domain_error_to_problem(&e, uri.path()))?;
    Ok(Json(result.into()))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is alive", body = HealthDto))
)]
pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok".to_owned(),
    })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
