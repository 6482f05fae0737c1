//! Customer handlers
//!
//! Successful writes answer `200 OK` with an empty body.

use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::CustomerId;

use crate::dto::customer::{CustomerRequest, CustomerResponse};
use crate::{error::ApiError, AppState};

/// Lists all customers
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let customers = state.service.get_all_customers().await?;
    Ok(Json(customers.into_iter().map(CustomerResponse::from).collect()))
}

/// Gets a customer by ID
pub async fn get_customer(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let Path(id) = id?;
    let customer = state.service.get_customer(CustomerId::new(id)).await?;
    Ok(Json(customer.into()))
}

/// Registers a customer
pub async fn create_customer(
    State(state): State<AppState>,
    request: Result<Json<CustomerRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = request?;
    state.service.add_customer(request.into()).await?;
    Ok(StatusCode::OK)
}

/// Applies a partial update to a customer
pub async fn update_customer(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    request: Result<Json<CustomerRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    let Json(request) = request?;
    state
        .service
        .update_customer(CustomerId::new(id), request.into())
        .await?;
    Ok(StatusCode::OK)
}

/// Deletes a customer
pub async fn delete_customer(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.service.delete_customer_by_id(CustomerId::new(id)).await?;
    Ok(StatusCode::OK)
}
