//! HTTP API Layer
//!
//! REST surface of the customer directory, built on Axum.
//!
//! # Routes
//!
//! | Method | Path                     | Operation                  |
//! |--------|--------------------------|----------------------------|
//! | GET    | `/api/v1/customers`      | list all customers         |
//! | GET    | `/api/v1/customers/:id`  | fetch one customer         |
//! | POST   | `/api/v1/customers`      | register a customer        |
//! | PUT    | `/api/v1/customers/:id`  | partially update           |
//! | DELETE | `/api/v1/customers/:id`  | delete                     |
//! | GET    | `/health`                | liveness                   |
//! | GET    | `/health/ready`          | readiness of the store     |
//!
//! The collection routes also answer with a trailing slash. Every response
//! carries an `x-request-id` header, generated when the caller sent none.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{bootstrap, config::ApiConfig, create_router};
//!
//! let config = ApiConfig::from_env()?;
//! let service = bootstrap::build_service(&config).await?;
//! let app = create_router(service, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod bootstrap;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_customer::CustomerService;

use crate::config::ApiConfig;
use crate::handlers::{customer, health};
use crate::middleware::{audit_middleware, cors_layer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: CustomerService,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// CORS and audit logging apply to the customer routes only.
pub fn create_router(service: CustomerService, config: ApiConfig) -> Router {
    let cors = cors_layer(&config.cors);
    let state = AppState { service, config };

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let api_routes = Router::new()
        .route(
            "/api/v1/customers",
            get(customer::list_customers).post(customer::create_customer),
        )
        .route(
            "/api/v1/customers/",
            get(customer::list_customers).post(customer::create_customer),
        )
        .route(
            "/api/v1/customers/:id",
            get(customer::get_customer)
                .put(customer::update_customer)
                .delete(customer::delete_customer),
        )
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(cors);

    Router::new()
        .merge(health_routes)
        .merge(api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}
