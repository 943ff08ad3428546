//! # Catalog Server
//!
//! Axum front end for [`catalog_core::CatalogService`]. Every catalog
//! endpoint is a JSON `POST` under `/api/v1`; any failure, whether a
//! malformed body or a `None` from the service, is answered with an empty
//! `400 Bad Request`.

pub mod extract;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use routes::create_app;
