//! # Menuboard REST
//!
//! HTTP layer for the Menuboard catalog: Axum controllers, response
//! envelope, and the Swagger UI wiring.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::{AppState, ReadinessProbe};
