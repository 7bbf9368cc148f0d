//! HTTP API layer for the HealthID backend.
//!
//! Thin boundary over the core credential service: deserialize and
//! validate request bodies, call the service, map domain errors to
//! HTTP status codes and `{error}` bodies.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::AppState;
