//! Shared building blocks for the HealthID backend.
//!
//! This crate carries the pieces every layer needs: environment-sourced
//! configuration structs, input-validation helpers and the wire-level
//! response types. It has no knowledge of the domain or of any
//! framework.

pub mod config;
pub mod types;
pub mod utils;
