//! Shared wire-level types

pub mod response;
