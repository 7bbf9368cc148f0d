//! Request and response bodies (camelCase on the wire)

pub mod auth;
