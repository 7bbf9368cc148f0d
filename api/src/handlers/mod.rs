//! Response shaping helpers

pub mod error;

pub use error::{error_response, validation_failure};
