//! Core services composing the credential lifecycle

pub mod auth;
pub mod otp;
pub mod password;
pub mod token;
