//! Domain entities

pub mod otp;
pub mod token;
pub mod user;
