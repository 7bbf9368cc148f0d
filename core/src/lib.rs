//! Core domain layer for the HealthID backend.
//!
//! Holds the credential-lifecycle domain: entities, the error
//! taxonomy, repository traits and the services that compose them
//! (password hashing, OTP issue/verify, token issuing and the
//! top-level [`services::auth::AuthService`] orchestration).
//!
//! This crate is persistence- and framework-agnostic: storage and
//! delivery are reached only through the traits in [`repositories`]
//! and [`services::otp::OtpNotifier`].

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
