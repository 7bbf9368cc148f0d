//! OTP generation, delivery and verification

mod notifier;
mod service;

pub use notifier::OtpNotifier;
pub use service::{IssuedOtp, OtpConfig, OtpService};

#[doc(hidden)]
pub use notifier::mock;
