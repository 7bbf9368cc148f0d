//! Authentication route handlers.
//!
//! One file per endpoint: signup, login, the OTP pair, password reset,
//! token refresh, and the token-protected identity probe.

pub mod login;
pub mod me;
pub mod refresh;
pub mod reset_password;
pub mod send_otp;
pub mod signup;
pub mod verify_otp;

pub use login::login;
pub use me::me;
pub use refresh::refresh_token;
pub use reset_password::confirm_password_reset;
pub use send_otp::send_otp;
pub use signup::signup;
pub use verify_otp::verify_otp;
