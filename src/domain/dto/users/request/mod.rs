pub mod auth_request;
pub mod register_request;

pub use auth_request::{ForgotPasswordRequest, LoginRequest, ResetPasswordRequest};
pub use register_request::{RegisterInput, RegisterRequest};
