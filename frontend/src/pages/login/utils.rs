use crate::api::ApiError;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your email and password.";
pub const MISSING_API_MESSAGE: &str = "The API address is not configured.";

/// The login page shows one fixed message whatever the backend said.
pub fn login_error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Config(_) => MISSING_API_MESSAGE,
        _ => LOGIN_FAILED_MESSAGE,
    }
}
