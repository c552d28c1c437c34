use crate::api::ApiError;
use web_sys::{Storage, Window};

pub fn window() -> Result<Window, ApiError> {
    web_sys::window().ok_or_else(|| ApiError::Session("No window object".into()))
}

pub fn local_storage() -> Result<Storage, ApiError> {
    window()?
        .local_storage()
        .ok()
        .flatten()
        .ok_or_else(|| ApiError::Session("No localStorage".into()))
}

pub fn read_item(key: &str) -> Result<Option<String>, ApiError> {
    local_storage()?
        .get_item(key)
        .map_err(|_| ApiError::Session(format!("Failed to read {}", key)))
}

pub fn write_item(key: &str, value: &str) -> Result<(), ApiError> {
    local_storage()?
        .set_item(key, value)
        .map_err(|_| ApiError::Session(format!("Failed to write {}", key)))
}
