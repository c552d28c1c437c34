use crate::api::ApiError;

/// What a page shows while its data request is outstanding, failed or done.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn from_result(
        result: Result<T, ApiError>,
        describe: impl FnOnce(&ApiError) -> String,
    ) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => {
                log::error!("Load failed: {}", err);
                LoadState::Failed(describe(&err))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Failed(message) => LoadState::Failed(message),
            LoadState::Ready(value) => LoadState::Ready(f(value)),
        }
    }
}

/// Logs a failed mutation and picks the banner text: the backend's message when
/// it sent one, otherwise `fallback`.
pub fn failure_message(err: &ApiError, fallback: &str) -> String {
    log::error!("Request failed: {}", err);
    err.message_or(fallback)
}

/// Outcome banner of the last mutation on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}
