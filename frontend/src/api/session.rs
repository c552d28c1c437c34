use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use super::types::ApiError;

/// Storage key holding the bearer credential.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// How the backend recognises an authenticated session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionMode {
    /// Credential-bearing cookies ride along with every request.
    Cookie,
    /// The stored credential is sent as `Authorization: Bearer <token>`.
    #[default]
    Token,
}

impl FromStr for SessionMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "cookie" => Ok(SessionMode::Cookie),
            "token" => Ok(SessionMode::Token),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionMode::Cookie => f.write_str("cookie"),
            SessionMode::Token => f.write_str("token"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

/// Durable home of the bearer credential.
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Result<Option<String>, ApiError>;
    fn store_token(&self, token: &str) -> Result<(), ApiError>;
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Result<Option<String>, ApiError> {
        self.token
            .lock()
            .map(|guard| guard.clone())
            .map_err(|_| ApiError::Session("session lock poisoned".into()))
    }

    fn store_token(&self, token: &str) -> Result<(), ApiError> {
        let mut guard = self
            .token
            .lock()
            .map_err(|_| ApiError::Session("session lock poisoned".into()))?;
        *guard = Some(token.to_string());
        Ok(())
    }
}

/// Browser `localStorage`, looked up on every access.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageSessionStore;

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalStorageSessionStore {
    fn token(&self) -> Result<Option<String>, ApiError> {
        crate::utils::storage::read_item(ACCESS_TOKEN_KEY)
    }

    fn store_token(&self, token: &str) -> Result<(), ApiError> {
        crate::utils::storage::write_item(ACCESS_TOKEN_KEY, token)
    }
}

/// Session held by an [`ApiClient`](super::ApiClient).
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
    mode: SessionMode,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>, mode: SessionMode) -> Self {
        Self { store, mode }
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// The credential to attach to the next request, if any.
    ///
    /// Always `None` in cookie mode. An unreadable store counts as no credential.
    pub fn bearer_token(&self) -> Option<String> {
        if self.mode == SessionMode::Cookie {
            return None;
        }
        match self.store.token() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(err) => {
                log::debug!("No credential available: {}", err);
                None
            }
        }
    }

    pub fn state(&self) -> SessionState {
        match self.store.token() {
            Ok(Some(token)) if !token.is_empty() => SessionState::Authenticated,
            _ => SessionState::Anonymous,
        }
    }

    pub fn establish(&self, token: &str) -> Result<(), ApiError> {
        self.store.store_token(token)?;
        log::info!("Session established");
        Ok(())
    }

    /// There is no logout path: the stored credential is only ever replaced.
    pub fn end(&self) -> Result<(), ApiError> {
        Err(ApiError::Unsupported("logout"))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("mode", &self.mode)
            .field("state", &self.state())
            .finish()
    }
}
