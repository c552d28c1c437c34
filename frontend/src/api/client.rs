use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::session::{MemorySessionStore, Session, SessionMode, SessionStore};
use super::types::{ApiError, ErrorMessage};
use crate::config::{self, ClientConfig};

// Everything that would end or split a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Escapes an id for use as a single path segment.
pub(crate) fn path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

/// HTTP client bound to one backend and one session.
///
/// Every request function is a single round trip: nothing is cached, retried
/// or de-duplicated. Clones share the connection pool and the session.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: ClientConfig, store: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        let client = build_http_client(&config)?;
        Ok(Self {
            client,
            base_url: config.api_base_url,
            session: Session::new(store, config.session_mode),
        })
    }

    /// Builds the process client from deployment configuration.
    pub async fn from_env() -> Result<Self, ApiError> {
        let config = config::load().await?;
        Self::new(config, default_store())
    }

    /// Token-mode client with an in-memory session.
    pub fn new_with_base_url(base_url: &str) -> Result<Self, ApiError> {
        Self::new(
            ClientConfig::new(base_url)?,
            Arc::new(MemorySessionStore::new()),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Starts a request to `path` with the session credential applied.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http_client().request(method, self.endpoint(path));
        match self.session.mode() {
            SessionMode::Token => {
                if let Some(token) = self.session.bearer_token() {
                    builder = builder.bearer_auth(token);
                }
            }
            SessionMode::Cookie => {
                #[cfg(target_arch = "wasm32")]
                {
                    builder = builder.fetch_credentials_include();
                }
            }
        }
        builder
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Failed to build request: {}", e)))?;
        log::debug!("{} {}", request.method(), request.url());

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = mock_transport::find_mock(request.url().as_str()) {
            return responder.respond(&request).map(mock_transport::MockResponse::into_response);
        }

        let method = request.method().clone();
        let url = request.url().clone();
        self.client.execute(request).await.map_err(|e| {
            log::error!("{} {} failed: {}", method, url, e);
            ApiError::request_failed(e.to_string())
        })
    }

    /// Sends and decodes a JSON success body into `T`.
    pub(crate) async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(builder).await?;
        let response = Self::error_for_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Sends and discards whatever success body comes back.
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = self.send(builder).await?;
        Self::error_for_status(response).await.map(|_| ())
    }

    async fn error_for_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let url = response.url().clone();
        let body = response.bytes().await.unwrap_or_default();
        log::warn!("{} returned {}", url, status);
        Err(ApiError::Http {
            status: status.as_u16(),
            message: ErrorMessage::decode(&body),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &ClientConfig) -> Result<Client, ApiError> {
    let mut builder = Client::builder().cookie_store(config.session_mode == SessionMode::Cookie);
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| ApiError::request_failed(format!("Failed to build HTTP client: {}", e)))
}

#[cfg(target_arch = "wasm32")]
fn build_http_client(config: &ClientConfig) -> Result<Client, ApiError> {
    if config.request_timeout.is_some() {
        log::debug!("Request timeout is left to the browser");
    }
    Client::builder()
        .build()
        .map_err(|e| ApiError::request_failed(format!("Failed to build HTTP client: {}", e)))
}

#[cfg(not(target_arch = "wasm32"))]
fn default_store() -> Arc<dyn SessionStore> {
    Arc::new(MemorySessionStore::new())
}

#[cfg(target_arch = "wasm32")]
fn default_store() -> Arc<dyn SessionStore> {
    Arc::new(super::session::LocalStorageSessionStore)
}
