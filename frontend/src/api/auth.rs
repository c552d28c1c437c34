use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, CreateUserRequest, LoginRequest, LoginResponse, User},
};

impl ApiClient {
    /// Exchanges credentials for an access token. Storing the token is up to the caller.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.send_json(self.request(Method::POST, "/auth/login").json(request))
            .await
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User, ApiError> {
        self.send_json(self.request(Method::POST, "/users").json(request))
            .await
    }

    /// The backend exposes no logout; the call fails without touching the session.
    pub async fn logout(&self) -> Result<(), ApiError> {
        log::warn!("Logout requested but no logout endpoint exists");
        self.session().end()
    }
}
