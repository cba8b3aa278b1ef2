use crate::errors::Result;
use crate::http::client::ApiClient;

use super::models::{AuthVerifyResponse, LoginRequest, LoginResponse, MessageResponse};

/// Exchange admin credentials for a session token. Token issuance itself is
/// the backend's business; the client only stores what comes back.
pub async fn login(api: &ApiClient, username: &str, password: &str) -> Result<LoginResponse> {
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    api.post("/auth/login", &request).await
}

pub async fn logout(api: &ApiClient) -> Result<MessageResponse> {
    api.post_empty("/auth/logout").await
}

pub async fn verify(api: &ApiClient) -> Result<AuthVerifyResponse> {
    api.get("/auth/verify").await
}
