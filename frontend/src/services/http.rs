//! Request plumbing shared by the auth and table clients.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::api::ErrorResponse;
use shared::ApiError;

use crate::config::AppConfig;

/// Adds the project key and a bearer token. Without a user token the anon
/// key doubles as the bearer, as the hosted service expects.
pub fn authorize(builder: RequestBuilder, config: &AppConfig, token: Option<&str>) -> RequestBuilder {
    let bearer = token.unwrap_or(&config.anon_key);
    builder
        .header("apikey", &config.anon_key)
        .header("Authorization", &format!("Bearer {}", bearer))
}

pub fn build(builder: RequestBuilder) -> Result<Request, ApiError> {
    builder
        .build()
        .map_err(|e| ApiError::Serialization(e.to_string()))
}

pub fn build_json<T: Serialize>(builder: RequestBuilder, body: &T) -> Result<Request, ApiError> {
    builder
        .json(body)
        .map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Sends `request` and turns non-2xx responses into [`ApiError::Http`].
pub async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(error_from(&response).await);
    }
    Ok(response)
}

pub async fn send_json<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let response = send(request).await?;
    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

async fn error_from(response: &Response) -> ApiError {
    let status = response.status();
    let fallback = response.status_text();
    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(|body| body.describe())
        .unwrap_or(fallback);

    tracing::debug!(status, %message, url = %response.url(), "request rejected");
    ApiError::Http { status, message }
}
