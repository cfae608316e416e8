//! Client for the hosted auth API and the `user_roles` table.

use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use shared::api::{
    AuthSessionResponse, RefreshTokenRequest, RoleRecord, SignInRequest, SignUpRequest,
    SignUpResponse,
};
use shared::auth::{AuthClient, AuthEvent, RoleDirectory};
use shared::models::{Role, UserIdentity};
use shared::observer::{Listeners, Subscription};
use shared::ApiError;
use uuid::Uuid;
use validator::Validate;

use super::http;
use super::storage::{self, StoredSession};
use crate::config::AppConfig;

pub struct HostedAuthClient {
    config: AppConfig,
    listeners: Listeners<AuthEvent>,
}

impl HostedAuthClient {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            listeners: Listeners::new(),
        }
    }

    /// Password sign-in. Stores the session and announces `SignedIn`.
    pub async fn sign_in_with_password(&self, request: SignInRequest) -> Result<UserIdentity, ApiError> {
        request.validate()?;

        let builder = Request::post(&self.config.auth_url("token?grant_type=password"));
        let builder = http::authorize(builder, &self.config, None);
        let session: AuthSessionResponse = http::send_json(http::build_json(builder, &request)?).await?;

        let user = session.user.clone();
        storage::save(&StoredSession::from(session))?;
        tracing::info!(user_id = %user.id, "signed in");
        self.listeners.notify(&AuthEvent::SignedIn(user.clone()));
        Ok(user)
    }

    /// Registers a new account on behalf of an administrator. The returned
    /// session, if any, is discarded so the caller stays signed in.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<UserIdentity, ApiError> {
        let builder = Request::post(&self.config.auth_url("signup"));
        let builder = http::authorize(builder, &self.config, None);
        let response: SignUpResponse = http::send_json(http::build_json(builder, request)?).await?;
        Ok(response.user().clone())
    }

    async fn fetch_user(&self, access_token: &str) -> Result<UserIdentity, ApiError> {
        let builder = Request::get(&self.config.auth_url("user"));
        let builder = http::authorize(builder, &self.config, Some(access_token));
        http::send_json(http::build(builder)?).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<StoredSession, ApiError> {
        let builder = Request::post(&self.config.auth_url("token?grant_type=refresh_token"));
        let builder = http::authorize(builder, &self.config, None);
        let body = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };
        let session: AuthSessionResponse = http::send_json(http::build_json(builder, &body)?).await?;

        let stored = StoredSession::from(session);
        storage::save(&stored)?;
        self.listeners
            .notify(&AuthEvent::TokenRefreshed(stored.user.clone()));
        Ok(stored)
    }

    async fn revoke(&self, access_token: &str) -> Result<(), ApiError> {
        let builder = Request::post(&self.config.auth_url("logout"));
        let builder = http::authorize(builder, &self.config, Some(access_token));
        http::send(http::build(builder)?).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl AuthClient for HostedAuthClient {
    async fn current_user(&self) -> Result<Option<UserIdentity>, ApiError> {
        let Some(stored) = storage::load() else {
            return Ok(None);
        };

        match self.fetch_user(&stored.access_token).await {
            Ok(user) => Ok(Some(user)),
            Err(e) if e.is_unauthorized() => {
                tracing::debug!("access token rejected, refreshing");
                match self.refresh(&stored.refresh_token).await {
                    Ok(session) => Ok(Some(session.user)),
                    Err(e) => {
                        tracing::warn!(error = %e, "session refresh failed, discarding stored session");
                        storage::clear();
                        Ok(None)
                    }
                }
            }
            Err(e) => Err(e),
        }
    }

    fn on_auth_state_change(&self, listener: Rc<dyn Fn(&AuthEvent)>) -> Subscription {
        self.listeners.subscribe(listener)
    }

    async fn sign_out(&self) -> Result<(), ApiError> {
        let token = storage::access_token();
        storage::clear();

        let result = match token {
            Some(token) => self.revoke(&token).await,
            None => Ok(()),
        };

        self.listeners.notify(&AuthEvent::SignedOut);
        result
    }
}

/// Reads role assignments from the `user_roles` table.
pub struct HostedRoleDirectory {
    config: AppConfig,
}

impl HostedRoleDirectory {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl RoleDirectory for HostedRoleDirectory {
    async fn role_for(&self, user_id: Uuid) -> Result<Option<Role>, ApiError> {
        let url = self
            .config
            .rest_url(&format!("user_roles?select=role&user_id=eq.{}&limit=1", user_id));
        let token = storage::access_token();
        let builder = http::authorize(Request::get(&url), &self.config, token.as_deref());

        let records: Vec<RoleRecord> = http::send_json(http::build(builder)?).await?;
        Ok(records.into_iter().next().map(|record| record.role))
    }
}
