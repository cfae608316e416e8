use gloo_net::http::Request;
use shared::api::{CreateUserRequest, RoleAssignment};
use shared::models::{Business, Customer, SupportCase, UserIdentity, UserProfile, UserRow};
use shared::ApiError;
use uuid::Uuid;
use validator::Validate;

use super::auth::HostedAuthClient;
use super::{http, storage};
use crate::config::AppConfig;

/// Table reads and writes against the hosted backend. Row-level security on
/// the backend decides what the signed-in user may see.
pub struct ApiService;

impl ApiService {
    fn get(config: &AppConfig, path: &str) -> Result<Request, ApiError> {
        let token = storage::access_token();
        let builder = http::authorize(Request::get(&config.rest_url(path)), config, token.as_deref());
        http::build(builder)
    }

    pub async fn list_customers() -> Result<Vec<Customer>, ApiError> {
        let config = AppConfig::load();
        http::send_json(Self::get(&config, "customers?select=*&order=created_at.desc")?).await
    }

    pub async fn list_businesses() -> Result<Vec<Business>, ApiError> {
        let config = AppConfig::load();
        http::send_json(Self::get(&config, "businesses?select=*&order=created_at.desc")?).await
    }

    pub async fn list_support_cases() -> Result<Vec<SupportCase>, ApiError> {
        let config = AppConfig::load();
        http::send_json(Self::get(&config, "support_cases?select=*&order=created_at.desc")?).await
    }

    pub async fn get_support_case(id: Uuid) -> Result<Option<SupportCase>, ApiError> {
        let config = AppConfig::load();
        let path = format!("support_cases?select=*&id=eq.{}&limit=1", id);
        let cases: Vec<SupportCase> = http::send_json(Self::get(&config, &path)?).await?;
        Ok(cases.into_iter().next())
    }

    /// Every profile paired with its role; missing assignments read as `user`.
    pub async fn list_users() -> Result<Vec<UserRow>, ApiError> {
        let config = AppConfig::load();
        let profiles: Vec<UserProfile> = http::send_json(Self::get(&config, "profiles?select=*")?).await?;
        let assignments: Vec<RoleAssignment> =
            http::send_json(Self::get(&config, "user_roles?select=user_id,role")?).await?;
        Ok(UserRow::join(profiles, &assignments))
    }

    pub async fn assign_role(assignment: &RoleAssignment) -> Result<(), ApiError> {
        let config = AppConfig::load();
        let token = storage::access_token();
        let builder = Request::post(&config.rest_url("user_roles")).header("Prefer", "return=minimal");
        let builder = http::authorize(builder, &config, token.as_deref());
        http::send(http::build_json(builder, assignment)?).await?;
        Ok(())
    }

    /// Creates the account, then records its role.
    pub async fn create_user(
        auth: &HostedAuthClient,
        request: &CreateUserRequest,
    ) -> Result<UserIdentity, ApiError> {
        request.validate()?;

        let user = auth.sign_up(&request.sign_up_body()).await?;
        Self::assign_role(&RoleAssignment {
            user_id: user.id,
            role: request.role,
        })
        .await?;

        tracing::info!(user_id = %user.id, role = %request.role, "user created");
        Ok(user)
    }
}
