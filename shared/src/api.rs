use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Role, UserIdentity};

// ============================================================================
// Auth API Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Session issued by the auth service on sign-in or refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSessionResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserIdentity,
}

/// Form submitted by an administrator to create a dashboard user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6))]
    pub password: String,

    pub role: Role,
}

impl CreateUserRequest {
    pub fn sign_up_body(&self) -> SignUpRequest {
        SignUpRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            data: SignUpMetadata {
                first_name: self.first_name.clone(),
                last_name: self.last_name.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub data: SignUpMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpMetadata {
    pub first_name: String,
    pub last_name: String,
}

/// Sign-up returns either a bare user or a session wrapping one,
/// depending on whether email confirmation is enabled.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignUpResponse {
    Session { user: UserIdentity },
    User(UserIdentity),
}

impl SignUpResponse {
    pub fn user(&self) -> &UserIdentity {
        match self {
            SignUpResponse::Session { user } | SignUpResponse::User(user) => user,
        }
    }
}

// ============================================================================
// Role API Types
// ============================================================================

/// Row of the `user_roles` table as selected with `select=role`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecord {
    pub role: Role,
}

/// Full `user_roles` row used for inserts and bulk reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub user_id: Uuid,
    pub role: Role,
}

// ============================================================================
// Error Types
// ============================================================================

/// Error body returned by the hosted service. The auth and table APIs
/// disagree on field names, so every field is optional.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub msg: Option<String>,
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn describe(&self) -> Option<String> {
        self.error_description
            .clone()
            .or_else(|| self.msg.clone())
            .or_else(|| self.message.clone())
            .or_else(|| self.error.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_request_validation() {
        let mut request = CreateUserRequest {
            first_name: "Grace".to_string(),
            last_name: "Lee".to_string(),
            email: "grace@example.com".to_string(),
            password: "secret1".to_string(),
            role: Role::Dev,
        };
        assert!(request.validate().is_ok());

        request.password = "short".to_string();
        assert!(request.validate().is_err());

        request.password = "secret1".to_string();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_sign_up_response_accepts_both_shapes() {
        let id = Uuid::new_v4();
        let bare = format!(r#"{{"id":"{}","email":"a@example.com"}}"#, id);
        let wrapped = format!(
            r#"{{"access_token":"t","user":{{"id":"{}","email":"a@example.com"}}}}"#,
            id
        );

        let bare: SignUpResponse = serde_json::from_str(&bare).unwrap();
        let wrapped: SignUpResponse = serde_json::from_str(&wrapped).unwrap();
        assert_eq!(bare.user().id, id);
        assert_eq!(wrapped.user().id, id);
    }

    #[test]
    fn test_error_response_prefers_description() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        )
        .unwrap();
        assert_eq!(body.describe().as_deref(), Some("Invalid login credentials"));
    }
}
