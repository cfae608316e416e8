//! Interfaces to the hosted auth and role-assignment services.
//!
//! Both services are opaque network collaborators with unspecified latency.
//! The traits are `?Send` because everything runs on the browser event loop.

use std::rc::Rc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{Role, UserIdentity};
use crate::observer::Subscription;

/// Change pushed by the auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn(UserIdentity),
    SignedOut,
    TokenRefreshed(UserIdentity),
    UserUpdated(UserIdentity),
}

impl AuthEvent {
    /// Identity carried by the event; `None` means nobody is signed in.
    pub fn user(&self) -> Option<&UserIdentity> {
        match self {
            AuthEvent::SignedIn(user)
            | AuthEvent::TokenRefreshed(user)
            | AuthEvent::UserUpdated(user) => Some(user),
            AuthEvent::SignedOut => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AuthEvent::SignedIn(_) => "signed_in",
            AuthEvent::SignedOut => "signed_out",
            AuthEvent::TokenRefreshed(_) => "token_refreshed",
            AuthEvent::UserUpdated(_) => "user_updated",
        }
    }
}

#[async_trait(?Send)]
pub trait AuthClient {
    /// One-shot lookup of the currently signed-in user.
    async fn current_user(&self) -> Result<Option<UserIdentity>, ApiError>;

    /// Push subscription for sign-in, sign-out and token refresh.
    fn on_auth_state_change(&self, listener: Rc<dyn Fn(&AuthEvent)>) -> Subscription;

    async fn sign_out(&self) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
pub trait RoleDirectory {
    /// Role assigned to `user_id`, or `None` when no record exists.
    async fn role_for(&self, user_id: Uuid) -> Result<Option<Role>, ApiError>;
}
