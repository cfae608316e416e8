//! Access decision for every navigable path.
//!
//! [`evaluate`] is pure: it only inspects the session snapshot. Performing the
//! redirect is left to the caller so the decision can be re-run on every
//! session change.

use crate::models::Role;
use crate::session::Session;

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Where authenticated users without the required role are sent.
pub const HOME_PATH: &str = "/";

/// A single navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub target_path: String,
    pub requires_admin: bool,
}

impl RouteRequest {
    pub fn new(target_path: impl Into<String>, requires_admin: bool) -> Self {
        Self {
            target_path: target_path.into(),
            requires_admin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Pending,
    Unauthenticated,
    Forbidden,
    Authorized,
}

/// What the caller should do with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Show a neutral loading placeholder; do not navigate.
    Placeholder,
    /// Show the requested view.
    Render,
    /// Navigate to the path, replacing the current history entry.
    Redirect(&'static str),
}

pub fn classify(session: &Session, request: &RouteRequest) -> Access {
    if session.is_loading() {
        return Access::Pending;
    }
    if session.user().is_none() {
        return Access::Unauthenticated;
    }
    if request.requires_admin && session.role() != Some(Role::Admin) {
        return Access::Forbidden;
    }
    Access::Authorized
}

pub fn evaluate(session: &Session, request: &RouteRequest) -> Decision {
    match classify(session, request) {
        Access::Pending => Decision::Placeholder,
        Access::Unauthenticated => Decision::Redirect(LOGIN_PATH),
        Access::Forbidden => Decision::Redirect(HOME_PATH),
        Access::Authorized => Decision::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserIdentity;
    use uuid::Uuid;

    fn operator() -> UserIdentity {
        UserIdentity::new(Uuid::new_v4(), "operator@cliccash.test")
    }

    fn every_role() -> [Option<Role>; 4] {
        [None, Some(Role::User), Some(Role::Dev), Some(Role::Admin)]
    }

    #[test]
    fn test_loading_session_never_redirects() {
        for user in [None, Some(operator())] {
            for role in every_role() {
                for requires_admin in [false, true] {
                    let session = Session::new(user.clone(), role, true);
                    let request = RouteRequest::new("/users", requires_admin);
                    assert_eq!(evaluate(&session, &request), Decision::Placeholder);
                }
            }
        }
    }

    #[test]
    fn test_signed_out_always_goes_to_login() {
        for requires_admin in [false, true] {
            let request = RouteRequest::new("/machines", requires_admin);
            assert_eq!(
                evaluate(&Session::signed_out(), &request),
                Decision::Redirect(LOGIN_PATH)
            );
        }
    }

    #[test]
    fn test_admin_route_rejects_every_other_role() {
        let request = RouteRequest::new("/users", true);
        for role in [None, Some(Role::User), Some(Role::Dev)] {
            let session = Session::new(Some(operator()), role, false);
            assert_eq!(classify(&session, &request), Access::Forbidden);
            assert_eq!(evaluate(&session, &request), Decision::Redirect(HOME_PATH));
        }
    }

    #[test]
    fn test_user_role_cannot_open_user_management() {
        let session = Session::signed_in(operator(), Role::User);
        assert_eq!(
            evaluate(&session, &RouteRequest::new("/users", true)),
            Decision::Redirect("/")
        );
    }

    #[test]
    fn test_admin_can_open_user_management() {
        let session = Session::signed_in(operator(), Role::Admin);
        assert_eq!(
            evaluate(&session, &RouteRequest::new("/users", true)),
            Decision::Render
        );
    }

    #[test]
    fn test_any_signed_in_role_can_open_regular_views() {
        for role in every_role() {
            let session = Session::new(Some(operator()), role, false);
            let request = RouteRequest::new("/support", false);
            assert_eq!(classify(&session, &request), Access::Authorized);
        }
    }

    #[test]
    fn test_late_role_resolution_flips_decision() {
        let request = RouteRequest::new("/users", true);
        let user = operator();

        let before = Session::new(Some(user.clone()), None, false);
        assert_eq!(evaluate(&before, &request), Decision::Redirect(HOME_PATH));

        let after = Session::signed_in(user, Role::Admin);
        assert_eq!(evaluate(&after, &request), Decision::Render);
    }
}
