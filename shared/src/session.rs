//! Session and role state for the dashboard.
//!
//! [`SessionProvider`] owns the authenticated identity and its role, keeps
//! them in sync with the auth service, and broadcasts every change to
//! subscribers. Reads through [`SessionProvider::session`] are synchronous
//! snapshots and never touch the network.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::{Rc, Weak};

use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::auth::{AuthClient, AuthEvent, RoleDirectory};
use crate::error::ApiError;
use crate::models::{Role, UserIdentity};
use crate::observer::{Listeners, Subscription};

/// Unit of work handed to the host executor.
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Runs a task to completion on the current thread's event loop
/// (`wasm_bindgen_futures::spawn_local` in the browser).
pub type Spawner = fn(LocalTask);

/// Snapshot of the authenticated identity for this application instance.
///
/// The role is only observable while a user is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: Option<UserIdentity>,
    role: Option<Role>,
    loading: bool,
}

impl Session {
    pub fn new(user: Option<UserIdentity>, role: Option<Role>, loading: bool) -> Self {
        let role = if user.is_some() { role } else { None };
        Self { user, role, loading }
    }

    /// State before the auth service has answered.
    pub fn pending() -> Self {
        Self::new(None, None, true)
    }

    pub fn signed_out() -> Self {
        Self::new(None, None, false)
    }

    pub fn signed_in(user: UserIdentity, role: Role) -> Self {
        Self::new(Some(user), Some(role), false)
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }

    /// `None` while signed out or while the role lookup is in flight.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and(self.role)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::pending()
    }
}

struct State {
    session: Session,
    /// Bumped on every change of user identity; a role lookup only lands
    /// if the generation it started under is still current.
    generation: u64,
    /// Bumped on every auth push or local sign-out; the initial session
    /// check only lands if nothing newer has been observed.
    revision: u64,
}

struct Inner {
    auth: Rc<dyn AuthClient>,
    roles: Rc<dyn RoleDirectory>,
    spawn: Spawner,
    state: RefCell<State>,
    listeners: Listeners<Session>,
    auth_subscription: RefCell<Option<Subscription>>,
}

/// Process-wide owner of the [`Session`].
///
/// Cloning is cheap and every clone shares the same state.
#[derive(Clone)]
pub struct SessionProvider {
    inner: Rc<Inner>,
}

impl PartialEq for SessionProvider {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SessionProvider {
    pub fn new(auth: Rc<dyn AuthClient>, roles: Rc<dyn RoleDirectory>, spawn: Spawner) -> Self {
        Self {
            inner: Rc::new(Inner {
                auth,
                roles,
                spawn,
                state: RefCell::new(State {
                    session: Session::pending(),
                    generation: 0,
                    revision: 0,
                }),
                listeners: Listeners::new(),
                auth_subscription: RefCell::new(None),
            }),
        }
    }

    /// Subscribes to auth notifications and starts the initial session check.
    ///
    /// Calling this more than once has no further effect.
    pub fn initialize(&self) {
        if self.inner.auth_subscription.borrow().is_some() {
            debug!("session provider already initialized");
            return;
        }

        let weak = Rc::downgrade(&self.inner);
        let subscription = self
            .inner
            .auth
            .on_auth_state_change(Rc::new(move |event: &AuthEvent| {
                if let Some(inner) = weak.upgrade() {
                    Inner::handle_event(&inner, event);
                }
            }));
        *self.inner.auth_subscription.borrow_mut() = Some(subscription);

        let revision = self.inner.state.borrow().revision;
        let auth = self.inner.auth.clone();
        let weak = Rc::downgrade(&self.inner);
        (self.inner.spawn)(Box::pin(async move {
            let user = match auth.current_user().await {
                Ok(user) => user,
                Err(e) => {
                    error!(error = %e, "initial session check failed, treating as signed out");
                    None
                }
            };

            let Some(inner) = weak.upgrade() else {
                return;
            };
            if inner.state.borrow().revision != revision {
                debug!("initial session check superseded by a newer auth event");
                return;
            }
            Inner::apply_user(&inner, user);
        }));
    }

    /// Current snapshot. Never blocks.
    pub fn session(&self) -> Session {
        self.inner.state.borrow().session.clone()
    }

    /// Calls `listener` after every change to the session.
    pub fn subscribe(&self, listener: impl Fn(&Session) + 'static) -> Subscription {
        self.inner.listeners.subscribe(Rc::new(listener))
    }

    /// Looks up the role assigned to `user_id`, falling back to
    /// [`Role::User`] when there is no record or the lookup fails.
    pub async fn resolve_role(&self, user_id: Uuid) -> Role {
        lookup_role(self.inner.roles.as_ref(), user_id).await
    }

    /// Ends the session with the auth service.
    ///
    /// The local session is cleared whether or not the request succeeds;
    /// a failure is still returned so the caller can report it.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let auth = self.inner.auth.clone();
        let result = auth.sign_out().await;
        if let Err(e) = &result {
            error!(error = %e, "sign-out request failed, clearing local session anyway");
        }

        self.inner.state.borrow_mut().revision += 1;
        Inner::apply_user(&self.inner, None);
        result
    }
}

impl Inner {
    fn handle_event(inner: &Rc<Inner>, event: &AuthEvent) {
        debug!(event = event.name(), "auth state changed");
        inner.state.borrow_mut().revision += 1;
        Inner::apply_user(inner, event.user().cloned());
    }

    fn apply_user(inner: &Rc<Inner>, user: Option<UserIdentity>) {
        let (changed, lookup) = {
            let mut state = inner.state.borrow_mut();
            let before = state.session.clone();
            let current_id = state.session.user.as_ref().map(|u| u.id);
            let next_id = user.as_ref().map(|u| u.id);

            let mut lookup = None;
            if current_id == next_id {
                // Same identity (token refresh, profile update): keep the role.
                state.session.user = user;
            } else {
                state.generation += 1;
                state.session.role = None;
                lookup = next_id.map(|id| (state.generation, id));
                state.session.user = user;
            }
            // Any answer from the auth service settles the session; the role
            // may still be in flight.
            state.session.loading = false;

            let changed = (state.session != before).then(|| state.session.clone());
            (changed, lookup)
        };

        if let Some((generation, user_id)) = lookup {
            Inner::spawn_role_lookup(inner, generation, user_id);
        }
        if let Some(session) = changed {
            inner.listeners.notify(&session);
        }
    }

    fn spawn_role_lookup(inner: &Rc<Inner>, generation: u64, user_id: Uuid) {
        let roles = inner.roles.clone();
        let weak: Weak<Inner> = Rc::downgrade(inner);
        (inner.spawn)(Box::pin(async move {
            let role = lookup_role(roles.as_ref(), user_id).await;
            if let Some(inner) = weak.upgrade() {
                Inner::finish_role_lookup(&inner, generation, user_id, role);
            }
        }));
    }

    fn finish_role_lookup(inner: &Rc<Inner>, generation: u64, user_id: Uuid, role: Role) {
        let session = {
            let mut state = inner.state.borrow_mut();
            let current_id = state.session.user.as_ref().map(|u| u.id);
            if state.generation != generation || current_id != Some(user_id) {
                debug!(%user_id, "discarding stale role lookup");
                return;
            }
            state.session.role = Some(role);
            state.session.clone()
        };

        info!(%user_id, %role, "role resolved");
        inner.listeners.notify(&session);
    }
}

async fn lookup_role(roles: &dyn RoleDirectory, user_id: Uuid) -> Role {
    match roles.role_for(user_id).await {
        Ok(Some(role)) => role,
        Ok(None) => {
            debug!(%user_id, "no role record, defaulting to user");
            Role::User
        }
        Err(e) => {
            warn!(%user_id, error = %e, "role lookup failed, defaulting to user");
            Role::User
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::{evaluate, Decision, RouteRequest, HOME_PATH, LOGIN_PATH};
    use async_trait::async_trait;
    use std::cell::Cell;
    use tokio::sync::oneshot;
    use tokio::task::LocalSet;

    type UserReply = Result<Option<UserIdentity>, ApiError>;
    type RoleReply = Result<Option<Role>, ApiError>;

    struct FakeAuth {
        initial: RefCell<Option<oneshot::Receiver<UserReply>>>,
        listeners: Listeners<AuthEvent>,
        sign_out_result: RefCell<Result<(), ApiError>>,
    }

    impl FakeAuth {
        fn new() -> (Rc<Self>, oneshot::Sender<UserReply>) {
            let (tx, rx) = oneshot::channel();
            let auth = Rc::new(Self {
                initial: RefCell::new(Some(rx)),
                listeners: Listeners::new(),
                sign_out_result: RefCell::new(Ok(())),
            });
            (auth, tx)
        }

        fn emit(&self, event: AuthEvent) {
            self.listeners.notify(&event);
        }
    }

    #[async_trait(?Send)]
    impl AuthClient for FakeAuth {
        async fn current_user(&self) -> UserReply {
            let rx = self.initial.borrow_mut().take();
            match rx {
                Some(rx) => rx.await.unwrap_or(Ok(None)),
                None => Ok(None),
            }
        }

        fn on_auth_state_change(&self, listener: Rc<dyn Fn(&AuthEvent)>) -> Subscription {
            self.listeners.subscribe(listener)
        }

        async fn sign_out(&self) -> Result<(), ApiError> {
            let result = self.sign_out_result.borrow().clone();
            if result.is_ok() {
                self.emit(AuthEvent::SignedOut);
            }
            result
        }
    }

    /// Role directory whose lookups stay pending until the test answers them.
    #[derive(Default)]
    struct FakeRoles {
        pending: RefCell<Vec<(Uuid, oneshot::Sender<RoleReply>)>>,
        calls: Cell<u32>,
    }

    impl FakeRoles {
        /// Answers the oldest pending lookup for `user_id`.
        fn answer(&self, user_id: Uuid, reply: RoleReply) {
            let mut pending = self.pending.borrow_mut();
            let pos = pending
                .iter()
                .position(|(id, _)| *id == user_id)
                .expect("no pending lookup for user");
            let (_, tx) = pending.remove(pos);
            let _ = tx.send(reply);
        }
    }

    #[async_trait(?Send)]
    impl RoleDirectory for FakeRoles {
        async fn role_for(&self, user_id: Uuid) -> RoleReply {
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().push((user_id, tx));
            self.calls.set(self.calls.get() + 1);
            rx.await.unwrap_or(Ok(None))
        }
    }

    fn spawn_local_task(task: LocalTask) {
        tokio::task::spawn_local(task);
    }

    async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    struct Harness {
        auth: Rc<FakeAuth>,
        roles: Rc<FakeRoles>,
        provider: SessionProvider,
        initial: Option<oneshot::Sender<UserReply>>,
    }

    impl Harness {
        fn start() -> Self {
            let (auth, initial) = FakeAuth::new();
            let roles = Rc::new(FakeRoles::default());
            let provider = SessionProvider::new(auth.clone(), roles.clone(), spawn_local_task);
            provider.initialize();
            Self {
                auth,
                roles,
                provider,
                initial: Some(initial),
            }
        }

        async fn finish_initial_check(&mut self, reply: UserReply) {
            if let Some(tx) = self.initial.take() {
                let _ = tx.send(reply);
            }
            settle().await;
        }

        async fn signed_in_as(role: Role) -> (Self, UserIdentity) {
            let mut harness = Self::start();
            let user = user("ops@cliccash.test");
            harness.finish_initial_check(Ok(Some(user.clone()))).await;
            harness.roles.answer(user.id, Ok(Some(role)));
            settle().await;
            (harness, user)
        }
    }

    fn user(email: &str) -> UserIdentity {
        UserIdentity::new(Uuid::new_v4(), email)
    }

    fn users_page() -> RouteRequest {
        RouteRequest::new("/users", true)
    }

    #[tokio::test]
    async fn test_session_is_pending_until_first_resolution() {
        LocalSet::new()
            .run_until(async {
                let harness = Harness::start();
                settle().await;

                let session = harness.provider.session();
                assert!(session.is_loading());
                assert_eq!(
                    evaluate(&session, &RouteRequest::new("/machines", false)),
                    Decision::Placeholder
                );
            })
            .await;
    }

    #[tokio::test]
    async fn test_no_user_resolves_to_signed_out() {
        LocalSet::new()
            .run_until(async {
                let mut harness = Harness::start();
                harness.finish_initial_check(Ok(None)).await;

                let session = harness.provider.session();
                assert_eq!(session, Session::signed_out());
                assert_eq!(
                    evaluate(&session, &RouteRequest::new("/machines", false)),
                    Decision::Redirect(LOGIN_PATH)
                );
            })
            .await;
    }

    #[tokio::test]
    async fn test_initial_check_failure_fails_closed() {
        LocalSet::new()
            .run_until(async {
                let mut harness = Harness::start();
                harness
                    .finish_initial_check(Err(ApiError::Network("offline".to_string())))
                    .await;

                let session = harness.provider.session();
                assert!(!session.is_loading());
                assert!(session.user().is_none());
                assert_eq!(harness.roles.calls.get(), 0);
            })
            .await;
    }

    #[tokio::test]
    async fn test_auth_resolution_settles_before_role_lookup() {
        LocalSet::new()
            .run_until(async {
                let mut harness = Harness::start();
                let admin = user("admin@cliccash.test");
                harness.finish_initial_check(Ok(Some(admin.clone()))).await;

                let session = harness.provider.session();
                assert!(!session.is_loading());
                assert_eq!(session.user(), Some(&admin));
                assert_eq!(session.role(), None);
                assert_eq!(
                    evaluate(&session, &RouteRequest::new("/machines", false)),
                    Decision::Render
                );
                assert_eq!(evaluate(&session, &users_page()), Decision::Redirect(HOME_PATH));

                harness.roles.answer(admin.id, Ok(Some(Role::Admin)));
                settle().await;

                let session = harness.provider.session();
                assert!(!session.is_loading());
                assert_eq!(session.role(), Some(Role::Admin));
                assert_eq!(evaluate(&session, &users_page()), Decision::Render);
            })
            .await;
    }

    #[tokio::test]
    async fn test_role_lookup_after_sign_out_is_discarded() {
        LocalSet::new()
            .run_until(async {
                let mut harness = Harness::start();
                let member = user("member@cliccash.test");
                harness.finish_initial_check(Ok(Some(member.clone()))).await;
                harness.auth.emit(AuthEvent::SignedOut);
                settle().await;

                harness.roles.answer(member.id, Ok(Some(Role::Admin)));
                settle().await;

                let session = harness.provider.session();
                assert_eq!(session, Session::signed_out());
                assert_eq!(session.role(), None);
                assert!(!session.is_loading());
            })
            .await;
    }

    #[tokio::test]
    async fn test_missing_role_record_defaults_to_user() {
        LocalSet::new()
            .run_until(async {
                let mut harness = Harness::start();
                let member = user("member@cliccash.test");
                harness.finish_initial_check(Ok(Some(member.clone()))).await;
                harness.roles.answer(member.id, Ok(None));
                settle().await;

                let session = harness.provider.session();
                assert_eq!(session.role(), Some(Role::User));
                assert_eq!(evaluate(&session, &users_page()), Decision::Redirect(HOME_PATH));
            })
            .await;
    }

    #[tokio::test]
    async fn test_role_lookup_failure_defaults_to_user() {
        LocalSet::new()
            .run_until(async {
                let mut harness = Harness::start();
                let member = user("member@cliccash.test");
                harness.finish_initial_check(Ok(Some(member.clone()))).await;
                harness.roles.answer(
                    member.id,
                    Err(ApiError::Http {
                        status: 500,
                        message: "boom".to_string(),
                    }),
                );
                settle().await;

                assert_eq!(harness.provider.session().role(), Some(Role::User));
            })
            .await;
    }

    #[tokio::test]
    async fn test_resolve_role_falls_back_to_user() {
        LocalSet::new()
            .run_until(async {
                let harness = Harness::start();
                let id = Uuid::new_v4();

                let (role, ()) = tokio::join!(harness.provider.resolve_role(id), async {
                    settle().await;
                    harness.roles.answer(id, Ok(None));
                });
                assert_eq!(role, Role::User);
            })
            .await;
    }

    #[tokio::test]
    async fn test_stale_role_lookup_does_not_overwrite_newer_user() {
        LocalSet::new()
            .run_until(async {
                let mut harness = Harness::start();
                harness.finish_initial_check(Ok(None)).await;

                let first = user("first@cliccash.test");
                let second = user("second@cliccash.test");
                harness.auth.emit(AuthEvent::SignedIn(first.clone()));
                harness.auth.emit(AuthEvent::SignedOut);
                harness.auth.emit(AuthEvent::SignedIn(second.clone()));
                settle().await;

                harness.roles.answer(first.id, Ok(Some(Role::Admin)));
                settle().await;

                let session = harness.provider.session();
                assert_eq!(session.user(), Some(&second));
                assert_eq!(session.role(), None);

                harness.roles.answer(second.id, Ok(Some(Role::Dev)));
                settle().await;
                assert_eq!(harness.provider.session().role(), Some(Role::Dev));
            })
            .await;
    }

    #[tokio::test]
    async fn test_lookup_from_earlier_sign_in_of_same_user_is_discarded() {
        LocalSet::new()
            .run_until(async {
                let mut harness = Harness::start();
                harness.finish_initial_check(Ok(None)).await;

                let member = user("member@cliccash.test");
                harness.auth.emit(AuthEvent::SignedIn(member.clone()));
                harness.auth.emit(AuthEvent::SignedOut);
                harness.auth.emit(AuthEvent::SignedIn(member.clone()));
                settle().await;
                assert_eq!(harness.roles.calls.get(), 2);

                // Oldest lookup answers first and belongs to the previous sign-in.
                harness.roles.answer(member.id, Ok(Some(Role::Admin)));
                settle().await;
                assert_eq!(harness.provider.session().role(), None);

                harness.roles.answer(member.id, Ok(Some(Role::User)));
                settle().await;
                assert_eq!(harness.provider.session().role(), Some(Role::User));
            })
            .await;
    }

    #[tokio::test]
    async fn test_token_refresh_keeps_role_without_new_lookup() {
        LocalSet::new()
            .run_until(async {
                let (harness, admin) = Harness::signed_in_as(Role::Admin).await;
                let calls = harness.roles.calls.get();

                let refreshed = UserIdentity::new(admin.id, "renamed@cliccash.test");
                harness.auth.emit(AuthEvent::TokenRefreshed(refreshed.clone()));
                settle().await;

                let session = harness.provider.session();
                assert_eq!(session.user(), Some(&refreshed));
                assert_eq!(session.role(), Some(Role::Admin));
                assert_eq!(harness.roles.calls.get(), calls);
            })
            .await;
    }

    #[tokio::test]
    async fn test_auth_event_before_initial_check_wins() {
        LocalSet::new()
            .run_until(async {
                let mut harness = Harness::start();
                let member = user("member@cliccash.test");
                harness.auth.emit(AuthEvent::SignedIn(member.clone()));
                harness.finish_initial_check(Ok(None)).await;

                let session = harness.provider.session();
                assert_eq!(session.user(), Some(&member));
                assert_eq!(session.role(), None);
                assert!(!session.is_loading());

                harness.roles.answer(member.id, Ok(Some(Role::Dev)));
                settle().await;
                assert_eq!(
                    harness.provider.session(),
                    Session::signed_in(member, Role::Dev)
                );
            })
            .await;
    }

    #[tokio::test]
    async fn test_sign_out_sends_admin_to_login() {
        LocalSet::new()
            .run_until(async {
                let (harness, _) = Harness::signed_in_as(Role::Admin).await;
                assert_eq!(
                    evaluate(&harness.provider.session(), &users_page()),
                    Decision::Render
                );

                harness.provider.sign_out().await.unwrap();

                let session = harness.provider.session();
                assert_eq!(session, Session::signed_out());
                assert_eq!(session.role(), None);
                assert_eq!(evaluate(&session, &users_page()), Decision::Redirect(LOGIN_PATH));
            })
            .await;
    }

    #[tokio::test]
    async fn test_failed_sign_out_still_clears_local_session() {
        LocalSet::new()
            .run_until(async {
                let (harness, _) = Harness::signed_in_as(Role::Dev).await;
                *harness.auth.sign_out_result.borrow_mut() =
                    Err(ApiError::Network("offline".to_string()));

                let result = harness.provider.sign_out().await;
                assert!(result.is_err());
                assert_eq!(harness.provider.session(), Session::signed_out());
            })
            .await;
    }

    #[tokio::test]
    async fn test_loading_never_flips_back() {
        LocalSet::new()
            .run_until(async {
                let mut harness = Harness::start();
                let seen = Rc::new(RefCell::new(Vec::new()));
                let _subscription = {
                    let seen = seen.clone();
                    harness
                        .provider
                        .subscribe(move |session: &Session| seen.borrow_mut().push(session.clone()))
                };

                let member = user("member@cliccash.test");
                harness.finish_initial_check(Ok(Some(member.clone()))).await;
                harness.roles.answer(member.id, Ok(Some(Role::User)));
                settle().await;
                harness.auth.emit(AuthEvent::SignedOut);
                harness.auth.emit(AuthEvent::SignedIn(member.clone()));
                settle().await;
                harness.roles.answer(member.id, Ok(Some(Role::User)));
                settle().await;

                let seen = seen.borrow();
                assert!(!seen.is_empty());
                let first_settled = seen
                    .iter()
                    .position(|s| !s.is_loading())
                    .expect("session never settled");
                assert!(seen[first_settled..].iter().all(|s| !s.is_loading()));
            })
            .await;
    }

    #[tokio::test]
    async fn test_dropping_provider_unsubscribes_from_auth() {
        LocalSet::new()
            .run_until(async {
                let mut harness = Harness::start();
                harness.finish_initial_check(Ok(None)).await;
                assert_eq!(harness.auth.listeners.len(), 1);

                harness.provider.initialize();
                assert_eq!(harness.auth.listeners.len(), 1);

                let Harness { auth, provider, .. } = harness;
                drop(provider);
                assert!(auth.listeners.is_empty());
            })
            .await;
    }

    #[test]
    fn test_role_hidden_without_user() {
        let session = Session::new(None, Some(Role::Admin), false);
        assert_eq!(session.role(), None);
        assert!(!session.is_admin());
    }
}
