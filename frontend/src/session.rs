//! Wires the [`SessionProvider`] into the component tree.

use std::rc::Rc;

use shared::session::{LocalTask, Session, SessionProvider};
use yew::prelude::*;

use crate::config::AppConfig;
use crate::services::auth::{HostedAuthClient, HostedRoleDirectory};

/// Context handed to every component below [`SessionRoot`].
#[derive(Clone)]
pub struct SessionContext {
    pub session: Session,
    pub provider: SessionProvider,
    pub auth: Rc<HostedAuthClient>,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session
            && self.provider == other.provider
            && Rc::ptr_eq(&self.auth, &other.auth)
    }
}

fn spawn_task(task: LocalTask) {
    wasm_bindgen_futures::spawn_local(task);
}

#[derive(Properties, PartialEq)]
pub struct SessionRootProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SessionRoot)]
pub fn session_root(props: &SessionRootProps) -> Html {
    let services = use_memo((), |_| {
        let config = AppConfig::load();
        let auth = Rc::new(HostedAuthClient::new(config.clone()));
        let roles = Rc::new(HostedRoleDirectory::new(config));
        let provider = SessionProvider::new(auth.clone(), roles, spawn_task);
        (auth, provider)
    });
    let session = use_state(Session::pending);

    {
        let services = services.clone();
        let setter = session.setter();
        use_effect_with((), move |_| {
            let (_, provider) = &*services;
            let subscription = provider.subscribe(move |s: &Session| setter.set(s.clone()));
            provider.initialize();
            move || drop(subscription)
        });
    }

    let (auth, provider) = (*services).clone();
    let context = SessionContext {
        session: (*session).clone(),
        provider,
        auth,
    };

    html! {
        <ContextProvider<SessionContext> {context}>
            { props.children.clone() }
        </ContextProvider<SessionContext>>
    }
}

/// Session context, or `None` outside of [`SessionRoot`].
#[hook]
pub fn use_session() -> Option<SessionContext> {
    use_context::<SessionContext>()
}
