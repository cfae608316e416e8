use shared::{evaluate, Decision};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session::use_session;

#[derive(Properties, PartialEq)]
pub struct ProtectedProps {
    pub route: Route,
    #[prop_or_default]
    pub children: Html,
}

/// Renders `children` only when the session may see `route`.
///
/// The decision is recomputed on every session change; redirects replace the
/// current history entry so the back button cannot return to the page.
#[function_component(Protected)]
pub fn protected(props: &ProtectedProps) -> Html {
    let session = use_session().map(|ctx| ctx.session).unwrap_or_default();
    let navigator = use_navigator();
    let decision = evaluate(&session, &props.route.request());

    use_effect_with(decision, move |decision| {
        if let Decision::Redirect(path) = *decision {
            match (navigator, Route::recognize(path)) {
                (Some(navigator), Some(target)) => {
                    tracing::debug!(to = path, "redirecting");
                    navigator.replace(&target);
                }
                _ => tracing::warn!(to = path, "no router available for redirect"),
            }
        }
        || ()
    });

    match decision {
        Decision::Render => props.children.clone(),
        Decision::Placeholder | Decision::Redirect(_) => html! {
            <div class="loading loading-screen">
                <div class="spinner"></div>
                <p>{ "Loading..." }</p>
            </div>
        },
    }
}
