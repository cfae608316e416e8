use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

/// Catch-all for unknown paths. Public, so it renders without a session.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    html! {
        <div class="login-screen">
            <div class="card empty-state">
                <div class="brand-mark">{ "C" }</div>
                <h2>{ "Nothing at this address" }</h2>
                if !location.is_empty() {
                    <p class="muted"><code>{ location }</code></p>
                }
                <p>{ "This page isn't part of the ClicCash dashboard. Check the link, or head back to the fleet overview." }</p>
                <Link<Route> to={Route::Overview} classes="btn btn-primary">
                    { "Back to overview" }
                </Link<Route>>
            </div>
        </div>
    }
}
