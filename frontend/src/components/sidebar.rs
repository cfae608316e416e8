use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session::use_session;

const NAVIGATION: [(&str, Route); 5] = [
    ("Overview", Route::Overview),
    ("RPT Machines", Route::Machines),
    ("Customer Support", Route::Support),
    ("Customers", Route::Customers),
    ("Businesses", Route::Businesses),
];

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub open: bool,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let session = use_session();
    let current = use_route::<Route>();

    let is_admin = session.as_ref().map_or(false, |ctx| ctx.session.is_admin());
    let email = session
        .as_ref()
        .and_then(|ctx| ctx.session.user().map(|user| user.email.clone()))
        .unwrap_or_default();
    let initial = email
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());
    let role_label = session
        .as_ref()
        .and_then(|ctx| ctx.session.role())
        .map(|role| role.label())
        .unwrap_or("");

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(ctx) = session.clone() else {
                return;
            };
            wasm_bindgen_futures::spawn_local(async move {
                // The provider logs a failed request and clears the session
                // regardless; the guard then redirects to the login page.
                let _ = ctx.provider.sign_out().await;
            });
        })
    };

    let link = |title: &'static str, route: Route| {
        let class = if current.as_ref() == Some(&route) {
            "nav-link active"
        } else {
            "nav-link"
        };
        html! {
            <Link<Route> to={route} classes={classes!(class)}>
                <span>{ title }</span>
            </Link<Route>>
        }
    };

    html! {
        <aside class={classes!("sidebar", (!props.open).then_some("collapsed"))}>
            <div class="sidebar-header">
                <div class="brand-mark">{ "C" }</div>
                if props.open {
                    <span class="brand-name">{ "ClicCash" }</span>
                }
            </div>

            <nav class="sidebar-nav">
                <div class="nav-group-label">{ "Navigation" }</div>
                { for NAVIGATION.iter().cloned().map(|(title, route)| link(title, route)) }
                if is_admin {
                    { link("User Management", Route::Users) }
                }
            </nav>

            <div class="sidebar-footer">
                { link("Settings", Route::Settings) }
                <hr />
                <div class="sidebar-user">
                    <div class="avatar">{ initial }</div>
                    if props.open {
                        <div class="sidebar-user-details">
                            <span class="sidebar-user-email">{ email.clone() }</span>
                            <span class="sidebar-user-role">{ role_label }</span>
                        </div>
                    }
                </div>
                <button class="btn btn-ghost logout" onclick={on_logout}>{ "Logout" }</button>
            </div>
        </aside>
    }
}
