mod components;
mod config;
mod pages;
mod router;
mod services;
mod session;

use yew::prelude::*;
use yew_router::BrowserRouter;

use crate::router::{switch, Route};
use crate::session::SessionRoot;

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionRoot>
                <div id="app">
                    <yew_router::Switch<Route> render={switch} />
                </div>
            </SessionRoot>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
