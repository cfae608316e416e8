use yew::prelude::*;

#[function_component(Settings)]
pub fn settings() -> Html {
    html! {
        <div class="container">
            <h2>{ "Settings" }</h2>
            <p>{ "Manage your account and application settings" }</p>
            <div class="card">
                <h3>{ "User Settings" }</h3>
                <p class="muted">{ "Configure your account preferences" }</p>
                <p class="muted">{ "Settings page - Coming soon" }</p>
            </div>
        </div>
    }
}
