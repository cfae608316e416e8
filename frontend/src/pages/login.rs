use shared::api::SignInRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session::use_session;

#[function_component(Login)]
pub fn login() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let signed_in = session
        .as_ref()
        .map_or(false, |ctx| !ctx.session.is_loading() && ctx.session.is_authenticated());

    {
        let navigator = navigator.clone();
        use_effect_with(signed_in, move |signed_in| {
            if *signed_in {
                if let Some(navigator) = navigator {
                    navigator.replace(&Route::Overview);
                }
            }
            || ()
        });
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(ctx) = session.clone() else {
                return;
            };

            let request = SignInRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();

            submitting.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match ctx.auth.sign_in_with_password(request).await {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Overview);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Sign-in failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="card login-card">
                <div class="brand-mark">{ "C" }</div>
                <h2>{ "ClicCash Dashboard" }</h2>
                <p class="muted">{ "Sign in to manage your fleet" }</p>

                if let Some(message) = &*error {
                    <div class="alert alert-error">{ message }</div>
                }

                <form class="form" onsubmit={on_submit}>
                    <label>
                        { "Email" }
                        <input class="input" type="email" required={true} value={(*email).clone()} oninput={on_email} />
                    </label>
                    <label>
                        { "Password" }
                        <input class="input" type="password" required={true} value={(*password).clone()} oninput={on_password} />
                    </label>
                    <button type="submit" class="btn btn-primary" disabled={*submitting}>
                        { if *submitting { "Signing in..." } else { "Sign In" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
