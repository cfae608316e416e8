use std::rc::Rc;
use std::str::FromStr;

use shared::api::CreateUserRequest;
use shared::models::{Role, UserRow};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::badge;
use crate::services::api::ApiService;
use crate::session::use_session;

fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

/// Bumped after every successful create so the list is fetched again.
#[derive(Debug, Default, PartialEq)]
struct ListRevision(u32);

impl Reducible for ListRevision {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

#[function_component(Users)]
pub fn users() -> Html {
    let session = use_session();
    let users = use_state(Vec::<UserRow>::new);
    let loading = use_state(|| true);
    let revision = use_reducer(ListRevision::default);
    let notice = use_state(|| None::<Result<String, String>>);

    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let role = use_state(|| Role::User);
    let creating = use_state(|| false);

    {
        let users = users.clone();
        let loading = loading.clone();
        let notice = notice.clone();
        use_effect_with(revision.0, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::list_users().await {
                    Ok(data) => users.set(data),
                    Err(e) => {
                        tracing::error!("Failed to fetch users: {}", e);
                        notice.set(Some(Err(e.to_string())));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_role = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            role.set(Role::from_str(&select.value()).unwrap_or(Role::User));
        })
    };

    let on_submit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        let role = role.clone();
        let creating = creating.clone();
        let notice = notice.clone();
        let revision = revision.dispatcher();
        let session = session.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(ctx) = session.clone() else {
                return;
            };

            let request = CreateUserRequest {
                first_name: first_name.trim().to_string(),
                last_name: last_name.trim().to_string(),
                email: email.trim().to_string(),
                password: (*password).clone(),
                role: *role,
            };

            let first_name = first_name.clone();
            let last_name = last_name.clone();
            let email = email.clone();
            let password = password.clone();
            let role = role.clone();
            let creating = creating.clone();
            let notice = notice.clone();
            let revision = revision.clone();

            creating.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::create_user(&ctx.auth, &request).await {
                    Ok(_) => {
                        notice.set(Some(Ok("User created successfully".to_string())));
                        first_name.set(String::new());
                        last_name.set(String::new());
                        email.set(String::new());
                        password.set(String::new());
                        role.set(Role::User);
                        revision.dispatch(());
                    }
                    Err(e) => {
                        tracing::warn!("Failed to create user: {}", e);
                        notice.set(Some(Err(e.to_string())));
                    }
                }
                creating.set(false);
            });
        })
    };

    html! {
        <div class="container">
            <h2>{ "User Management" }</h2>
            <p class="muted">{ "Manage user accounts and roles" }</p>

            {
                match &*notice {
                    Some(Ok(message)) => html! { <div class="alert alert-success">{ message }</div> },
                    Some(Err(message)) => html! { <div class="alert alert-error">{ message }</div> },
                    None => html! {},
                }
            }

            <div class="card">
                <h3>{ "Users List" }</h3>
                <p class="muted">{ "All registered users in the system" }</p>
                if *loading {
                    <p class="muted">{ "Loading users..." }</p>
                } else {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{ "Name" }</th>
                                <th>{ "Role" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for users.iter().map(|user| html! {
                                <tr key={user.profile.id.to_string()}>
                                    <td class="strong">{ user.display_name() }</td>
                                    <td>{ badge::role(user.role) }</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }
            </div>

            <div class="card">
                <h3>{ "Create New User" }</h3>
                <p class="muted">{ "Add a new user to the system" }</p>
                <form class="form" onsubmit={on_submit}>
                    <div class="form-row">
                        <label>
                            { "First Name" }
                            <input class="input" required={true} value={(*first_name).clone()} oninput={bind_input(&first_name)} />
                        </label>
                        <label>
                            { "Last Name" }
                            <input class="input" required={true} value={(*last_name).clone()} oninput={bind_input(&last_name)} />
                        </label>
                    </div>
                    <label>
                        { "Email" }
                        <input class="input" type="email" required={true} value={(*email).clone()} oninput={bind_input(&email)} />
                    </label>
                    <label>
                        { "Password" }
                        <input class="input" type="password" required={true} minlength="6" value={(*password).clone()} oninput={bind_input(&password)} />
                    </label>
                    <label>
                        { "Role" }
                        <select class="input" onchange={on_role}>
                            { for Role::ALL.into_iter().map(|r| html! {
                                <option value={r.as_str()} selected={*role == r}>{ r.label() }</option>
                            })}
                        </select>
                    </label>
                    <button type="submit" class="btn btn-primary" disabled={*creating}>
                        { if *creating { "Creating..." } else { "Create User" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
