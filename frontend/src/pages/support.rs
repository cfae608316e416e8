use shared::filter::filter_cases;
use shared::models::{CaseStatus, SupportCase};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::badge;
use crate::pages::format_date;
use crate::router::Route;
use crate::services::api::ApiService;

fn parse_status(value: &str) -> Option<CaseStatus> {
    CaseStatus::ALL
        .into_iter()
        .find(|status| status.label() == value)
}

#[function_component(Support)]
pub fn support() -> Html {
    let cases = use_state(Vec::<SupportCase>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let query = use_state(String::new);
    let status = use_state(|| None::<CaseStatus>);

    {
        let cases = cases.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::list_support_cases().await {
                    Ok(data) => cases.set(data),
                    Err(e) => {
                        tracing::error!("Failed to fetch support cases: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_status = {
        let status = status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            status.set(parse_status(&select.value()));
        })
    };

    let visible = filter_cases(&cases, &query, *status);

    html! {
        <div class="container">
            <h2>{ "Customer Support" }</h2>
            <p class="muted">{ "Track and resolve customer issues" }</p>

            if let Some(message) = &*error {
                <div class="alert alert-error">{ message }</div>
            }

            <div class="card">
                <h3>{ "Support Cases" }</h3>
                <div class="toolbar">
                    <input
                        type="search"
                        class="input"
                        placeholder="Search by case number or subject"
                        value={(*query).clone()}
                        oninput={on_search}
                    />
                    <select class="input" onchange={on_status}>
                        <option value="" selected={status.is_none()}>{ "All statuses" }</option>
                        { for CaseStatus::ALL.into_iter().map(|s| html! {
                            <option value={s.label()} selected={*status == Some(s)}>{ s.label() }</option>
                        })}
                    </select>
                </div>

                if *loading {
                    <div class="loading">
                        <div class="spinner"></div>
                    </div>
                } else if visible.is_empty() {
                    <div class="empty-state">
                        <p>{ "No support cases found." }</p>
                    </div>
                } else {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{ "Case" }</th>
                                <th>{ "Subject" }</th>
                                <th>{ "Priority" }</th>
                                <th>{ "Status" }</th>
                                <th>{ "Machine" }</th>
                                <th>{ "Created" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for visible.iter().map(|case| html! {
                                <tr key={case.id.to_string()}>
                                    <td class="strong">
                                        <Link<Route> to={Route::SupportCase { id: case.id }}>
                                            { &case.case_number }
                                        </Link<Route>>
                                    </td>
                                    <td>{ &case.subject }</td>
                                    <td>{ badge::case_priority(case.priority) }</td>
                                    <td>{ badge::case_status(case.status) }</td>
                                    <td>{ case.machine_id.clone().unwrap_or_else(|| "N/A".to_string()) }</td>
                                    <td class="muted">{ format_date(Some(&case.created_at)) }</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }
            </div>
        </div>
    }
}
