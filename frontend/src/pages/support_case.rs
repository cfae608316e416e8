use shared::models::SupportCase;
use uuid::Uuid;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::badge;
use crate::router::Route;
use crate::services::api::ApiService;

#[derive(Properties, PartialEq)]
pub struct SupportCaseDetailProps {
    pub id: Uuid,
}

#[function_component(SupportCaseDetail)]
pub fn support_case_detail(props: &SupportCaseDetailProps) -> Html {
    let support_case = use_state(|| None::<SupportCase>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let support_case = support_case.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with(props.id, move |id| {
            let id = *id;
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::get_support_case(id).await {
                    Ok(found) => support_case.set(found),
                    Err(e) => {
                        tracing::error!("Failed to fetch support case {}: {}", id, e);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let back = html! {
        <Link<Route> to={Route::Support} classes={classes!("btn", "btn-ghost")}>
            { "Back to Support Cases" }
        </Link<Route>>
    };

    if *loading {
        return html! {
            <div class="container">
                <div class="loading">
                    <div class="spinner"></div>
                </div>
            </div>
        };
    }

    let Some(case) = &*support_case else {
        return html! {
            <div class="container">
                <div class="empty-state">
                    <h2>{ "Case not found" }</h2>
                    if let Some(message) = &*error {
                        <p class="alert alert-error">{ message }</p>
                    }
                    { back }
                </div>
            </div>
        };
    };

    html! {
        <div class="container">
            { back }
            <h2>{ &case.case_number }</h2>
            <p class="muted">{ &case.subject }</p>

            <div class="stat-grid">
                <div class="card">
                    <div class="stat-label">{ "Status" }</div>
                    { badge::case_status(case.status) }
                </div>
                <div class="card">
                    <div class="stat-label">{ "Priority" }</div>
                    { badge::case_priority(case.priority) }
                </div>
                <div class="card">
                    <div class="stat-label">{ "Machine ID" }</div>
                    <div class="stat-value">{ case.machine_id.clone().unwrap_or_else(|| "N/A".to_string()) }</div>
                </div>
            </div>

            <div class="card">
                <h3>{ "Description" }</h3>
                <p class="muted">{ "Case details and information" }</p>
                <p>{ case.description.clone().unwrap_or_else(|| "No description provided".to_string()) }</p>
            </div>

            <div class="card">
                <h3>{ "Timeline" }</h3>
                <div class="timeline-entry">
                    <span class="strong">{ "Created" }</span>
                    <span class="muted">{ case.created_at.format("%b %-d, %Y %H:%M").to_string() }</span>
                </div>
                <div class="timeline-entry">
                    <span class="strong">{ "Last Updated" }</span>
                    <span class="muted">{ case.updated_at.format("%b %-d, %Y %H:%M").to_string() }</span>
                </div>
            </div>
        </div>
    }
}
