use shared::filter::VerificationCounts;
use shared::models::Business;
use yew::prelude::*;

use crate::components::badge;
use crate::components::stat_card::StatGrid;
use crate::pages::{format_date, verification_stats};
use crate::services::api::ApiService;

#[function_component(Businesses)]
pub fn businesses() -> Html {
    let businesses = use_state(Vec::<Business>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let businesses = businesses.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::list_businesses().await {
                    Ok(data) => businesses.set(data),
                    Err(e) => {
                        tracing::error!("Failed to fetch businesses: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let stats = verification_stats(
        "Total Businesses",
        "KYB",
        VerificationCounts::for_businesses(&businesses),
    );

    html! {
        <div class="container">
            <h2>{ "Businesses" }</h2>
            <p class="muted">{ "Manage business accounts and KYB compliance" }</p>

            if let Some(message) = &*error {
                <div class="alert alert-error">{ message }</div>
            }

            <StatGrid {stats} />

            <div class="card">
                <h3>{ "Businesses List" }</h3>
                <p class="muted">{ "All registered businesses and their KYB status" }</p>
                if *loading {
                    <p class="muted">{ "Loading businesses..." }</p>
                } else {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{ "Name" }</th>
                                <th>{ "Email" }</th>
                                <th>{ "Phone" }</th>
                                <th>{ "Registration No." }</th>
                                <th>{ "KYB Status" }</th>
                                <th>{ "Verified Date" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for businesses.iter().map(|business| html! {
                                <tr key={business.id.to_string()}>
                                    <td class="strong">{ &business.name }</td>
                                    <td>{ &business.email }</td>
                                    <td>{ business.phone.clone().unwrap_or_else(|| "N/A".to_string()) }</td>
                                    <td>{ business.registration_number.clone().unwrap_or_else(|| "N/A".to_string()) }</td>
                                    <td>{ badge::verification(business.kyb_status) }</td>
                                    <td class="muted">{ format_date(business.kyb_verified_at.as_ref()) }</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }
            </div>
        </div>
    }
}
