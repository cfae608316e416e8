use shared::filter::VerificationCounts;
use shared::models::Customer;
use yew::prelude::*;

use crate::components::badge;
use crate::components::stat_card::StatGrid;
use crate::pages::{format_date, verification_stats};
use crate::services::api::ApiService;

#[function_component(Customers)]
pub fn customers() -> Html {
    let customers = use_state(Vec::<Customer>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let customers = customers.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::list_customers().await {
                    Ok(data) => customers.set(data),
                    Err(e) => {
                        tracing::error!("Failed to fetch customers: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let stats = verification_stats(
        "Total Customers",
        "KYC",
        VerificationCounts::for_customers(&customers),
    );

    html! {
        <div class="container">
            <h2>{ "Customers" }</h2>
            <p class="muted">{ "Manage customer accounts and KYC compliance" }</p>

            if let Some(message) = &*error {
                <div class="alert alert-error">{ message }</div>
            }

            <StatGrid {stats} />

            <div class="card">
                <h3>{ "Customers List" }</h3>
                <p class="muted">{ "All registered customers and their KYC status" }</p>
                if *loading {
                    <p class="muted">{ "Loading customers..." }</p>
                } else {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{ "Name" }</th>
                                <th>{ "Email" }</th>
                                <th>{ "Phone" }</th>
                                <th>{ "KYC Status" }</th>
                                <th>{ "Verified Date" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for customers.iter().map(|customer| html! {
                                <tr key={customer.id.to_string()}>
                                    <td class="strong">{ customer.full_name() }</td>
                                    <td>{ &customer.email }</td>
                                    <td>{ customer.phone.clone().unwrap_or_else(|| "N/A".to_string()) }</td>
                                    <td>{ badge::verification(customer.kyc_status) }</td>
                                    <td class="muted">{ format_date(customer.kyc_verified_at.as_ref()) }</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }
            </div>
        </div>
    }
}
