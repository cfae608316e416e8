use shared::fixtures;
use yew::prelude::*;

use crate::components::badge;
use crate::components::stat_card::StatGrid;

#[function_component(Overview)]
pub fn overview() -> Html {
    let stats = use_memo((), |_| fixtures::overview_stats());
    let activity = use_memo((), |_| fixtures::recent_machine_activity());
    let cases = use_memo((), |_| fixtures::recent_cases());

    html! {
        <div class="container">
            <h2>{ "Overview" }</h2>
            <p class="muted">{ "Monitor your fleet and customer support at a glance" }</p>

            <StatGrid stats={(*stats).clone()} />

            <div class="two-column">
                <div class="card">
                    <h3>{ "Recent Machine Activity" }</h3>
                    <p class="muted">{ "Latest status updates from your fleet" }</p>
                    <ul class="activity-list">
                        { for activity.iter().map(|entry| html! {
                            <li key={entry.machine_id.clone()} class="activity-item">
                                <div>
                                    <div class="activity-title">{ &entry.machine_id }</div>
                                    <div class="muted">{ &entry.time }</div>
                                </div>
                                { badge::machine_status(entry.status) }
                            </li>
                        })}
                    </ul>
                </div>

                <div class="card">
                    <h3>{ "Recent Support Cases" }</h3>
                    <p class="muted">{ "Latest customer inquiries" }</p>
                    <ul class="activity-list">
                        { for cases.iter().map(|ticket| html! {
                            <li key={ticket.case_number.clone()} class="activity-item">
                                <div>
                                    <div class="activity-title">{ &ticket.case_number }</div>
                                    <div class="muted">{ &ticket.subject }</div>
                                    <div class="muted small">{ &ticket.time }</div>
                                </div>
                                { badge::case_priority(ticket.priority) }
                            </li>
                        })}
                    </ul>
                </div>
            </div>
        </div>
    }
}
