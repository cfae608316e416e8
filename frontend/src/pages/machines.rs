use shared::filter::filter_machines;
use shared::fixtures;
use shared::models::MachineStatus;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::badge;
use crate::components::stat_card::StatGrid;

fn parse_status(value: &str) -> Option<MachineStatus> {
    MachineStatus::ALL
        .into_iter()
        .find(|status| status.label() == value)
}

#[function_component(Machines)]
pub fn machines() -> Html {
    let machines = use_memo((), |_| fixtures::machines());
    let stats = use_memo((), |_| fixtures::fleet_stats());
    let query = use_state(String::new);
    let status = use_state(|| None::<MachineStatus>);

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

    let visible = filter_machines(&machines, &query, *status);

    html! {
        <div class="container">
            <h2>{ "RPT Machines" }</h2>
            <p class="muted">{ "Monitor and manage your IoT cash deposit machine fleet" }</p>

            <StatGrid stats={(*stats).clone()} />

            <div class="card">
                <h3>{ "Machine Status" }</h3>
                <p class="muted">{ "Real-time status of all RPT machines" }</p>

                <div class="toolbar">
                    <input
                        type="search"
                        class="input"
                        placeholder="Search by ID or location"
                        value={(*query).clone()}
                        oninput={on_search}
                    />
                    <select class="input" onchange={on_status}>
                        <option value="" selected={status.is_none()}>{ "All statuses" }</option>
                        { for MachineStatus::ALL.into_iter().map(|s| html! {
                            <option value={s.label()} selected={*status == Some(s)}>{ s.label() }</option>
                        })}
                    </select>
                </div>

                if visible.is_empty() {
                    <div class="empty-state">
                        <p>{ "No machines match the current filters." }</p>
                    </div>
                } else {
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{ "Machine ID" }</th>
                                <th>{ "Location" }</th>
                                <th>{ "Status" }</th>
                                <th>{ "Last Ping" }</th>
                                <th>{ "Transactions (24h)" }</th>
                                <th>{ "Balance" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for visible.iter().map(|machine| html! {
                                <tr key={machine.id.clone()}>
                                    <td class="strong">{ &machine.id }</td>
                                    <td title={machine.location.clone()}>{ &machine.location }</td>
                                    <td>{ badge::machine_status(machine.status) }</td>
                                    <td class="muted">{ &machine.last_ping }</td>
                                    <td>{ machine.transactions }</td>
                                    <td class="strong">{ machine.balance_display() }</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_matches_labels() {
        assert_eq!(parse_status("Error"), Some(MachineStatus::Error));
        assert_eq!(parse_status(""), None);
    }
}
