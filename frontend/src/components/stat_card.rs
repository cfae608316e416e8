use shared::models::FleetStat;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub stat: FleetStat,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let stat = &props.stat;

    html! {
        <div class="card stat-card">
            <div class="stat-label">{ &stat.label }</div>
            <div class="stat-value">{ &stat.value }</div>
            if let Some(description) = &stat.description {
                <p class="stat-description">{ description }</p>
            }
            if let Some(trend) = &stat.trend {
                <p class="stat-trend">{ trend }</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatGridProps {
    pub stats: Vec<FleetStat>,
}

#[function_component(StatGrid)]
pub fn stat_grid(props: &StatGridProps) -> Html {
    html! {
        <div class="stat-grid">
            { for props.stats.iter().map(|stat| html! {
                <StatCard key={stat.label.clone()} stat={stat.clone()} />
            })}
        </div>
    }
}
