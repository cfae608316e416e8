use shared::models::{CasePriority, CaseStatus, MachineStatus, Role, VerificationStatus};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Danger,
    Muted,
}

impl Tone {
    fn class(&self) -> &'static str {
        match self {
            Tone::Success => "badge badge-success",
            Tone::Info => "badge badge-info",
            Tone::Warning => "badge badge-warning",
            Tone::Danger => "badge badge-danger",
            Tone::Muted => "badge badge-muted",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub label: AttrValue,
    pub tone: Tone,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={props.tone.class()}>{ props.label.clone() }</span>
    }
}

pub fn machine_status(status: MachineStatus) -> Html {
    let tone = match status {
        MachineStatus::Connected => Tone::Success,
        MachineStatus::Transmitting => Tone::Info,
        MachineStatus::Error => Tone::Danger,
        MachineStatus::Offline => Tone::Muted,
    };
    html! { <Badge label={status.label()} {tone} /> }
}

pub fn case_priority(priority: CasePriority) -> Html {
    let tone = match priority {
        CasePriority::High => Tone::Danger,
        CasePriority::Medium => Tone::Warning,
        CasePriority::Low => Tone::Info,
    };
    html! { <Badge label={priority.label()} {tone} /> }
}

pub fn case_status(status: CaseStatus) -> Html {
    let tone = match status {
        CaseStatus::Open => Tone::Danger,
        CaseStatus::InProgress => Tone::Warning,
        CaseStatus::Closed => Tone::Success,
    };
    html! { <Badge label={status.label()} {tone} /> }
}

pub fn verification(status: VerificationStatus) -> Html {
    let tone = match status {
        VerificationStatus::Approved => Tone::Success,
        VerificationStatus::Pending => Tone::Warning,
        VerificationStatus::Rejected => Tone::Danger,
    };
    html! { <Badge label={status.label()} {tone} /> }
}

pub fn role(role: Role) -> Html {
    let tone = match role {
        Role::Admin => Tone::Danger,
        Role::Dev => Tone::Info,
        Role::User => Tone::Muted,
    };
    html! { <Badge label={role.label()} {tone} /> }
}
