use yew::prelude::*;

use crate::components::sidebar::Sidebar;

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    let open = use_state(|| true);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <div class="dashboard">
            <Sidebar open={*open} />
            <div class="dashboard-body">
                <header class="dashboard-header">
                    <button class="btn btn-ghost sidebar-trigger" onclick={toggle}>{ "☰" }</button>
                </header>
                <main class="dashboard-main">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}
