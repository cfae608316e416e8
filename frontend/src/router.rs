use shared::RouteRequest;
use uuid::Uuid;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::DashboardLayout;
use crate::components::protected::Protected;
use crate::pages::{
    businesses::Businesses, customers::Customers, login::Login, machines::Machines,
    not_found::NotFound, overview::Overview, settings::Settings, support::Support,
    support_case::SupportCaseDetail, users::Users,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/")]
    Overview,
    #[at("/machines")]
    Machines,
    #[at("/support")]
    Support,
    #[at("/support/:id")]
    SupportCase { id: Uuid },
    #[at("/customers")]
    Customers,
    #[at("/businesses")]
    Businesses,
    #[at("/users")]
    Users,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Views reachable without signing in.
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::NotFound)
    }

    pub fn requires_admin(&self) -> bool {
        matches!(self, Route::Users)
    }

    pub fn request(&self) -> RouteRequest {
        RouteRequest::new(self.to_path(), self.requires_admin())
    }
}

pub fn switch(route: Route) -> Html {
    if route.is_public() {
        return match route {
            Route::Login => html! { <Login /> },
            _ => html! { <NotFound /> },
        };
    }

    html! {
        <Protected route={route.clone()}>
            <DashboardLayout>
                { view(&route) }
            </DashboardLayout>
        </Protected>
    }
}

fn view(route: &Route) -> Html {
    match route {
        Route::Overview => html! { <Overview /> },
        Route::Machines => html! { <Machines /> },
        Route::Support => html! { <Support /> },
        Route::SupportCase { id } => html! { <SupportCaseDetail id={*id} /> },
        Route::Customers => html! { <Customers /> },
        Route::Businesses => html! { <Businesses /> },
        Route::Users => html! { <Users /> },
        Route::Settings => html! { <Settings /> },
        Route::Login | Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::guard::{HOME_PATH, LOGIN_PATH};

    #[test]
    fn test_only_user_management_requires_admin() {
        let routes = [
            Route::Overview,
            Route::Machines,
            Route::Support,
            Route::SupportCase { id: Uuid::nil() },
            Route::Customers,
            Route::Businesses,
            Route::Users,
            Route::Settings,
        ];
        let admin_only: Vec<String> = routes
            .iter()
            .filter(|r| r.requires_admin())
            .map(|r| r.to_path())
            .collect();
        assert_eq!(admin_only, vec!["/users".to_string()]);
    }

    #[test]
    fn test_guard_redirect_targets_are_routes() {
        assert_eq!(Route::recognize(LOGIN_PATH), Some(Route::Login));
        assert_eq!(Route::recognize(HOME_PATH), Some(Route::Overview));
    }

    #[test]
    fn test_request_carries_path_and_admin_flag() {
        let request = Route::Users.request();
        assert_eq!(request.target_path, "/users");
        assert!(request.requires_admin);
        assert!(Route::Login.is_public());
        assert!(!Route::Support.is_public());
    }
}
