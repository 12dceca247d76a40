//! Client-side routes

use crate::pages::{Dashboard, LoginPage, NotFound};
use cloud_manager_frontend_common::ConsoleConfig;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes that should only be reachable after signing in.
    ///
    /// Nothing enforces this yet; see [`UnguardedRoute`].
    pub fn is_protected(self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

/// Render the page for `route`
pub fn switch(route: Route, config: &ConsoleConfig) -> Html {
    tracing::debug!(path = %route.to_path(), "Rendering route");

    let page = match route {
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => html! {
            <Dashboard
                navigation={config.navigation.clone()}
                services={config.services.clone()}
                settings={config.dashboard.clone()}
            />
        },
        Route::NotFound => html! { <NotFound /> },
    };

    if route.is_protected() {
        html! { <UnguardedRoute {route}>{page}</UnguardedRoute> }
    } else {
        page
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct UnguardedRouteProps {
    pub route: Route,
    #[prop_or_default]
    pub children: Html,
}

/// Renders a protected route as-is and reports the missing guard
#[function_component(UnguardedRoute)]
pub fn unguarded_route(props: &UnguardedRouteProps) -> Html {
    // Memoised on the route: one warning per mount, also when pre-rendering
    use_memo(props.route, |route| {
        tracing::warn!(
            path = %route.to_path(),
            "Protected route rendered without an authentication guard"
        );
    });

    props.children.clone()
}
