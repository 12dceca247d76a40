use crate::routes::{Route, switch};
use cloud_manager_frontend_common::ConsoleConfig;
use cloud_manager_frontend_common::components::TopNavigation;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AppProps {
    pub config: Rc<ConsoleConfig>,
}

/// Browser entry component
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <Shell config={props.config.clone()} />
        </BrowserRouter>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ServerAppProps {
    pub path: AttrValue,
    pub config: Rc<ConsoleConfig>,
}

/// Renders the shell at a fixed path, for pre-rendering outside the browser
#[function_component(ServerApp)]
pub fn server_app(props: &ServerAppProps) -> Html {
    let history = use_memo(props.path.clone(), |path| {
        let history = AnyHistory::from(MemoryHistory::new());
        history.push(path.to_string());
        history
    });

    html! {
        <Router history={(*history).clone()}>
            <Shell config={props.config.clone()} />
        </Router>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ShellProps {
    pub config: Rc<ConsoleConfig>,
}

/// Top bar plus the routed page. Must be rendered inside a router.
#[function_component(Shell)]
pub fn shell(props: &ShellProps) -> Html {
    let navigator = use_navigator();
    let identity = props.config.identity.clone();

    // Stay in the app when the identity link points at one of our routes
    let on_identity_follow = match (Route::recognize(&identity.href), navigator) {
        (Some(route), Some(navigator)) if route != Route::NotFound => {
            Some(Callback::from(move |_href: String| navigator.push(&route)))
        }
        _ => None,
    };

    let render = {
        let config = props.config.clone();
        Callback::from(move |route: Route| switch(route, &config))
    };

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            <TopNavigation
                {identity}
                utilities={props.config.utilities.clone()}
                {on_identity_follow}
            />
            <Switch<Route> {render} />
        </div>
    }
}
