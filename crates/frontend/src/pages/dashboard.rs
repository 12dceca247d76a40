//! Service dashboard

use cloud_manager_frontend_common::components::{
    AppLayout, Cards, Header, SideNavigation, StatusIndicator,
};
use cloud_manager_frontend_common::config::{DashboardSettings, NavigationItem, ServiceCard};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct DashboardProps {
    pub navigation: Vec<NavigationItem>,
    pub services: Vec<ServiceCard>,
    #[prop_or_default]
    pub settings: DashboardSettings,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let status = match &props.settings.status {
        Some(status) => html! {
            <StatusIndicator kind={status.kind} label={status.label.clone()} />
        },
        None => html! {},
    };

    let navigation = html! { <SideNavigation items={props.navigation.clone()} /> };
    let content = html! {
        <>
            <Header title={props.settings.title.clone()}>{status}</Header>
            <Cards items={props.services.clone()} cards_per_row={props.settings.cards_per_row} />
        </>
    };

    html! { <AppLayout {navigation} {content} /> }
}
