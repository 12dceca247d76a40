//! Side navigation tree

use crate::config::NavigationItem;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SideNavigationProps {
    pub items: Vec<NavigationItem>,
}

#[function_component(SideNavigation)]
pub fn side_navigation(props: &SideNavigationProps) -> Html {
    html! {
        <nav class="py-4" data-component="side-navigation">
            <ul class="space-y-4">
                { for props.items.iter().map(render_item) }
            </ul>
        </nav>
    }
}

fn render_item(item: &NavigationItem) -> Html {
    match item {
        NavigationItem::Section {
            label,
            target,
            children,
        } => html! {
            <li data-nav-kind="section">
                if let Some(target) = target {
                    <a href={target.clone()} class="px-4 text-xs font-semibold uppercase tracking-wide text-gray-500 dark:text-gray-400 hover:text-gray-700">
                        {label}
                    </a>
                } else {
                    <h3 class="px-4 text-xs font-semibold uppercase tracking-wide text-gray-500 dark:text-gray-400">
                        {label}
                    </h3>
                }
                <ul class="mt-1">
                    { for children.iter().map(render_item) }
                </ul>
            </li>
        },
        NavigationItem::Link { label, target } => html! {
            <li data-nav-kind="link">
                <a
                    href={target.clone()}
                    class="block px-6 py-1.5 text-sm text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800 hover:text-blue-600 dark:hover:text-blue-400"
                >
                    {label}
                </a>
            </li>
        },
    }
}
