//! Page layout primitives

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AppLayoutProps {
    /// Left pane, usually a side navigation
    pub navigation: Html,
    pub content: Html,
}

/// Two-pane layout: fixed navigation column and scrolling content
#[function_component(AppLayout)]
pub fn app_layout(props: &AppLayoutProps) -> Html {
    html! {
        <div class="flex min-h-[calc(100vh-3.5rem)] bg-gray-50 dark:bg-gray-900">
            <aside class="w-64 shrink-0 bg-white dark:bg-gray-800 border-r border-gray-200 dark:border-gray-700 overflow-y-auto">
                {props.navigation.clone()}
            </aside>
            <main class="flex-1 p-6 overflow-y-auto">
                {props.content.clone()}
            </main>
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct HeaderProps {
    pub title: AttrValue,
    /// Rendered inline after the title, e.g. a status indicator
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <div class="flex items-center gap-3 mb-6">
            <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{props.title.clone()}</h1>
            {props.children.clone()}
        </div>
    }
}
