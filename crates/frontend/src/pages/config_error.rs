//! Fallback screen when the console configuration cannot be loaded

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ConfigErrorPageProps {
    pub message: AttrValue,
}

#[function_component(ConfigErrorPage)]
pub fn config_error_page(props: &ConfigErrorPageProps) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900 px-4">
            <div class="max-w-lg w-full p-6 bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg" role="alert">
                <h1 class="text-lg font-semibold text-red-700 dark:text-red-300">{"The console could not start"}</h1>
                <p class="mt-2 text-sm text-red-700 dark:text-red-300">{props.message.clone()}</p>
            </div>
        </div>
    }
}
