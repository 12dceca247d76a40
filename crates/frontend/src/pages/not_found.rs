use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center py-24 text-center">
            <h1 class="text-4xl font-bold text-gray-900 dark:text-white">{"Page not found"}</h1>
            <p class="mt-3 text-gray-600 dark:text-gray-400">{"There is nothing at this address."}</p>
            <Link<Route> to={Route::Login} classes={classes!("mt-6", "text-blue-600", "dark:text-blue-400", "hover:underline")}>
                {"Back to sign in"}
            </Link<Route>>
        </div>
    }
}
