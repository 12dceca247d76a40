//! Sign-in page

use crate::credentials::{LoginAction, LoginForm};
use cloud_manager_frontend_common::components::{Flashbar, FormField, TextInput};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let form = use_reducer(LoginForm::default);
    let navigator = use_navigator();

    // Leave the page once the form has been accepted
    {
        let destination = form.destination();
        use_effect_with(destination, move |destination| {
            if let (Some(route), Some(navigator)) = (destination, navigator) {
                navigator.push(route);
            }
        });
    }

    let on_username = {
        let dispatcher = form.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(LoginAction::SetUsername(value)))
    };

    let on_password = {
        let dispatcher = form.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(LoginAction::SetPassword(value)))
    };

    let on_submit = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(LoginAction::Submit);
        })
    };

    html! {
        <div class="flex justify-center px-4 py-16">
            <div class="w-full max-w-md bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg shadow-lg p-8">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white mb-6">{"Sign in"}</h1>
                <form onsubmit={on_submit} class="space-y-5" data-component="login-form">
                    <Flashbar items={form.errors.clone()} />
                    <FormField label="Username" control_id="username">
                        <TextInput
                            id="username"
                            value={form.credentials.username.clone()}
                            placeholder="Enter your username"
                            autocomplete="username"
                            on_change={on_username}
                        />
                    </FormField>
                    <FormField label="Password" control_id="password">
                        <TextInput
                            id="password"
                            input_type="password"
                            value={form.credentials.password.clone()}
                            placeholder="Enter your password"
                            autocomplete="current-password"
                            on_change={on_password}
                        />
                    </FormField>
                    <button
                        type="submit"
                        class="w-full py-2 px-4 text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 rounded-md transition-colors focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2"
                    >
                        {"Sign in"}
                    </button>
                </form>
            </div>
        </div>
    }
}
