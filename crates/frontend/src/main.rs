use cloud_manager_frontend::pages::{ConfigErrorPage, ConfigErrorPageProps};
use cloud_manager_frontend::{App, AppProps, load_console_config};
use cloud_manager_frontend_common::{InstrumentationConfig, init_tracing};
use std::rc::Rc;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = init_tracing(&InstrumentationConfig::for_build()) {
        web_sys::console::error_1(&err.to_string().into());
    }

    match load_console_config() {
        Ok(config) => {
            yew::Renderer::<App>::with_props(AppProps {
                config: Rc::new(config),
            })
            .render();
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to load console configuration");
            yew::Renderer::<ConfigErrorPage>::with_props(ConfigErrorPageProps {
                message: err.to_string().into(),
            })
            .render();
        }
    }
}
