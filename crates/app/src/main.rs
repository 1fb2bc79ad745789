use dioxus::prelude::*;
use shared_types::AppConfig;

mod data;
mod icons;
mod routes;
mod sidebar;

use routes::Route;

const THEME: Asset = asset!("/assets/theme.css");

/// Settings baked into the binary at build time.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Parse the embedded config, falling back to defaults when it is invalid.
fn load_config() -> AppConfig {
    match AppConfig::from_toml_str(CONFIG_TOML) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "Invalid config.toml, using defaults");
            AppConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = load_config();
        tracing::info!(app = %config.app.name, home = %config.app.home, "Starting dashboard");
        if let Err(err) = shared_types::nav::validate(
            &sidebar::main_menu(),
            config.navigation.max_depth,
        ) {
            tracing::warn!(error = %err, "Navigation menu has problems");
        }
        config
    });
    use_context_provider(|| config);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        Router::<Route> {}
    }
}
