// Portfolio entry point - Leptos 0.8 CSR

use leptos::prelude::*;
use portfolio::App;
use portfolio::sections::VERSION;
use portfolio::{config, logging};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_err) = config::load();
    match config.log_filter() {
        Ok(filter) => logging::init(filter),
        Err(_) => logging::init(tracing_subscriber::EnvFilter::new(config::DEFAULT_LOG_LEVEL)),
    }
    if let Some(err) = config_err {
        tracing::warn!(%err, "ignoring embedded config, using defaults");
    }
    tracing::info!(version = VERSION, probe_line = config.probe_line, "mounting portfolio");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
