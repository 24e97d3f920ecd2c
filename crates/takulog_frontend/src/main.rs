use leptos::prelude::*;
use takulog_web::{context, App};
use tracing::Level;
use tracing_subscriber::{fmt::format::Pretty, prelude::*};
use tracing_web::{performance_layer, MakeWebConsoleWriter};

/// Where the board's API lives when no address is baked in at build time.
const DEFAULT_API_BASE: &str = "https://fctzs-trpg.daruji65.workers.dev";

/// Does basic setup and mounts the app.
pub fn main() {
    console_error_panic_hook::set_once();

    let wasm_log = option_env!("WASM_LOG")
        .and_then(|var| var.parse().ok())
        .unwrap_or(Level::INFO);
    let writer = MakeWebConsoleWriter::new().with_max_level(wasm_log);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(writer);
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .init();

    let api_base = option_env!("TAKULOG_API_BASE").unwrap_or(DEFAULT_API_BASE);
    tracing::info!("Mounting, logging level `{wasm_log}`, api at {api_base}");

    leptos::mount::mount_to_body(move || {
        context::initialise_context(api_base);
        view! { <App/> }
    });
}
