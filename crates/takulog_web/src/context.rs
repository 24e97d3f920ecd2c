pub mod client;

use self::client::Client;

/// Provides the meta context and the API client. The base URL is injected
/// here so tests and alternative deployments can point the client anywhere.
pub fn initialise_context(api_base: &str) {
    tracing::trace!("initialising context (api at {api_base})");

    leptos_meta::provide_meta_context();
    leptos::context::provide_context(Client::new(api_base));
}

pub fn get_client() -> Client {
    leptos::prelude::expect_context::<Client>()
}
