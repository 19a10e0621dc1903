use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    identity::{rest::RestIdentity, IdentityProvider},
    store::{rest::RestBackend, RecordStore},
};

/// Frontend origin allowed to call the API with credentials.
const FRONTEND_ORIGIN: &str = "https://tirisanommogo.netlify.app";

/// Initializes the tracing subscriber.
///
/// Reads the filter from `RUST_LOG` and falls back to `info` when the
/// variable is absent or unparseable.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Creates the HTTP client shared by the store and identity backends.
///
/// Redirects stay disabled so a misbehaving backend cannot bounce requests
/// to an arbitrary host.
///
/// # Returns
/// - `reqwest::Client` - Configured HTTP client
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(30))
        .build()
        .expect("HTTP client construction only fails when TLS is unavailable")
}

/// Connects the record store to the hosted document database.
///
/// # Arguments
/// - `config` - Application configuration containing the store base URL
/// - `client` - HTTP client for backend requests
///
/// # Returns
/// - `RecordStore` - Store speaking to the hosted backend
pub fn connect_to_store(config: &Config, client: reqwest::Client) -> RecordStore {
    RecordStore::new(Arc::new(RestBackend::new(client, &config.store_base_url)))
}

/// Connects the identity provider client.
///
/// # Arguments
/// - `config` - Application configuration with the provider URL and API key
/// - `client` - HTTP client for provider requests
///
/// # Returns
/// - `Arc<dyn IdentityProvider>` - Provider handle for the application state
pub fn connect_to_identity(config: &Config, client: reqwest::Client) -> Arc<dyn IdentityProvider> {
    Arc::new(RestIdentity::new(
        client,
        &config.identity_base_url,
        &config.identity_api_key,
    ))
}

/// Builds the CORS layer for the API.
///
/// Allows the deployed frontend plus any localhost port for development.
/// Credentials are allowed, so methods and headers mirror the request
/// instead of using a wildcard.
///
/// # Returns
/// - `CorsLayer` - Configured CORS middleware
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(|origin, _| {
            origin.to_str().is_ok_and(|origin| {
                origin == FRONTEND_ORIGIN || origin.starts_with("http://localhost:")
            })
        }))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
