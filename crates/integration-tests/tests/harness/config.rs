//! Configuration helpers for integration tests

use std::net::SocketAddr;

use scrivener_client::{ExtensionPolicy, SubmissionHandler, TranscriptionClient};
use scrivener_config::{Config, EndpointConfig};
use url::Url;

/// Configuration pointing every route at `base_url`
pub fn config_for(base_url: &str) -> Config {
    Config {
        endpoint: EndpointConfig {
            base_url: Url::parse(base_url).expect("test base URL must parse"),
            ..EndpointConfig::default()
        },
        ..Config::default()
    }
}

/// Handler talking to `base_url` with no extension restrictions
pub fn handler_for(base_url: &str) -> SubmissionHandler {
    SubmissionHandler::from_config(&config_for(base_url)).expect("handler must build")
}

/// Handler with a custom endpoint section
pub fn handler_with(endpoint: &EndpointConfig, policy: ExtensionPolicy) -> SubmissionHandler {
    let client = TranscriptionClient::new(endpoint).expect("client must build");
    SubmissionHandler::new(client, policy)
}

/// Address that refuses connections
///
/// Binds an ephemeral port and releases it immediately.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
