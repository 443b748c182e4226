pub mod config;
pub mod error;
pub mod observability;
pub mod routes;
pub mod server;

pub use config::Config;
pub use routes::AppState;

use std::sync::Arc;

use leadrelay_contact::{MailTransport, RelayService};

/// Create the app router with an injected mail transport
///
/// This builds the Axum router with all routes configured, useful for
/// integration testing with a stub transport instead of a live SMTP server.
pub fn create_app(transport: Arc<dyn MailTransport>, config: Config) -> axum::Router {
    let relay = RelayService::new(transport, &config.email);

    routes::router(AppState { config, relay })
}
