//! Web server implementation using Axum

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::routes::{router, AppState};
use leadrelay_contact::{RelayService, SmtpMailer};

/// Start the web server
pub async fn serve(config: Config, host: &str, port: u16) -> anyhow::Result<()> {
    let mailer = SmtpMailer::new(&config.email)?;
    let relay = RelayService::new(Arc::new(mailer), &config.email);

    let state = AppState {
        config: config.clone(),
        relay,
    };

    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
