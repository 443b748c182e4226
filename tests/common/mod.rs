#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use leadrelay::config::{Config, CorsConfig, LoggingConfig, ServerConfig};
use leadrelay_contact::{EmailConfig, MailTransport, OutboundEmail, TransportError};

/// In-memory mail transport recording every email it is handed.
pub struct RecordingTransport {
    calls: AtomicUsize,
    sent: Mutex<Vec<OutboundEmail>>,
    outcome: Result<String, String>,
}

impl RecordingTransport {
    /// Transport stub that accepts every message with a fixed identifier.
    pub fn succeeding_with(id: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
            outcome: Ok(id.to_string()),
        })
    }

    /// Transport stub that refuses every message with a fixed error text.
    pub fn failing_with(error: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
            outcome: Err(error.to_string()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn sent_emails(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, email: &OutboundEmail) -> Result<String, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(email.clone());

        match &self.outcome {
            Ok(id) => Ok(id.clone()),
            Err(e) => Err(TransportError::Rejected(e.clone())),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
        },
        email: EmailConfig {
            recipients: vec!["team@agency.test".to_string()],
            subject: "Client message".to_string(),
            ..EmailConfig::default()
        },
        cors: CorsConfig {
            allowed_origin: "http://localhost:8080".to_string(),
        },
        logging: LoggingConfig::default(),
    }
}

pub fn create_test_app(transport: Arc<RecordingTransport>) -> Router {
    leadrelay::create_app(transport, test_config())
}
