//! Outbound mail transport using lettre

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

/// Outbound-mail configuration, read once at startup and immutable after.
#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_recipients")]
    pub recipients: Vec<String>,
    #[serde(default = "default_subject")]
    pub subject: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: default_from_address(),
            recipients: default_recipients(),
            subject: default_subject(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "noreply@leadrelay.local".to_string()
}

fn default_recipients() -> Vec<String> {
    vec!["inquiries@leadrelay.local".to_string()]
}

fn default_subject() -> String {
    "Client message".to_string()
}

/// One fully rendered outbound email, ready for a transport.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("{0}")]
    Message(#[from] lettre::error::Error),

    #[error("{0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("{0}")]
    Template(#[from] askama::Error),

    #[error("{0}")]
    Rejected(String),
}

/// Opaque outbound-send capability: one message in, one identifier out.
///
/// Concrete transports (SMTP relay, in-memory stub for tests) are injected
/// into the relay service at construction.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<String, TransportError>;
}

/// SMTP-backed transport.
#[derive(Clone)]
pub struct SmtpMailer {
    mailer: SmtpTransport,
    from: Mailbox,
}

impl SmtpMailer {
    /// Create a mailer from configuration.
    ///
    /// Missing credentials are not a startup error; the unauthenticated
    /// connection simply fails at send time against servers that require
    /// auth, and that failure surfaces as an ordinary relay failure.
    pub fn new(config: &EmailConfig) -> Result<Self, TransportError> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            // Use builder_dangerous for unauthenticated SMTP (e.g., MailDev)
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "SMTP transport initialized with authentication and STARTTLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: config.from_address.parse()?,
        })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<String, TransportError> {
        // RFC 5322 Message-ID, returned to the caller as the delivery id.
        let id = format!("<{}@{}>", Uuid::new_v4(), self.from.email.domain());

        let mut builder = Message::builder()
            .from(self.from.clone())
            .subject(email.subject.clone())
            .message_id(Some(id.clone()));

        for to in &email.to {
            builder = builder.to(to.parse()?);
        }

        let message = builder.multipart(MultiPart::alternative_plain_html(
            email.text.clone(),
            email.html.clone(),
        ))?;

        self.mailer.send(&message)?;

        Ok(id)
    }
}
