use std::sync::Arc;

use crate::{ContactSubmission, EmailConfig, MailTransport, OutboundEmail, TransportError};

/// Two-outcome result of one relay attempt.
///
/// Exactly one of the payloads exists: a transport-assigned message
/// identifier on success, the transport's error text on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryResult {
    Sent { id: String },
    Failed { error: String },
}

/// Turns one [`ContactSubmission`] into one outbound email attempt.
///
/// Holds no mutable state; concurrent relays are independent and
/// order-insensitive. Failures are reported once, verbatim, as a result
/// value and are never retried or queued.
#[derive(Clone)]
pub struct RelayService {
    transport: Arc<dyn MailTransport>,
    recipients: Vec<String>,
    subject: String,
}

impl RelayService {
    pub fn new(transport: Arc<dyn MailTransport>, config: &EmailConfig) -> Self {
        Self {
            transport,
            recipients: config.recipients.clone(),
            subject: config.subject.clone(),
        }
    }

    /// Render the submission into an email and attempt delivery exactly once.
    ///
    /// No schema validation happens here: an all-empty submission still
    /// produces a well-formed body and one transport call.
    pub async fn relay(&self, submission: &ContactSubmission) -> DeliveryResult {
        match self.try_relay(submission).await {
            Ok(id) => {
                tracing::info!(id = %id, "Contact inquiry relayed");
                DeliveryResult::Sent { id }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact inquiry relay failed");
                DeliveryResult::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    async fn try_relay(&self, submission: &ContactSubmission) -> Result<String, TransportError> {
        let email = OutboundEmail {
            to: self.recipients.clone(),
            subject: self.subject.clone(),
            text: submission.text_body()?,
            html: submission.html_body()?,
        };

        self.transport.send(&email).await
    }
}
