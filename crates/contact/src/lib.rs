//! Contact-inquiry domain for the leadrelay service.
//!
//! Holds the submission model posted by the marketing site, the rendered
//! email bodies, the outbound mail transport and the relay service that
//! turns one submission into exactly one send attempt.

mod service;
mod submission;
mod transport;

pub use service::*;
pub use submission::*;
pub use transport::*;
