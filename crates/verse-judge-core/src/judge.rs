//! The external judge seam
//!
//! Scoring only ever needs `send(prompt) -> raw text`. Everything that can go
//! wrong on the way there is a [`TransportError`]; interpreting the text is
//! the scoring client's job.

pub mod openai;

use thiserror::Error;

/// A failed judge call. Always treated as transient by the scoring client.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("judge request failed: {0}")]
    Request(String),

    #[error("judge returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed judge response: {0}")]
    MalformedResponse(String),
}

/// A black-box service that answers a prompt with free-form text
pub trait Judge {
    /// Send one prompt and return the raw response text.
    fn send(&self, prompt: &str) -> Result<String, TransportError>;
}

impl<J: Judge + ?Sized> Judge for &J {
    fn send(&self, prompt: &str) -> Result<String, TransportError> {
        (**self).send(prompt)
    }
}

impl<J: Judge + ?Sized> Judge for Box<J> {
    fn send(&self, prompt: &str) -> Result<String, TransportError> {
        (**self).send(prompt)
    }
}
