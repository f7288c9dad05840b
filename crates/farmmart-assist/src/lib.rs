//! Farming assistant built on an external generative-language model.
//!
//! Two stateless operations: free-text chat with a fixed farming system
//! instruction, and crop-photo diagnosis. Both are pure passthroughs:
//! the model's text is returned verbatim and any failure maps to a single
//! error, with no retry.
//!
//! Also home to the [`MockDiseasePredictor`], a canned stand-in used when
//! no model is configured.

mod client;
mod predictor;

pub use client::{Assistant, AssistantClient, FARMING_SYSTEM_PROMPT};
pub use predictor::{DiseasePrediction, MockDiseasePredictor};

use thiserror::Error;

/// Errors from the generative model.
#[derive(Error, Debug)]
pub enum AssistError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    Request(String),

    /// Non-success HTTP response from the model service.
    #[error("Model service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to parse the model response.
    #[error("Failed to parse model response: {0}")]
    Parse(String),

    /// The model returned no usable text.
    #[error("Model response contained no text")]
    EmptyResponse,
}
