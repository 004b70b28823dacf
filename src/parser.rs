//! Archive response decoding
//!
//! The archive API answers with one of two mutually exclusive JSON bodies:
//! - a fault shape, `{"fault": {"faultstring": "..."}}`, for application-level
//!   failures such as a rejected key
//! - a success shape, `{"copyright": "...", "response": {"docs": [...]}}`,
//!   carrying the month's document list
//!
//! Decoding tries the fault shape first and lets it win whenever it matches.
//! The shapes never coexist on the wire, but a permissive decode of the
//! success shape could otherwise mask a fault, so the precedence is a fixed,
//! documented tie-break rather than extra validation.

use crate::error::Error;
use crate::types::{ArchiveOutcome, Document};
use serde::Deserialize;
use tracing::{debug, warn};

/// Success wire envelope
#[derive(Debug, Deserialize)]
struct SuccessEnvelope {
    #[allow(dead_code)]
    copyright: String,
    response: ResponseBody,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    docs: Vec<Document>,
}

/// Fault wire envelope
#[derive(Debug, Deserialize)]
struct FaultEnvelope {
    fault: FaultBody,
}

#[derive(Debug, Deserialize)]
struct FaultBody {
    faultstring: String,
}

/// Decode a raw archive response body into the unified outcome
///
/// A pure transform: identical bytes always yield the identical outcome, and
/// malformed input becomes a failure value rather than a panic.
///
/// # Errors
///
/// Returns [`Error::RemoteFault`] with the verbatim faultstring when the body
/// matches the fault shape, or [`Error::Decode`] with the success-shape
/// decoder's description when the body matches neither shape.
pub fn parse(bytes: &[u8]) -> ArchiveOutcome {
    if let Ok(envelope) = serde_json::from_slice::<FaultEnvelope>(bytes) {
        warn!(
            faultstring = %envelope.fault.faultstring,
            "archive API reported a fault"
        );
        return Err(Error::RemoteFault(envelope.fault.faultstring));
    }

    match serde_json::from_slice::<SuccessEnvelope>(bytes) {
        Ok(envelope) => {
            debug!(
                count = envelope.response.docs.len(),
                "decoded archive document list"
            );
            Ok(envelope.response.docs)
        }
        Err(err) => Err(Error::Decode(err.to_string())),
    }
}
