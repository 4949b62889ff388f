//! Response envelope decoding
//!
//! Every API response wraps its payload the same way:
//!
//! ```text
//! { "code": "SUCCESS", "message": "...", "data": { ... } }
//! ```
//!
//! Decoding happens in two stages: first into [`Envelope`] with an opaque
//! payload, then the payload into the operation-specific type.

mod tests;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ParseError;

/// Status code the API uses for an accepted request
pub const SUCCESS_CODE: &str = "SUCCESS";

/// Fixed outer shape of every response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope {
    pub code: String,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub data: Option<Value>,
}

impl Envelope {
    /// First stage: parse the outer envelope, leaving the payload opaque
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Second stage: decode the payload into its operation-specific type
    pub fn into_payload<T: DeserializeOwned>(self) -> Result<T, ParseError> {
        let success = self.is_success();
        match self.data {
            Some(data) if !data.is_null() => Ok(serde_json::from_value(data)?),
            _ if success => Err(ParseError::MissingData),
            _ => Err(ParseError::Rejected {
                code: self.code,
                message: self.message.unwrap_or_default(),
            }),
        }
    }
}

/// Decode a response body into the payload type `T`.
///
/// A non-success code is logged but does not fail the decode on its own;
/// the service sometimes reports warnings alongside a usable payload.
pub fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T, ParseError> {
    let envelope = Envelope::parse(body)?;

    if !envelope.is_success() {
        tracing::warn!(
            code = %envelope.code,
            message = envelope.message.as_deref().unwrap_or(""),
            "Service returned non-success code"
        );
    }

    envelope.into_payload()
}

/// Decode a payload-less command response, returning its status code
pub fn decode_status(body: &str) -> Result<String, ParseError> {
    Ok(Envelope::parse(body)?.code)
}
