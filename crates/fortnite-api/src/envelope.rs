//! Response envelope decoding
//!
//! Every response body is wrapped in an envelope. A 200 response carries
//! `{"status": 200, "data": ...}`; anything else carries
//! `{"status": <code>, "error": "<message>"}`. The `data` payload is kept as
//! raw JSON until the caller's destination type is known.

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::value::RawValue;
use tracing::trace;

use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct SuccessEnvelope {
    #[serde(default)]
    status: Option<u16>,
    #[serde(default)]
    data: Option<Box<RawValue>>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    status: Option<u16>,
    error: String,
}

/// Decode a response into the envelope's `data` payload
pub fn decode<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T> {
    let envelope = success_envelope(status, body)?;
    let data = envelope.data.as_deref().map_or("null", RawValue::get);
    serde_json::from_str(data).map_err(|e| Error::decode("response data", e))
}

/// Validate a response envelope and discard its payload
pub fn decode_discard(status: u16, body: &[u8]) -> Result<()> {
    decode::<IgnoredAny>(status, body).map(|_| ())
}

fn success_envelope(status: u16, body: &[u8]) -> Result<SuccessEnvelope> {
    if status != StatusCode::OK.as_u16() {
        return Err(api_error(status, body));
    }

    let envelope: SuccessEnvelope =
        serde_json::from_slice(body).map_err(|e| Error::decode("response envelope", e))?;
    trace!(
        "Success envelope: status={:?}, data={} bytes",
        envelope.status,
        envelope.data.as_ref().map_or(0, |d| d.get().len())
    );

    Ok(envelope)
}

fn api_error(status: u16, body: &[u8]) -> Error {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => Error::Api {
            status: envelope.status.unwrap_or(status),
            message: envelope.error,
        },
        Err(e) => Error::decode("error envelope", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    #[test]
    fn test_success_envelope() {
        let body = br#"{"status":200,"data":{"id":"X"}}"#;
        let item: Item = decode(200, body).unwrap();
        assert_eq!(item, Item { id: "X".to_string() });
    }

    #[test]
    fn test_error_envelope() {
        let body = br#"{"status":404,"error":"not found"}"#;
        let err = decode::<Item>(404, body).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.status(), Some(404));
        assert!(matches!(err, Error::Api { message, .. } if message == "not found"));
    }

    #[test]
    fn test_error_envelope_without_status_uses_http_status() {
        let body = br#"{"error":"forbidden"}"#;
        let err = decode::<Item>(403, body).unwrap_err();
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn test_malformed_error_body_is_decode_error() {
        let err = decode::<Item>(502, b"<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(
            err,
            Error::Decode {
                context: "error envelope",
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        let err = decode::<Item>(200, b"not json").unwrap_err();
        assert!(matches!(
            err,
            Error::Decode {
                context: "response envelope",
                ..
            }
        ));
    }

    #[test]
    fn test_payload_shape_mismatch_is_decode_error() {
        let body = br#"{"status":200,"data":{"name":"no id here"}}"#;
        let err = decode::<Item>(200, body).unwrap_err();
        assert!(matches!(
            err,
            Error::Decode {
                context: "response data",
                ..
            }
        ));
    }

    #[test]
    fn test_discard_ignores_payload_shape() {
        let body = br#"{"status":200,"data":[1,"two",{"three":3}]}"#;
        assert!(decode_discard(200, body).is_ok());

        let body = br#"{"status":400,"error":"bad request"}"#;
        assert_eq!(decode_discard(400, body).unwrap_err().status(), Some(400));
    }

    #[test]
    fn test_non_200_success_status_is_not_accepted() {
        let body = br#"{"status":201,"data":{"id":"X"}}"#;
        let err = decode::<Item>(201, body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }
}
