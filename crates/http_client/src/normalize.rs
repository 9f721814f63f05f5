//! Pure response-normalization core.
//!
//! The enveloped-or-bare decision is made exactly once, here, by probing the parsed body
//! for a `code` field. Downstream code only ever sees the [`ResponseBody`] discriminant.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{HttpError, DEFAULT_BUSINESS_MESSAGE};

/// Server envelope carrying a business-level outcome alongside HTTP-level success.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope {
    /// Business outcome code; `200` or `0` means success.
    pub code: i64,
    /// Human-readable outcome message.
    #[serde(default)]
    pub message: String,
    /// Payload carried by the envelope.
    #[serde(default)]
    pub data: Value,
}

/// Parsed response body, discriminated once at the transport boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// The body is a JSON object containing a `code` field.
    Enveloped {
        /// The envelope `code`, when it is an integer.
        code: Option<i64>,
        /// The full body object, retained for payload extraction.
        body: Value,
    },
    /// Any other body shape passes through untouched.
    Raw(Value),
}

/// Returns whether an envelope code signals business-level success.
pub const fn is_success_code(code: i64) -> bool {
    code == 200 || code == 0
}

/// Probes a parsed body for the envelope shape.
pub fn probe(body: Value) -> ResponseBody {
    let code = body
        .as_object()
        .and_then(|object| object.get("code"))
        .map(Value::as_i64);
    match code {
        Some(code) => ResponseBody::Enveloped { code, body },
        None => ResponseBody::Raw(body),
    }
}

/// Applies the business-outcome rule to a probed body.
///
/// Enveloped bodies with a success code pass through whole (so payload extraction can
/// still see the `data` field); bare bodies pass through untouched.
///
/// # Errors
///
/// Returns [`HttpError::Business`] when the envelope `code` is present but is not a
/// success code, carrying the envelope `message` or the default message.
pub fn accept(body: ResponseBody) -> Result<Value, HttpError> {
    match body {
        ResponseBody::Enveloped { code, body } => match code {
            Some(code) if is_success_code(code) => Ok(body),
            _ => Err(HttpError::Business {
                message: envelope_message(&body)
                    .unwrap_or_else(|| DEFAULT_BUSINESS_MESSAGE.to_string()),
            }),
        },
        ResponseBody::Raw(body) => Ok(body),
    }
}

/// Extracts the payload from an accepted body.
///
/// When the body is an object carrying both `data` and `code`, the `data` field is
/// returned; any other shape is returned whole. This lets the typed facade support both
/// enveloped and bare-JSON backends transparently.
pub fn extract_payload(body: Value) -> Value {
    match body {
        Value::Object(mut object) if object.contains_key("data") && object.contains_key("code") => {
            object.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Classifies a non-2xx HTTP response.
///
/// The 401 reaction (clearing both token stores) is the caller's responsibility; this
/// function only names the category.
pub fn classify_status(status: u16, body: Option<&Value>) -> HttpError {
    match status {
        401 => HttpError::Unauthorized,
        403 => HttpError::Forbidden,
        404 => HttpError::NotFound,
        500 => HttpError::ServerError,
        _ => HttpError::Status {
            status,
            message: body
                .and_then(envelope_message)
                .unwrap_or_else(|| format!("request failed: {status}")),
        },
    }
}

fn envelope_message(body: &Value) -> Option<String> {
    let message = body.as_object()?.get("message")?.as_str()?;
    if message.is_empty() {
        return None;
    }
    Some(message.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn normalize(body: Value) -> Result<Value, HttpError> {
        accept(probe(body)).map(extract_payload)
    }

    #[test]
    fn enveloped_success_unwraps_the_data_field() {
        let body = json!({"code": 200, "message": "ok", "data": {"id": 1}});
        assert_eq!(normalize(body).expect("success"), json!({"id": 1}));

        let body = json!({"code": 0, "message": "ok", "data": [1, 2, 3]});
        assert_eq!(normalize(body).expect("success"), json!([1, 2, 3]));
    }

    #[test]
    fn bare_body_passes_through_unchanged() {
        let body = json!({"id": 7, "title": "hello"});
        assert_eq!(normalize(body.clone()).expect("success"), body);
    }

    #[test]
    fn enveloped_success_without_data_passes_the_body_through() {
        // `data` + `code` are both required for extraction.
        let body = json!({"code": 200, "message": "ok"});
        assert_eq!(normalize(body.clone()).expect("success"), body);
    }

    #[test]
    fn business_failure_carries_the_envelope_message() {
        let body = json!({"code": 4001, "message": "quota exceeded", "data": null});
        assert_eq!(
            normalize(body).expect_err("business failure"),
            HttpError::Business {
                message: "quota exceeded".to_string()
            }
        );
    }

    #[test]
    fn business_failure_without_message_uses_the_default() {
        for body in [
            json!({"code": 500}),
            json!({"code": 500, "message": ""}),
            json!({"code": "200"}),
        ] {
            assert_eq!(
                normalize(body).expect_err("business failure"),
                HttpError::Business {
                    message: DEFAULT_BUSINESS_MESSAGE.to_string()
                }
            );
        }
    }

    #[test]
    fn envelope_fields_default_when_absent() {
        let envelope: ApiEnvelope =
            serde_json::from_value(json!({"code": 200})).expect("deserialize");
        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.message, "");
        assert_eq!(envelope.data, Value::Null);
        assert!(is_success_code(envelope.code));
        assert!(!is_success_code(4001));
    }

    #[test]
    fn non_object_bodies_are_raw() {
        assert_eq!(normalize(json!([1, 2])).expect("success"), json!([1, 2]));
        assert_eq!(normalize(json!("ok")).expect("success"), json!("ok"));
        assert_eq!(normalize(Value::Null).expect("success"), Value::Null);
    }

    #[test]
    fn status_classification_matches_the_taxonomy() {
        assert_eq!(classify_status(401, None), HttpError::Unauthorized);
        assert_eq!(classify_status(403, None), HttpError::Forbidden);
        assert_eq!(classify_status(404, None), HttpError::NotFound);
        assert_eq!(classify_status(500, None), HttpError::ServerError);
    }

    #[test]
    fn other_statuses_prefer_the_server_message() {
        let body = json!({"message": "rate limited"});
        assert_eq!(
            classify_status(429, Some(&body)),
            HttpError::Status {
                status: 429,
                message: "rate limited".to_string()
            }
        );
    }

    #[test]
    fn other_statuses_fall_back_to_a_generic_message() {
        assert_eq!(
            classify_status(418, None),
            HttpError::Status {
                status: 418,
                message: "request failed: 418".to_string()
            }
        );
        assert_eq!(
            classify_status(502, Some(&json!({"message": ""}))),
            HttpError::Status {
                status: 502,
                message: "request failed: 502".to_string()
            }
        );
    }
}
