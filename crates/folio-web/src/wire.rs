#![forbid(unsafe_code)]

//! Wire formats for the two network relays.
//!
//! The contact form posts a JSON envelope to the email relay; the download
//! counter reads, streams and conditionally writes one JSON number in a
//! realtime database. Everything here is plain data so the shapes can be
//! unit-tested on native targets, away from `fetch` and `EventSource`.
//!
//! The counter uses the database's REST surface directly:
//! - `GET {url}` with [`ETAG_REQUEST_HEADER`] returns the value plus an
//!   entity tag,
//! - `PUT {url}` with [`ETAG_CONDITION_HEADER`] stores a new value only if
//!   the tag still matches (the server answers 412 otherwise),
//! - an `EventSource` on the same URL delivers `put`/`patch` frames as the
//!   value changes.

use serde::{Deserialize, Serialize};

use crate::config;

/// Request header asking the database to include an entity tag with the
/// response.
pub const ETAG_REQUEST_HEADER: &str = "X-Firebase-ETag";

/// Conditional-write header carrying the entity tag the write expects.
pub const ETAG_CONDITION_HEADER: &str = "if-match";

/// Template variables expanded by the email relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

/// Envelope posted to [`config::EMAIL_ENDPOINT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub user_id: &'static str,
    pub template_params: TemplateParams,
}

impl EmailRequest {
    /// Envelope for `params` routed through the site's relay account.
    #[must_use]
    pub fn new(template_params: TemplateParams) -> Self {
        Self {
            service_id: config::EMAIL_SERVICE_ID,
            template_id: config::EMAIL_TEMPLATE_ID,
            user_id: config::EMAIL_PUBLIC_KEY,
            template_params,
        }
    }
}

/// One streamed change notification from the realtime database.
///
/// `data` is the new value at `path`; the database sends `null` when the
/// location does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StreamFrame {
    pub path: String,
    pub data: Option<i64>,
}

/// Parse the `data:` payload of a `put`/`patch` stream event.
pub fn parse_stream_frame(payload: &str) -> Result<StreamFrame, serde_json::Error> {
    serde_json::from_str(payload)
}

/// Parse a REST read of the counter. The body is a bare JSON number, or
/// `null` when the counter has never been written.
pub fn parse_count(body: &str) -> Result<Option<i64>, serde_json::Error> {
    serde_json::from_str(body)
}

/// REST body storing `next` as the counter value.
#[must_use]
pub fn count_body(next: i64) -> String {
    // A bare integer is already valid JSON.
    next.to_string()
}

/// REST/stream URL of the counter leaf.
#[must_use]
pub fn counter_url() -> String {
    format!(
        "{}/{}.json",
        config::COUNTER_DATABASE_URL,
        config::COUNTER_PATH
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn email_request_carries_relay_ids_and_params() {
        let request = EmailRequest::new(TemplateParams {
            from_name: "Ada".to_owned(),
            from_email: "ada@example.com".to_owned(),
            message: "Hello there".to_owned(),
        });
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "service_id": config::EMAIL_SERVICE_ID,
                "template_id": config::EMAIL_TEMPLATE_ID,
                "user_id": config::EMAIL_PUBLIC_KEY,
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "message": "Hello there",
                },
            })
        );
    }

    #[test]
    fn counter_url_targets_the_json_leaf() {
        assert_eq!(
            counter_url(),
            format!("{}/resumeDownloads.json", config::COUNTER_DATABASE_URL)
        );
    }

    #[test]
    fn stream_frame_parses_a_put_payload() {
        let frame = parse_stream_frame(r#"{"path":"/","data":42}"#).unwrap();
        assert_eq!(
            frame,
            StreamFrame {
                path: "/".to_owned(),
                data: Some(42),
            }
        );
    }

    #[test]
    fn stream_frame_parses_the_initial_null() {
        let frame = parse_stream_frame(r#"{"path":"/","data":null}"#).unwrap();
        assert_eq!(frame.data, None);
    }

    #[test]
    fn count_round_trips_through_rest_bodies() {
        assert_eq!(parse_count("17").unwrap(), Some(17));
        assert_eq!(parse_count("null").unwrap(), None);
        assert_eq!(count_body(18), "18");
    }

    #[test]
    fn malformed_stream_payloads_are_rejected() {
        assert!(parse_stream_frame("not json").is_err());
        assert!(parse_stream_frame(r#"{"path":"/","data":"many"}"#).is_err());
    }
}
