//! Property-based invariant tests for the relay wire formats.
//!
//! These run on native targets; nothing here touches the DOM. Verifies:
//!
//! 1. Email envelope: arbitrary field text survives serialization at the
//!    documented paths, alongside the fixed relay ids.
//! 2. Envelope serialization is deterministic.
//! 3. Counter REST bodies round-trip for every value.
//! 4. Stream frames round-trip for every path and value, including the
//!    missing-location `null`.
//! 5. Non-integer counter payloads are rejected, as a body and inside a
//!    frame.

use folio_web::wire::{
    EmailRequest, TemplateParams, count_body, parse_count, parse_stream_frame,
};
use proptest::prelude::*;
use serde_json::json;

// ── Strategy helpers ────────────────────────────────────────────────────

fn field_text() -> impl Strategy<Value = String> {
    // Covers quotes, backslashes and non-ASCII, which all need escaping.
    "[ -~éあ\"\\\\]{0,40}"
}

fn non_integer_body() -> impl Strategy<Value = String> {
    prop_oneof![
        (any::<i32>(), 0u16..1000).prop_map(|(whole, frac)| format!("{whole}.{frac:03}")),
        "[a-z]{1,8}".prop_map(|word| format!("\"{word}\"")),
        Just("true".to_owned()),
        Just("[3]".to_owned()),
        Just("{}".to_owned()),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Envelope carries arbitrary field text at the documented paths
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn envelope_preserves_fields(
        from_name in field_text(),
        from_email in field_text(),
        message in field_text(),
    ) {
        let request = EmailRequest::new(TemplateParams {
            from_name: from_name.clone(),
            from_email: from_email.clone(),
            message: message.clone(),
        });
        let value = serde_json::to_value(&request).unwrap();

        prop_assert_eq!(&value["template_params"]["from_name"], &json!(from_name));
        prop_assert_eq!(&value["template_params"]["from_email"], &json!(from_email));
        prop_assert_eq!(&value["template_params"]["message"], &json!(message));
        prop_assert!(value["service_id"].is_string());
        prop_assert!(value["template_id"].is_string());
        prop_assert!(value["user_id"].is_string());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Envelope serialization is deterministic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn envelope_is_deterministic(name in field_text(), email in field_text(), msg in field_text()) {
        let params = TemplateParams {
            from_name: name,
            from_email: email,
            message: msg,
        };
        let a = serde_json::to_string(&EmailRequest::new(params.clone())).unwrap();
        let b = serde_json::to_string(&EmailRequest::new(params)).unwrap();
        prop_assert_eq!(a, b);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Counter REST bodies round-trip for every value
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn count_bodies_round_trip(value in any::<i64>()) {
        prop_assert_eq!(parse_count(&count_body(value)).unwrap(), Some(value));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Stream frames round-trip for every path and value
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn stream_frames_round_trip(path in "[ -~]{0,30}", data in any::<Option<i64>>()) {
        let payload = json!({ "path": path, "data": data }).to_string();
        let frame = parse_stream_frame(&payload).unwrap();
        prop_assert_eq!(frame.path, path);
        prop_assert_eq!(frame.data, data);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Non-integer counter payloads are rejected
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn non_integer_payloads_are_rejected(body in non_integer_body()) {
        prop_assert!(parse_count(&body).is_err());

        let framed = format!(r#"{{"path":"/","data":{body}}}"#);
        prop_assert!(parse_stream_frame(&framed).is_err());
    }
}
