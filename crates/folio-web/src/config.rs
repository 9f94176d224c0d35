#![forbid(unsafe_code)]

//! Site configuration.
//!
//! Service identifiers, endpoints and page content that the deployed site
//! is built around. These are compile-time constants rather than runtime
//! configuration: the site ships as a static bundle and the values change
//! only with a redeploy.

/// Phrases the hero headline rotates through.
pub const ROTATING_TITLES: [&str; 3] = [
    "Azure Data Engineer",
    "Databricks Engineer",
    "ETL Pipeline Architect",
];

/// Email relay endpoint. The relay accepts a JSON body and forwards the
/// message through a pre-configured template, so the site needs no backend
/// of its own.
pub const EMAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Public (client-side) key identifying the relay account.
pub const EMAIL_PUBLIC_KEY: &str = "spqK7j8YUuFLAdklw";

/// Relay service routing the message to the destination mailbox.
pub const EMAIL_SERVICE_ID: &str = "service_hf3nwln";

/// Relay template expanding `from_name`, `from_email` and `message`.
pub const EMAIL_TEMPLATE_ID: &str = "template_i9b3g5f";

/// Realtime database holding the shared download counter.
pub const COUNTER_DATABASE_URL: &str =
    "https://portfolio-counter-ea3a8-default-rtdb.asia-southeast1.firebasedatabase.app";

/// Path of the counter value inside the database.
pub const COUNTER_PATH: &str = "resumeDownloads";
