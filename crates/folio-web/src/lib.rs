#![forbid(unsafe_code)]

//! WASM frontend for the portfolio site.
//!
//! This crate is intentionally host-specific (web/WASM). It wires the
//! engine state machines from `folio-core` to the page:
//! - canvas rendering for the particle constellation,
//! - timer and animation-frame scheduling,
//! - intersection observers for reveal, stat and section tracking,
//! - network relays for the contact form and the download counter.
//!
//! The JS-facing surface is a single [`PortfolioApp`] handle exported via
//! `wasm-bindgen`. Everything that touches the DOM lives behind a
//! `wasm32` gate; [`config`] and [`wire`] are host-independent so the
//! payload and URL shapes stay testable on native targets.

pub mod config;
pub mod wire;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::PortfolioApp;

/// Native builds compile this crate as a stub so `cargo check --workspace`
/// stays green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct PortfolioApp;

#[cfg(not(target_arch = "wasm32"))]
impl PortfolioApp {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}
