#![forbid(unsafe_code)]

//! Host-agnostic portfolio interaction engine.
//!
//! `folio-core` is the platform-independent model behind a portfolio site's
//! client-side behaviors. It owns the particle constellation simulation, the
//! typed-text rotator, the eased stat count-up, and the theme, scroll,
//! visibility, contact-form, and download-counter state — all without any
//! host I/O dependencies.
//!
//! # Primary responsibilities
//!
//! - **Field**: fixed-population particle pool with elastic edge reflection
//!   and pairwise proximity links.
//! - **Typed**: type/hold/delete/hold phrase rotator driven by per-phase
//!   tick delays.
//! - **Countup**: fixed-duration eased ramp from zero to a target value.
//! - **Theme**: light/dark preference with storage and document projections.
//! - **Scroll**: edge-detected scroll thresholds for the navbar and the
//!   back-to-top control.
//! - **Observe**: at-most-once vs repeatable visibility contracts, reveal
//!   staggering, and active-section tracking.
//! - **Form**: contact-form submission phases and their user-facing surface.
//! - **Downloads**: remote download-counter projection and transaction.
//!
//! # Design principles
//!
//! - **No I/O**: all types are pure data + logic; the host adapter drives
//!   clocks, events, and rendering.
//! - **Deterministic**: identical seeds and tick sequences always produce
//!   identical state.
//! - **`#![forbid(unsafe_code)]`**: safety enforced at compile time.

pub mod countup;
pub mod downloads;
pub mod easing;
pub mod field;
pub mod form;
pub mod logging;
pub mod observe;
pub mod rng;
pub mod scroll;
pub mod theme;
pub mod typed;

pub use countup::{COUNT_UP_DURATION, CountUp, DEFAULT_SUFFIX};
pub use downloads::DownloadCounter;
pub use easing::{EasingFn, ease_out_cubic, linear};
pub use field::{
    FULL_POPULATION, LINK_CUTOFF, LINK_MAX_ALPHA, Link, MOBILE_BREAKPOINT, MOBILE_POPULATION,
    Particle, ParticleField, link_alpha,
};
pub use form::{ContactForm, FormPhase, StatusTone};
pub use observe::{
    FirePolicy, ObserverProfile, REVEAL_PROFILE, REVEAL_STAGGER, RevealGate, SECTIONS_PROFILE,
    STATS_PROFILE, SectionTracker,
};
pub use rng::Xorshift64;
pub use scroll::{BACK_TO_TOP_THRESHOLD, NAVBAR_THRESHOLD, ScrollChange, ScrollWatcher};
pub use theme::Theme;
pub use typed::{PhraseSetError, TypedPhase, Typewriter};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};
