#![forbid(unsafe_code)]

//! Contact-form submission phases.
//!
//! One in-flight submission at a time, enforced by disabling the submit
//! control while sending. The machine owns everything the host renders
//! around a submission: whether the control is enabled, its label, which
//! status line (if any) shows, and whether the fields clear. The host's
//! only jobs are relaying the payload and calling [`ContactForm::succeed`]
//! or [`ContactForm::fail`] with the outcome — the control re-enables on
//! both paths.

/// Submit-control label while idle.
pub const IDLE_LABEL: &str = "Send Message";

/// Submit-control label while a submission is in flight.
pub const SENDING_LABEL: &str = "Sending...";

/// Status line after a delivered submission.
pub const SUCCESS_MESSAGE: &str = "✅ Message sent successfully! I'll get back to you soon.";

/// Status line after a failed submission.
pub const FAILURE_MESSAGE: &str = "❌ Failed to send message. Please try again or email me directly.";

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

/// Tone of the rendered status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Error,
}

/// Contact-form state machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactForm {
    phase: FormPhase,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a submission. Returns `false` (and changes nothing) when one
    /// is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.phase == FormPhase::Sending {
            return false;
        }
        self.phase = FormPhase::Sending;
        true
    }

    /// Resolve the in-flight submission as delivered.
    pub fn succeed(&mut self) {
        if self.phase == FormPhase::Sending {
            self.phase = FormPhase::Sent;
        }
    }

    /// Resolve the in-flight submission as failed.
    pub fn fail(&mut self) {
        if self.phase == FormPhase::Sending {
            self.phase = FormPhase::Failed;
        }
    }

    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Whether the submit control accepts clicks.
    #[must_use]
    pub const fn control_enabled(&self) -> bool {
        !matches!(self.phase, FormPhase::Sending)
    }

    /// Label for the submit control.
    #[must_use]
    pub const fn control_label(&self) -> &'static str {
        match self.phase {
            FormPhase::Sending => SENDING_LABEL,
            _ => IDLE_LABEL,
        }
    }

    /// Status line to render, if any. Hidden while idle or in flight.
    #[must_use]
    pub const fn status(&self) -> Option<(&'static str, StatusTone)> {
        match self.phase {
            FormPhase::Idle | FormPhase::Sending => None,
            FormPhase::Sent => Some((SUCCESS_MESSAGE, StatusTone::Success)),
            FormPhase::Failed => Some((FAILURE_MESSAGE, StatusTone::Error)),
        }
    }

    /// Whether the field values should clear: only after a delivery, so a
    /// failure leaves the draft intact for retry.
    #[must_use]
    pub const fn clears_fields(&self) -> bool {
        matches!(self.phase, FormPhase::Sent)
    }
}
