//! Simulated contact form submission
//!
//! Submission never touches the network: after a fixed latency it resolves
//! to success unless the host reported a failure first. The status banner
//! then stays up for a while and fades out.

use crate::config::FormConfig;
use crate::runtime::debug;
use serde::{Deserialize, Serialize};

/// What the status banner shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormStatus {
    Idle,
    Sending,
    Success(String),
    Error(String),
    /// Banner fading out before returning to idle
    Fading,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    config: FormConfig,
    status: FormStatus,
    sent_at: Option<u64>,
    shown_at: Option<u64>,
}

impl ContactForm {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            status: FormStatus::Idle,
            sent_at: None,
            shown_at: None,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Start a submission; ignored while one is already in flight
    pub fn submit(&mut self, now_ms: u64) -> bool {
        if self.status == FormStatus::Sending {
            return false;
        }
        log::debug!(target: debug::SESSION, "[Form] Submitting at {}ms", now_ms);
        self.status = FormStatus::Sending;
        self.sent_at = Some(now_ms);
        self.shown_at = None;
        true
    }

    /// Resolve the in-flight submission as failed
    pub fn fail(&mut self, now_ms: u64, reason: &str) -> bool {
        if self.status != FormStatus::Sending {
            return false;
        }
        log::error!(target: debug::SESSION, "[Form] Submission error: {}", reason);
        self.show(FormStatus::Error(self.config.error_message.clone()), now_ms);
        true
    }

    /// Advance timers; returns the new status when it changed
    pub fn poll(&mut self, now_ms: u64) -> Option<FormStatus> {
        match (&self.status, self.sent_at, self.shown_at) {
            (FormStatus::Sending, Some(sent_at), _)
                if now_ms >= sent_at + self.config.submit_delay_ms =>
            {
                // The banner timeline starts when the submission resolved, not when polled
                let resolved_at = sent_at + self.config.submit_delay_ms;
                self.show(
                    FormStatus::Success(self.config.success_message.clone()),
                    resolved_at,
                );
            }
            (FormStatus::Success(_) | FormStatus::Error(_), _, Some(shown_at))
                if now_ms >= shown_at + self.config.status_visible_ms =>
            {
                self.status = FormStatus::Fading;
            }
            (FormStatus::Fading, _, Some(shown_at))
                if now_ms
                    >= shown_at + self.config.status_visible_ms + self.config.status_fade_ms =>
            {
                self.status = FormStatus::Idle;
                self.shown_at = None;
            }
            _ => return None,
        }
        Some(self.status.clone())
    }

    fn show(&mut self, status: FormStatus, now_ms: u64) {
        self.status = status;
        self.sent_at = None;
        self.shown_at = Some(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_succeeds_then_clears() {
        let mut form = ContactForm::new(FormConfig::default());
        assert!(form.submit(0));
        assert!(!form.submit(10));
        assert_eq!(form.poll(1999), None);

        match form.poll(2000) {
            Some(FormStatus::Success(message)) => assert!(message.starts_with("¡Mensaje enviado")),
            other => panic!("Expected success, got {:?}", other),
        }
        assert_eq!(form.poll(6999), None);
        assert_eq!(form.poll(7000), Some(FormStatus::Fading));
        assert_eq!(form.poll(7299), None);
        assert_eq!(form.poll(7300), Some(FormStatus::Idle));
        assert_eq!(form.poll(99_999), None);
    }

    #[test]
    fn late_poll_keeps_banner_timeline() {
        let mut form = ContactForm::new(FormConfig::default());
        form.submit(0);

        // Resolved at 2000ms even though nobody looked until 4000ms
        assert!(matches!(form.poll(4000), Some(FormStatus::Success(_))));
        assert_eq!(form.poll(6999), None);
        assert_eq!(form.poll(7000), Some(FormStatus::Fading));
        assert_eq!(form.poll(7300), Some(FormStatus::Idle));
    }

    #[test]
    fn reported_failure_shows_error() {
        let mut form = ContactForm::new(FormConfig::default());
        assert!(!form.fail(0, "not sending"));
        form.submit(0);
        assert!(form.fail(500, "boom"));
        assert!(matches!(form.status(), FormStatus::Error(_)));
        assert_eq!(form.poll(2500), None);
        assert_eq!(form.poll(5500), Some(FormStatus::Fading));
    }
}
