//! Toast notifications
//!
//! A notification is added off-screen, slides in shortly after, stays for a
//! while, slides back out and is removed. Several can be on screen at once;
//! each follows its own timeline from the moment it was shown.

use crate::config::EffectsConfig;
use crate::runtime::debug;
use serde::{Deserialize, Serialize};

/// Handle to a shown notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(u64);

/// Where a notification is in its timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationPhase {
    /// In the document but still off-screen
    Added,
    /// Slid in and readable
    Visible,
    /// Sliding back out
    Leaving,
    /// Gone; the host removes the element
    Removed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    /// Style class, "info" unless the caller names one
    pub kind: String,
    pub phase: NotificationPhase,
    shown_at: u64,
}

impl Notification {
    fn phase_at(&self, now_ms: u64, config: &EffectsConfig) -> NotificationPhase {
        let elapsed = now_ms.saturating_sub(self.shown_at);
        let leave_at = config.notification_visible_ms;
        if elapsed >= leave_at + config.notification_remove_ms {
            NotificationPhase::Removed
        } else if elapsed >= leave_at {
            NotificationPhase::Leaving
        } else if elapsed >= config.notification_slide_in_ms {
            NotificationPhase::Visible
        } else {
            NotificationPhase::Added
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notifications {
    config: EffectsConfig,
    active: Vec<Notification>,
    next_id: u64,
}

impl Notifications {
    pub fn new(config: EffectsConfig) -> Self {
        Self {
            config,
            active: Vec::new(),
            next_id: 0,
        }
    }

    /// Notifications still on screen, oldest first
    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn show(&mut self, message: &str, kind: Option<&str>, now_ms: u64) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        let kind = kind.unwrap_or("info");
        log::debug!(target: debug::SESSION, "[Notify] {} ({}) at {}ms", message, kind, now_ms);
        self.active.push(Notification {
            id,
            message: message.to_string(),
            kind: kind.to_string(),
            phase: NotificationPhase::Added,
            shown_at: now_ms,
        });
        id
    }

    /// Advance every timeline; returns the notifications whose phase changed.
    /// Removed notifications are reported once and then dropped.
    pub fn poll(&mut self, now_ms: u64) -> Vec<Notification> {
        let mut changed = Vec::new();
        for notification in &mut self.active {
            let phase = notification.phase_at(now_ms, &self.config);
            if phase != notification.phase {
                notification.phase = phase;
                changed.push(notification.clone());
            }
        }
        self.active
            .retain(|notification| notification.phase != NotificationPhase::Removed);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phases(changed: &[Notification]) -> Vec<NotificationPhase> {
        changed.iter().map(|notification| notification.phase).collect()
    }

    #[test]
    fn notification_slides_in_stays_and_leaves() {
        let mut notifications = Notifications::new(EffectsConfig::default());
        let id = notifications.show("Saved", None, 1000);
        assert_eq!(notifications.active()[0].kind, "info");
        assert_eq!(notifications.active()[0].phase, NotificationPhase::Added);

        assert!(notifications.poll(1099).is_empty());
        assert_eq!(phases(&notifications.poll(1100)), vec![NotificationPhase::Visible]);
        assert!(notifications.poll(3999).is_empty());
        assert_eq!(phases(&notifications.poll(4000)), vec![NotificationPhase::Leaving]);
        assert!(notifications.poll(4299).is_empty());

        let removed = notifications.poll(4300);
        assert_eq!(removed[0].id, id);
        assert_eq!(removed[0].phase, NotificationPhase::Removed);
        assert!(notifications.active().is_empty());
        assert!(notifications.poll(9000).is_empty());
    }

    #[test]
    fn overlapping_notifications_keep_their_own_timelines() {
        let mut notifications = Notifications::new(EffectsConfig::default());
        let first = notifications.show("one", Some("success"), 0);
        let second = notifications.show("two", Some("error"), 2000);
        assert_ne!(first, second);

        let changed = notifications.poll(3000);
        assert_eq!(changed.len(), 2);
        assert_eq!((changed[0].id, changed[0].phase), (first, NotificationPhase::Leaving));
        assert_eq!((changed[1].id, changed[1].phase), (second, NotificationPhase::Visible));

        notifications.poll(3300);
        assert_eq!(notifications.active().len(), 1);
        assert_eq!(notifications.active()[0].kind, "error");
    }
}
