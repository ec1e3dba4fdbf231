//! Single-slot transient notifications.
//!
//! At most one notification is visible. Showing a new one replaces the
//! current one. The caller starts a timer for [`Notification::duration`]
//! and calls [`NotificationCenter::expire`] with the handle when it fires;
//! a timer belonging to a replaced notification is then ignored.

use std::time::Duration;

use crate::cart::CartEvent;
use crate::config::NotificationConfig;

/// Message shown after a valid contact form submission.
pub const CONTACT_SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

/// Where a notification came from, which decides its placement and lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Cart feedback, shown in the corner.
    Cart,
    /// Contact form success, shown above the form.
    Success,
}

/// Identifies one shown notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationHandle(u64);

/// A notification on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub handle: NotificationHandle,
    pub message: String,
    pub kind: NotificationKind,
    /// How long before the caller should expire it.
    pub duration: Duration,
}

/// Holds the currently visible notification.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    config: NotificationConfig,
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    /// A center using the given display durations.
    #[must_use]
    pub const fn new(config: NotificationConfig) -> Self {
        Self {
            config,
            current: None,
            next_id: 0,
        }
    }

    /// Show `message`, replacing anything currently visible.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> &Notification {
        let duration = match kind {
            NotificationKind::Cart => self.config.cart,
            NotificationKind::Success => self.config.success,
        };
        self.next_id += 1;
        let notification = Notification {
            handle: NotificationHandle(self.next_id),
            message: message.into(),
            kind,
            duration,
        };
        tracing::debug!(message = %notification.message, ?kind, "Showing notification");
        self.current.insert(notification)
    }

    /// Show the notification for a cart event, if it has one.
    pub fn on_cart_event(&mut self, event: &CartEvent) -> Option<&Notification> {
        let message = event.notification()?;
        Some(self.show(message, NotificationKind::Cart))
    }

    /// Show the contact form success message.
    pub fn contact_success(&mut self) -> &Notification {
        self.show(CONTACT_SUCCESS_MESSAGE, NotificationKind::Success)
    }

    /// The visible notification.
    #[must_use]
    pub const fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Remove the notification identified by `handle` if it is still the
    /// visible one. Returns `true` if something was removed.
    pub fn expire(&mut self, handle: NotificationHandle) -> bool {
        if self.current.as_ref().is_some_and(|n| n.handle == handle) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use billease_core::PlanName;

    use super::*;

    #[test]
    fn test_cart_event_notification() {
        let mut center = NotificationCenter::default();
        let shown = center
            .on_cart_event(&CartEvent::PlanAdded(PlanName::new("Pro")))
            .unwrap();
        assert_eq!(shown.message, "Pro plan added to cart!");
        assert_eq!(shown.duration, Duration::from_secs(3));
    }

    #[test]
    fn test_silent_event_shows_nothing() {
        let mut center = NotificationCenter::default();
        assert!(
            center
                .on_cart_event(&CartEvent::Changed(crate::cart::CartState::new()))
                .is_none()
        );
        assert!(center.current().is_none());
    }

    #[test]
    fn test_success_lasts_longer() {
        let mut center = NotificationCenter::default();
        let shown = center.contact_success();
        assert_eq!(shown.kind, NotificationKind::Success);
        assert_eq!(shown.duration, Duration::from_secs(5));
    }

    #[test]
    fn test_new_notification_replaces_current() {
        let mut center = NotificationCenter::default();
        let first = center.show("first", NotificationKind::Cart).handle;
        let second = center.show("second", NotificationKind::Cart).handle;

        assert_ne!(first, second);
        assert_eq!(center.current().unwrap().message, "second");
    }

    #[test]
    fn test_stale_timer_does_not_remove_newer() {
        let mut center = NotificationCenter::default();
        let first = center.show("first", NotificationKind::Cart).handle;
        let second = center.show("second", NotificationKind::Cart).handle;

        assert!(!center.expire(first));
        assert_eq!(center.current().unwrap().message, "second");

        assert!(center.expire(second));
        assert!(center.current().is_none());
    }

    #[test]
    fn test_custom_durations() {
        let mut center = NotificationCenter::new(NotificationConfig {
            cart: Duration::from_millis(100),
            success: Duration::from_millis(200),
        });
        assert_eq!(
            center.show("x", NotificationKind::Cart).duration,
            Duration::from_millis(100)
        );
    }
}
