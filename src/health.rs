//! Collaborator seams for platform health data and notification permission.
//!
//! The plan store never touches these; only the CLI presentation layer does,
//! and results land in display state rather than in durable storage.

use std::env;

/// Source of step-count readings
pub trait HealthSource {
    /// Ask the platform for read access. `false` when health data is
    /// unavailable or the user declined.
    fn request_authorization(&self) -> bool;

    /// Steps recorded since the local start of day. 0 on any failure.
    fn fetch_today_steps(&self) -> u64;
}

/// Source of notification permission
pub trait NotificationSource {
    fn request_permission(&self, options: NotificationOptions) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationOptions {
    pub alert: bool,
    pub sound: bool,
    pub badge: bool,
}

impl NotificationOptions {
    pub fn all() -> Self {
        Self {
            alert: true,
            sound: true,
            badge: true,
        }
    }
}

/// Health source backed by the `TRAINLOG_STEPS` environment variable,
/// standing in for a platform health store on machines without one.
/// Unset or unparseable values read as unauthorized.
pub struct EnvHealth;

const STEPS_VAR: &str = "TRAINLOG_STEPS";

impl HealthSource for EnvHealth {
    fn request_authorization(&self) -> bool {
        env::var(STEPS_VAR).is_ok()
    }

    fn fetch_today_steps(&self) -> u64 {
        env::var(STEPS_VAR)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    }
}

/// Notification source that grants every request without user interaction.
pub struct StubNotifications;

impl NotificationSource for StubNotifications {
    fn request_permission(&self, _options: NotificationOptions) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedHealth {
        authorized: bool,
        steps: u64,
    }

    impl HealthSource for FixedHealth {
        fn request_authorization(&self) -> bool {
            self.authorized
        }

        fn fetch_today_steps(&self) -> u64 {
            if self.authorized {
                self.steps
            } else {
                0
            }
        }
    }

    #[test]
    fn test_unauthorized_source_reads_zero() {
        let source = FixedHealth {
            authorized: false,
            steps: 12000,
        };

        assert!(!source.request_authorization());
        assert_eq!(source.fetch_today_steps(), 0);
    }

    #[test]
    fn test_stub_notifications_grant() {
        assert!(StubNotifications.request_permission(NotificationOptions::all()));
    }
}
