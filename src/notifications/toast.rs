// src/notifications/toast.rs

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::severity::Severity;

pub const BASE_CLASS: &str = "notification-toast";
pub const DISMISS_LABEL: &str = "\u{00D7}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NotificationId(Uuid);

impl NotificationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One transient on-screen message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    pub ttl: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity, ttl: Duration) -> Self {
        Self {
            id: NotificationId::new(),
            message: message.into(),
            severity,
            created_at: Utc::now(),
            ttl,
        }
    }

    /// Full class attribute: `notification-toast notification-{severity}`.
    pub fn class_name(&self) -> String {
        format!("{} {}", BASE_CLASS, self.severity.class_name())
    }
}
