// src/notifications/severity.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual and semantic category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Left-border accent color used by the stylesheet.
    pub fn accent_color(&self) -> &'static str {
        match self {
            Severity::Info => "#00AAFF",
            Severity::Success => "#00D68F",
            Severity::Warning => "#FFAA00",
            Severity::Error => "#FF4D4D",
        }
    }

    /// Severity-specific CSS class, e.g. `notification-warning`.
    pub fn class_name(&self) -> String {
        format!("notification-{}", self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
