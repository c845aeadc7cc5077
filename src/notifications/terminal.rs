// src/notifications/terminal.rs
//
// Surface that prints toasts as lines on a terminal.

use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::surface::Surface;
use super::toast::{Notification, NotificationId, DISMISS_LABEL};
use super::Severity;

struct TerminalState {
    writer: Box<dyn Write + Send>,
    stylesheets: HashSet<String>,
    shown: HashSet<NotificationId>,
}

/// Writes each toast once, when it appears. A terminal cannot take lines
/// back, so removal only updates bookkeeping. Stylesheets are recorded but
/// have no effect on output.
pub struct TerminalSurface {
    state: Mutex<TerminalState>,
}

impl TerminalSurface {
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            state: Mutex::new(TerminalState {
                writer,
                stylesheets: HashSet::new(),
                shown: HashSet::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, TerminalState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn badge(severity: Severity) -> &'static str {
        match severity {
            Severity::Info => "[INFO]   ",
            Severity::Success => "[OK]     ",
            Severity::Warning => "[WARN]   ",
            Severity::Error => "[ERROR]  ",
        }
    }
}

impl Surface for TerminalSurface {
    fn has_stylesheet(&self, id: &str) -> bool {
        self.lock().stylesheets.contains(id)
    }

    fn inject_stylesheet(&self, id: &str, _css: &str) -> bool {
        self.lock().stylesheets.insert(id.to_string())
    }

    fn append(&self, notification: &Notification) {
        let mut state = self.lock();
        state.shown.insert(notification.id);
        let line = format!(
            "{}{} {}",
            Self::badge(notification.severity),
            notification.message,
            DISMISS_LABEL
        );
        if let Err(e) = writeln!(state.writer, "{}", line) {
            log::warn!("Failed to write notification to terminal: {}", e);
        }
    }

    fn remove(&self, id: NotificationId) -> bool {
        self.lock().shown.remove(&id)
    }
}
