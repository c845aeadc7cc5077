// src/notifications/center.rs
//
// Notification Center
//
// LIFECYCLE:
// - show: inject stylesheet once, append toast, schedule expiry
// - expiry: remove after ttl unless already gone
// - dismiss: remove now and abort the pending expiry
//
// Timers are independent tokio tasks and may fire in any order relative to
// each other and to new `show` calls.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::severity::Severity;
use super::stylesheet::{stylesheet, STYLESHEET_ID};
use super::surface::Surface;
use super::toast::{Notification, NotificationId};
use crate::config::NotificationConfig;

struct ActiveToast {
    id: NotificationId,
    expiry: Option<JoinHandle<()>>,
}

#[derive(Default)]
struct CenterState {
    // Oldest first.
    active: VecDeque<ActiveToast>,
}

pub struct NotificationCenter {
    surface: Arc<dyn Surface>,
    config: NotificationConfig,
    state: Arc<Mutex<CenterState>>,
}

impl NotificationCenter {
    pub fn new(surface: Arc<dyn Surface>, config: NotificationConfig) -> Self {
        Self {
            surface,
            config,
            state: Arc::new(Mutex::new(CenterState::default())),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, CenterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Displays `message` and schedules its removal after the configured ttl.
    ///
    /// Must be called from within a tokio runtime for the toast to expire on
    /// its own; outside one it stays until dismissed.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let notification = Notification::new(message, severity, self.config.ttl);
        let id = notification.id;

        let mut state = self.lock_state();

        // The surface decides whether the sheet is new, so centers sharing
        // one surface still install it once.
        if !self.surface.has_stylesheet(STYLESHEET_ID)
            && self.surface.inject_stylesheet(STYLESHEET_ID, &stylesheet())
        {
            log::debug!("Installed notification stylesheet");
        }

        if let Some(max_visible) = self.config.max_visible {
            while state.active.len() >= max_visible.max(1) {
                let Some(evicted) = state.active.pop_front() else {
                    break;
                };
                if let Some(expiry) = evicted.expiry {
                    expiry.abort();
                }
                self.surface.remove(evicted.id);
                log::debug!("Evicted notification {} (stack full)", evicted.id);
            }
        }

        self.surface.append(&notification);
        let expiry = self.schedule_expiry(id);
        state.active.push_back(ActiveToast { id, expiry });

        id
    }

    pub fn info(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Severity::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Severity::Success)
    }

    pub fn warning(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Severity::Warning)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationId {
        self.show(message, Severity::Error)
    }

    /// Removes the toast immediately. Returns `false` if it had already
    /// expired, been evicted or been dismissed.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let entry = {
            let mut state = self.lock_state();
            state
                .active
                .iter()
                .position(|t| t.id == id)
                .and_then(|idx| state.active.remove(idx))
        };

        if let Some(expiry) = entry.and_then(|t| t.expiry) {
            expiry.abort();
        }

        self.surface.remove(id)
    }

    /// Number of toasts this center still considers on screen.
    pub fn active_count(&self) -> usize {
        self.lock_state().active.len()
    }

    fn schedule_expiry(&self, id: NotificationId) -> Option<JoinHandle<()>> {
        let runtime = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                log::warn!("No async runtime; notification {} will not auto-expire", id);
                return None;
            }
        };

        let surface = Arc::clone(&self.surface);
        let state = Arc::clone(&self.state);
        let ttl = self.config.ttl;

        Some(runtime.spawn(async move {
            tokio::time::sleep(ttl).await;

            state
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .active
                .retain(|t| t.id != id);

            // Already dismissed or evicted toasts make this a no-op.
            surface.remove(id);
        }))
    }
}
