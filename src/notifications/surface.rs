// src/notifications/surface.rs
//
// Rendering surface
//
// ARCHITECTURE:
// - The notification center never draws; it asks a Surface to
// - A Surface owns the displayed elements for their lifetime
// - Removing an element that is already gone is a no-op
// - A stylesheet id is installed at most once per surface, whoever asks

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::toast::{Notification, NotificationId};

pub trait Surface: Send + Sync {
    fn has_stylesheet(&self, id: &str) -> bool;

    /// Installs `css` under `id` unless a stylesheet with that id is already
    /// present. Returns `true` only for the call that installed it.
    fn inject_stylesheet(&self, id: &str, css: &str) -> bool;

    /// Adds `notification` after every element already on screen.
    fn append(&self, notification: &Notification);

    /// Removes the element for `id`. Returns `false` when it was not present.
    fn remove(&self, id: NotificationId) -> bool;
}

#[derive(Debug, Default)]
struct MemoryState {
    stylesheets: Vec<(String, String)>,
    toasts: Vec<Notification>,
    removals: usize,
}

/// Headless surface that keeps everything in memory.
///
/// Useful wherever there is no real display, and for inspecting what the
/// notification center did.
#[derive(Debug, Default)]
pub struct MemorySurface {
    state: Mutex<MemoryState>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn stylesheet_count(&self) -> usize {
        self.lock().stylesheets.len()
    }

    pub fn stylesheet(&self, id: &str) -> Option<String> {
        self.lock()
            .stylesheets
            .iter()
            .find(|(sheet_id, _)| sheet_id == id)
            .map(|(_, css)| css.clone())
    }

    /// Displayed toasts in insertion order.
    pub fn visible(&self) -> Vec<Notification> {
        self.lock().toasts.clone()
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.lock().toasts.iter().any(|t| t.id == id)
    }

    /// Number of removals that actually took an element off the surface.
    pub fn removal_count(&self) -> usize {
        self.lock().removals
    }
}

impl Surface for MemorySurface {
    fn has_stylesheet(&self, id: &str) -> bool {
        self.lock().stylesheets.iter().any(|(sheet_id, _)| sheet_id == id)
    }

    fn inject_stylesheet(&self, id: &str, css: &str) -> bool {
        let mut state = self.lock();
        if state.stylesheets.iter().any(|(sheet_id, _)| sheet_id == id) {
            return false;
        }
        state.stylesheets.push((id.to_string(), css.to_string()));
        true
    }

    fn append(&self, notification: &Notification) {
        self.lock().toasts.push(notification.clone());
    }

    fn remove(&self, id: NotificationId) -> bool {
        let mut state = self.lock();
        let before = state.toasts.len();
        state.toasts.retain(|t| t.id != id);
        let removed = state.toasts.len() != before;
        if removed {
            state.removals += 1;
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Severity;
    use std::time::Duration;

    #[test]
    fn test_append_keeps_insertion_order() {
        let surface = MemorySurface::new();
        let first = Notification::new("first", Severity::Info, Duration::from_secs(5));
        let second = Notification::new("second", Severity::Error, Duration::from_secs(5));
        surface.append(&first);
        surface.append(&second);

        let messages: Vec<_> = surface.visible().into_iter().map(|t| t.message).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_second_remove_is_noop() {
        let surface = MemorySurface::new();
        let toast = Notification::new("bye", Severity::Info, Duration::from_secs(5));
        surface.append(&toast);

        assert!(surface.remove(toast.id));
        assert!(!surface.remove(toast.id));
        assert_eq!(surface.removal_count(), 1);
    }

    #[test]
    fn test_stylesheet_lookup() {
        let surface = MemorySurface::new();
        assert!(!surface.has_stylesheet("notification-styles"));
        assert!(surface.inject_stylesheet("notification-styles", ".a {}"));
        assert!(surface.has_stylesheet("notification-styles"));
        assert_eq!(surface.stylesheet("notification-styles").as_deref(), Some(".a {}"));
    }

    #[test]
    fn test_second_inject_keeps_first_stylesheet() {
        let surface = MemorySurface::new();
        assert!(surface.inject_stylesheet("notification-styles", ".a {}"));
        assert!(!surface.inject_stylesheet("notification-styles", ".b {}"));

        assert_eq!(surface.stylesheet_count(), 1);
        assert_eq!(surface.stylesheet("notification-styles").as_deref(), Some(".a {}"));
    }
}
