// src/notifications/mod.rs
//
// Transient on-screen notifications ("toasts").
//
// Independent of the request layer: callers decide when an outcome is worth
// surfacing and hand the message to a NotificationCenter.

pub mod center;
pub mod severity;
pub mod stylesheet;
pub mod surface;
pub mod terminal;
pub mod toast;

pub use center::NotificationCenter;
pub use severity::Severity;
pub use stylesheet::{stylesheet, STYLESHEET_ID};
pub use surface::{MemorySurface, Surface};
pub use terminal::TerminalSurface;
pub use toast::{Notification, NotificationId};
