// src/notifications/stylesheet.rs

use super::severity::Severity;

/// Stable identifier the stylesheet is registered under.
pub const STYLESHEET_ID: &str = "notification-styles";

const BASE_RULES: &str = r#"
.notification-toast {
  position: fixed;
  top: 70px;
  right: 20px;
  padding: 1rem 1.5rem;
  border-radius: 8px;
  background: rgba(15, 28, 50, 0.95);
  border: 1px solid rgba(255,255,255,0.1);
  color: #E8F0F8;
  font-size: 0.875rem;
  display: flex;
  align-items: center;
  gap: 1rem;
  z-index: 9999;
  animation: slideIn 0.3s ease;
  box-shadow: 0 4px 20px rgba(0,0,0,0.3);
}
.notification-close { background: none; border: none; color: #8AA0B8; font-size: 1.25rem; cursor: pointer; }
@keyframes slideIn { from { transform: translateX(100%); opacity: 0; } to { transform: translateX(0); opacity: 1; } }
"#;

/// Shared CSS for every toast: base layout, one accent rule per severity and
/// the slide-in entrance animation.
pub fn stylesheet() -> String {
    let mut css = String::from(BASE_RULES.trim_start());
    for severity in Severity::ALL {
        css.push_str(&format!(
            ".{} {{ border-left: 4px solid {}; }}\n",
            severity.class_name(),
            severity.accent_color()
        ));
    }
    css
}
