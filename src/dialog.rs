//! Blocking User Dialogs
//!
//! window.alert/confirm/prompt behind a trait so the action layer can be
//! driven by scripted responses in tests.

/// Blocking dialog seam
pub trait Dialogs {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
    /// None when the user cancels the prompt
    fn prompt(&self, message: &str, default: &str) -> Option<String>;
}

/// Native browser dialogs
pub struct BrowserDialogs;

impl BrowserDialogs {
    fn window() -> web_sys::Window {
        web_sys::window().expect("window should be available")
    }
}

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        let _ = Self::window().alert_with_message(message);
    }

    fn confirm(&self, message: &str) -> bool {
        Self::window().confirm_with_message(message).unwrap_or(false)
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        Self::window()
            .prompt_with_message_and_default(message, default)
            .ok()
            .flatten()
    }
}
