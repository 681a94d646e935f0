//! Tracks which modal dialogs are open

use super::traits::DialogManager;

/// Ordered stack of open dialog identifiers (topmost last)
#[derive(Debug, Clone, Default)]
pub struct DialogStack {
    open: Vec<String>,
}

impl DialogStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a dialog. Opening an already open dialog is a no-op.
    pub fn open_dialog(&mut self, id: &str) {
        if !self.is_open(id) {
            tracing::debug!(dialog = id, "Opening dialog");
            self.open.push(id.to_string());
        }
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.iter().any(|open| open == id)
    }
}

impl DialogManager for DialogStack {
    fn close_dialog(&mut self, id: &str) {
        if let Some(pos) = self.open.iter().position(|open| open == id) {
            tracing::debug!(dialog = id, "Closing dialog");
            self.open.remove(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close() {
        let mut dialogs = DialogStack::new();
        dialogs.open_dialog("measurement-modal");
        assert!(dialogs.is_open("measurement-modal"));
        dialogs.close_dialog("measurement-modal");
        assert!(!dialogs.is_open("measurement-modal"));
    }

    #[test]
    fn test_open_twice_keeps_single_entry() {
        let mut dialogs = DialogStack::new();
        dialogs.open_dialog("measurement-modal");
        dialogs.open_dialog("measurement-modal");
        dialogs.close_dialog("measurement-modal");
        assert!(!dialogs.is_open("measurement-modal"));
    }

    #[test]
    fn test_close_unknown_is_noop() {
        let mut dialogs = DialogStack::new();
        dialogs.open_dialog("a");
        dialogs.close_dialog("b");
        assert!(dialogs.is_open("a"));
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut dialogs = DialogStack::new();
        dialogs.open_dialog("a");
        dialogs.open_dialog("a");
        dialogs.close_dialog("a");
        assert!(!dialogs.is_open("a"));
    }
}
