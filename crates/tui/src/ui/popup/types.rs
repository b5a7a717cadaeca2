//! Popup type definitions.

/// Kind of popup; determines default title, size and input behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Key binding reference
    Help,
    /// Blocking progress indicator; no key closes it
    Loading,
    /// Scrollable text dialog (analysis result, record details)
    Info,
}

impl PopupType {
    /// Whether this popup blocks all input except the force-quit chord.
    pub fn is_blocking(self) -> bool {
        matches!(self, Self::Loading)
    }
}
