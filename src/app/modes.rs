//! Picker UI mode.
//!
//! The picker is the dropdown listing eligible bookings. Its open/closed state
//! and the search text are transient: they are reset whenever the assignment
//! context changes or a single booking is picked.
//!
//! The active selector ([`SelectionMode`]) is derived by the router from the
//! assignment context and is re-exported here for convenience.

pub use crate::selection::SelectionMode;

/// Whether the booking picker is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PickerMode {
    /// Collapsed; only the current selection summary is shown.
    #[default]
    Closed,

    /// Expanded with the search box and eligible booking list.
    ///
    /// Character input edits the search query only in this mode.
    Open,
}

impl PickerMode {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}
