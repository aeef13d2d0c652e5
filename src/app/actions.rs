//! Actions reported back to the owning form.
//!
//! The selector never owns the selection. After handling an event it returns
//! a list of [`Action`]s describing the new selection the caller should store.
//!
//! # Example
//!
//! ```rust
//! use booking_selector::app::Action;
//!
//! let action = Action::MultipleSelectionChanged {
//!     booking_reference_ids: vec!["BK-1".to_string(), "BK-2".to_string()],
//! };
//! assert!(matches!(action, Action::MultipleSelectionChanged { .. }));
//! ```

use crate::selection::SingleSelectionChange;

/// Selection changes to be applied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The single selection changed.
    ///
    /// All fields empty means the selection was cleared.
    SingleSelectionChanged(SingleSelectionChange),

    /// The multi selection changed. Carries the complete new id list.
    MultipleSelectionChanged {
        /// Selected booking reference ids, in selection order.
        booking_reference_ids: Vec<String>,
    },
}
