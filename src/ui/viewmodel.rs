//! View model types representing renderable selector state.
//!
//! View models are created via `SelectorState::compute_viewmodel()` and hold
//! display-ready data only. Rendering them is left to the host.
//!
//! # Example
//!
//! ```rust
//! use booking_selector::ui::viewmodel::{SelectionSummary, SelectorViewModel};
//! use booking_selector::selection::SelectionMode;
//!
//! let vm = SelectorViewModel {
//!     mode: SelectionMode::Multiple,
//!     picker_open: false,
//!     summary: SelectionSummary {
//!         text: "Select bookings".to_string(),
//!         count: 0,
//!         is_placeholder: true,
//!     },
//!     search_bar: None,
//!     options: vec![],
//!     highlighted_index: 0,
//!     selected_items: vec![],
//!     empty_state: None,
//! };
//! assert!(vm.summary.is_placeholder);
//! ```

use crate::selection::SelectionMode;

/// Complete selector view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorViewModel {
    /// Which selector presentation is active.
    pub mode: SelectionMode,

    /// Whether the picker dropdown is expanded.
    pub picker_open: bool,

    /// Collapsed summary of the current selection.
    pub summary: SelectionSummary,

    /// Search box state, present while the picker is open.
    pub search_bar: Option<SearchBarInfo>,

    /// Eligible bookings, empty while the picker is closed.
    pub options: Vec<OptionItem>,

    /// Index of the highlighted row within `options`.
    pub highlighted_index: usize,

    /// Detailed list of selected bookings (multi selector only).
    pub selected_items: Vec<SelectedItem>,

    /// Message shown when the open picker has nothing to offer.
    pub empty_state: Option<EmptyState>,
}

/// One row in the picker list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionItem {
    /// Internal booking id, used to address the row in events.
    pub booking_id: String,
    pub reference_id: Option<String>,
    pub client_name: String,
    pub client_email: String,
    pub class_name: String,
    /// Raw status value.
    pub status: String,
    /// Badge style class for the status.
    pub status_class: &'static str,
    pub schedule: String,
    pub is_selected: bool,
    pub is_highlighted: bool,

    /// Character ranges of `client_name` matching the search query.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Collapsed summary line, e.g. `"Ann Lee, Bo Park +3 more"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSummary {
    pub text: String,
    pub count: usize,
    /// True when nothing is selected and `text` is a prompt.
    pub is_placeholder: bool,
}

/// Expanded detail for one selected booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedItem {
    pub reference_id: String,
    pub client_name: String,
    pub client_email: String,
    pub class_name: String,
    pub schedule: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
}
