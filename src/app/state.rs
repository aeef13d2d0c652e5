//! Selector state management and view model computation.
//!
//! [`SelectorState`] is the single source of truth for one booking selector
//! instance. It separates caller-owned data (candidate bookings, assignment
//! context, mirrored selection) from derived state (active selector, eligible
//! bookings, highlighted row) and transient UI state (picker open, search
//! text). Derived state is always recomputed from the current inputs; there
//! is no cache that can go stale independently of them.
//!
//! # Example
//!
//! ```rust
//! use booking_selector::app::SelectorState;
//! use booking_selector::{AssignmentContext, AssignmentType, Booking, BookingStatus, BookingType};
//!
//! let bookings = vec![Booking {
//!     id: "row-1".into(),
//!     booking_reference_id: Some("BK-1".into()),
//!     status: BookingStatus::Confirmed,
//!     booking_type: Some(BookingType::PublicGroup),
//!     ..Booking::default()
//! }];
//! let mut state = SelectorState::new(bookings, AssignmentContext::new(AssignmentType::Weekly), 2);
//! state.apply_filter();
//! assert_eq!(state.filtered_bookings.len(), 1);
//! ```

use super::modes::{PickerMode, SelectionMode};
use crate::domain::{AssignmentContext, Booking};
use crate::eligibility::{EligibilityFilter, SearchMatcher};
use crate::selection::{MultiSelection, SingleSelection};
use crate::ui::helpers::{match_ranges, schedule_label, status_badge_class, summary_text};
use crate::ui::viewmodel::{
    EmptyState, OptionItem, SearchBarInfo, SelectedItem, SelectionSummary, SelectorViewModel,
};

/// Central selector state container.
#[derive(Debug, Clone)]
pub struct SelectorState {
    /// Full candidate list as supplied by the caller.
    pub bookings: Vec<Booking>,

    /// Candidates passing every eligibility gate under the current context
    /// and search query, in candidate order.
    ///
    /// Recomputed by `apply_filter()`.
    pub filtered_bookings: Vec<Booking>,

    /// Assignment type and booking-type filter chosen on the owning form.
    pub context: AssignmentContext,

    /// Active selector, derived from `context` by the router.
    pub mode: SelectionMode,

    /// Whether the picker dropdown is open.
    pub picker: PickerMode,

    /// Current search query. Cleared on every context change.
    pub search_query: String,

    /// Zero-based index of the highlighted row within `filtered_bookings`.
    pub highlighted_index: usize,

    /// Mirror of the caller-held single selection.
    pub single: SingleSelection,

    /// Mirror of the caller-held multi selection.
    pub multi: MultiSelection,

    /// Names shown in the collapsed multi summary before "+N more".
    pub summary_preview_count: usize,
}

impl SelectorState {
    /// Creates a selector for `bookings` under `context`.
    ///
    /// The picker starts closed with an empty query and no selection. Call
    /// `apply_filter()` before reading `filtered_bookings`.
    #[must_use]
    pub fn new(bookings: Vec<Booking>, context: AssignmentContext, summary_preview_count: usize) -> Self {
        let mode = SelectionMode::route(context.assignment_type, context.booking_type_filter.as_ref());
        Self {
            bookings,
            filtered_bookings: vec![],
            context,
            mode,
            picker: PickerMode::Closed,
            search_query: String::new(),
            highlighted_index: 0,
            single: SingleSelection::default(),
            multi: MultiSelection::default(),
            summary_preview_count,
        }
    }

    /// Eligibility engine for the active selector.
    #[must_use]
    pub fn engine(&self) -> EligibilityFilter {
        EligibilityFilter::new(self.mode.into())
    }

    /// Replaces the assignment context.
    ///
    /// When the assignment type or booking-type filter actually changes, the
    /// router is re-run, transient UI state is reset and the eligible set is
    /// re-derived before returning, so no caller can observe the previous
    /// context's search text or eligible set under the new context.
    ///
    /// Returns whether anything changed.
    pub fn set_context(&mut self, context: AssignmentContext) -> bool {
        if self.context == context {
            return false;
        }

        let previous_mode = self.mode;
        self.mode = SelectionMode::route(context.assignment_type, context.booking_type_filter.as_ref());

        tracing::debug!(
            from_assignment_type = %self.context.assignment_type,
            to_assignment_type = %context.assignment_type,
            booking_type_filter = ?context.booking_type_filter,
            previous_mode = ?previous_mode,
            mode = ?self.mode,
            "assignment context changed, resetting picker"
        );

        self.context = context;
        self.reset_transient();
        self.apply_filter();
        true
    }

    /// Closes the picker, clears the search and resets the highlight.
    pub fn reset_transient(&mut self) {
        self.picker = PickerMode::Closed;
        self.search_query.clear();
        self.highlighted_index = 0;
    }

    /// Re-derives `filtered_bookings` and clamps `highlighted_index`.
    pub fn apply_filter(&mut self) {
        let engine = self.engine();
        self.filtered_bookings = engine
            .eligible(&self.bookings, &self.context, &self.search_query)
            .into_iter()
            .cloned()
            .collect();

        if self.filtered_bookings.is_empty() {
            self.highlighted_index = 0;
        } else {
            self.highlighted_index = self.highlighted_index.min(self.filtered_bookings.len() - 1);
        }
    }

    /// Moves the highlight down by one row, wrapping to the top.
    pub fn move_highlight_down(&mut self) {
        if self.filtered_bookings.is_empty() {
            return;
        }
        self.highlighted_index = (self.highlighted_index + 1) % self.filtered_bookings.len();
    }

    /// Moves the highlight up by one row, wrapping to the bottom.
    pub fn move_highlight_up(&mut self) {
        if self.filtered_bookings.is_empty() {
            return;
        }
        if self.highlighted_index == 0 {
            self.highlighted_index = self.filtered_bookings.len() - 1;
        } else {
            self.highlighted_index -= 1;
        }
    }

    #[must_use]
    pub fn highlighted_booking(&self) -> Option<&Booking> {
        self.filtered_bookings.get(self.highlighted_index)
    }

    /// Finds an eligible booking by internal id.
    #[must_use]
    pub fn eligible_booking(&self, booking_id: &str) -> Option<&Booking> {
        self.filtered_bookings.iter().find(|booking| booking.id == booking_id)
    }

    /// Whether `booking` is part of the active selection.
    #[must_use]
    pub fn is_selected(&self, booking: &Booking) -> bool {
        let Some(reference_id) = booking.reference_id() else {
            return false;
        };
        match self.mode {
            SelectionMode::Single => self.single.selected_id() == Some(reference_id),
            SelectionMode::Multiple => self.multi.contains(reference_id),
        }
    }

    /// Computes a renderable view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> SelectorViewModel {
        let picker_open = self.picker.is_open();

        let options = if picker_open {
            let matcher = SearchMatcher::new(&self.search_query);
            self.filtered_bookings
                .iter()
                .enumerate()
                .map(|(idx, booking)| self.compute_option_item(booking, idx, &matcher))
                .collect()
        } else {
            vec![]
        };

        let selected_items = match self.mode {
            SelectionMode::Single => vec![],
            SelectionMode::Multiple => self
                .multi
                .selected_bookings(&self.bookings)
                .into_iter()
                .filter_map(|booking| {
                    Some(SelectedItem {
                        reference_id: booking.reference_id()?.to_string(),
                        client_name: booking.full_name(),
                        client_email: booking.email.clone(),
                        class_name: booking.class_name.clone().unwrap_or_default(),
                        schedule: schedule_label(booking),
                    })
                })
                .collect(),
        };

        SelectorViewModel {
            mode: self.mode,
            picker_open,
            summary: self.compute_summary(),
            search_bar: picker_open.then(|| SearchBarInfo {
                query: self.search_query.clone(),
            }),
            empty_state: if picker_open && self.filtered_bookings.is_empty() {
                Some(self.compute_empty_state())
            } else {
                None
            },
            options,
            highlighted_index: self.highlighted_index,
            selected_items,
        }
    }

    fn compute_option_item(&self, booking: &Booking, idx: usize, matcher: &SearchMatcher) -> OptionItem {
        let client_name = booking.full_name();
        let highlight_ranges = if matcher.is_blank() {
            vec![]
        } else {
            match_ranges(&client_name, &self.search_query)
        };

        OptionItem {
            booking_id: booking.id.clone(),
            reference_id: booking.reference_id().map(String::from),
            client_name,
            client_email: booking.email.clone(),
            class_name: booking.class_name.clone().unwrap_or_default(),
            status: booking.status.to_string(),
            status_class: status_badge_class(&booking.status),
            schedule: schedule_label(booking),
            is_selected: self.is_selected(booking),
            is_highlighted: idx == self.highlighted_index,
            highlight_ranges,
        }
    }

    fn compute_summary(&self) -> SelectionSummary {
        match self.mode {
            SelectionMode::Single => self.single.selected_booking(&self.bookings).map_or_else(
                || SelectionSummary {
                    text: "Select a booking".to_string(),
                    count: 0,
                    is_placeholder: true,
                },
                |booking| SelectionSummary {
                    text: booking.full_name(),
                    count: 1,
                    is_placeholder: false,
                },
            ),
            SelectionMode::Multiple => {
                let names: Vec<String> = self
                    .multi
                    .selected_bookings(&self.bookings)
                    .into_iter()
                    .map(Booking::full_name)
                    .collect();

                summary_text(&names, self.summary_preview_count).map_or_else(
                    || SelectionSummary {
                        text: "Select bookings".to_string(),
                        count: 0,
                        is_placeholder: true,
                    },
                    |text| SelectionSummary {
                        text,
                        count: names.len(),
                        is_placeholder: false,
                    },
                )
            }
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        let (message, subtitle) = if self.bookings.is_empty() {
            ("No bookings loaded", "Bookings appear here once they have been fetched")
        } else if self.context.assignment_type.requires_booking_type()
            && self.context.booking_type_filter.is_none()
        {
            (
                "Choose a booking type first",
                "Monthly and crash course assignments are matched by booking type",
            )
        } else if !self.search_query.trim().is_empty() {
            ("No bookings match your search", "Try a different name or email")
        } else {
            (
                "No eligible bookings",
                "Only pending or confirmed bookings of the chosen type can be linked",
            )
        };

        EmptyState {
            message: message.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}
