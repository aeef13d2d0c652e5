//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point through which the host drives a
//! selector. It mutates [`SelectorState`] and returns the selection changes
//! the owning form should store.
//!
//! # Event Types
//!
//! - **Data**: `BookingsLoaded`, `ContextChanged`, `SelectionReplaced`
//! - **Picker**: `OpenPicker`, `ClosePicker`, `KeyDown`, `KeyUp`
//! - **Search**: `Char`, `Backspace`, `ClearSearch`
//! - **Selection**: `ConfirmHighlighted`, `SelectBooking`, `ToggleBooking`,
//!   `RemoveSelected`, `ClearSelection`
//!
//! # Example
//!
//! ```rust
//! use booking_selector::app::{handle_event, Event, SelectorState};
//! use booking_selector::{AssignmentContext, AssignmentType};
//!
//! let mut state = SelectorState::new(vec![], AssignmentContext::new(AssignmentType::Adhoc), 2);
//! let (needs_render, actions) = handle_event(&mut state, &Event::OpenPicker)?;
//! assert!(needs_render);
//! assert!(actions.is_empty());
//! # Ok::<(), booking_selector::SelectorError>(())
//! ```

use super::modes::{PickerMode, SelectionMode};
use crate::app::{Action, SelectorState};
use crate::domain::{AssignmentContext, Booking, Result};
use crate::selection::{MultiSelection, SingleSelection};

/// Events triggered by user input or by the owning form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the candidate list with freshly fetched bookings.
    BookingsLoaded {
        bookings: Vec<Booking>,
    },

    /// The form's assignment type or booking-type filter changed.
    ///
    /// Resets the picker and search and re-runs the router when the context
    /// actually differs from the current one.
    ContextChanged(AssignmentContext),

    /// The form's stored selection changed outside this selector.
    ///
    /// In single mode only the first non-blank id is used.
    SelectionReplaced {
        booking_reference_ids: Vec<String>,
    },

    /// Expands the picker.
    OpenPicker,
    /// Collapses the picker and clears the search.
    ClosePicker,
    /// Moves the highlight down by one row (wraps to top). Ignored while
    /// the picker is closed.
    KeyDown,
    /// Moves the highlight up by one row (wraps to bottom). Ignored while
    /// the picker is closed.
    KeyUp,

    /// Appends a character to the search query while the picker is open.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears the search query without closing the picker.
    ClearSearch,

    /// Activates the highlighted row: select in single mode, toggle in
    /// multi mode.
    ConfirmHighlighted,

    /// Picks an eligible booking by internal id (single mode).
    SelectBooking {
        booking_id: String,
    },

    /// Adds or removes an eligible booking by internal id (multi mode).
    ToggleBooking {
        booking_id: String,
    },

    /// Removes a reference id from the multi selection.
    RemoveSelected {
        booking_reference_id: String,
    },

    /// Clears the selection in whichever mode is active.
    ClearSelection,
}

/// Processes an event, mutates selector state, and returns actions to execute.
///
/// # Returns
///
/// `(needs_render, actions)`: whether the view model changed, and the
/// selection changes to report to the caller, in order.
///
/// # Errors
///
/// Returns [`SelectorError::MissingReferenceId`](crate::SelectorError::MissingReferenceId)
/// when a booking without a reference id is toggled into a multi selection.
/// The selection is left unchanged in that case.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut SelectorState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::BookingsLoaded { bookings } => {
            if &state.bookings == bookings {
                tracing::debug!("bookings unchanged, skipping render");
                return Ok((false, vec![]));
            }

            tracing::debug!(count = bookings.len(), "bookings loaded");
            state.bookings.clone_from(bookings);
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::ContextChanged(context) => Ok((state.set_context(context.clone()), vec![])),
        Event::SelectionReplaced { booking_reference_ids } => {
            state.single = SingleSelection::new(
                booking_reference_ids
                    .iter()
                    .find(|id| !id.trim().is_empty())
                    .cloned(),
            );
            state.multi = MultiSelection::new(booking_reference_ids.iter().cloned());
            Ok((true, vec![]))
        }
        Event::OpenPicker => {
            if state.picker.is_open() {
                return Ok((false, vec![]));
            }
            state.picker = PickerMode::Open;
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::ClosePicker => {
            if !state.picker.is_open() {
                return Ok((false, vec![]));
            }
            state.reset_transient();
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            if !state.picker.is_open() {
                return Ok((false, vec![]));
            }
            state.move_highlight_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if !state.picker.is_open() {
                return Ok((false, vec![]));
            }
            state.move_highlight_up();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !state.picker.is_open() {
                return Ok((false, vec![]));
            }
            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, char = %c, "search query updated");
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !state.picker.is_open() || state.search_query.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::ClearSearch => {
            if state.search_query.is_empty() {
                return Ok((false, vec![]));
            }
            state.search_query.clear();
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::ConfirmHighlighted => {
            let Some(booking) = state.highlighted_booking().cloned() else {
                tracing::debug!("no booking highlighted");
                return Ok((false, vec![]));
            };
            activate(state, &booking)
        }
        Event::SelectBooking { booking_id } => {
            if state.mode != SelectionMode::Single {
                tracing::debug!(booking_id = %booking_id, "select ignored outside single mode");
                return Ok((false, vec![]));
            }
            match state.eligible_booking(booking_id).cloned() {
                Some(booking) => Ok(select_single(state, &booking)),
                None => {
                    tracing::debug!(booking_id = %booking_id, "select ignored, booking not eligible");
                    Ok((false, vec![]))
                }
            }
        }
        Event::ToggleBooking { booking_id } => {
            if state.mode != SelectionMode::Multiple {
                tracing::debug!(booking_id = %booking_id, "toggle ignored outside multi mode");
                return Ok((false, vec![]));
            }
            match state.eligible_booking(booking_id).cloned() {
                Some(booking) => toggle_multi(state, &booking),
                None => {
                    tracing::debug!(booking_id = %booking_id, "toggle ignored, booking not eligible");
                    Ok((false, vec![]))
                }
            }
        }
        Event::RemoveSelected { booking_reference_id } => {
            if state.mode != SelectionMode::Multiple || !state.multi.remove(booking_reference_id) {
                return Ok((false, vec![]));
            }
            tracing::debug!(booking_reference_id = %booking_reference_id, "booking removed from selection");
            Ok((true, vec![multi_changed(&state.multi)]))
        }
        Event::ClearSelection => match state.mode {
            SelectionMode::Single => {
                let change = state.single.clear();
                tracing::debug!("single selection cleared");
                Ok((true, vec![Action::SingleSelectionChanged(change)]))
            }
            SelectionMode::Multiple => {
                state.multi.clear_all();
                tracing::debug!("multi selection cleared");
                Ok((true, vec![multi_changed(&state.multi)]))
            }
        },
    }
}

fn activate(state: &mut SelectorState, booking: &Booking) -> Result<(bool, Vec<Action>)> {
    match state.mode {
        SelectionMode::Single => Ok(select_single(state, booking)),
        SelectionMode::Multiple => toggle_multi(state, booking),
    }
}

fn select_single(state: &mut SelectorState, booking: &Booking) -> (bool, Vec<Action>) {
    let change = state.single.select(booking);
    tracing::debug!(
        booking_reference_id = %change.booking_reference_id,
        client_name = %change.client_name,
        "booking selected"
    );

    state.reset_transient();
    state.apply_filter();
    (true, vec![Action::SingleSelectionChanged(change)])
}

fn toggle_multi(state: &mut SelectorState, booking: &Booking) -> Result<(bool, Vec<Action>)> {
    let selected = match state.multi.toggle(booking) {
        Ok(selected) => selected,
        Err(e) => {
            tracing::warn!(booking_id = %booking.id, error = %e, "booking refused by multi selection");
            return Err(e);
        }
    };

    tracing::debug!(
        booking_id = %booking.id,
        selected = selected,
        selected_count = state.multi.len(),
        "booking toggled"
    );
    Ok((true, vec![multi_changed(&state.multi)]))
}

fn multi_changed(selection: &MultiSelection) -> Action {
    Action::MultipleSelectionChanged {
        booking_reference_ids: selection.ids().to_vec(),
    }
}
