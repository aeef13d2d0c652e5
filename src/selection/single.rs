//! Single-booking selection.
//!
//! The caller owns the selected reference id. [`SingleSelection`] mirrors it
//! so the selected booking can be looked up, and computes the change payload
//! to hand back whenever the user picks or clears a booking.

use crate::domain::Booking;

/// Payload reported to the caller when the single selection changes.
///
/// Empty strings in all three fields mean "nothing selected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleSelectionChange {
    pub booking_reference_id: String,
    pub client_name: String,
    pub client_email: String,
}

impl SingleSelectionChange {
    /// The "nothing selected" payload.
    #[must_use]
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Builds the payload for `booking`.
    ///
    /// Bookings without a usable reference id produce the cleared payload,
    /// since they cannot be linked.
    #[must_use]
    pub fn for_booking(booking: &Booking) -> Self {
        booking.reference_id().map_or_else(Self::cleared, |reference_id| Self {
            booking_reference_id: reference_id.to_string(),
            client_name: booking.full_name(),
            client_email: booking.email.clone(),
        })
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.booking_reference_id.is_empty()
    }
}

/// Mirror of the caller-held single selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleSelection {
    selected: Option<String>,
}

impl SingleSelection {
    /// Mirrors an externally held reference id. Blank ids mean no selection.
    #[must_use]
    pub fn new(selected: Option<String>) -> Self {
        Self {
            selected: selected.filter(|id| !id.trim().is_empty()),
        }
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Selects `booking` and returns the change to report.
    ///
    /// # Examples
    ///
    /// ```
    /// use booking_selector::selection::{SingleSelection, SingleSelectionChange};
    /// use booking_selector::Booking;
    ///
    /// let booking = Booking {
    ///     id: "row-7".into(),
    ///     booking_reference_id: Some("BK-42".into()),
    ///     first_name: "Ann".into(),
    ///     last_name: "Lee".into(),
    ///     email: "ann@x.com".into(),
    ///     ..Booking::default()
    /// };
    ///
    /// let mut selection = SingleSelection::default();
    /// let change = selection.select(&booking);
    /// assert_eq!(change, SingleSelectionChange {
    ///     booking_reference_id: "BK-42".into(),
    ///     client_name: "Ann Lee".into(),
    ///     client_email: "ann@x.com".into(),
    /// });
    /// assert_eq!(selection.selected_id(), Some("BK-42"));
    /// ```
    pub fn select(&mut self, booking: &Booking) -> SingleSelectionChange {
        let change = SingleSelectionChange::for_booking(booking);
        self.selected = if change.is_cleared() {
            None
        } else {
            Some(change.booking_reference_id.clone())
        };
        change
    }

    /// Clears the selection and returns the cleared payload.
    pub fn clear(&mut self) -> SingleSelectionChange {
        self.selected = None;
        SingleSelectionChange::cleared()
    }

    /// Finds the selected booking in `candidates`.
    ///
    /// Returns `None` when nothing is selected or the id is not in the list.
    #[must_use]
    pub fn selected_booking<'a>(&self, candidates: &'a [Booking]) -> Option<&'a Booking> {
        let selected = self.selected.as_deref()?;
        candidates
            .iter()
            .find(|booking| booking.booking_reference_id.as_deref() == Some(selected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(reference: Option<&str>) -> Booking {
        Booking {
            id: "row".into(),
            booking_reference_id: reference.map(String::from),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "ann@x.com".into(),
            ..Booking::default()
        }
    }

    #[test]
    fn selecting_unreferenced_booking_clears() {
        let mut selection = SingleSelection::new(Some("BK-1".into()));
        let change = selection.select(&booking(None));
        assert_eq!(change, SingleSelectionChange::cleared());
        assert_eq!(selection.selected_id(), None);

        let change = selection.select(&booking(Some("  ")));
        assert!(change.is_cleared());
    }

    #[test]
    fn clear_emits_empty_strings() {
        let mut selection = SingleSelection::new(Some("BK-1".into()));
        let change = selection.clear();
        assert_eq!(change.booking_reference_id, "");
        assert_eq!(change.client_name, "");
        assert_eq!(change.client_email, "");
        assert_eq!(selection.selected_id(), None);
    }

    #[test]
    fn lookup_of_absent_id_is_none() {
        let candidates = vec![booking(Some("BK-1"))];
        assert!(SingleSelection::new(Some("BK-2".into())).selected_booking(&candidates).is_none());
        assert!(SingleSelection::new(None).selected_booking(&candidates).is_none());
        assert!(SingleSelection::new(Some(String::new())).selected_booking(&candidates).is_none());
    }

    #[test]
    fn lookup_finds_by_reference_id() {
        let candidates = vec![booking(Some("BK-1")), booking(Some("BK-2"))];
        let found = SingleSelection::new(Some("BK-2".into()))
            .selected_booking(&candidates)
            .and_then(Booking::reference_id);
        assert_eq!(found, Some("BK-2"));
    }
}
