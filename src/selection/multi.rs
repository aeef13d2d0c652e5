//! Multi-booking selection.
//!
//! Membership is keyed by booking reference id. Bookings lacking a non-blank
//! reference id are eligible to be shown by the multi selector but are
//! refused membership, so they can never collapse onto a shared empty key.

use crate::domain::{Booking, Result, SelectorError};

/// Mirror of the caller-held set of selected reference ids.
///
/// Insertion order is kept for stable display but carries no meaning:
/// equality compares membership only.
#[derive(Debug, Clone, Default)]
pub struct MultiSelection {
    ids: Vec<String>,
}

impl MultiSelection {
    /// Mirrors an externally held id list, dropping blanks and duplicates.
    #[must_use]
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::default();
        for id in ids {
            let id = id.into();
            if !id.trim().is_empty() && !selection.contains(&id) {
                selection.ids.push(id);
            }
        }
        selection
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|member| member == id)
    }

    /// Adds `booking` if absent, removes it if present.
    ///
    /// Returns whether the booking is selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::MissingReferenceId`] if the booking has no
    /// non-blank reference id. The selection is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use booking_selector::selection::MultiSelection;
    /// use booking_selector::Booking;
    ///
    /// let booking = Booking {
    ///     id: "row-1".into(),
    ///     booking_reference_id: Some("BK-1".into()),
    ///     ..Booking::default()
    /// };
    ///
    /// let mut selection = MultiSelection::default();
    /// assert!(selection.toggle(&booking)?);
    /// assert!(!selection.toggle(&booking)?);
    /// assert!(selection.is_empty());
    /// # Ok::<(), booking_selector::SelectorError>(())
    /// ```
    pub fn toggle(&mut self, booking: &Booking) -> Result<bool> {
        let id = booking
            .reference_id()
            .ok_or_else(|| SelectorError::MissingReferenceId {
                booking_id: booking.id.clone(),
            })?;

        if self.remove(id) {
            Ok(false)
        } else {
            self.ids.push(id.to_string());
            Ok(true)
        }
    }

    /// Removes `id`, returning whether it was a member.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|member| member != id);
        self.ids.len() != before
    }

    pub fn clear_all(&mut self) {
        self.ids.clear();
    }

    /// Selected bookings, in candidate-list order.
    ///
    /// Ids with no matching candidate are skipped.
    #[must_use]
    pub fn selected_bookings<'a>(&self, candidates: &'a [Booking]) -> Vec<&'a Booking> {
        candidates
            .iter()
            .filter(|booking| booking.reference_id().is_some_and(|id| self.contains(id)))
            .collect()
    }
}

impl PartialEq for MultiSelection {
    fn eq(&self, other: &Self) -> bool {
        self.ids.len() == other.ids.len() && self.ids.iter().all(|id| other.contains(id))
    }
}

impl Eq for MultiSelection {}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(reference: Option<&str>, first_name: &str) -> Booking {
        Booking {
            id: format!("row-{first_name}"),
            booking_reference_id: reference.map(String::from),
            first_name: first_name.into(),
            last_name: "Test".into(),
            ..Booking::default()
        }
    }

    #[test]
    fn double_toggle_restores_state() {
        let a = booking(Some("A"), "a");
        let b = booking(Some("B"), "b");
        let c = booking(Some("C"), "c");

        for start in [
            MultiSelection::default(),
            MultiSelection::new(["A"]),
            MultiSelection::new(["A", "B", "C"]),
            MultiSelection::new(["C", "X"]),
        ] {
            for target in [&a, &b, &c] {
                let mut state = start.clone();
                state.toggle(target).unwrap();
                state.toggle(target).unwrap();
                assert_eq!(state, start);
            }
        }
    }

    #[test]
    fn toggle_rejects_missing_reference_without_mutating() {
        let mut selection = MultiSelection::new(["A"]);
        let before = selection.clone();

        for reference in [None, Some(""), Some("  ")] {
            let err = selection.toggle(&booking(reference, "nobody")).unwrap_err();
            assert!(matches!(err, SelectorError::MissingReferenceId { ref booking_id } if booking_id == "row-nobody"));
        }
        assert_eq!(selection, before);
        assert_eq!(selection.ids(), ["A".to_string()]);
    }

    #[test]
    fn unreferenced_bookings_do_not_collide() {
        let mut selection = MultiSelection::default();
        assert!(selection.toggle(&booking(None, "x")).is_err());
        assert!(selection.toggle(&booking(None, "y")).is_err());
        assert!(selection.is_empty());
    }

    #[test]
    fn new_drops_blanks_and_duplicates() {
        let selection = MultiSelection::new(["A", "", "A", " ", "B"]);
        assert_eq!(selection.ids(), ["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn remove_reports_membership() {
        let mut selection = MultiSelection::new(["A", "B"]);
        assert!(selection.remove("A"));
        assert!(!selection.remove("A"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn clear_all_empties_view() {
        let candidates = vec![booking(Some("A"), "a"), booking(Some("B"), "b")];
        let mut selection = MultiSelection::new(["A", "B"]);
        assert_eq!(selection.selected_bookings(&candidates).len(), 2);

        selection.clear_all();
        assert!(selection.selected_bookings(&candidates).is_empty());
    }

    #[test]
    fn selected_view_follows_candidate_order_and_skips_unknown() {
        let candidates = vec![
            booking(Some("A"), "a"),
            booking(Some("B"), "b"),
            booking(Some("C"), "c"),
        ];
        let selection = MultiSelection::new(["C", "missing", "A"]);
        let names: Vec<&str> = selection
            .selected_bookings(&candidates)
            .iter()
            .map(|b| b.first_name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn insertion_order_is_kept_for_display() {
        let mut selection = MultiSelection::default();
        selection.toggle(&booking(Some("B"), "b")).unwrap();
        selection.toggle(&booking(Some("A"), "a")).unwrap();
        assert_eq!(selection.ids(), ["B".to_string(), "A".to_string()]);
    }
}
