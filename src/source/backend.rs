//! Booking source abstraction.
//!
//! The selector never fetches or writes bookings itself. Callers obtain the
//! candidate list through a [`BookingSource`] and feed it in with
//! `Event::BookingsLoaded`. The trait is deliberately read-only.

use crate::domain::{Booking, Result};

/// Read-only provider of candidate bookings.
///
/// # Implementations
///
/// - [`JsonBookingSource`](super::JsonBookingSource): reads a JSON snapshot
///   exported from the backend
/// - [`InMemoryBookingSource`]: wraps an already fetched list
pub trait BookingSource {
    /// Returns every candidate booking, in source order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read or decoded.
    fn fetch_bookings(&self) -> Result<Vec<Booking>>;

    /// Looks up a single booking by reference id.
    ///
    /// Returns `Ok(None)` if no booking carries the id.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read or decoded.
    fn fetch_by_reference_id(&self, reference_id: &str) -> Result<Option<Booking>> {
        Ok(self
            .fetch_bookings()?
            .into_iter()
            .find(|booking| booking.reference_id() == Some(reference_id)))
    }
}

/// A source over bookings the caller already holds.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingSource {
    bookings: Vec<Booking>,
}

impl InMemoryBookingSource {
    #[must_use]
    pub const fn new(bookings: Vec<Booking>) -> Self {
        Self { bookings }
    }
}

impl BookingSource for InMemoryBookingSource {
    fn fetch_bookings(&self) -> Result<Vec<Booking>> {
        Ok(self.bookings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_by_reference_id() {
        let source = InMemoryBookingSource::new(vec![
            Booking {
                id: "1".into(),
                booking_reference_id: Some("BK-1".into()),
                ..Booking::default()
            },
            Booking {
                id: "2".into(),
                booking_reference_id: Some("BK-2".into()),
                ..Booking::default()
            },
        ]);

        let found = source.fetch_by_reference_id("BK-2").unwrap();
        assert_eq!(found.map(|b| b.id).as_deref(), Some("2"));
        assert!(source.fetch_by_reference_id("BK-3").unwrap().is_none());
    }
}
