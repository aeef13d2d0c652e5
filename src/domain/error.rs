//! Error types for the booking selector.
//!
//! Eligibility, search and routing are total functions and never fail. Errors
//! only arise at the edges: loading candidate snapshots, parsing configuration,
//! and admitting a booking into a multi-selection.

use thiserror::Error;

/// The main error type for booking selector operations.
///
/// # Examples
///
/// ```
/// use booking_selector::SelectorError;
///
/// let err = SelectorError::MissingReferenceId { booking_id: "b-1".to_string() };
/// assert_eq!(
///     err.to_string(),
///     "booking b-1 has no reference id and cannot join a selection"
/// );
/// ```
#[derive(Debug, Error)]
pub enum SelectorError {
    /// Reading or decoding a candidate booking snapshot failed.
    #[error("Booking source error: {0}")]
    Source(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A booking without a usable reference id was offered to a multi-selection.
    ///
    /// Multi-selection membership is keyed by reference id, so bookings lacking
    /// one would collapse onto the same empty key. They are rejected instead.
    #[error("booking {booking_id} has no reference id and cannot join a selection")]
    MissingReferenceId {
        /// Internal id of the rejected booking.
        booking_id: String,
    },
}

/// A specialized `Result` type for booking selector operations.
pub type Result<T> = std::result::Result<T, SelectorError>;
