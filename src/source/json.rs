//! JSON snapshot booking source.
//!
//! Reads booking rows exported from the studio backend. Two layouts are
//! accepted: a bare array of rows, or a versioned envelope.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "bookings": [
//!     {
//!       "id": "6f1c",
//!       "booking_reference_id": "BK-42",
//!       "first_name": "Ann",
//!       "last_name": "Lee",
//!       "email": "ann@x.com",
//!       "status": "confirmed",
//!       "booking_type": "public_group",
//!       "class_package_id": null,
//!       "preferred_days": ["Monday"],
//!       "preferred_times": ["09:00"]
//!     }
//!   ]
//! }
//! ```
//!
//! The file is re-read on every fetch so the selector always sees the
//! current snapshot.

use crate::domain::{Booking, Result, SelectorError};
use crate::source::backend::BookingSource;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Highest snapshot envelope version this crate understands.
const SUPPORTED_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct VersionHeader {
    version: u32,
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    bookings: Vec<Booking>,
}

fn parse_error(e: &serde_json::Error) -> SelectorError {
    SelectorError::Source(format!("failed to parse JSON: {e}"))
}

/// Booking source backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonBookingSource {
    file_path: PathBuf,
}

impl JsonBookingSource {
    /// Creates a source for the snapshot at `file_path`.
    ///
    /// The file is not opened until the first fetch.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use booking_selector::source::{BookingSource, JsonBookingSource};
    ///
    /// let source = JsonBookingSource::new("/var/lib/studio/bookings.json");
    /// let bookings = source.fetch_bookings()?;
    /// # Ok::<(), booking_selector::SelectorError>(())
    /// ```
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Decodes a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Source`] if the JSON is malformed or the
    /// envelope version is newer than this crate supports.
    pub fn parse(contents: &str) -> Result<Vec<Booking>> {
        if contents.trim_start().starts_with('[') {
            let bookings: Vec<Booking> = serde_json::from_str(contents).map_err(|e| parse_error(&e))?;
            tracing::debug!(count = bookings.len(), "decoded bare booking rows");
            return Ok(bookings);
        }

        // Version is checked before any row is decoded.
        let VersionHeader { version } = serde_json::from_str(contents).map_err(|e| parse_error(&e))?;
        if version > SUPPORTED_VERSION {
            return Err(SelectorError::Source(format!(
                "unsupported snapshot version {version} (max {SUPPORTED_VERSION})"
            )));
        }

        let Envelope { bookings } = serde_json::from_str(contents).map_err(|e| parse_error(&e))?;
        tracing::debug!(version = version, count = bookings.len(), "decoded snapshot envelope");
        Ok(bookings)
    }
}

impl BookingSource for JsonBookingSource {
    fn fetch_bookings(&self) -> Result<Vec<Booking>> {
        let _span = tracing::debug_span!("json_fetch_bookings", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let bookings = Self::parse(&contents)?;

        tracing::debug!(count = bookings.len(), "retrieved bookings");
        Ok(bookings)
    }
}
