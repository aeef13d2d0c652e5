//! Booking selector: eligibility filtering and selection for linking studio
//! bookings to class assignments.
//!
//! When a class assignment is created on the studio dashboard, the
//! administrator links it to one or more client bookings. This crate decides
//! which bookings may be offered for that link and tracks what has been
//! picked:
//!
//! - Multi-dimensional eligibility over status, reference id, booking type
//!   and package course type, keyed on the assignment type
//! - Case-insensitive search over client name and email
//! - Single and multi selection models that compute the new selection without
//!   owning it
//! - A router choosing single or multi selection per assignment and booking type
//! - View models for the collapsed summary and the open picker
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host form (not part of this crate)                 │  ← Owns selection
//! └─────────────────────────────────────────────────────┘
//!              │ Events                ▲ Actions
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Context reset ordering                           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Eligibility   │   │ Selection     │   │ Source        │
//! │ (eligibility/)│   │ (selection/)  │   │ (source/)     │
//! │ - Gates       │   │ - Single      │   │ - Read-only   │
//! │ - Course type │   │ - Multi       │   │ - JSON        │
//! │ - Search      │   │ - Router      │   │   snapshots   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Booking, assignment context, errors              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Selector state machine with event/action model
//! - [`domain`]: Core domain types (Booking, AssignmentContext, errors)
//! - [`eligibility`]: Eligibility gates and search
//! - [`selection`]: Single/multi selection models and the router
//! - [`source`]: Read-only booking sources
//! - [`ui`]: View models and display formatting
//! - [`observability`]: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use booking_selector::{handle_event, initialize, Action, Config, Event};
//! use booking_selector::{AssignmentContext, AssignmentType, Booking, BookingStatus, BookingType};
//!
//! let mut state = initialize(&Config::default());
//!
//! let bookings = vec![Booking {
//!     id: "row-1".into(),
//!     booking_reference_id: Some("BK-42".into()),
//!     first_name: "Ann".into(),
//!     last_name: "Lee".into(),
//!     email: "ann@x.com".into(),
//!     status: BookingStatus::Confirmed,
//!     booking_type: Some(BookingType::Individual),
//!     ..Booking::default()
//! }];
//!
//! let context = AssignmentContext::new(AssignmentType::Adhoc)
//!     .with_booking_type_filter(Some(BookingType::Individual));
//!
//! for event in [
//!     Event::BookingsLoaded { bookings },
//!     Event::ContextChanged(context),
//!     Event::OpenPicker,
//!     Event::Char('a'),
//! ] {
//!     handle_event(&mut state, &event)?;
//! }
//!
//! let (_, actions) = handle_event(&mut state, &Event::ConfirmHighlighted)?;
//! assert!(matches!(&actions[..], [Action::SingleSelectionChanged(change)]
//!     if change.booking_reference_id == "BK-42"));
//! # Ok::<(), booking_selector::SelectorError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod eligibility;
pub mod observability;
pub mod selection;
pub mod source;
pub mod ui;

pub use app::{handle_event, Action, Event, PickerMode, SelectionMode, SelectorState};
pub use domain::{
    AssignmentContext, AssignmentType, Booking, BookingStatus, BookingType, ClassPackage,
    CourseType, Result, SelectorError,
};

use serde::Deserialize;
use source::JsonBookingSource;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default number of names in the collapsed multi selection summary.
const DEFAULT_SUMMARY_PREVIEW_COUNT: usize = 2;

/// Selector configuration.
///
/// # Example
///
/// ```toml
/// summary_preview_count = 3
/// trace_level = "booking_selector=debug"
/// bookings_file = "/var/lib/studio/bookings.json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Names shown in the collapsed multi summary before "+N more".
    ///
    /// Default: 2
    pub summary_preview_count: usize,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// JSON snapshot of candidate bookings, see [`source::JsonBookingSource`].
    pub bookings_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summary_preview_count: DEFAULT_SUMMARY_PREVIEW_COUNT,
            trace_level: None,
            bookings_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from host-supplied key/value pairs.
    ///
    /// # Parsing Rules
    ///
    /// - `summary_preview_count`: String → `usize` (falls back to 2 on parse error)
    /// - `trace_level`: String → `Option<String>` (blank is unset)
    /// - `bookings_file`: String → `Option<PathBuf>` (blank is unset)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use booking_selector::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("summary_preview_count".to_string(), "3".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.summary_preview_count, 3);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// assert!(config.bookings_file.is_none());
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let summary_preview_count = config
            .get("summary_preview_count")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_SUMMARY_PREVIEW_COUNT);

        Self {
            summary_preview_count,
            trace_level: non_blank("trace_level"),
            bookings_file: non_blank("bookings_file").map(PathBuf::from),
        }
    }

    /// Parses configuration from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Config`] on malformed TOML, unknown keys, or
    /// values of the wrong type.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| SelectorError::Config(format!("invalid config: {e}")))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::Io`] if the file cannot be read, or
    /// [`SelectorError::Config`] if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading configuration");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Returns the configured JSON booking source, if any.
    #[must_use]
    pub fn booking_source(&self) -> Option<JsonBookingSource> {
        self
            .bookings_file
            .as_ref()
            .map(|path| JsonBookingSource::new(path.clone()))
    }
}

/// Creates an empty selector from configuration.
///
/// The selector starts under an ad hoc context with no booking type chosen
/// and no candidates; feed it `Event::BookingsLoaded` and
/// `Event::ContextChanged` as the owning form learns them. Tracing is not
/// installed here, see [`observability::init_tracing`].
#[must_use]
pub fn initialize(config: &Config) -> SelectorState {
    tracing::debug!(
        summary_preview_count = config.summary_preview_count,
        bookings_file = ?config.bookings_file,
        "initializing booking selector"
    );

    SelectorState::new(vec![], AssignmentContext::default(), config.summary_preview_count)
}
