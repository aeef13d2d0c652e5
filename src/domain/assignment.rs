//! Assignment type and the context a selector is evaluated under.

use super::booking::BookingType;
use super::error::SelectorError;
use std::fmt;
use std::str::FromStr;

/// Scheduling pattern a class assignment is created under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentType {
    Adhoc,
    Weekly,
    Monthly,
    CrashCourse,
    Package,
}

impl AssignmentType {
    /// Returns the wire representation of the assignment type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adhoc => "adhoc",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::CrashCourse => "crash_course",
            Self::Package => "package",
        }
    }

    /// Whether a booking type must be chosen before any booking is eligible.
    #[must_use]
    pub const fn requires_booking_type(self) -> bool {
        matches!(self, Self::Monthly | Self::CrashCourse)
    }
}

impl FromStr for AssignmentType {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adhoc" => Ok(Self::Adhoc),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "crash_course" => Ok(Self::CrashCourse),
            "package" => Ok(Self::Package),
            other => Err(SelectorError::Config(format!(
                "unknown assignment type: {other}"
            ))),
        }
    }
}

impl fmt::Display for AssignmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied context that defines the eligible set.
///
/// `booking_type_filter` of `None` means the booking type has not been chosen
/// yet. Blank strings coming from a form are normalised to `None` by
/// [`BookingType::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentContext {
    pub assignment_type: AssignmentType,
    pub booking_type_filter: Option<BookingType>,
}

impl AssignmentContext {
    #[must_use]
    pub const fn new(assignment_type: AssignmentType) -> Self {
        Self {
            assignment_type,
            booking_type_filter: None,
        }
    }

    #[must_use]
    pub fn with_booking_type_filter(mut self, filter: Option<BookingType>) -> Self {
        self.booking_type_filter = filter;
        self
    }
}

impl Default for AssignmentContext {
    fn default() -> Self {
        Self::new(AssignmentType::Adhoc)
    }
}
