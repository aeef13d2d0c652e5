//! Booking record model.
//!
//! A [`Booking`] is a client's reservation row as exported by the studio
//! backend. This crate only ever reads bookings; they are fetched and kept
//! fresh by the caller. Enumerated attributes are open sets: values this
//! crate does not recognise deserialize into an `Other` variant instead of
//! failing, so a new status added upstream never breaks the selector.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    /// Any status value not known to this crate.
    Other(String),
}

impl BookingStatus {
    /// Returns the wire representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Other(raw) => raw,
        }
    }

    /// Whether a booking in this status may be linked to a new assignment.
    ///
    /// Only pending and confirmed bookings are open for linkage.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

impl From<String> for BookingStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "confirmed" => Self::Confirmed,
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            _ => Self::Other(raw),
        }
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audience category of a booking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum BookingType {
    Individual,
    Corporate,
    PrivateGroup,
    PublicGroup,
    /// Any non-blank booking type not known to this crate.
    Other(String),
}

impl BookingType {
    /// Parses a raw booking type, treating blank input as "no type".
    ///
    /// # Examples
    ///
    /// ```
    /// use booking_selector::BookingType;
    ///
    /// assert_eq!(BookingType::parse("public_group"), Some(BookingType::PublicGroup));
    /// assert_eq!(BookingType::parse("   "), None);
    /// assert_eq!(
    ///     BookingType::parse("retreat"),
    ///     Some(BookingType::Other("retreat".to_string()))
    /// );
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" => None,
            "individual" => Some(Self::Individual),
            "corporate" => Some(Self::Corporate),
            "private_group" => Some(Self::PrivateGroup),
            "public_group" => Some(Self::PublicGroup),
            _ => Some(Self::Other(trimmed.to_string())),
        }
    }

    /// Returns the wire representation of the booking type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Individual => "individual",
            Self::Corporate => "corporate",
            Self::PrivateGroup => "private_group",
            Self::PublicGroup => "public_group",
            Self::Other(raw) => raw,
        }
    }
}

impl From<BookingType> for String {
    fn from(booking_type: BookingType) -> Self {
        match booking_type {
            BookingType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BookingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a class package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CourseType {
    Regular,
    Crash,
    Other(String),
}

impl From<String> for CourseType {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "regular" => Self::Regular,
            "crash" => Self::Crash,
            _ => Self::Other(raw),
        }
    }
}

impl From<CourseType> for String {
    fn from(course_type: CourseType) -> Self {
        match course_type {
            CourseType::Regular => "regular".to_string(),
            CourseType::Crash => "crash".to_string(),
            CourseType::Other(raw) => raw,
        }
    }
}

/// Denormalized package information joined onto a booking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassPackage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub course_type: Option<CourseType>,
}

/// A client's booking, as read from the backend.
///
/// Every field except `id` is optional on the wire; missing contact fields
/// deserialize to empty strings and missing enumerations to `None`.
///
/// # Fields
///
/// - `id`: internal row identifier
/// - `booking_reference_id`: external identifier used to link a booking to an
///   assignment; a booking without one cannot be linked by the single selector
/// - `preferred_days` / `preferred_times`: index-aligned availability, not
///   guaranteed to be the same length
/// - `class_date` / `class_time`: single occurrence fallback when no preferred
///   days are recorded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    #[serde(default)]
    pub booking_reference_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: BookingStatus,
    #[serde(default, deserialize_with = "blank_booking_type")]
    pub booking_type: Option<BookingType>,
    #[serde(default)]
    pub class_package_id: Option<String>,
    #[serde(default)]
    pub class_package: Option<ClassPackage>,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub preferred_days: Option<Vec<String>>,
    #[serde(default)]
    pub preferred_times: Option<Vec<String>>,
    #[serde(default)]
    pub class_date: Option<String>,
    #[serde(default)]
    pub class_time: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

impl Booking {
    /// Returns the reference id if it is present and not blank.
    ///
    /// The stored value is returned untrimmed; only the blank check trims.
    ///
    /// # Examples
    ///
    /// ```
    /// use booking_selector::Booking;
    ///
    /// let mut booking = Booking { id: "1".into(), ..Booking::default() };
    /// assert_eq!(booking.reference_id(), None);
    ///
    /// booking.booking_reference_id = Some("  ".into());
    /// assert_eq!(booking.reference_id(), None);
    ///
    /// booking.booking_reference_id = Some("BK-42".into());
    /// assert_eq!(booking.reference_id(), Some("BK-42"));
    /// ```
    #[must_use]
    pub fn reference_id(&self) -> Option<&str> {
        self.booking_reference_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }

    /// Returns `"{first_name} {last_name}"` exactly as emitted to callers.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_booking_type<'de, D>(deserializer: D) -> std::result::Result<Option<BookingType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(BookingType::parse))
}
