//! Domain layer for the booking selector.
//!
//! Core record and context types, independent of any rendering host or
//! backend client.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`booking`]: Booking record and its enumerated attributes
//! - [`assignment`]: Assignment type and the caller-supplied context
//!
//! # Examples
//!
//! ```
//! use booking_selector::domain::{AssignmentContext, AssignmentType, BookingType};
//!
//! let ctx = AssignmentContext::new(AssignmentType::Monthly)
//!     .with_booking_type_filter(Some(BookingType::Corporate));
//! assert_eq!(ctx.booking_type_filter, Some(BookingType::Corporate));
//! ```

pub mod assignment;
pub mod booking;
pub mod error;

pub use assignment::{AssignmentContext, AssignmentType};
pub use booking::{Booking, BookingStatus, BookingType, ClassPackage, CourseType};
pub use error::{Result, SelectorError};
