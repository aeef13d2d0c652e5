//! Eligibility engine deciding which bookings a selector may offer.
//!
//! # Modules
//!
//! - [`course`]: Three-valued course type lookup
//! - [`filter`]: Status, reference id and booking-type gates
//! - [`search`]: Case-insensitive substring search

pub mod course;
pub mod filter;
pub mod search;

pub use course::EffectiveCourseType;
pub use filter::{type_gate, EligibilityFilter, SelectorVariant};
pub use search::SearchMatcher;
