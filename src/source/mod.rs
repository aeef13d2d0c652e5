//! Candidate booking sources.
//!
//! # Modules
//!
//! - `backend`: Read-only source trait and in-memory implementation
//! - `json`: JSON snapshot implementation

pub mod backend;
pub mod json;

pub use backend::{BookingSource, InMemoryBookingSource};
pub use json::JsonBookingSource;
