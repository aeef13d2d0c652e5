//! Selection state models and the router choosing between them.
//!
//! # Modules
//!
//! - [`single`]: Zero-or-one selected booking
//! - [`multi`]: Set of selected bookings keyed by reference id
//! - [`router`]: Assignment/booking type policy for single vs multiple

pub mod multi;
pub mod router;
pub mod single;

pub use multi::MultiSelection;
pub use router::{chooses_multiple, SelectionMode};
pub use single::{SingleSelection, SingleSelectionChange};
