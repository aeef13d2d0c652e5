//! Application layer coordinating selector state, events, and actions.
//!
//! Sits between the host form and the eligibility / selection layers and
//! implements a unidirectional data flow:
//!
//! ```text
//! Form / User Input → Events → handle_event → State Mutations → Actions → Form
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Selection changes reported back to the form
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Picker mode and active selector types
//! - [`state`]: Selector state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{PickerMode, SelectionMode};
pub use state::SelectorState;
