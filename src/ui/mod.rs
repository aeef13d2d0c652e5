//! Display layer: view models and formatting helpers.
//!
//! Rendering itself belongs to the host. This module only derives
//! display-ready values from selector state:
//!
//! ```text
//! SelectorState → compute_viewmodel → SelectorViewModel → host renderer
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable selector state
//! - [`helpers`]: Status badges, schedule labels, summaries, match ranges

pub mod helpers;
pub mod viewmodel;

pub use viewmodel::{
    EmptyState, OptionItem, SearchBarInfo, SelectedItem, SelectionSummary, SelectorViewModel,
};
