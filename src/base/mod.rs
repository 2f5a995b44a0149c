//! Foundation types for grammar analysis.
//!
//! - [`ElementId`] - Handle of a grammar element in the element arena
//! - [`RuleId`] - Handle of a parser or terminal rule
//!
//! This module has NO dependencies on other modules of the crate.

mod ids;

pub use ids::{ElementId, RuleId};
