//! Error types for grammar construction.

use smol_str::SmolStr;
use thiserror::Error;

use crate::base::ElementId;

/// Errors raised while assembling a [`Grammar`](super::Grammar).
///
/// Analysis itself never fails; these only guard the arena invariants
/// (every element has at most one container, rule names are unique).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GrammarError {
    /// Two rules share a name.
    #[error("Duplicate rule: {0}")]
    DuplicateRule(SmolStr),

    /// An element was handed to a second composite or rule.
    #[error("Element {element} already belongs to {container}")]
    AlreadyContained {
        element: ElementId,
        container: ElementId,
    },

    /// An element was used as a rule body after being adopted by a composite.
    #[error("Element {0} cannot be a rule body: it is nested in another element")]
    NestedRuleBody(ElementId),

    /// An element was used as the body of two rules.
    #[error("Element {0} is already the body of rule {1}")]
    SharedRuleBody(ElementId, SmolStr),

    /// An element id that was not issued by this builder.
    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),

    /// Unrecognised cardinality suffix.
    #[error("Invalid cardinality: {0:?}")]
    InvalidCardinality(String),
}
