//! Grammar model — the immutable AST of rules and elements.
//!
//! Elements live in an arena owned by [`Grammar`] and are addressed by
//! [`ElementId`](crate::base::ElementId). Each element stores its
//! container's id, so upward walks resolve ids against the arena instead of
//! following back-pointers. Rule calls store the [`RuleId`](crate::base::RuleId)
//! of their target, which keeps self-referential grammars a plain graph.
//!
//! ## Key Types
//!
//! - [`Grammar`] — rules plus element arena, read-only after construction
//! - [`GrammarBuilder`] — bottom-up construction and name resolution
//! - [`Element`], [`ElementKind`] — rule body nodes
//! - [`Cardinality`] — `?`, `*`, `+` annotations

mod builder;
mod cardinality;
mod element;
mod error;
mod model;
mod rule;

pub use builder::GrammarBuilder;
pub use cardinality::Cardinality;
pub use element::{AssignOperator, Element, ElementKind};
pub use error::GrammarError;
pub use model::Grammar;
pub use rule::{Parameter, ParserRule, Rule, TerminalRule};
