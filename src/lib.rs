//! # syster-grammar
//!
//! Grammar analysis core for language tooling: computes which grammar
//! elements can start a fragment or follow a cursor position (for
//! context-aware completion) and detects rules whose analysis cannot
//! terminate (for grammar validation).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! validation → Grammar diagnostics (cyclic rules, unresolved calls)
//!   ↓
//! analysis   → Cardinality overlay, first/next features, cycle detection
//!   ↓
//! grammar    → Arena grammar model, builder
//!   ↓
//! base       → Primitives (ElementId, RuleId)
//! ```
//!
//! Everything here is synchronous and pure: the grammar is read-only once
//! built and each query owns its scratch state.

// ============================================================================
// MODULES (dependency order: base → grammar → analysis → validation)
// ============================================================================

/// Foundation types: arena handles
pub mod base;

/// Grammar model: rules, elements, cardinalities
pub mod grammar;

/// First/next feature engines and cyclic rule detection
pub mod analysis;

/// Grammar diagnostics
pub mod validation;

pub use base::{ElementId, RuleId};
pub use grammar::{Cardinality, Grammar, GrammarBuilder};
