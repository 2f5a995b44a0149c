//! Per-query cardinality side-table.

use rustc_hash::FxHashMap;

use crate::base::ElementId;
use crate::grammar::{Cardinality, Grammar};

/// Derived cardinalities recorded during one analysis query.
///
/// When an optional element is unwrapped (e.g. `(a b)?`), the elements that
/// can start it are optional *in that context* even though their own
/// annotation says otherwise. The overlay records that derived cardinality
/// without touching the grammar, so the same element can be queried from
/// other call sites with its intrinsic cardinality.
///
/// Create a fresh overlay per top-level query and drop it afterwards.
#[derive(Clone, Debug, Default)]
pub struct CardinalityOverlay {
    derived: FxHashMap<ElementId, Cardinality>,
}

impl CardinalityOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// The derived cardinality recorded for `id`, if any.
    pub fn get(&self, id: ElementId) -> Option<Cardinality> {
        self.derived.get(&id).copied()
    }

    /// Effective cardinality: the overlay entry, else the intrinsic one.
    pub fn effective(&self, grammar: &Grammar, id: ElementId) -> Cardinality {
        self.get(id).unwrap_or_else(|| grammar.cardinality(id))
    }

    /// Propagate an enclosing element's cardinality onto `child`.
    ///
    /// An optional parent makes the child optional; a child that is already
    /// repeatable becomes `*`. Other parent cardinalities leave the child as is.
    pub fn combine(&mut self, grammar: &Grammar, child: ElementId, parent: Cardinality) -> ElementId {
        if parent.is_optional() {
            let derived = if self.effective(grammar, child).is_repeatable() {
                Cardinality::ZeroOrMore
            } else {
                Cardinality::Optional
            };
            self.derived.insert(child, derived);
        }
        child
    }

    /// True when every element is optional in this query's context.
    ///
    /// Vacuously true for an empty slice.
    pub fn all_optional(&self, grammar: &Grammar, ids: &[ElementId]) -> bool {
        ids.iter()
            .all(|&id| self.effective(grammar, id).is_optional())
    }

    pub fn len(&self) -> usize {
        self.derived.len()
    }

    pub fn is_empty(&self) -> bool {
        self.derived.is_empty()
    }
}
