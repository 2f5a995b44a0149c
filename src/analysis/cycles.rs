//! Cyclic rule detection.
//!
//! A rule is cyclic when computing its first features revisits an element
//! that is still being explored, i.e. the rule can reach itself (directly
//! or through other rules) before matching any concrete token. The
//! unguarded engines in [`first`](super::first) and [`follow`](super::follow)
//! would recurse forever on such rules.
//!
//! The visited set is shared across the whole exploration of one top-level
//! rule, not scoped to the current path, so the check over-approximates;
//! downstream validation relies on that verdict, so it is kept as is.
//! The one exception is the follow scan of an action: it runs on a copy of
//! the visited set, so the elements it looks ahead at stay unvisited for
//! sibling branches and later group children.

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use super::follow::{elements_after, enclosing_group};
use super::overlay::CardinalityOverlay;
use crate::base::{ElementId, RuleId};
use crate::grammar::{ElementKind, Grammar};

/// Memoized outcome of analysing one parser rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleVerdict {
    pub is_cyclic: bool,
    /// First features, `None` when the rule is cyclic.
    pub first_features: Option<Vec<ElementId>>,
}

impl RuleVerdict {
    fn from_first_features(first_features: Option<Vec<ElementId>>) -> Self {
        Self {
            is_cyclic: first_features.is_none(),
            first_features,
        }
    }
}

/// Per-pass memo of rule verdicts.
///
/// Only valid for the grammar it was computed on; build a new one whenever
/// the grammar changes.
#[derive(Clone, Debug, Default)]
pub struct RuleMemo {
    verdicts: FxHashMap<RuleId, RuleVerdict>,
}

impl RuleMemo {
    pub fn get(&self, rule: RuleId) -> Option<&RuleVerdict> {
        self.verdicts.get(&rule)
    }

    pub fn contains(&self, rule: RuleId) -> bool {
        self.verdicts.contains_key(&rule)
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    fn insert(&mut self, rule: RuleId, verdict: RuleVerdict) {
        self.verdicts.insert(rule, verdict);
    }
}

/// A parser rule whose first features cannot be computed safely.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CyclicRule {
    pub rule: RuleId,
    /// Rule name, used as the diagnostic path.
    pub path: SmolStr,
}

/// Run a fresh detection pass over every parser rule of `grammar`.
pub fn detect_cycles(grammar: &Grammar) -> Vec<CyclicRule> {
    CycleDetector::new(grammar).detect()
}

/// One detection pass over a grammar, owning the pass's [`RuleMemo`].
#[derive(Debug)]
pub struct CycleDetector<'g> {
    grammar: &'g Grammar,
    memo: RuleMemo,
}

impl<'g> CycleDetector<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            memo: RuleMemo::default(),
        }
    }

    /// Analyse every parser rule not yet memoized and report the cyclic ones
    /// in declaration order.
    pub fn detect(&mut self) -> Vec<CyclicRule> {
        let grammar = self.grammar;
        let mut cyclic = Vec::new();
        for (id, rule) in grammar.parser_rules() {
            if !self.memo.contains(id) {
                let mut overlay = CardinalityOverlay::new();
                let mut visited = FxHashSet::default();
                let features = self.guarded_first(rule.alternatives, &mut overlay, &mut visited);
                self.memo.insert(id, RuleVerdict::from_first_features(features));
            }
            if self.memo.get(id).is_some_and(|verdict| verdict.is_cyclic) {
                tracing::debug!("[CYCLES] Cyclic rule: {}", rule.name);
                cyclic.push(CyclicRule {
                    rule: id,
                    path: rule.name.clone(),
                });
            }
        }
        cyclic
    }

    pub fn memo(&self) -> &RuleMemo {
        &self.memo
    }

    pub fn into_memo(self) -> RuleMemo {
        self.memo
    }

    /// First features with a revisit guard. `None` means a cycle was hit
    /// somewhere below `element`.
    fn guarded_first(
        &mut self,
        element: Option<ElementId>,
        overlay: &mut CardinalityOverlay,
        visited: &mut FxHashSet<ElementId>,
    ) -> Option<Vec<ElementId>> {
        let Some(id) = element else {
            return Some(Vec::new());
        };
        if !visited.insert(id) {
            tracing::trace!("[CYCLES] Revisited {}", self.grammar.describe(id));
            return None;
        }
        let grammar = self.grammar;
        let element = grammar.element(id);
        let features = match &element.kind {
            ElementKind::Group { elements } => self.guarded_sequence(elements, overlay, visited)?,
            ElementKind::Alternatives { elements } => {
                // Every branch is explored, even after one has failed.
                let branches: Vec<Option<Vec<ElementId>>> = elements
                    .iter()
                    .map(|&branch| self.guarded_first(Some(branch), overlay, visited))
                    .collect();
                branches
                    .into_iter()
                    .collect::<Option<Vec<_>>>()?
                    .into_iter()
                    .flatten()
                    .collect()
            }
            ElementKind::UnorderedGroup { .. } => return Some(Vec::new()),
            ElementKind::Action { .. } => {
                let mut scoped = visited.clone();
                self.guarded_next(id, overlay, &mut scoped)?
            }
            ElementKind::Assignment { terminal, .. } => {
                self.guarded_first(*terminal, overlay, visited)?
            }
            ElementKind::RuleCall { .. } => match grammar.resolve_call(id) {
                Some((rule_id, rule)) => {
                    if !self.memo.contains(rule_id) {
                        let features = self
                            .guarded_first(rule.alternatives, overlay, visited)
                            .map(|features| {
                                features
                                    .into_iter()
                                    .map(|f| overlay.combine(grammar, f, element.cardinality))
                                    .collect()
                            });
                        self.memo
                            .insert(rule_id, RuleVerdict::from_first_features(features));
                    }
                    return self
                        .memo
                        .get(rule_id)
                        .and_then(|verdict| verdict.first_features.clone());
                }
                None => return Some(vec![id]),
            },
            _ => return Some(vec![id]),
        };
        Some(
            features
                .into_iter()
                .map(|feature| overlay.combine(grammar, feature, element.cardinality))
                .collect(),
        )
    }

    fn guarded_sequence(
        &mut self,
        elements: &[ElementId],
        overlay: &mut CardinalityOverlay,
        visited: &mut FxHashSet<ElementId>,
    ) -> Option<Vec<ElementId>> {
        let mut features = Vec::new();
        for &element in elements {
            features.extend(self.guarded_first(Some(element), overlay, visited)?);
            if !overlay.effective(self.grammar, element).is_optional() {
                break;
            }
        }
        Some(features)
    }

    /// Next features of a single element within its own rule, with a revisit
    /// guard. Used for actions, which are transparent to first-feature
    /// computation; callers pass a copy of the visited set.
    fn guarded_next(
        &mut self,
        feature: ElementId,
        overlay: &mut CardinalityOverlay,
        visited: &mut FxHashSet<ElementId>,
    ) -> Option<Vec<ElementId>> {
        let grammar = self.grammar;
        let (item, parent) = enclosing_group(grammar, feature);
        let mut features = Vec::new();

        let mut repeatable = vec![feature];
        if item != feature {
            repeatable.push(item);
        }
        for element in repeatable {
            if overlay.effective(grammar, element).is_repeatable() {
                features.extend(self.guarded_first(Some(element), overlay, visited)?);
            }
        }

        if let Some(group) = parent {
            let following = elements_after(grammar, group, item);
            features.extend(self.guarded_sequence(following, overlay, visited)?);
            if overlay.all_optional(grammar, &features) {
                features.extend(self.guarded_next(group, overlay, visited)?);
            }
        }
        Some(features)
    }
}
