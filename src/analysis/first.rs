//! First-feature computation: what can start a grammar fragment.

use super::follow::next_features;
use super::overlay::CardinalityOverlay;
use crate::base::ElementId;
use crate::grammar::{ElementKind, Grammar};

/// First features of `element` with a fresh overlay.
///
/// Must only be called on elements of rules that [`detect_cycles`](super::detect_cycles)
/// did not report: there is no recursion guard here.
pub fn find_first_features(grammar: &Grammar, element: Option<ElementId>) -> Vec<ElementId> {
    let mut overlay = CardinalityOverlay::new();
    let features = first_features(grammar, element, &mut overlay);
    tracing::trace!(
        "[FIRST] {:?} -> {:?}",
        element.map(|id| grammar.describe(id)),
        grammar.describe_all(&features)
    );
    features
}

/// The elements that can be matched first when parsing `element`.
///
/// The result is ordered and may contain duplicates. Every returned element
/// gets the cardinality of the fragments it was unwrapped from combined into
/// `overlay`, so callers can tell whether it may be skipped.
pub fn first_features(
    grammar: &Grammar,
    element: Option<ElementId>,
    overlay: &mut CardinalityOverlay,
) -> Vec<ElementId> {
    let Some(id) = element else {
        return Vec::new();
    };
    let element = grammar.element(id);
    let features = match &element.kind {
        ElementKind::Group { elements } => first_features_in_sequence(grammar, elements, overlay),
        ElementKind::Alternatives { elements } => elements
            .iter()
            .flat_map(|&branch| first_features(grammar, Some(branch), overlay))
            .collect(),
        // Unordered groups are not analysed.
        ElementKind::UnorderedGroup { .. } => return Vec::new(),
        ElementKind::Assignment { terminal, .. } => first_features(grammar, *terminal, overlay),
        // Actions consume no input: what starts here is what follows them.
        ElementKind::Action { .. } => next_features(grammar, &[id], overlay),
        ElementKind::RuleCall { .. } => match grammar.resolve_call(id) {
            Some((_, rule)) => first_features(grammar, rule.alternatives, overlay),
            None => return vec![id],
        },
        _ => return vec![id],
    };
    features
        .into_iter()
        .map(|feature| overlay.combine(grammar, feature, element.cardinality))
        .collect()
}

/// First features of a run of sequence elements.
///
/// Scans left to right and stops after the first element that is mandatory
/// in the current context.
pub(crate) fn first_features_in_sequence(
    grammar: &Grammar,
    elements: &[ElementId],
    overlay: &mut CardinalityOverlay,
) -> Vec<ElementId> {
    let mut features = Vec::new();
    for &element in elements {
        features.extend(first_features(grammar, Some(element), overlay));
        if !overlay.effective(grammar, element).is_optional() {
            break;
        }
    }
    features
}
