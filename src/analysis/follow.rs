//! Next-feature (FOLLOW) computation for a cursor position.

use super::first::{first_features, first_features_in_sequence};
use super::overlay::CardinalityOverlay;
use crate::base::ElementId;
use crate::grammar::{ElementKind, Grammar};

/// Next features of `stack` with a fresh overlay.
///
/// `stack` is the feature stack at the cursor, innermost element first,
/// followed by the call sites of the enclosing rules.
pub fn find_next_features(grammar: &Grammar, stack: &[ElementId]) -> Vec<ElementId> {
    let mut overlay = CardinalityOverlay::new();
    let features = next_features(grammar, stack, &mut overlay);
    tracing::trace!(
        "[NEXT] {:?} -> {:?}",
        grammar.describe_all(stack),
        grammar.describe_all(&features)
    );
    features
}

/// The elements that can appear immediately after the position `stack`
/// describes.
///
/// Lookahead only widens (to the enclosing group, then to the calling rule)
/// while everything found so far may be skipped. The result is ordered and
/// may contain duplicates; deduplication is up to the caller.
pub fn next_features(
    grammar: &Grammar,
    stack: &[ElementId],
    overlay: &mut CardinalityOverlay,
) -> Vec<ElementId> {
    let Some((&feature, rest)) = stack.split_first() else {
        return Vec::new();
    };
    let mut features = Vec::new();
    let (item, parent) = enclosing_group(grammar, feature);

    // A repeatable element may occur again right away.
    if overlay.effective(grammar, feature).is_repeatable() {
        features.extend(first_features(grammar, Some(feature), overlay));
    }
    if item != feature && overlay.effective(grammar, item).is_repeatable() {
        features.extend(first_features(grammar, Some(item), overlay));
    }

    match parent {
        Some(group) => {
            let following = elements_after(grammar, group, item);
            if !following.is_empty() {
                features.extend(first_features_in_sequence(grammar, following, overlay));
            }
            if overlay.all_optional(grammar, &features) {
                features.extend(next_features(grammar, &[group], overlay));
            }
            if overlay.all_optional(grammar, &features) {
                features.extend(next_features(grammar, rest, overlay));
            }
        }
        // The feature is the whole body of its rule: resume at the caller.
        None => features.extend(next_features(grammar, rest, overlay)),
    }
    features
}

/// Walk up from `feature` to the nearest enclosing group.
///
/// Returns the ancestor of `feature` that is a direct child of that group
/// (or the outermost ancestor when there is none) and the group itself.
pub(crate) fn enclosing_group(
    grammar: &Grammar,
    feature: ElementId,
) -> (ElementId, Option<ElementId>) {
    let mut item = feature;
    while let Some(container) = grammar.container(item) {
        if grammar.element(container).is_group() {
            return (item, Some(container));
        }
        item = container;
    }
    (item, None)
}

/// The children of `group` that come after `item`.
pub(crate) fn elements_after(grammar: &Grammar, group: ElementId, item: ElementId) -> &[ElementId] {
    match grammar.kind(group) {
        ElementKind::Group { elements } => elements
            .iter()
            .position(|&element| element == item)
            .map_or(&[][..], |index| &elements[index + 1..]),
        _ => &[],
    }
}
