//! First-feature engine tests.

use rstest::rstest;
use syster_grammar::Grammar;
use syster_grammar::analysis::{CardinalityOverlay, find_first_features, first_features};
use syster_grammar::grammar::{Cardinality, GrammarBuilder};

use crate::helpers::grammar_fixtures::*;

#[rstest]
#[case::keyword_first(main_value(), "Main", &["'a'"])]
#[case::alternatives_union(main_value(), "Value", &["INT", "'('"])]
#[case::optional_prefix(optional_name(), "Opt", &["ID", "INT"])]
#[case::mandatory_blocks_optional_call(guarded_recursion(), "A", &["'x'"])]
#[case::inlines_called_rule(binary_expression(), "Expr", &["INT", "'('"])]
#[case::terminal_call_is_leaf(guarded_recursion(), "B", &["INT"])]
#[case::actions_are_transparent(converging_actions(), "A", &["ID", "ID"])]
fn test_first_features_of_rule(
    #[case] grammar: Grammar,
    #[case] rule_name: &str,
    #[case] expected: &[&str],
) {
    assert_eq!(first_labels(&grammar, rule_name), expected);
}

#[test]
fn test_optional_prefix_is_marked_optional_in_overlay() {
    let grammar = optional_name();
    let id = find(&grammar, "ID");
    let int = find(&grammar, "INT");

    let mut overlay = CardinalityOverlay::new();
    let features = first_features(&grammar, Some(body(&grammar, "Opt")), &mut overlay);

    assert_eq!(features, vec![id, int]);
    assert_eq!(overlay.effective(&grammar, id), Cardinality::Optional);
    assert_eq!(overlay.effective(&grammar, int), Cardinality::None);
    // The grammar itself is never touched.
    assert_eq!(grammar.cardinality(id), Cardinality::None);
}

#[test]
fn test_mandatory_first_child_short_circuits() {
    let grammar = main_value();
    let labels = first_labels(&grammar, "Main");
    assert!(!labels.contains(&"INT".to_string()));
    assert!(!labels.contains(&"'('".to_string()));
}

#[test]
fn test_first_features_are_deterministic() {
    let grammar = binary_expression();
    let expr = body(&grammar, "Expr");
    assert_eq!(
        find_first_features(&grammar, Some(expr)),
        find_first_features(&grammar, Some(expr))
    );
}

#[test]
fn test_unresolved_call_is_its_own_first_feature() {
    // A: Missing 'x';
    let mut b = GrammarBuilder::new("Broken");
    let missing = b.call("Missing");
    let x = b.keyword("x");
    let body = b.group([missing, x]);
    b.parser_rule("A", body);
    let grammar = b.finish().unwrap();

    assert_eq!(find_first_features(&grammar, Some(body)), vec![missing]);
}

#[test]
fn test_unordered_group_in_sequence_blocks_lookahead() {
    // A: ('a' & 'b') 'c';
    let mut b = GrammarBuilder::new("Unordered");
    let a = b.keyword("a");
    let kb = b.keyword("b");
    let unordered = b.unordered_group([a, kb]);
    let c = b.keyword("c");
    let body = b.group([unordered, c]);
    b.parser_rule("A", body);
    let grammar = b.finish().unwrap();

    assert!(find_first_features(&grammar, Some(body)).is_empty());
}

#[test]
fn test_optional_repeatable_child_becomes_zero_or_more() {
    // A: ('a'+)? 'b';
    let mut b = GrammarBuilder::new("Repeat");
    let a = b.keyword("a");
    b.some(a);
    let inner = b.group([a]);
    b.opt(inner);
    let kb = b.keyword("b");
    let body = b.group([inner, kb]);
    b.parser_rule("A", body);
    let grammar = b.finish().unwrap();

    let mut overlay = CardinalityOverlay::new();
    let features = first_features(&grammar, Some(body), &mut overlay);
    assert_eq!(features, vec![a, kb]);
    assert_eq!(overlay.effective(&grammar, a), Cardinality::ZeroOrMore);
}
