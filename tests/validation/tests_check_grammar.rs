//! `check_grammar` tests.

use syster_grammar::Grammar;
use syster_grammar::grammar::GrammarBuilder;
use syster_grammar::validation::{
    CyclicRuleProps, GrammarIssue, Severity, UnresolvedCallProps, ValidationOptions,
    check_grammar,
};

use crate::helpers::grammar_fixtures::*;

/// ```text
/// A: 'a' b=Missing;
/// ```
fn unresolved_call() -> Grammar {
    let mut b = GrammarBuilder::new("Unresolved");
    let a = b.keyword("a");
    let missing = b.call("Missing");
    let assign = b.assign("b", missing);
    let body = b.group([a, assign]);
    b.parser_rule("A", body);
    b.finish().unwrap()
}

#[test]
fn test_cyclic_rule_becomes_error() {
    let grammar = direct_left_recursion();
    let diagnostics = check_grammar(&grammar, &ValidationOptions::default());

    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.code, "ERR0001");
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.rule, Some(rule(&grammar, "Left")));
    assert_eq!(diagnostic.element, Some(body(&grammar, "Left")));
    assert!(diagnostic.message.contains("Left"));
    assert_eq!(
        diagnostic.properties,
        GrammarIssue::CyclicRule(CyclicRuleProps {
            rule: rule(&grammar, "Left"),
            path: "Left".into(),
        })
    );
}

#[test]
fn test_mutual_recursion_reports_both_rules() {
    let grammar = mutual_recursion();
    let diagnostics = check_grammar(&grammar, &ValidationOptions::default());
    let rules: Vec<_> = diagnostics.iter().map(|d| d.rule).collect();
    assert_eq!(
        rules,
        vec![Some(rule(&grammar, "A")), Some(rule(&grammar, "B"))]
    );
}

#[test]
fn test_cyclic_severity_is_configurable() {
    let grammar = direct_left_recursion();
    let options = ValidationOptions {
        cyclic_rule_severity: Severity::Warning,
        ..ValidationOptions::default()
    };
    let diagnostics = check_grammar(&grammar, &options);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert_eq!(diagnostics[0].code, "ERR0001");
}

#[test]
fn test_cycle_check_can_be_disabled() {
    let grammar = direct_left_recursion();
    let options = ValidationOptions {
        check_cycles: false,
        ..ValidationOptions::default()
    };
    assert!(check_grammar(&grammar, &options).is_empty());
}

#[test]
fn test_unresolved_call_is_warning() {
    let grammar = unresolved_call();
    let diagnostics = check_grammar(&grammar, &ValidationOptions::default());

    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.code, "WARN0001");
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.element, Some(find(&grammar, "Missing")));
    assert_eq!(diagnostic.rule, Some(rule(&grammar, "A")));
    assert_eq!(
        diagnostic.message,
        "Could not resolve rule Missing called from A"
    );
    assert_eq!(
        diagnostic.properties,
        GrammarIssue::UnresolvedCall(UnresolvedCallProps {
            name: "Missing".into(),
            caller: Some("A".into()),
        })
    );
}

#[test]
fn test_unresolved_call_check_can_be_disabled() {
    let grammar = unresolved_call();
    let options = ValidationOptions {
        check_unresolved_calls: false,
        ..ValidationOptions::default()
    };
    assert!(check_grammar(&grammar, &options).is_empty());
}

#[test]
fn test_sound_grammar_is_clean() {
    let grammar = binary_expression();
    assert!(check_grammar(&grammar, &ValidationOptions::default()).is_empty());
}

#[test]
fn test_converging_actions_are_clean() {
    let grammar = converging_actions();
    assert!(check_grammar(&grammar, &ValidationOptions::default()).is_empty());
}
