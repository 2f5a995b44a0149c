//! Grammar validation — turns analysis results into diagnostics.
//!
//! [`check_grammar`] runs a fresh cycle detection pass per call, so results
//! never leak between grammar versions.

mod diagnostics;
mod options;

pub use diagnostics::{
    CYCLIC_RULE, CyclicRuleProps, Diagnostic, DiagnosticDef, GrammarDiagnostic, GrammarIssue,
    Severity, UNRESOLVED_RULE_CALL, UnresolvedCallProps,
};
pub use options::ValidationOptions;

use crate::analysis::detect_cycles;
use crate::base::ElementId;
use crate::grammar::{ElementKind, Grammar};

/// Validate a grammar.
///
/// Cyclic rule diagnostics come first (declaration order), then unresolved
/// rule calls (element order).
pub fn check_grammar(grammar: &Grammar, options: &ValidationOptions) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if options.check_cycles {
        for cyclic in detect_cycles(grammar) {
            let mut diagnostic = CYCLIC_RULE
                .create(CyclicRuleProps {
                    rule: cyclic.rule,
                    path: cyclic.path,
                })
                .with_rule(cyclic.rule)
                .with_severity(options.cyclic_rule_severity)
                .map_properties(GrammarIssue::CyclicRule);
            if let Some(body) = grammar
                .parser_rule(cyclic.rule)
                .and_then(|rule| rule.alternatives)
            {
                diagnostic = diagnostic.with_element(body);
            }
            diagnostics.push(diagnostic);
        }
    }

    if options.check_unresolved_calls {
        for index in 0..grammar.element_count() {
            let id = ElementId::new(index as u32);
            if let ElementKind::RuleCall {
                name, rule: None, ..
            } = grammar.kind(id)
            {
                let caller = grammar.rule_of(id);
                let props = UnresolvedCallProps {
                    name: name.clone(),
                    caller: caller.map(|rule| grammar.rule(rule).name().clone()),
                };
                let mut diagnostic = UNRESOLVED_RULE_CALL
                    .create(props)
                    .with_element(id)
                    .map_properties(GrammarIssue::UnresolvedCall);
                if let Some(caller) = caller {
                    diagnostic = diagnostic.with_rule(caller);
                }
                diagnostics.push(diagnostic);
            }
        }
    }

    tracing::debug!(
        "[VALIDATION] {}: {} diagnostic(s)",
        grammar.name(),
        diagnostics.len()
    );
    diagnostics
}
