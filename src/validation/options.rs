//! Validation options

use super::diagnostics::Severity;

/// Which grammar checks to run and how to report them.
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// Report parser rules that can reach themselves before consuming a token.
    pub check_cycles: bool,
    /// Severity of cyclic rule diagnostics.
    pub cyclic_rule_severity: Severity,
    /// Report rule calls that name no rule of the grammar.
    pub check_unresolved_calls: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            check_cycles: true,
            cyclic_rule_severity: Severity::Error,
            check_unresolved_calls: true,
        }
    }
}
