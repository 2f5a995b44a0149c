//! Diagnostic definitions for grammar validation.

use smol_str::SmolStr;

use crate::base::{ElementId, RuleId};

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
            Severity::Hint => 4,
        }
    }

    /// Prefix of diagnostic codes with this severity.
    pub fn code_prefix(&self) -> &'static str {
        match self {
            Severity::Error => "ERR",
            Severity::Warning => "WARN",
            Severity::Info => "INFO",
            Severity::Hint => "HINT",
        }
    }
}

/// A grammar diagnostic ready to be turned into an editor message.
///
/// `properties` keeps the raw data the message was rendered from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrammarDiagnostic<P> {
    /// Stable code, e.g. `ERR0001`.
    pub code: SmolStr,
    pub severity: Severity,
    pub message: String,
    pub properties: P,
    /// Rule the diagnostic is about.
    pub rule: Option<RuleId>,
    /// Element the diagnostic is anchored to.
    pub element: Option<ElementId>,
}

/// Properties of any diagnostic produced by grammar validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GrammarIssue {
    CyclicRule(CyclicRuleProps),
    UnresolvedCall(UnresolvedCallProps),
}

/// A diagnostic as reported by [`check_grammar`](super::check_grammar).
pub type Diagnostic = GrammarDiagnostic<GrammarIssue>;

impl<P> GrammarDiagnostic<P> {
    /// Convert the properties, keeping everything else.
    pub fn map_properties<Q>(self, f: impl FnOnce(P) -> Q) -> GrammarDiagnostic<Q> {
        GrammarDiagnostic {
            code: self.code,
            severity: self.severity,
            message: self.message,
            properties: f(self.properties),
            rule: self.rule,
            element: self.element,
        }
    }

    pub fn with_rule(mut self, rule: RuleId) -> Self {
        self.rule = Some(rule);
        self
    }

    pub fn with_element(mut self, element: ElementId) -> Self {
        self.element = Some(element);
        self
    }

    /// Override the severity, keeping the code.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

/// A diagnostic kind: severity, numeric id and message template over
/// properties `P`.
///
/// ```
/// use syster_grammar::validation::{DiagnosticDef, Severity};
///
/// struct Props {
///     name: &'static str,
/// }
///
/// const EXAMPLE: DiagnosticDef<Props> =
///     DiagnosticDef::new(Severity::Warning, 1, |p| format!("Example for {}", p.name));
///
/// let diagnostic = EXAMPLE.create(Props { name: "Markus" });
/// assert_eq!(diagnostic.code, "WARN0001");
/// assert_eq!(diagnostic.message, "Example for Markus");
/// assert_eq!(diagnostic.properties.name, "Markus");
/// ```
pub struct DiagnosticDef<P> {
    severity: Severity,
    id: u16,
    template: fn(&P) -> String,
}

impl<P> DiagnosticDef<P> {
    pub const fn new(severity: Severity, id: u16, template: fn(&P) -> String) -> Self {
        Self {
            severity,
            id,
            template,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Severity prefix followed by the zero-padded four-digit id.
    pub fn code(&self) -> SmolStr {
        SmolStr::new(format!("{}{:04}", self.severity.code_prefix(), self.id))
    }

    pub fn message(&self, properties: &P) -> String {
        (self.template)(properties)
    }

    pub fn create(&self, properties: P) -> GrammarDiagnostic<P> {
        GrammarDiagnostic {
            code: self.code(),
            severity: self.severity,
            message: self.message(&properties),
            properties,
            rule: None,
            element: None,
        }
    }
}

// ============================================================================
// GRAMMAR DIAGNOSTICS
// ============================================================================

/// Properties of [`CYCLIC_RULE`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CyclicRuleProps {
    pub rule: RuleId,
    pub path: SmolStr,
}

/// Properties of [`UNRESOLVED_RULE_CALL`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnresolvedCallProps {
    pub name: SmolStr,
    pub caller: Option<SmolStr>,
}

/// A parser rule can reach itself before consuming any token.
pub const CYCLIC_RULE: DiagnosticDef<CyclicRuleProps> = DiagnosticDef::new(
    Severity::Error,
    1,
    |props| {
        format!(
            "Rule {} is cyclic: it can reach itself before consuming any token",
            props.path
        )
    },
);

/// A rule call names no rule of the grammar.
pub const UNRESOLVED_RULE_CALL: DiagnosticDef<UnresolvedCallProps> = DiagnosticDef::new(
    Severity::Warning,
    1,
    |props| match &props.caller {
        Some(caller) => format!("Could not resolve rule {} called from {}", props.name, caller),
        None => format!("Could not resolve rule {}", props.name),
    },
);
