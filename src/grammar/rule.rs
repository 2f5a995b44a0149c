//! Parser and terminal rules.

use smol_str::SmolStr;

use crate::base::ElementId;

/// A declared parameter of a parser rule, `Rule<Param>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub name: SmolStr,
}

/// A parser rule: named entry whose body is `alternatives`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserRule {
    pub name: SmolStr,
    /// Rule body. `None` while the rule is being edited into shape.
    pub alternatives: Option<ElementId>,
    pub return_type: Option<SmolStr>,
    pub inferred_type: Option<SmolStr>,
    pub parameters: Vec<Parameter>,
    pub entry: bool,
    pub fragment: bool,
}

impl ParserRule {
    pub fn new(name: impl Into<SmolStr>, alternatives: Option<ElementId>) -> Self {
        Self {
            name: name.into(),
            alternatives,
            return_type: None,
            inferred_type: None,
            parameters: Vec::new(),
            entry: false,
            fragment: false,
        }
    }

    /// The AST type this rule produces.
    pub fn type_name(&self) -> &SmolStr {
        self.return_type
            .as_ref()
            .or(self.inferred_type.as_ref())
            .unwrap_or(&self.name)
    }
}

/// A terminal (token) rule such as `ID` or `INT`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalRule {
    pub name: SmolStr,
    pub hidden: bool,
    pub return_type: Option<SmolStr>,
}

/// Any rule of a grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    Parser(ParserRule),
    Terminal(TerminalRule),
}

impl Rule {
    pub fn name(&self) -> &SmolStr {
        match self {
            Rule::Parser(rule) => &rule.name,
            Rule::Terminal(rule) => &rule.name,
        }
    }

    pub fn as_parser(&self) -> Option<&ParserRule> {
        match self {
            Rule::Parser(rule) => Some(rule),
            Rule::Terminal(_) => None,
        }
    }
}
