//! Grammar elements: the nodes of a rule body.

use smol_str::SmolStr;

use super::cardinality::Cardinality;
use crate::base::{ElementId, RuleId};

/// Operator of an assignment or a tree-rewriting action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AssignOperator {
    /// `=`
    #[default]
    Assign,
    /// `+=`
    Append,
    /// `?=`
    Flag,
}

impl AssignOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignOperator::Assign => "=",
            AssignOperator::Append => "+=",
            AssignOperator::Flag => "?=",
        }
    }
}

/// The variant-specific part of a grammar element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// Ordered sequence `a b c`.
    Group { elements: Vec<ElementId> },
    /// Choice `a | b | c`.
    Alternatives { elements: Vec<ElementId> },
    /// Unordered sequence `a & b & c`. Not supported by the analysis.
    UnorderedGroup { elements: Vec<ElementId> },
    /// `feature=terminal`, `feature+=terminal`, `feature?=terminal`.
    Assignment {
        feature: SmolStr,
        operator: AssignOperator,
        terminal: Option<ElementId>,
    },
    /// `{Type}` or `{Type.feature=current}`. Consumes no input.
    Action {
        type_name: SmolStr,
        feature: Option<SmolStr>,
        operator: Option<AssignOperator>,
    },
    /// Call of another rule by name. `rule` is `None` when unresolved.
    RuleCall {
        name: SmolStr,
        rule: Option<RuleId>,
        arguments: Vec<SmolStr>,
    },
    /// `'text'`
    Keyword { value: SmolStr },
    /// `[Type:TERMINAL]`
    CrossReference {
        type_name: SmolStr,
        terminal: Option<ElementId>,
    },
    /// `'a'..'z'`
    CharacterRange { left: SmolStr, right: Option<SmolStr> },
    /// `.`
    Wildcard,
    /// Reference to a rule parameter inside a guard condition.
    ParameterReference { parameter: SmolStr },
}

impl ElementKind {
    /// Child elements in source order.
    pub fn children(&self) -> Vec<ElementId> {
        match self {
            ElementKind::Group { elements }
            | ElementKind::Alternatives { elements }
            | ElementKind::UnorderedGroup { elements } => elements.clone(),
            ElementKind::Assignment { terminal, .. }
            | ElementKind::CrossReference { terminal, .. } => terminal.iter().copied().collect(),
            _ => Vec::new(),
        }
    }

    /// Short name of the variant, used in logs and debug output.
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Group { .. } => "Group",
            ElementKind::Alternatives { .. } => "Alternatives",
            ElementKind::UnorderedGroup { .. } => "UnorderedGroup",
            ElementKind::Assignment { .. } => "Assignment",
            ElementKind::Action { .. } => "Action",
            ElementKind::RuleCall { .. } => "RuleCall",
            ElementKind::Keyword { .. } => "Keyword",
            ElementKind::CrossReference { .. } => "CrossReference",
            ElementKind::CharacterRange { .. } => "CharacterRange",
            ElementKind::Wildcard => "Wildcard",
            ElementKind::ParameterReference { .. } => "ParameterReference",
        }
    }
}

/// A node of a rule body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    /// Intrinsic cardinality as written in the grammar.
    pub cardinality: Cardinality,
    /// Immediately enclosing element; `None` for a rule body.
    /// Navigational only, ownership is the arena's.
    pub container: Option<ElementId>,
}

impl Element {
    pub fn is_group(&self) -> bool {
        matches!(self.kind, ElementKind::Group { .. })
    }
}
