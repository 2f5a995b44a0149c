//! The immutable grammar arena.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::cardinality::Cardinality;
use super::element::{Element, ElementKind};
use super::rule::{ParserRule, Rule};
use crate::base::{ElementId, RuleId};

/// A loaded grammar: rules plus the arena of all their elements.
///
/// Built once by [`GrammarBuilder`](super::GrammarBuilder) and read-only
/// afterwards. Elements refer to each other (children, containers, call
/// targets) only through [`ElementId`] and [`RuleId`] handles.
#[derive(Clone, Debug)]
pub struct Grammar {
    pub(super) name: SmolStr,
    pub(super) elements: Vec<Element>,
    pub(super) rules: Vec<Rule>,
    /// Rule name -> rule (insertion order = declaration order).
    pub(super) by_name: IndexMap<SmolStr, RuleId>,
    /// Rule body element -> owning rule.
    pub(super) body_owner: FxHashMap<ElementId, RuleId>,
}

impl Grammar {
    pub fn name(&self) -> &SmolStr {
        &self.name
    }

    /// Look up an element.
    ///
    /// # Panics
    /// If `id` was not issued for this grammar.
    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.index()]
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    pub fn kind(&self, id: ElementId) -> &ElementKind {
        &self.element(id).kind
    }

    /// Intrinsic cardinality of an element.
    pub fn cardinality(&self, id: ElementId) -> Cardinality {
        self.element(id).cardinality
    }

    pub fn container(&self, id: ElementId) -> Option<ElementId> {
        self.element(id).container
    }

    pub fn children(&self, id: ElementId) -> Vec<ElementId> {
        self.element(id).kind.children()
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn rule(&self, id: RuleId) -> &Rule {
        &self.rules[id.index()]
    }

    /// All rules with their ids, in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = (RuleId, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, rule)| (RuleId::new(i as u32), rule))
    }

    /// Parser rules only, in declaration order.
    pub fn parser_rules(&self) -> impl Iterator<Item = (RuleId, &ParserRule)> {
        self.rules()
            .filter_map(|(id, rule)| rule.as_parser().map(|parser| (id, parser)))
    }

    pub fn parser_rule(&self, id: RuleId) -> Option<&ParserRule> {
        self.rules.get(id.index()).and_then(Rule::as_parser)
    }

    pub fn rule_by_name(&self, name: &str) -> Option<RuleId> {
        self.by_name.get(name).copied()
    }

    /// The parser rule a rule call resolves to.
    ///
    /// `None` for non-calls, unresolved calls and calls of terminal rules.
    pub fn resolve_call(&self, id: ElementId) -> Option<(RuleId, &ParserRule)> {
        match &self.element(id).kind {
            ElementKind::RuleCall {
                rule: Some(target), ..
            } => self.parser_rule(*target).map(|rule| (*target, rule)),
            _ => None,
        }
    }

    /// The rule whose body (transitively) contains `id`.
    pub fn rule_of(&self, id: ElementId) -> Option<RuleId> {
        let mut current = id;
        while let Some(container) = self.container(current) {
            current = container;
        }
        self.body_owner.get(&current).copied()
    }

    /// Short human-readable label of an element, e.g. `'a'`, `INT`,
    /// `value=`, `{Type}`.
    pub fn describe(&self, id: ElementId) -> String {
        let element = self.element(id);
        let label = match &element.kind {
            ElementKind::Keyword { value } => format!("'{value}'"),
            ElementKind::RuleCall { name, .. } => name.to_string(),
            ElementKind::Assignment {
                feature, operator, ..
            } => format!("{feature}{}", operator.as_str()),
            ElementKind::Action {
                type_name,
                feature: Some(feature),
                operator,
            } => format!(
                "{{{type_name}.{feature}{}current}}",
                operator.map(|op| op.as_str()).unwrap_or("=")
            ),
            ElementKind::Action { type_name, .. } => format!("{{{type_name}}}"),
            ElementKind::CrossReference { type_name, .. } => format!("[{type_name}]"),
            ElementKind::CharacterRange {
                left,
                right: Some(right),
            } => format!("'{left}'..'{right}'"),
            ElementKind::CharacterRange { left, right: None } => format!("'{left}'"),
            ElementKind::Wildcard => ".".to_string(),
            ElementKind::ParameterReference { parameter } => parameter.to_string(),
            other => other.name().to_string(),
        };
        format!("{label}{}", element.cardinality)
    }

    /// [`describe`](Self::describe) for a list of elements.
    pub fn describe_all(&self, ids: &[ElementId]) -> Vec<String> {
        ids.iter().map(|&id| self.describe(id)).collect()
    }
}
