//! Bottom-up construction of a [`Grammar`].

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::cardinality::Cardinality;
use super::element::{AssignOperator, Element, ElementKind};
use super::error::GrammarError;
use super::model::Grammar;
use super::rule::{ParserRule, Rule, TerminalRule};
use crate::base::{ElementId, RuleId};

/// Builds a grammar arena.
///
/// Leaves are created first; composite constructors adopt the given
/// children and set their container. Rule calls are resolved by name in
/// [`finish`](Self::finish), so rules may be declared in any order.
///
/// Invalid adoptions are recorded and reported by `finish` rather than at
/// each call, which keeps grammar fixtures readable:
///
/// ```
/// use syster_grammar::grammar::GrammarBuilder;
///
/// let mut b = GrammarBuilder::new("Example");
/// let kw = b.keyword("a");
/// let int = b.call("INT");
/// let value = b.assign("value", int);
/// let body = b.group([kw, value]);
/// b.parser_rule("Main", body);
/// b.terminal_rule("INT");
/// let grammar = b.finish().unwrap();
/// assert_eq!(grammar.parser_rules().count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    name: SmolStr,
    elements: Vec<Element>,
    rules: Vec<Rule>,
    by_name: IndexMap<SmolStr, RuleId>,
    body_owner: FxHashMap<ElementId, RuleId>,
    error: Option<GrammarError>,
}

impl GrammarBuilder {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    // ========================================================================
    // LEAVES
    // ========================================================================

    pub fn keyword(&mut self, value: impl Into<SmolStr>) -> ElementId {
        self.push(ElementKind::Keyword {
            value: value.into(),
        })
    }

    /// Call of a parser or terminal rule, resolved by name on `finish`.
    pub fn call(&mut self, name: impl Into<SmolStr>) -> ElementId {
        self.call_with_args(name, Vec::<SmolStr>::new())
    }

    pub fn call_with_args(
        &mut self,
        name: impl Into<SmolStr>,
        arguments: impl IntoIterator<Item = impl Into<SmolStr>>,
    ) -> ElementId {
        self.push(ElementKind::RuleCall {
            name: name.into(),
            rule: None,
            arguments: arguments.into_iter().map(Into::into).collect(),
        })
    }

    /// `{Type}`
    pub fn action(&mut self, type_name: impl Into<SmolStr>) -> ElementId {
        self.push(ElementKind::Action {
            type_name: type_name.into(),
            feature: None,
            operator: None,
        })
    }

    /// `{Type.feature=current}` / `{Type.feature+=current}`
    pub fn action_with_feature(
        &mut self,
        type_name: impl Into<SmolStr>,
        feature: impl Into<SmolStr>,
        operator: AssignOperator,
    ) -> ElementId {
        self.push(ElementKind::Action {
            type_name: type_name.into(),
            feature: Some(feature.into()),
            operator: Some(operator),
        })
    }

    pub fn char_range(
        &mut self,
        left: impl Into<SmolStr>,
        right: Option<impl Into<SmolStr>>,
    ) -> ElementId {
        self.push(ElementKind::CharacterRange {
            left: left.into(),
            right: right.map(Into::into),
        })
    }

    pub fn wildcard(&mut self) -> ElementId {
        self.push(ElementKind::Wildcard)
    }

    pub fn parameter_ref(&mut self, parameter: impl Into<SmolStr>) -> ElementId {
        self.push(ElementKind::ParameterReference {
            parameter: parameter.into(),
        })
    }

    // ========================================================================
    // COMPOSITES
    // ========================================================================

    pub fn group(&mut self, children: impl IntoIterator<Item = ElementId>) -> ElementId {
        let elements = children.into_iter().collect();
        self.compose(|elements| ElementKind::Group { elements }, elements)
    }

    pub fn alternatives(&mut self, children: impl IntoIterator<Item = ElementId>) -> ElementId {
        let elements = children.into_iter().collect();
        self.compose(|elements| ElementKind::Alternatives { elements }, elements)
    }

    pub fn unordered_group(&mut self, children: impl IntoIterator<Item = ElementId>) -> ElementId {
        let elements = children.into_iter().collect();
        self.compose(|elements| ElementKind::UnorderedGroup { elements }, elements)
    }

    pub fn assignment(
        &mut self,
        feature: impl Into<SmolStr>,
        operator: AssignOperator,
        terminal: ElementId,
    ) -> ElementId {
        let feature = feature.into();
        let id = self.push(ElementKind::Assignment {
            feature,
            operator,
            terminal: Some(terminal),
        });
        self.adopt(id, terminal);
        id
    }

    /// `feature=terminal`
    pub fn assign(&mut self, feature: impl Into<SmolStr>, terminal: ElementId) -> ElementId {
        self.assignment(feature, AssignOperator::Assign, terminal)
    }

    /// `feature+=terminal`
    pub fn append(&mut self, feature: impl Into<SmolStr>, terminal: ElementId) -> ElementId {
        self.assignment(feature, AssignOperator::Append, terminal)
    }

    /// `feature?=terminal`
    pub fn flag(&mut self, feature: impl Into<SmolStr>, terminal: ElementId) -> ElementId {
        self.assignment(feature, AssignOperator::Flag, terminal)
    }

    /// `[Type:terminal]`, or `[Type]` when `terminal` is `None`.
    pub fn cross_ref(
        &mut self,
        type_name: impl Into<SmolStr>,
        terminal: Option<ElementId>,
    ) -> ElementId {
        let id = self.push(ElementKind::CrossReference {
            type_name: type_name.into(),
            terminal,
        });
        if let Some(terminal) = terminal {
            self.adopt(id, terminal);
        }
        id
    }

    // ========================================================================
    // CARDINALITY
    // ========================================================================

    pub fn with_cardinality(&mut self, id: ElementId, cardinality: Cardinality) -> ElementId {
        match self.elements.get_mut(id.index()) {
            Some(element) => element.cardinality = cardinality,
            None => self.fail(GrammarError::UnknownElement(id)),
        }
        id
    }

    /// `element?`
    pub fn opt(&mut self, id: ElementId) -> ElementId {
        self.with_cardinality(id, Cardinality::Optional)
    }

    /// `element*`
    pub fn many(&mut self, id: ElementId) -> ElementId {
        self.with_cardinality(id, Cardinality::ZeroOrMore)
    }

    /// `element+`
    pub fn some(&mut self, id: ElementId) -> ElementId {
        self.with_cardinality(id, Cardinality::OneOrMore)
    }

    // ========================================================================
    // RULES
    // ========================================================================

    pub fn parser_rule(&mut self, name: impl Into<SmolStr>, body: ElementId) -> RuleId {
        self.add_parser_rule(ParserRule::new(name, Some(body)))
    }

    pub fn add_parser_rule(&mut self, rule: ParserRule) -> RuleId {
        let id = RuleId::new(self.rules.len() as u32);
        if let Some(body) = rule.alternatives {
            self.claim_body(id, body);
        }
        self.register(id, rule.name.clone());
        self.rules.push(Rule::Parser(rule));
        id
    }

    pub fn terminal_rule(&mut self, name: impl Into<SmolStr>) -> RuleId {
        self.add_terminal_rule(TerminalRule {
            name: name.into(),
            hidden: false,
            return_type: None,
        })
    }

    pub fn add_terminal_rule(&mut self, rule: TerminalRule) -> RuleId {
        let id = RuleId::new(self.rules.len() as u32);
        self.register(id, rule.name.clone());
        self.rules.push(Rule::Terminal(rule));
        id
    }

    /// Resolve rule calls and freeze the arena.
    ///
    /// Calls naming an unknown rule stay unresolved; the analysis treats them
    /// as opaque leaves.
    pub fn finish(mut self) -> Result<Grammar, GrammarError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        for element in &mut self.elements {
            if let ElementKind::RuleCall { name, rule, .. } = &mut element.kind {
                *rule = self.by_name.get(name.as_str()).copied();
                if rule.is_none() {
                    tracing::debug!("Unresolved rule call: {}", name);
                }
            }
        }
        Ok(Grammar {
            name: self.name,
            elements: self.elements,
            rules: self.rules,
            by_name: self.by_name,
            body_owner: self.body_owner,
        })
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    fn push(&mut self, kind: ElementKind) -> ElementId {
        let id = ElementId::new(self.elements.len() as u32);
        self.elements.push(Element {
            kind,
            cardinality: Cardinality::None,
            container: None,
        });
        id
    }

    fn compose(
        &mut self,
        make: impl FnOnce(Vec<ElementId>) -> ElementKind,
        children: Vec<ElementId>,
    ) -> ElementId {
        let id = self.push(make(children.clone()));
        for child in children {
            self.adopt(id, child);
        }
        id
    }

    fn adopt(&mut self, parent: ElementId, child: ElementId) {
        if self.body_owner.contains_key(&child) {
            self.fail(GrammarError::NestedRuleBody(child));
            return;
        }
        match self.elements.get_mut(child.index()) {
            None => self.fail(GrammarError::UnknownElement(child)),
            Some(Element {
                container: Some(existing),
                ..
            }) => {
                let existing = *existing;
                self.fail(GrammarError::AlreadyContained {
                    element: child,
                    container: existing,
                });
            }
            Some(element) => element.container = Some(parent),
        }
    }

    fn claim_body(&mut self, rule: RuleId, body: ElementId) {
        let Some(element) = self.elements.get(body.index()) else {
            self.fail(GrammarError::UnknownElement(body));
            return;
        };
        if element.container.is_some() {
            self.fail(GrammarError::NestedRuleBody(body));
            return;
        }
        if let Some(owner) = self.body_owner.get(&body) {
            let owner_name = self.rules[owner.index()].name().clone();
            self.fail(GrammarError::SharedRuleBody(body, owner_name));
            return;
        }
        self.body_owner.insert(body, rule);
    }

    fn register(&mut self, id: RuleId, name: SmolStr) {
        if self.by_name.contains_key(&name) {
            self.fail(GrammarError::DuplicateRule(name));
            return;
        }
        self.by_name.insert(name, id);
    }

    fn fail(&mut self, error: GrammarError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}
