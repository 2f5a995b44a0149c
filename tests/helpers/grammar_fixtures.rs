//! Grammar fixtures built with `GrammarBuilder`.
//!
//! Each fixture documents the grammar it encodes in the textual notation.

use syster_grammar::analysis::find_first_features;
use syster_grammar::grammar::{AssignOperator, Grammar, GrammarBuilder};
use syster_grammar::{ElementId, RuleId};

/// First element whose label is `label`.
pub fn find(grammar: &Grammar, label: &str) -> ElementId {
    (0..grammar.element_count())
        .map(|index| ElementId::new(index as u32))
        .find(|&id| grammar.describe(id) == label)
        .unwrap_or_else(|| panic!("No element labelled {label}"))
}

pub fn rule(grammar: &Grammar, name: &str) -> RuleId {
    grammar
        .rule_by_name(name)
        .unwrap_or_else(|| panic!("No rule {name}"))
}

/// Body of a parser rule.
pub fn body(grammar: &Grammar, name: &str) -> ElementId {
    grammar
        .parser_rule(rule(grammar, name))
        .and_then(|rule| rule.alternatives)
        .unwrap_or_else(|| panic!("Rule {name} has no body"))
}

pub fn labels(grammar: &Grammar, ids: &[ElementId]) -> Vec<String> {
    grammar.describe_all(ids)
}

/// Labels of the first features of a rule body.
pub fn first_labels(grammar: &Grammar, rule_name: &str) -> Vec<String> {
    let features = find_first_features(grammar, Some(body(grammar, rule_name)));
    labels(grammar, &features)
}

/// ```text
/// Main: 'a' value=Value;
/// Value: INT | '(' Main ')';
/// ```
pub fn main_value() -> Grammar {
    let mut b = GrammarBuilder::new("MainValue");
    let a = b.keyword("a");
    let call = b.call("Value");
    let value = b.assign("value", call);
    let main = b.group([a, value]);
    b.parser_rule("Main", main);

    let int = b.call("INT");
    let open = b.keyword("(");
    let inner = b.call("Main");
    let close = b.keyword(")");
    let nested = b.group([open, inner, close]);
    let alts = b.alternatives([int, nested]);
    b.parser_rule("Value", alts);
    b.terminal_rule("INT");
    b.finish().unwrap()
}

/// ```text
/// Opt: name=ID? value=INT;
/// ```
pub fn optional_name() -> Grammar {
    let mut b = GrammarBuilder::new("Opt");
    let id = b.call("ID");
    let name = b.assign("name", id);
    b.opt(name);
    let int = b.call("INT");
    let value = b.assign("value", int);
    let body = b.group([name, value]);
    b.parser_rule("Opt", body);
    b.terminal_rule("ID");
    b.terminal_rule("INT");
    b.finish().unwrap()
}

/// ```text
/// Left: Left right=ID;
/// ```
pub fn direct_left_recursion() -> Grammar {
    let mut b = GrammarBuilder::new("Left");
    let call = b.call("Left");
    let id = b.call("ID");
    let right = b.assign("right", id);
    let body = b.group([call, right]);
    b.parser_rule("Left", body);
    b.terminal_rule("ID");
    b.finish().unwrap()
}

/// ```text
/// A: B;
/// B: A;
/// ```
pub fn mutual_recursion() -> Grammar {
    let mut b = GrammarBuilder::new("Mutual");
    let call_b = b.call("B");
    b.parser_rule("A", call_b);
    let call_a = b.call("A");
    b.parser_rule("B", call_a);
    b.finish().unwrap()
}

/// ```text
/// A: 'x' B?;
/// B: INT;
/// ```
pub fn guarded_recursion() -> Grammar {
    let mut b = GrammarBuilder::new("Guarded");
    let x = b.keyword("x");
    let call = b.call("B");
    b.opt(call);
    let body = b.group([x, call]);
    b.parser_rule("A", body);
    let int = b.call("INT");
    b.parser_rule("B", int);
    b.terminal_rule("INT");
    b.finish().unwrap()
}

/// ```text
/// Block: 'begin' items+=Item* 'end';
/// Item: 'item' name=ID;
/// ```
pub fn block_items() -> Grammar {
    let mut b = GrammarBuilder::new("Block");
    let begin = b.keyword("begin");
    let call = b.call("Item");
    let items = b.append("items", call);
    b.many(items);
    let end = b.keyword("end");
    let block = b.group([begin, items, end]);
    b.parser_rule("Block", block);

    let kw = b.keyword("item");
    let id = b.call("ID");
    let name = b.assign("name", id);
    let item = b.group([kw, name]);
    b.parser_rule("Item", item);
    b.terminal_rule("ID");
    b.finish().unwrap()
}

/// ```text
/// Expr: Primary ({Binary.left=current} op='+' right=Primary)*;
/// Primary: value=INT | '(' Expr ')';
/// ```
pub fn binary_expression() -> Grammar {
    let mut b = GrammarBuilder::new("Expr");
    let primary = b.call("Primary");
    let action = b.action_with_feature("Binary", "left", AssignOperator::Assign);
    let plus = b.keyword("+");
    let op = b.assign("op", plus);
    let right_call = b.call("Primary");
    let right = b.assign("right", right_call);
    let tail = b.group([action, op, right]);
    b.many(tail);
    let expr = b.group([primary, tail]);
    b.parser_rule("Expr", expr);

    let int = b.call("INT");
    let value = b.assign("value", int);
    let open = b.keyword("(");
    let inner = b.call("Expr");
    let close = b.keyword(")");
    let parens = b.group([open, inner, close]);
    let alts = b.alternatives([value, parens]);
    b.parser_rule("Primary", alts);
    b.terminal_rule("INT");
    b.finish().unwrap()
}

/// ```text
/// Main: 'a' value=Value 'b';
/// Value: 'x' name=ID?;
/// ```
pub fn nested_call() -> Grammar {
    let mut b = GrammarBuilder::new("Nested");
    let a = b.keyword("a");
    let call = b.call("Value");
    let value = b.assign("value", call);
    let kb = b.keyword("b");
    let main = b.group([a, value, kb]);
    b.parser_rule("Main", main);

    let x = b.keyword("x");
    let id = b.call("ID");
    let name = b.assign("name", id);
    b.opt(name);
    let inner = b.group([x, name]);
    b.parser_rule("Value", inner);
    b.terminal_rule("ID");
    b.finish().unwrap()
}

/// ```text
/// A: ({X} | {Y}) name=ID;
/// ```
pub fn converging_actions() -> Grammar {
    let mut b = GrammarBuilder::new("Converging");
    let x = b.action("X");
    let y = b.action("Y");
    let alts = b.alternatives([x, y]);
    let id = b.call("ID");
    let name = b.assign("name", id);
    let body = b.group([alts, name]);
    b.parser_rule("A", body);
    b.terminal_rule("ID");
    b.finish().unwrap()
}

/// ```text
/// A: {A} A 'x';
/// ```
pub fn action_left_recursion() -> Grammar {
    let mut b = GrammarBuilder::new("ActionLeft");
    let action = b.action("A");
    let call = b.call("A");
    let x = b.keyword("x");
    let body = b.group([action, call, x]);
    b.parser_rule("A", body);
    b.finish().unwrap()
}

/// ```text
/// R: ({R} a=ID?)? 'x';
/// ```
pub fn self_typed_optional_action() -> Grammar {
    let mut b = GrammarBuilder::new("OptionalAction");
    let action = b.action("R");
    let id = b.call("ID");
    let a = b.assign("a", id);
    b.opt(a);
    let inner = b.group([action, a]);
    b.opt(inner);
    let x = b.keyword("x");
    let body = b.group([inner, x]);
    b.parser_rule("R", body);
    b.terminal_rule("ID");
    b.finish().unwrap()
}
