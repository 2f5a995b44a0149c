//! Grammar analysis — first/next feature sets and cyclic rule detection.
//!
//! ## Engines
//!
//! - [`first_features`] — what can start a grammar fragment
//! - [`next_features`] — what can follow a cursor position (FOLLOW set)
//! - [`detect_cycles`] — which rules the two engines above must not be run on
//!
//! The first two are mutually recursive (actions are transparent, so their
//! first features are their next features) and carry no recursion guard.
//! Run [`detect_cycles`] once per grammar and keep cyclic rules away from
//! them.
//!
//! Every query threads a [`CardinalityOverlay`] through all calls. The
//! `find_*` entry points allocate a fresh one per call; nothing is cached
//! between queries.
//!
//! ```
//! use syster_grammar::analysis::{detect_cycles, find_first_features};
//! use syster_grammar::grammar::GrammarBuilder;
//!
//! // Opt: name=ID? value=INT;
//! let mut b = GrammarBuilder::new("Example");
//! let id = b.call("ID");
//! let name = b.assign("name", id);
//! b.opt(name);
//! let int = b.call("INT");
//! let value = b.assign("value", int);
//! let body = b.group([name, value]);
//! b.parser_rule("Opt", body);
//! b.terminal_rule("ID");
//! b.terminal_rule("INT");
//! let grammar = b.finish().unwrap();
//!
//! assert!(detect_cycles(&grammar).is_empty());
//! assert_eq!(find_first_features(&grammar, Some(body)), vec![id, int]);
//! ```

mod cycles;
mod first;
mod follow;
mod overlay;

pub use cycles::{CycleDetector, CyclicRule, RuleMemo, RuleVerdict, detect_cycles};
pub use first::{find_first_features, first_features};
pub use follow::{find_next_features, next_features};
pub use overlay::CardinalityOverlay;
