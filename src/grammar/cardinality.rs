//! Element cardinality annotations (`?`, `*`, `+`).

use std::fmt;
use std::str::FromStr;

use super::error::GrammarError;

/// Cardinality of a grammar element, fixed when the grammar is authored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cardinality {
    /// Exactly once (no suffix).
    #[default]
    None,
    /// `?`
    Optional,
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
}

impl Cardinality {
    /// The element may be skipped (`?` or `*`).
    pub fn is_optional(self) -> bool {
        matches!(self, Cardinality::Optional | Cardinality::ZeroOrMore)
    }

    /// The element may occur more than once (`*` or `+`).
    pub fn is_repeatable(self) -> bool {
        matches!(self, Cardinality::ZeroOrMore | Cardinality::OneOrMore)
    }

    /// Grammar suffix for this cardinality.
    pub fn symbol(self) -> &'static str {
        match self {
            Cardinality::None => "",
            Cardinality::Optional => "?",
            Cardinality::ZeroOrMore => "*",
            Cardinality::OneOrMore => "+",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Cardinality {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Cardinality::None),
            "?" => Ok(Cardinality::Optional),
            "*" => Ok(Cardinality::ZeroOrMore),
            "+" => Ok(Cardinality::OneOrMore),
            other => Err(GrammarError::InvalidCardinality(other.to_string())),
        }
    }
}
