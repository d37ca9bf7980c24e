//! Parsing and validation of `predecessor -> successor` rule lines.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::LSystem;
use crate::errors::{LSystemError, RuleError, RuleErrorKind};

/// Separator between predecessor and successor in a rule line.
pub const RULE_SEPARATOR: &str = "->";

/// Symbols a [`Alphabet::Restricted`] successor may use besides the alphabet itself.
pub const RESTRICTED_TURNS: [char; 2] = ['+', '-'];

/// Which symbols a rule may mention.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub enum Alphabet {
    /// Any single character may be a predecessor, successors are free-form.
    #[default]
    Unrestricted,
    /// Predecessors must come from the list; successors may only use the list plus
    /// [`RESTRICTED_TURNS`].
    Restricted(Vec<char>),
}

impl Alphabet {
    /// The draw (`F`) / skip (`f`) alphabet of the simple DOL demo.
    pub fn koch() -> Alphabet {
        Alphabet::Restricted(vec!['F', 'f'])
    }

    fn check_predecessor(&self, symbol: char) -> Result<(), RuleErrorKind> {
        match self {
            Alphabet::Unrestricted => Ok(()),
            Alphabet::Restricted(symbols) if symbols.contains(&symbol) => Ok(()),
            Alphabet::Restricted(_) => Err(RuleErrorKind::DisallowedSymbol(symbol)),
        }
    }

    fn check_successor(&self, successor: &str) -> Result<(), RuleErrorKind> {
        match self {
            Alphabet::Unrestricted => Ok(()),
            Alphabet::Restricted(symbols) => match successor
                .chars()
                .find(|c| !symbols.contains(c) && !RESTRICTED_TURNS.contains(c))
            {
                Some(c) => Err(RuleErrorKind::DisallowedSymbol(c)),
                None => Ok(()),
            },
        }
    }
}

/// What to do with the rest of the rule list when one line fails validation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidRulePolicy {
    /// Any invalid rule fails the whole rule set.
    #[default]
    AbortAll,
    /// Invalid rules are reported and left out; the valid ones are used.
    SkipInvalid,
}

/// A single rewrite rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub predecessor: char,
    pub successor: String,
}

impl Rule {
    /// Parses `line` and checks both sides against `alphabet`. Whitespace in the
    /// successor carries no meaning for the turtle and is dropped.
    pub fn parse(line: &str, alphabet: &Alphabet) -> Result<Rule, RuleErrorKind> {
        let parts: Vec<&str> = line.split(RULE_SEPARATOR).collect();
        let [predecessor, successor] = parts.as_slice() else {
            return Err(RuleErrorKind::SeparatorCount(parts.len() - 1));
        };

        let predecessor = predecessor.trim();
        let mut chars = predecessor.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(symbol), None) => symbol,
            _ => return Err(RuleErrorKind::PredecessorLength(predecessor.to_string())),
        };
        alphabet.check_predecessor(symbol)?;

        let successor: String = successor.chars().filter(|c| !c.is_whitespace()).collect();
        alphabet.check_successor(&successor)?;

        Ok(Rule {
            predecessor: symbol,
            successor,
        })
    }
}

impl FromStr for Rule {
    type Err = RuleErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::parse(s, &Alphabet::Unrestricted)
    }
}

/// The rules that survived validation, plus the ones that were skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    pub rules: HashMap<char, String>,
    pub skipped: Vec<RuleError>,
}

impl RuleSet {
    /// Parses every line. Later rules for the same predecessor replace earlier ones.
    ///
    /// With [`InvalidRulePolicy::AbortAll`] any bad line yields
    /// [`LSystemError::InvalidRules`] listing every bad line; with
    /// [`InvalidRulePolicy::SkipInvalid`] they end up in [`RuleSet::skipped`].
    pub fn parse<S: AsRef<str>>(
        lines: &[S],
        alphabet: &Alphabet,
        policy: InvalidRulePolicy,
    ) -> Result<RuleSet, LSystemError> {
        let mut set = RuleSet::default();
        for (index, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            match Rule::parse(line, alphabet) {
                Ok(rule) => {
                    if let Some(previous) = set.rules.insert(rule.predecessor, rule.successor) {
                        warn!(
                            index,
                            predecessor = %rule.predecessor,
                            replaced = %previous,
                            "duplicate rule replaces an earlier one"
                        );
                    }
                }
                Err(kind) => set.skipped.push(RuleError {
                    index,
                    rule: line.to_string(),
                    kind,
                }),
            }
        }

        if set.skipped.is_empty() {
            return Ok(set);
        }
        match policy {
            InvalidRulePolicy::AbortAll => Err(LSystemError::InvalidRules(set.skipped)),
            InvalidRulePolicy::SkipInvalid => {
                for err in &set.skipped {
                    warn!(index = err.index, "skipping invalid rule: {}", err.kind);
                }
                Ok(set)
            }
        }
    }

    pub fn into_lsystem(self, axiom: &str) -> LSystem {
        LSystem::new(axiom, self.rules)
    }
}
