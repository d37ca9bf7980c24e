use thiserror::Error;

/// What is wrong with a single rule line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleErrorKind {
    /// The line did not split into exactly `predecessor` and `successor` on `->`.
    #[error("expected exactly one `->` separator, found {0}")]
    SeparatorCount(usize),
    /// The trimmed predecessor was empty or longer than one character.
    #[error("predecessor must be exactly one character, found {0:?}")]
    PredecessorLength(String),
    /// Only raised when the rule set is parsed against a restricted alphabet.
    #[error("symbol {0:?} is not in the permitted alphabet")]
    DisallowedSymbol(char),
}

impl RuleErrorKind {
    /// True for the structural problems (bad separator or predecessor), false for
    /// alphabet violations.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, RuleErrorKind::DisallowedSymbol(_))
    }
}

/// A rejected rule, with enough identity for the caller to flag the offending line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("rule {index} `{rule}`: {kind}")]
pub struct RuleError {
    /// Position of the rule in the list it was parsed from.
    pub index: usize,
    /// The raw rule text.
    pub rule: String,
    pub kind: RuleErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurtleError {
    #[error("Popping from an empty turtle stack.")]
    PoppedEmptyStack,
    /// A `]` without a matching `[`; `index` is the character offset in the walked path.
    #[error("unbalanced `]` at symbol {index}: the turtle stack is empty")]
    UnbalancedStack { index: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("iteration count {0} exceeds the maximum of {max}", max = crate::config::MAX_ITERATIONS)]
    IterationsOutOfRange(u32),
    #[error("{name} of {value}° is outside [-{max}, {max}]", max = crate::config::MAX_ANGLE)]
    AngleOutOfRange { name: &'static str, value: f64 },
    #[error("symbol {symbol:?} is in both the {first} and {second} character classes")]
    OverlappingCharClasses {
        symbol: char,
        first: &'static str,
        second: &'static str,
    },
    #[error("symbol {symbol:?} is reserved for the turtle stack and cannot be a {class} character")]
    ReservedSymbol { symbol: char, class: &'static str },
    #[error("no preset named {0:?}")]
    UnknownPreset(String),
    #[error("no rule at index {index} (the list has {len})")]
    RuleIndexOutOfRange { index: usize, len: usize },
    #[error("could not parse configuration: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("could not serialize configuration: {0}")]
    Serialize(#[from] ron::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything that can stop a refresh pass.
#[derive(Debug, Error)]
pub enum LSystemError {
    #[error("{} invalid rule(s): {}", .0.len(), describe_rules(.0))]
    InvalidRules(Vec<RuleError>),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Turtle(#[from] TurtleError),
}

fn describe_rules(errors: &[RuleError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<String>>()
        .join("; ")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SvgCreationError {
    #[error("Empty/Invalid/Dimensionless geometry")]
    UndefinedViewBox,
}
