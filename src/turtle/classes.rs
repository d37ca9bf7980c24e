use std::collections::HashSet;

use crate::errors::ConfigError;

/// Saves the turtle state.
pub const PUSH: char = '[';
/// Restores the last saved turtle state.
pub const POP: char = ']';

/// What the turtle does with one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Draw,
    Skip,
    TurnLeft,
    TurnRight,
    Push,
    Pop,
    Ignore,
}

/// # CharClasses
///
/// The four symbol classes that give an expanded L-system string its turtle
/// meaning. Membership decides the action, so a class may hold any number of
/// symbols (`"FG"` draws for both `F` and `G`). The classes are pairwise disjoint
/// and never contain the stack symbols `[` and `]`; [`CharClasses::new`] refuses
/// anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharClasses {
    draw: HashSet<char>,
    skip: HashSet<char>,
    turn_left: HashSet<char>,
    turn_right: HashSet<char>,
}

fn symbols(class: &str) -> HashSet<char> {
    class.chars().filter(|c| !c.is_whitespace()).collect()
}

impl CharClasses {
    pub fn new(
        draw: &str,
        skip: &str,
        turn_left: &str,
        turn_right: &str,
    ) -> Result<CharClasses, ConfigError> {
        let classes = CharClasses {
            draw: symbols(draw),
            skip: symbols(skip),
            turn_left: symbols(turn_left),
            turn_right: symbols(turn_right),
        };
        classes.validate()?;
        Ok(classes)
    }

    fn named(&self) -> [(&'static str, &HashSet<char>); 4] {
        [
            ("draw", &self.draw),
            ("skip", &self.skip),
            ("turn left", &self.turn_left),
            ("turn right", &self.turn_right),
        ]
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let named = self.named();
        for (i, &(first, a)) in named.iter().enumerate() {
            if let Some(&symbol) = a.iter().find(|c| **c == PUSH || **c == POP) {
                return Err(ConfigError::ReservedSymbol { symbol, class: first });
            }
            for &(second, b) in &named[i + 1..] {
                // Sorted so the error names the same symbol on every run.
                let mut shared: Vec<char> = a.intersection(b).copied().collect();
                shared.sort_unstable();
                if let Some(&symbol) = shared.first() {
                    return Err(ConfigError::OverlappingCharClasses {
                        symbol,
                        first,
                        second,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn action(&self, symbol: char) -> Action {
        if self.draw.contains(&symbol) {
            Action::Draw
        } else if self.skip.contains(&symbol) {
            Action::Skip
        } else if self.turn_left.contains(&symbol) {
            Action::TurnLeft
        } else if self.turn_right.contains(&symbol) {
            Action::TurnRight
        } else if symbol == PUSH {
            Action::Push
        } else if symbol == POP {
            Action::Pop
        } else {
            Action::Ignore
        }
    }

    /// Number of symbols in `path` that produce a line.
    pub fn count_draws(&self, path: &str) -> usize {
        path.chars().filter(|c| self.draw.contains(c)).count()
    }
}
