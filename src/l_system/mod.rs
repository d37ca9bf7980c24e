//! The l_system module provides a simple Lindenmayer (DOL) system generator for use
//! with plotted line-art. Take a look at the [`crate::l_system::LSystem`] struct for
//! more details, and examples. Rule lines typed by a user are turned into an
//! [`LSystem`] by [`crate::l_system::rule::RuleSet`].

use std::collections::HashMap;
use tracing::debug;

pub mod rule;

/// # LSystem
///
/// What it says on the box; a context free, deterministic L-system. Every pass
/// rewrites all symbols of the current string in parallel: each symbol with a rule
/// is replaced by its successor, everything else is copied through untouched.
///
/// # Example
///
/// ```rust
/// use aoer_lsystem::turtle::{interpret, degrees, CharClasses};
/// use aoer_lsystem::l_system::LSystem;
/// use std::collections::HashMap;
///
/// let koch = LSystem{
///     axiom: "F".to_string(),
///     rules: HashMap::from([('F', "F+F-F-F+F".to_string())]),
///     };
///
/// let classes = CharClasses::new("F", "", "+", "-").unwrap();
/// let points = interpret(&koch.expand(2), &classes, degrees(90.0), 0.0).unwrap();
/// assert_eq!(points.len(), 2 * 25);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LSystem {
    pub axiom: String,
    pub rules: HashMap<char, String>,
}

impl LSystem {
    pub fn new(axiom: &str, rules: HashMap<char, String>) -> LSystem {
        LSystem {
            axiom: axiom.to_string(),
            rules,
        }
    }

    /// Runs a single parallel rewriting pass over `state`.
    pub fn step(&self, state: &str) -> String {
        rewrite(state, &self.rules)
    }

    /// #expand
    ///
    /// Expands the L-system by the requested "order" of iterations. Returns a string
    /// representing the state of the L-system. Useful with
    /// [`crate::turtle::TurtleTrait::walk_lpath`]. Order 0 is the axiom itself.
    pub fn expand(&self, order: u32) -> String {
        let mut state = self.axiom.clone();
        for pass in 0..order {
            state = self.step(&state);
            debug!(pass = pass + 1, len = state.len(), "expanded l-system");
        }
        state
    }
}

/// Expands `axiom` through `iterations` parallel passes of `rules`, without needing
/// an [`LSystem`] to hold them.
pub fn expand(axiom: &str, rules: &HashMap<char, String>, iterations: u32) -> String {
    let mut state = axiom.to_string();
    for _ in 0..iterations {
        state = rewrite(&state, rules);
    }
    state
}

fn rewrite(state: &str, rules: &HashMap<char, String>) -> String {
    let mut next = String::with_capacity(state.len());
    for c in state.chars() {
        match rules.get(&c) {
            Some(replacement) => next.push_str(replacement),
            None => next.push(c),
        }
    }
    next
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_expand_simple() {
        let system = LSystem {
            axiom: "A".to_string(),
            rules: HashMap::from([
                ('A', "AB".to_string()),
                ('B', "A".to_string())]),
        };
        assert!(system.expand(2) == "ABA".to_string());
        assert!(system.expand(5) == "ABAABABAABAAB".to_string());
    }

    #[test]
    fn test_zero_order_is_axiom() {
        let system = LSystem::new("F-F", HashMap::from([('F', "FF".to_string())]));
        assert_eq!(system.expand(0), "F-F");
    }

    #[test]
    fn test_parallel_rewrite() {
        // X is produced in this pass, so it must not be rewritten until the next one.
        let rules = HashMap::from([('A', "X".to_string()), ('X', "Y".to_string())]);
        assert_eq!(expand("AB", &rules, 1), "XB");
        assert_eq!(expand("AB", &rules, 2), "YB");
    }

    #[test]
    fn test_erasing_rule() {
        let rules = HashMap::from([('A', "".to_string())]);
        assert_eq!(expand("ABA", &rules, 1), "B");
    }

    #[test]
    fn test_quadratic_koch_island_single_pass() {
        let succ = "F-F+F+FF-F-F+F";
        let rules = HashMap::from([('F', succ.to_string())]);
        let expected = "F-F-F-F".replace('F', succ);
        assert_eq!(expand("F-F-F-F", &rules, 1), expected);
    }

    #[test]
    fn test_free_fn_matches_struct() {
        let system = LSystem {
            axiom: "X".to_string(),
            rules: HashMap::from([
                ('X', "F-[[X]+X]+F[+FX]-X".to_string()),
                ('F', "FF".to_string())]),
        };
        assert_eq!(system.expand(3), expand(&system.axiom, &system.rules, 3));
    }
}
