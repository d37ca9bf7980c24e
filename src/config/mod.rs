//! Provides [`crate::config::LSystemConfig`], the raw, user-editable description of an
//! L-system drawing, and [`crate::config::Drawing`], what a refresh turns it into.
//!
//! A viewer keeps one `LSystemConfig` for the session, edits it through the rule
//! list operations ([`LSystemConfig::add_rule`], [`LSystemConfig::edit_rule`],
//! [`LSystemConfig::remove_rule`]) or [`LSystemConfig::load_preset`], and calls
//! [`LSystemConfig::refresh`] whenever it wants a new set of segments. Nothing is
//! cached between refreshes.
//!
//! # Example
//!
//! ```rust
//! use aoer_lsystem::config::LSystemConfig;
//!
//! let mut config = LSystemConfig::default();
//! config.load_preset("Koch curve").unwrap();
//! config.iterations = 1;
//! let drawing = config.refresh().unwrap();
//! assert_eq!(drawing.segment_count(), 5);
//! assert_eq!(drawing.status(), "Finished drawing 10 vertices.");
//! ```

use std::fs;
use std::path::Path;

use geo_types::{MultiLineString, Point};
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::{ConfigError, LSystemError, RuleError};
use crate::geo_types::segments_to_multiline;
use crate::l_system::rule::{Alphabet, InvalidRulePolicy, RuleSet};
use crate::l_system::LSystem;
use crate::turtle::{degrees, interpret, CharClasses};

pub mod presets;

use presets::Preset;

/// Largest accepted iteration count. Expansion grows exponentially with it.
pub const MAX_ITERATIONS: u32 = 20;
/// Angles are accepted in `[-MAX_ANGLE, MAX_ANGLE]` degrees.
pub const MAX_ANGLE: f64 = 180.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LSystemConfig {
    pub axiom: String,
    /// Raw `predecessor -> successor` lines, validated on refresh.
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub iterations: u32,
    /// Degrees.
    #[serde(default)]
    pub angle_increment: f64,
    /// Degrees; 0 is "up".
    #[serde(default)]
    pub starting_angle: f64,
    #[serde(default)]
    pub draw: String,
    #[serde(default)]
    pub skip: String,
    #[serde(default)]
    pub turn_left: String,
    #[serde(default)]
    pub turn_right: String,
    #[serde(default)]
    pub alphabet: Alphabet,
    #[serde(default)]
    pub on_invalid_rule: InvalidRulePolicy,
}

impl Default for LSystemConfig {
    /// The quadratic Koch island, unexpanded.
    fn default() -> Self {
        Self {
            axiom: "F-F-F-F".to_string(),
            rules: vec!["F -> F - F + F + F F - F - F + F".to_string()],
            iterations: 0,
            angle_increment: 90.0,
            starting_angle: 0.0,
            draw: "FG".to_string(),
            skip: "fg".to_string(),
            turn_left: "+".to_string(),
            turn_right: "-".to_string(),
            alphabet: Alphabet::default(),
            on_invalid_rule: InvalidRulePolicy::default(),
        }
    }
}

impl From<&Preset> for LSystemConfig {
    fn from(preset: &Preset) -> Self {
        Self {
            axiom: preset.axiom.to_string(),
            rules: preset.rules.iter().map(|r| r.to_string()).collect(),
            iterations: preset.iterations,
            angle_increment: preset.angle_increment,
            starting_angle: preset.starting_angle,
            draw: preset.draw.to_string(),
            skip: preset.skip.to_string(),
            turn_left: preset.turn_left.to_string(),
            turn_right: preset.turn_right.to_string(),
            alphabet: Alphabet::default(),
            on_invalid_rule: InvalidRulePolicy::default(),
        }
    }
}

fn check_angle(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (-MAX_ANGLE..=MAX_ANGLE).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::AngleOutOfRange { name, value })
    }
}

impl LSystemConfig {
    pub fn from_ron(text: &str) -> Result<LSystemConfig, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, PrettyConfig::default())?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<LSystemConfig, ConfigError> {
        LSystemConfig::from_ron(&fs::read_to_string(path)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    /// Checks the numeric bounds and the character classes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations > MAX_ITERATIONS {
            return Err(ConfigError::IterationsOutOfRange(self.iterations));
        }
        check_angle("angle increment", self.angle_increment)?;
        check_angle("starting angle", self.starting_angle)?;
        self.char_classes()?;
        Ok(())
    }

    pub fn char_classes(&self) -> Result<CharClasses, ConfigError> {
        CharClasses::new(&self.draw, &self.skip, &self.turn_left, &self.turn_right)
    }

    pub fn rule_set(&self) -> Result<RuleSet, LSystemError> {
        RuleSet::parse(&self.rules, &self.alphabet, self.on_invalid_rule)
    }

    /// Appends a rule line and returns its index.
    pub fn add_rule(&mut self, rule: &str) -> usize {
        self.rules.push(rule.to_string());
        self.rules.len() - 1
    }

    pub fn edit_rule(&mut self, index: usize, rule: &str) -> Result<(), ConfigError> {
        let len = self.rules.len();
        let slot = self
            .rules
            .get_mut(index)
            .ok_or(ConfigError::RuleIndexOutOfRange { index, len })?;
        *slot = rule.to_string();
        Ok(())
    }

    /// Removes the selected rule, or the last one when nothing is selected.
    /// Returns the removed line, `None` if there was nothing to remove.
    pub fn remove_rule(&mut self, selected: Option<usize>) -> Option<String> {
        match selected {
            Some(index) if index < self.rules.len() => Some(self.rules.remove(index)),
            Some(_) => None,
            None => self.rules.pop(),
        }
    }

    /// Empties the axiom, rules and character classes and zeroes the angle increment.
    pub fn clear(&mut self) {
        self.rules.clear();
        self.angle_increment = 0.0;
        self.axiom.clear();
        self.draw.clear();
        self.skip.clear();
        self.turn_left.clear();
        self.turn_right.clear();
    }

    /// Replaces the drawing parameters with the named preset. The alphabet and the
    /// invalid rule policy are session settings and stay as they are.
    pub fn load_preset(&mut self, name: &str) -> Result<(), ConfigError> {
        let preset =
            presets::preset(name).ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?;
        let alphabet = std::mem::take(&mut self.alphabet);
        let on_invalid_rule = self.on_invalid_rule;
        *self = LSystemConfig {
            alphabet,
            on_invalid_rule,
            ..LSystemConfig::from(preset)
        };
        debug!(preset = name, "loaded preset");
        Ok(())
    }

    /// Validates, expands and walks the L-system in one pass.
    pub fn refresh(&self) -> Result<Drawing, LSystemError> {
        self.validate()?;
        let classes = self.char_classes()?;
        let rule_set = self.rule_set()?;
        let skipped_rules = rule_set.skipped;
        let system = LSystem::new(&self.axiom, rule_set.rules);

        let expanded = system.expand(self.iterations);
        debug!(
            iterations = self.iterations,
            symbols = expanded.len(),
            "expansion finished"
        );
        let points = interpret(
            &expanded,
            &classes,
            degrees(self.angle_increment),
            degrees(self.starting_angle),
        )?;

        let drawing = Drawing {
            expanded,
            points,
            skipped_rules,
        };
        info!("{}", drawing.status());
        Ok(drawing)
    }
}

/// The result of one refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    /// The fully expanded symbol string.
    pub expanded: String,
    /// Segment endpoints in pairs; never empty.
    pub points: Vec<Point<f64>>,
    /// Rules left out under [`InvalidRulePolicy::SkipInvalid`].
    pub skipped_rules: Vec<RuleError>,
}

impl Drawing {
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn segment_count(&self) -> usize {
        self.points.len() / 2
    }

    pub fn status(&self) -> String {
        format!("Finished drawing {} vertices.", self.vertex_count())
    }

    pub fn to_multiline(&self) -> MultiLineString<f64> {
        segments_to_multiline(&self.points)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::RuleErrorKind;
    use crate::geo_types::PointDistance;

    #[test]
    fn test_default_refresh_is_axiom() {
        let drawing = LSystemConfig::default().refresh().unwrap();
        assert_eq!(drawing.expanded, "F-F-F-F");
        assert_eq!(drawing.segment_count(), 4);
        assert!(drawing.points.last().unwrap().distance(&Point::new(0.0, 0.0)) < 0.0001);
    }

    #[test]
    fn test_koch_island_segment_count() {
        let config = LSystemConfig {
            iterations: 1,
            ..LSystemConfig::default()
        };
        let drawing = config.refresh().unwrap();
        let classes = config.char_classes().unwrap();
        assert_eq!(drawing.expanded, "F-F-F-F".replace('F', "F-F+F+FF-F-F+F"));
        assert_eq!(drawing.vertex_count(), 2 * classes.count_draws(&drawing.expanded));
        assert_eq!(drawing.to_multiline().0.len(), drawing.segment_count());
    }

    #[test]
    fn test_bounds() {
        let config = LSystemConfig {
            iterations: MAX_ITERATIONS + 1,
            ..LSystemConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::IterationsOutOfRange(21))));

        let config = LSystemConfig {
            angle_increment: 180.5,
            ..LSystemConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::AngleOutOfRange { .. })));

        let config = LSystemConfig {
            starting_angle: f64::NAN,
            ..LSystemConfig::default()
        };
        assert!(config.validate().is_err());

        let config = LSystemConfig {
            angle_increment: -180.0,
            starting_angle: 180.0,
            ..LSystemConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_starting_angle_is_degrees() {
        let config = LSystemConfig {
            axiom: "F".to_string(),
            starting_angle: 90.0,
            ..LSystemConfig::default()
        };
        let drawing = config.refresh().unwrap();
        assert!(drawing.points[1].distance(&Point::new(1.0, 0.0)) < 0.0001);
    }

    #[test]
    fn test_abort_all_stops_refresh() {
        let mut config = LSystemConfig::default();
        config.add_rule("GG -> G");
        match config.refresh() {
            Err(LSystemError::InvalidRules(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].index, 1);
                assert!(matches!(errors[0].kind, RuleErrorKind::PredecessorLength(_)));
            }
            other => panic!("expected invalid rules, got {:?}", other),
        }
    }

    #[test]
    fn test_skip_invalid_continues() {
        let mut config = LSystemConfig {
            iterations: 1,
            on_invalid_rule: InvalidRulePolicy::SkipInvalid,
            alphabet: Alphabet::koch(),
            ..LSystemConfig::default()
        };
        config.add_rule("F -> F[+F]");
        let drawing = config.refresh().unwrap();
        assert_eq!(drawing.skipped_rules.len(), 1);
        assert_eq!(drawing.skipped_rules[0].kind, RuleErrorKind::DisallowedSymbol('['));
        assert_eq!(drawing.expanded, "F-F-F-F".replace('F', "F-F+F+FF-F-F+F"));
    }

    #[test]
    fn test_unbalanced_brackets_abort() {
        let config = LSystemConfig {
            axiom: "F]".to_string(),
            ..LSystemConfig::default()
        };
        assert!(matches!(config.refresh(), Err(LSystemError::Turtle(_))));
    }

    #[test]
    fn test_overlapping_classes_abort() {
        let config = LSystemConfig {
            skip: "fF".to_string(),
            ..LSystemConfig::default()
        };
        assert!(matches!(
            config.refresh(),
            Err(LSystemError::Config(ConfigError::OverlappingCharClasses { symbol: 'F', .. }))
        ));
    }

    #[test]
    fn test_rule_list_editing() {
        let mut config = LSystemConfig::default();
        let index = config.add_rule("G -> GG");
        assert_eq!(index, 1);
        config.edit_rule(1, "G -> G+G").unwrap();
        assert_eq!(config.rules[1], "G -> G+G");
        assert!(matches!(
            config.edit_rule(5, "X -> X"),
            Err(ConfigError::RuleIndexOutOfRange { index: 5, len: 2 })
        ));
        assert_eq!(config.remove_rule(Some(0)).unwrap(), "F -> F - F + F + F F - F - F + F");
        assert_eq!(config.remove_rule(Some(3)), None);
        assert_eq!(config.remove_rule(None).unwrap(), "G -> G+G");
        assert_eq!(config.remove_rule(None), None);
    }

    #[test]
    fn test_clear_draws_degenerate_segment() {
        let mut config = LSystemConfig::default();
        config.clear();
        let drawing = config.refresh().unwrap();
        assert_eq!(drawing.points, vec![Point::new(0.0, 0.0), Point::new(0.0, 0.0)]);
        assert_eq!(drawing.status(), "Finished drawing 2 vertices.");
    }

    #[test]
    fn test_load_preset_keeps_session_settings() {
        let mut config = LSystemConfig {
            on_invalid_rule: InvalidRulePolicy::SkipInvalid,
            ..LSystemConfig::default()
        };
        config.load_preset("Island and lakes").unwrap();
        assert_eq!(config.skip, "f");
        assert_eq!(config.iterations, 2);
        assert_eq!(config.on_invalid_rule, InvalidRulePolicy::SkipInvalid);
        assert!(matches!(
            config.load_preset("Nope"),
            Err(ConfigError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_ron_round_trip_and_defaults() {
        let mut config = LSystemConfig::default();
        config.load_preset("Fractal plant").unwrap();
        let text = config.to_ron().unwrap();
        assert_eq!(LSystemConfig::from_ron(&text).unwrap(), config);

        let minimal = LSystemConfig::from_ron(r#"(axiom: "F", draw: "F")"#).unwrap();
        assert!(minimal.rules.is_empty());
        assert_eq!(minimal.on_invalid_rule, InvalidRulePolicy::AbortAll);
        assert_eq!(minimal.refresh().unwrap().segment_count(), 1);

        assert!(matches!(
            LSystemConfig::from_ron("(axiom: 3)"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("aoer-lsystem-{}.ron", std::process::id()));
        let config = LSystemConfig::from(presets::preset("Dragon curve").unwrap());
        config.save(&path).unwrap();
        let loaded = LSystemConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
