//! ArmyOfEvilRobots L-system tools
//!
//! A Lindenmayer system rewriting engine and a stack-based 2D turtle that walks
//! the rewritten string, for fractal curves and plants in pen-plotter style line
//! art. Configurations come from presets, RON files, or whatever editor drives
//! them; the output is a list of independent line segments that can go straight
//! into a viewer or out to SVG.
//!
//! ```rust
//! use aoer_lsystem::prelude::*;
//! use geo_types::{coord, Rect};
//!
//! let mut config = LSystemConfig::default();
//! config.load_preset("Sierpinski triangle").unwrap();
//! let drawing = config.refresh().unwrap();
//! let page = Rect::new(coord! {x: 0.0, y: 0.0}, coord! {x: 200.0, y: 200.0});
//! let svg = drawing
//!     .to_multiline()
//!     .to_svg(&Arrangement::FitCenterMargin(10.0, page, true), "black", 0.5)
//!     .unwrap();
//! assert!(svg.to_string().contains("<path"));
//! ```

/// Error types for rule parsing, turtle walking, configuration and SVG output.
pub mod errors;

/// Extensions/Traits for geo_types geometry, and SVG output of turtle segments.
pub mod geo_types;

/// Turtle graphics implementation, including integration with L-systems
pub mod turtle;

/// L-system implementation, with expansion and rule parsing
pub mod l_system;

/// Editable configuration, presets, and the refresh pipeline
pub mod config;

/// Make your life easy! Just import prelude::* and ignore all the warnings!
pub mod prelude{

    pub use crate::config::{Drawing, LSystemConfig};
    pub use crate::config::presets::{preset, Preset, PRESETS};
    pub use crate::errors::{ConfigError, LSystemError, RuleError, RuleErrorKind, TurtleError};
    pub use crate::geo_types::PointDistance;
    pub use crate::geo_types::svg::{Arrangement, ToSvg};
    pub use crate::l_system::{expand, LSystem};
    pub use crate::l_system::rule::{Alphabet, InvalidRulePolicy, Rule, RuleSet};
    pub use crate::turtle::{degrees, interpret, CharClasses, Turtle, TurtleTrait};
}
