use geo_types::{Line, MultiLineString, Point};

use crate::errors::TurtleError;
use crate::geo_types::segments_to_multiline;

pub mod classes;

pub use classes::{Action, CharClasses};

/// # Turtle Module
///
/// This provides logo-style turtle features for walking expanded lindenmayer
/// systems. The turtle emits independent line segments rather than one polyline,
/// so every drawn step contributes its own start and end point.
///
/// Heading 0 points "up": a step moves by `(sin(heading), cos(heading))`, and
/// turning left increases the heading.
#[derive(Clone, Debug)]
pub struct Turtle {
    stack: Vec<(f64, Point<f64>)>,
    points: Vec<Point<f64>>,
    position: Point<f64>,
    heading: f64,
}

/// Helper function to convert degrees to radians
pub fn degrees(deg: f64) -> f64 {
    std::f64::consts::PI * (deg / 180.0)
}

/// TurtleTrait provides turtle related functions for the Turtle struct.
///
/// Provides 2D turtle actions, and a stack-based history for drawing
/// branching 2D graphics.
///
/// # Example
///
/// ```
/// use aoer_lsystem::turtle::{Turtle, TurtleTrait, degrees};
/// let points = Turtle::new()
///     .fwd(1.0)
///     .left(degrees(90.0))
///     .fwd(1.0)
///     .push()
///     .left(degrees(90.0))
///     .fwd(1.0)
///     .pop()
///     .unwrap()
///     .to_points();
/// assert_eq!(points.len(), 6);
/// ```
pub trait TurtleTrait {
    fn new() -> Turtle;
    fn with_heading(heading: f64) -> Turtle;
    fn fwd(self, distance: f64) -> Self;
    fn skip(self, distance: f64) -> Self;
    fn left(self, angle: f64) -> Self;
    fn right(self, angle: f64) -> Self;
    fn push(self) -> Self;
    fn pop(self) -> Result<Self, TurtleError>
    where
        Self: Sized;
    fn walk_lpath(
        self,
        lpath: &str,
        classes: &CharClasses,
        angle: f64,
        distance: f64,
    ) -> Result<Self, TurtleError>
    where
        Self: Sized;
    fn position(&self) -> Point<f64>;
    fn heading(&self) -> f64;
    fn to_points(&self) -> Vec<Point<f64>>;
    fn to_lines(&self) -> Vec<Line<f64>>;
    fn to_multiline(&self) -> MultiLineString<f64>;
}

impl Turtle {
    fn step(&self, distance: f64) -> Point<f64> {
        self.position
            + Point::new(
                distance * self.heading.sin(),
                distance * self.heading.cos(),
            )
    }
}

impl TurtleTrait for Turtle {
    fn new() -> Self {
        Turtle::with_heading(0.0)
    }

    fn with_heading(heading: f64) -> Self {
        Turtle {
            stack: vec![],
            points: vec![],
            position: Point::new(0.0f64, 0.0f64),
            heading,
        }
    }

    fn fwd(mut self, distance: f64) -> Self {
        let pos = self.step(distance);
        // Point is Copy, so the stored endpoints never alias the live position.
        self.points.push(self.position);
        self.points.push(pos);
        self.position = pos;
        self
    }

    fn skip(mut self, distance: f64) -> Self {
        self.position = self.step(distance);
        self
    }

    fn left(mut self, angle: f64) -> Self {
        self.heading = self.heading + angle;
        self
    }

    fn right(mut self, angle: f64) -> Self {
        self.heading = self.heading - angle;
        self
    }

    fn push(mut self) -> Self {
        self.stack.push((self.heading, self.position));
        self
    }

    fn pop(mut self) -> Result<Self, TurtleError> {
        let (heading, position) = self.stack.pop().ok_or(TurtleError::PoppedEmptyStack)?;
        self.heading = heading;
        self.position = position;
        Ok(self)
    }

    fn walk_lpath(
        mut self,
        lpath: &str,
        classes: &CharClasses,
        angle: f64,
        distance: f64,
    ) -> Result<Self, TurtleError> {
        for (index, c) in lpath.chars().enumerate() {
            self = match classes.action(c) {
                Action::Draw => self.fwd(distance),
                Action::Skip => self.skip(distance),
                Action::TurnLeft => self.left(angle),
                Action::TurnRight => self.right(angle),
                Action::Push => self.push(),
                Action::Pop => self
                    .pop()
                    .map_err(|_| TurtleError::UnbalancedStack { index })?,
                Action::Ignore => self,
            }
        }
        Ok(self)
    }

    fn position(&self) -> Point<f64> {
        self.position
    }

    fn heading(&self) -> f64 {
        self.heading
    }

    /// The segment endpoints in pairs. A turtle that never drew yields one
    /// zero-length segment at the origin, so a renderer always has something.
    fn to_points(&self) -> Vec<Point<f64>> {
        if self.points.is_empty() {
            vec![Point::new(0.0, 0.0), Point::new(0.0, 0.0)]
        } else {
            self.points.clone()
        }
    }

    fn to_lines(&self) -> Vec<Line<f64>> {
        self.to_points()
            .chunks_exact(2)
            .map(|pair| Line::new(pair[0], pair[1]))
            .collect()
    }

    fn to_multiline(&self) -> MultiLineString<f64> {
        segments_to_multiline(&self.to_points())
    }
}

/// Walks `symbols` with a unit step from the origin and returns the segment
/// endpoints (see [`TurtleTrait::to_points`]). Angles are in radians.
pub fn interpret(
    symbols: &str,
    classes: &CharClasses,
    angle_increment: f64,
    starting_angle: f64,
) -> Result<Vec<Point<f64>>, TurtleError> {
    Ok(Turtle::with_heading(starting_angle)
        .walk_lpath(symbols, classes, angle_increment, 1.0)?
        .to_points())
}
