use geo_types::{coord, CoordNum, LineString, MultiLineString, Point};
use num_traits::real::Real;

/// Trait to convert turtle output into an SVG document (or specifically, SVG components)
pub mod svg;

/// Trait that implements a distance function between two [`geo_types::Point`] structs.
/// Also includes a length function which returns the length of a [`geo_types::Point`]
/// as if it were a Vector.
pub trait PointDistance<T: CoordNum> {
    /// Return the scalar distance between two [`geo_types::Point`]s.
    fn distance(&self, other: &Point<T>) -> T;

    /// Treat a [`geo_types::Point`] as a Vector and return its scalar length.
    fn length(&self) -> T;
}

impl<T> PointDistance<T> for Point<T>
    where T: CoordNum,
          T: Real {
    fn distance(&self, other: &Point<T>) -> T {
        let p = *self - *other;
        p.length()
    }

    fn length(&self) -> T {
        (self.x().powi(2) + self.y().powi(2)).sqrt()
    }
}

/// Pairs up turtle output (`point[2i]`, `point[2i + 1]`) into one two-point
/// [`LineString`] per segment. A trailing unpaired point is dropped.
pub fn segments_to_multiline(points: &[Point<f64>]) -> MultiLineString<f64> {
    MultiLineString::new(
        points
            .chunks_exact(2)
            .map(|pair| {
                LineString::new(vec![
                    coord! {x: pair[0].x(), y: pair[0].y()},
                    coord! {x: pair[1].x(), y: pair[1].y()},
                ])
            })
            .collect(),
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0f64, 0.0);
        let b = Point::new(3.0f64, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.length(), 5.0);
    }

    #[test]
    fn test_segments_are_disconnected() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(5.0, 5.0),
            Point::new(6.0, 5.0),
            Point::new(9.0, 9.0),
        ];
        let mls = segments_to_multiline(&points);
        assert_eq!(mls.0.len(), 2);
        assert_eq!(mls.0[1].0[0], coord! {x: 5.0, y: 5.0});
        assert_eq!(mls.0[1].0[1], coord! {x: 6.0, y: 5.0});
    }
}
