use geo::{BoundingRect, MapCoords};
use geo_types::{coord, Coord, MultiLineString, Rect};
use nalgebra::{Affine2, Matrix3, Point2 as NPoint2};
use svg::node::element::path::Data;
use svg::node::element::Path;
use svg::Document;

use crate::errors::SvgCreationError;

/// Below this a drawing has no extent along an axis, so that axis does not
/// constrain the fit.
const MIN_EXTENT: f64 = 1e-9;

/// An arrangement is a plan for transformation of turtle output into an SVG viewbox
#[derive(Debug, Clone, PartialEq)]
pub enum Arrangement {
    /// Scale to fit the viewbox less a margin on every side, and center. The
    /// flag flips the y axis, so that a turtle heading of 0 points up the page.
    FitCenterMargin(f64, Rect<f64>, bool),
    /// Apply the affine transformation as-is.
    Transform(Rect<f64>, Affine2<f64>),
}

impl Arrangement {
    pub fn unit(window: &Rect<f64>) -> Arrangement {
        Arrangement::Transform(*window, Affine2::identity())
    }

    pub fn viewbox(&self) -> Rect<f64> {
        match self {
            Arrangement::FitCenterMargin(_, viewbox, _) => *viewbox,
            Arrangement::Transform(viewbox, _) => *viewbox,
        }
    }

    pub fn create_svg_document(&self) -> Document {
        let viewbox = self.viewbox();
        Document::new()
            .set("viewBox", (viewbox.min().x, viewbox.min().y, viewbox.width(), viewbox.height()))
            .set("width", format!("{}mm", viewbox.width()))
            .set("height", format!("{}mm", viewbox.height()))
    }

    /// The transformation this arrangement applies to geometry bounded by `gbox`.
    pub fn transformation(&self, gbox: &Rect<f64>) -> Affine2<f64> {
        match self {
            Arrangement::Transform(_, affine) => *affine,
            Arrangement::FitCenterMargin(margin, bounds, invert) => {
                let sx = if gbox.width() > MIN_EXTENT {
                    (bounds.width() - 2.0 * margin) / gbox.width()
                } else {
                    f64::INFINITY
                };
                let sy = if gbox.height() > MIN_EXTENT {
                    (bounds.height() - 2.0 * margin) / gbox.height()
                } else {
                    f64::INFINITY
                };
                let scale = match sx.min(sy) {
                    s if s.is_finite() => s,
                    _ => 1.0,
                };
                let yscale = if *invert { -scale } else { scale };
                let bcenter = bounds.center();
                let gcenter = gbox.center();
                Affine2::from_matrix_unchecked(Matrix3::new(
                    scale, 0.0, bcenter.x - scale * gcenter.x,
                    0.0, yscale, bcenter.y - yscale * gcenter.y,
                    0.0, 0.0, 1.0,
                ))
            }
        }
    }
}

pub trait ToSvg {
    /// Given an [Arrangement] as a transformation strategy, transform the geometry to
    /// fit the bounds.
    fn arrange(&self, arrangement: &Arrangement) -> Result<Self, SvgCreationError>
    where
        Self: Sized;

    /// Convert the Geometry into an SVG PathData item, one move-to per segment
    fn to_path_data(&self) -> Data;

    /// Convert the Geometry into a stroked SVG Path, using the arrangement to fit it
    fn to_path(&self, arrangement: &Arrangement, stroke: &str, stroke_width: f64)
        -> Result<Path, SvgCreationError>;

    /// A complete document holding the single arranged path.
    fn to_svg(&self, arrangement: &Arrangement, stroke: &str, stroke_width: f64)
        -> Result<Document, SvgCreationError> {
        Ok(arrangement
            .create_svg_document()
            .add(self.to_path(arrangement, stroke, stroke_width)?))
    }
}

impl ToSvg for MultiLineString<f64> {
    fn arrange(&self, arrangement: &Arrangement) -> Result<Self, SvgCreationError> {
        let gbox = self.bounding_rect().ok_or(SvgCreationError::UndefinedViewBox)?;
        let transformation = arrangement.transformation(&gbox);
        let transformation = &transformation;
        Ok(self.map_coords(move |c: Coord<f64>| {
            let pt = transformation * NPoint2::new(c.x, c.y);
            coord! {x: pt.x, y: pt.y}
        }))
    }

    fn to_path_data(&self) -> Data {
        let mut svg_data = Data::new();
        for tline in self {
            for point in tline.points().take(1) {
                svg_data = svg_data.move_to((point.x() as f32, point.y() as f32));
            }
            for point in tline.points().skip(1) {
                svg_data = svg_data.line_to((point.x() as f32, point.y() as f32));
            }
        }
        svg_data
    }

    fn to_path(&self, arrangement: &Arrangement, stroke: &str, stroke_width: f64)
        -> Result<Path, SvgCreationError> {
        Ok(Path::new()
            .set("fill", "none")
            .set("stroke", stroke)
            .set("stroke-width", stroke_width)
            .set("stroke-linecap", "round")
            .set("d", self.arrange(arrangement)?.to_path_data()))
    }
}

#[cfg(test)]
mod test {
    use geo_types::{coord, LineString, MultiLineString, Rect};
    use super::*;

    fn square() -> MultiLineString<f64> {
        MultiLineString::new(
            vec![LineString::new(
                vec![
                    coord! {x: 0.0f64, y: 0.0f64},
                    coord! {x: 0.0f64, y: 100.0f64},
                    coord! {x: 100.0f64, y: 100.0f64},
                    coord! {x: 100.0f64, y: 0.0f64},
                    coord! {x: 0.0f64, y: 0.0f64},
                ])])
    }

    fn page() -> Rect<f64> {
        Rect::new(coord! {x:0f64, y:0f64}, coord! {x:400f64, y:400f64})
    }

    #[test]
    fn test_arrange_fit_center_margin() {
        let txmls = square()
            .arrange(&Arrangement::FitCenterMargin(50.0, page(), false))
            .unwrap();
        let brect = txmls.bounding_rect().expect("Should have been able to get brect");
        assert_eq!(brect.center(), coord! {x: 200.0f64, y:200.0f64});
        assert!((brect.width() - 300.0).abs() < 1e-9);
        assert!((brect.height() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_arrange_invert_flips_y() {
        let up = MultiLineString::new(vec![LineString::new(vec![
            coord! {x: 0.0f64, y: 0.0f64},
            coord! {x: 0.0f64, y: 1.0f64},
        ])]);
        let txmls = up
            .arrange(&Arrangement::FitCenterMargin(0.0, page(), true))
            .unwrap();
        let start = txmls.0[0].0[0];
        let end = txmls.0[0].0[1];
        assert!(end.y < start.y);
        assert!((start.y - 400.0).abs() < 1e-9);
        assert!((end.y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_geometry_is_centered() {
        let dot = MultiLineString::new(vec![LineString::new(vec![
            coord! {x: 0.0f64, y: 0.0f64},
            coord! {x: 0.0f64, y: 0.0f64},
        ])]);
        let txmls = dot
            .arrange(&Arrangement::FitCenterMargin(10.0, page(), true))
            .unwrap();
        assert_eq!(txmls.0[0].0[0], coord! {x: 200.0, y: 200.0});
    }

    #[test]
    fn test_empty_geometry_has_no_viewbox() {
        let empty: MultiLineString<f64> = MultiLineString::new(vec![]);
        assert_eq!(
            empty.arrange(&Arrangement::unit(&page())).unwrap_err(),
            SvgCreationError::UndefinedViewBox
        );
    }

    #[test]
    fn test_unit_arrangement_is_identity() {
        let txmls = square().arrange(&Arrangement::unit(&page())).unwrap();
        assert_eq!(txmls, square());
    }

    #[test]
    fn test_document_contains_path() {
        let doc = square()
            .to_svg(&Arrangement::FitCenterMargin(10.0, page(), true), "black", 0.5)
            .unwrap()
            .to_string();
        assert!(doc.contains("<path"));
        assert!(doc.contains("stroke=\"black\""));
        assert!(doc.contains("viewBox=\"0 0 400 400\""));
    }
}
