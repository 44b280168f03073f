use super::PlotBuilder;
use crate::data_types::CurveConfig;
use crate::path::{Path, PathBuilder};
use crate::transform::PlotTransform;
use glam::Vec2;
use tracing::trace;

/// Tension divisor for the cubic control points.
///
/// Tangents are `(neighbor - neighbor) / divisor`; 6.0 keeps the curve tight
/// enough that bounded rating data does not overshoot its domain between
/// samples.
pub const CURVE_TENSION_DIVISOR: f32 = 6.0;

/// Smooth line through an ordered sample sequence.
///
/// Control points follow a local Catmull-Rom scheme: each segment looks one
/// point back and one point ahead. Edge points duplicate themselves at the
/// boundary, which also makes a two-point series collapse to the straight
/// segment between them.
pub struct SmoothLinePlot {
    pub values: Vec<f64>,
    pub config: CurveConfig,
}

impl SmoothLinePlot {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            config: CurveConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CurveConfig) -> Self {
        self.config = config;
        self
    }

    pub(crate) fn screen_points(&self, transform: &PlotTransform) -> Vec<Vec2> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| transform.point_to_screen(i, v))
            .collect()
    }

    pub(crate) fn tension_divisor(&self) -> f32 {
        let k = self.config.tension_divisor;
        if k.is_finite() && k > f32::EPSILON {
            k
        } else {
            CURVE_TENSION_DIVISOR
        }
    }
}

/// Appends a move-to plus one cubic segment per consecutive point pair.
pub(crate) fn curve_through(builder: &mut PathBuilder, points: &[Vec2], tension_divisor: f32) {
    builder.move_to(points[0]);
    let n = points.len();
    for i in 0..n - 1 {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(n - 1)];
        let ctrl1 = p1 + (p2 - p0) / tension_divisor;
        let ctrl2 = p2 - (p3 - p1) / tension_divisor;
        builder.cubic_to(ctrl1, ctrl2, p2);
    }
}

impl PlotBuilder for SmoothLinePlot {
    fn build_path(&self, transform: &PlotTransform) -> Option<Path> {
        if self.values.len() < 2 || transform.is_degenerate() {
            trace!(samples = self.values.len(), "no line path for degenerate input");
            return None;
        }
        let points = self.screen_points(transform);
        let mut builder = PathBuilder::new();
        curve_through(&mut builder, &points, self.tension_divisor());
        builder.build().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::DomainRange;
    use crate::path::PathCommand;
    use crate::transform::PlotRect;

    fn transform(count: usize) -> PlotTransform {
        PlotTransform::for_series(count, &DomainRange::RATING, PlotRect::new(300.0, 52.0))
    }

    #[test]
    fn test_too_few_points_yields_no_path() {
        assert!(SmoothLinePlot::new(vec![]).build_path(&transform(0)).is_none());
        assert!(SmoothLinePlot::new(vec![5.0])
            .build_path(&transform(1))
            .is_none());
    }

    #[test]
    fn test_unmeasured_geometry_yields_no_path() {
        let t = PlotTransform::for_series(2, &DomainRange::RATING, PlotRect::new(0.0, 0.0));
        assert!(SmoothLinePlot::new(vec![3.0, 7.0]).build_path(&t).is_none());
    }

    #[test]
    fn test_two_points_reduce_to_one_straight_cubic() {
        let t = transform(2);
        let path = SmoothLinePlot::new(vec![3.0, 7.0]).build_path(&t).unwrap();
        assert_eq!(path.len(), 2);

        let p1 = t.point_to_screen(0, 3.0);
        let p2 = t.point_to_screen(1, 7.0);
        let PathCommand::MoveTo(start) = path.commands()[0] else {
            panic!("expected move-to");
        };
        let PathCommand::CubicTo { ctrl1, ctrl2, to } = path.commands()[1] else {
            panic!("expected cubic");
        };
        assert_eq!(start, p1);
        assert_eq!(to, p2);
        // Boundary duplication degenerates the control points onto the chord.
        let chord = p2 - p1;
        assert_eq!(ctrl1, p1 + chord / CURVE_TENSION_DIVISOR);
        assert_eq!(ctrl2, p2 - chord / CURVE_TENSION_DIVISOR);
    }

    #[test]
    fn test_one_cubic_per_segment() {
        let values = vec![6.5, 7.2, 7.8, 6.9, 8.1];
        let path = SmoothLinePlot::new(values.clone())
            .build_path(&transform(values.len()))
            .unwrap();
        // One move-to plus n-1 cubics.
        assert_eq!(path.len(), values.len());
        assert!(matches!(path.commands()[0], PathCommand::MoveTo(_)));
        for cmd in &path.commands()[1..] {
            assert!(matches!(cmd, PathCommand::CubicTo { .. }));
        }
    }

    #[test]
    fn test_flat_series_stays_flat() {
        let t = transform(5);
        let path = SmoothLinePlot::new(vec![5.0; 5]).build_path(&t).unwrap();
        let y = t.value_to_y(5.0);
        for cmd in path.commands() {
            match *cmd {
                PathCommand::MoveTo(p) => assert_eq!(p.y, y),
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    assert_eq!(ctrl1.y, y);
                    assert_eq!(ctrl2.y, y);
                    assert_eq!(to.y, y);
                }
                _ => panic!("unexpected command"),
            }
        }
    }

    #[test]
    fn test_bad_tension_falls_back_to_canonical() {
        let plot = SmoothLinePlot::new(vec![1.0, 2.0]).with_config(CurveConfig {
            tension_divisor: 0.0,
        });
        assert_eq!(plot.tension_divisor(), CURVE_TENSION_DIVISOR);
    }
}
