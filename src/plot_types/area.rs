// Area plot implementation

use super::line::{curve_through, SmoothLinePlot};
use super::PlotBuilder;
use crate::data_types::CurveConfig;
use crate::path::{Path, PathBuilder};
use crate::transform::PlotTransform;
use glam::Vec2;

/// Closed variant of the smooth line: the same curve, then two segments
/// dropping to the baseline and back under the first sample, suitable for a
/// fill below the curve.
pub struct AreaPlot {
    line: SmoothLinePlot,
}

impl AreaPlot {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            line: SmoothLinePlot::new(values),
        }
    }

    pub fn with_config(mut self, config: CurveConfig) -> Self {
        self.line = self.line.with_config(config);
        self
    }
}

impl PlotBuilder for AreaPlot {
    fn build_path(&self, transform: &PlotTransform) -> Option<Path> {
        if self.line.values.len() < 2 || transform.is_degenerate() {
            return None;
        }
        let points = self.line.screen_points(transform);
        let mut builder = PathBuilder::new();
        curve_through(&mut builder, &points, self.line.tension_divisor());

        let baseline = transform.baseline_y();
        let first = points[0];
        let last = points[points.len() - 1];
        builder.line_to(Vec2::new(last.x, baseline));
        builder.line_to(Vec2::new(first.x, baseline));
        builder.close();

        builder.build().ok()
    }
}
