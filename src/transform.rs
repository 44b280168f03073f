//! Transform helper for coordinate projection

use crate::data_types::DomainRange;
use crate::scales::{IndexScale, ValueScale};
use glam::Vec2;

/// Pixel area a chart draws within.
///
/// The horizontal mapping spans the full width so the first and last samples
/// sit on the edges; padding is applied vertically only, keeping the curve
/// clear of the rect's top and bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
    pub v_padding: f32,
}

impl PlotRect {
    pub const DEFAULT_V_PADDING: f32 = 4.0;

    pub fn new(width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::ZERO,
            width,
            height,
            v_padding: Self::DEFAULT_V_PADDING,
        }
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_v_padding(mut self, v_padding: f32) -> Self {
        self.v_padding = v_padding;
        self
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.height
    }

    /// Top edge of the inner plot band values are mapped into.
    pub fn plot_top(&self) -> f32 {
        self.origin.y + self.v_padding.min(self.height / 2.0)
    }

    /// Bottom edge of the inner plot band.
    pub fn plot_bottom(&self) -> f32 {
        self.bottom() - self.v_padding.min(self.height / 2.0)
    }

    /// Geometry only becomes available once the hosting view is laid out.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

/// Composed projection between (sample index, value) pairs and screen pixels.
#[derive(Clone, Copy, Debug)]
pub struct PlotTransform {
    pub x_scale: IndexScale,
    pub y_scale: ValueScale,
    pub rect: PlotRect,
}

impl PlotTransform {
    pub fn new(x_scale: IndexScale, y_scale: ValueScale, rect: PlotRect) -> Self {
        Self {
            x_scale,
            y_scale,
            rect,
        }
    }

    /// Builds the transform for a series of `count` samples normalized
    /// against `domain`, drawn inside `rect`.
    pub fn for_series(count: usize, domain: &DomainRange, rect: PlotRect) -> Self {
        let x_scale = IndexScale::new(count, (rect.left(), rect.right()));
        let y_scale = ValueScale::new(domain.bounds(), (rect.plot_bottom(), rect.plot_top()));
        Self::new(x_scale, y_scale, rect)
    }

    pub fn index_to_x(&self, index: usize) -> f32 {
        self.x_scale.map(index)
    }

    pub fn value_to_y(&self, value: f64) -> f32 {
        self.y_scale.map(value)
    }

    pub fn point_to_screen(&self, index: usize, value: f64) -> Vec2 {
        Vec2::new(self.index_to_x(index), self.value_to_y(value))
    }

    /// Nearest sample index under a horizontal pixel position, saturating at
    /// the first/last sample.
    pub fn x_to_index(&self, x: f32) -> usize {
        self.x_scale.invert(x)
    }

    /// Y pixel the area fill drops to.
    pub fn baseline_y(&self) -> f32 {
        self.rect.bottom()
    }

    pub fn sample_count(&self) -> usize {
        self.x_scale.count()
    }

    /// True when no drawable line exists: unmeasured geometry or fewer than
    /// two samples.
    pub fn is_degenerate(&self) -> bool {
        !self.rect.is_measured() || self.x_scale.is_degenerate()
    }
}
