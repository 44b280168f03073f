// Overlay derivation for the scrub cursor

use crate::data_types::{ActiveSeriesSet, ChartSeries, MetricId};
use crate::transform::{PlotRect, PlotTransform};
use crate::utils::date_formatter::{determine_slot_format, format_slot_label, slot_date};
use chrono::NaiveDate;
use glam::Vec2;

/// A highlighted sample on one visible series.
#[derive(Clone, Debug, PartialEq)]
pub struct HighlightPoint {
    pub metric: MetricId,
    pub position: Vec2,
    /// The value displayed for this metric at the active index. Recorded
    /// samples pass through exactly; recovered slots carry the interpolated
    /// value the curve was drawn with.
    pub value: f64,
}

/// Everything the rendering layer needs to draw the scrub overlay: the
/// vertical cursor line, one highlighted dot per visible series, and the
/// date label for the active slot.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorOverlay {
    pub index: usize,
    pub cursor_x: f32,
    pub cursor_top: f32,
    pub cursor_bottom: f32,
    pub points: Vec<HighlightPoint>,
    pub date_label: String,
}

/// Derives the cursor overlay for the active index, or `None` when no
/// gesture is in progress, the geometry is unmeasured, or no visible series
/// covers the index. The engine describes; the host paints.
pub fn cursor_overlay(
    active_index: Option<usize>,
    series: &[ChartSeries],
    visible: &ActiveSeriesSet,
    rect: PlotRect,
    end_date: NaiveDate,
) -> Option<CursorOverlay> {
    let index = active_index?;
    if !rect.is_measured() {
        return None;
    }

    let mut points = Vec::new();
    let mut cursor_x = None;
    let mut slot_count = 0;
    for s in series {
        if !visible.is_visible(&s.id) {
            continue;
        }
        let count = s.samples.len();
        if count < 2 || index >= count {
            continue;
        }
        let transform = PlotTransform::for_series(count, &s.domain, rect);
        let values = s.samples.filled(s.domain.midpoint());
        let position = transform.point_to_screen(index, values[index]);
        cursor_x.get_or_insert(position.x);
        slot_count = slot_count.max(count);
        points.push(HighlightPoint {
            metric: s.id.clone(),
            position,
            value: values[index],
        });
    }

    let cursor_x = cursor_x?;
    let date = slot_date(end_date, slot_count, index);
    let date_label = format_slot_label(date, determine_slot_format(slot_count));
    Some(CursorOverlay {
        index,
        cursor_x,
        cursor_top: rect.top(),
        cursor_bottom: rect.bottom(),
        points,
        date_label,
    })
}
