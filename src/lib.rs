//! trend_chart crate for wellness trend charts and scrub gestures

pub mod data_types;
pub mod feedback;
pub mod input;
pub mod path;
pub mod plot_types;
pub mod rendering;
pub mod scales;
pub mod slider;
pub mod transform;
pub mod utils;
pub mod view_controller;

pub use data_types::{ChartSeries, DomainRange, EngineConfig, MetricId, SampleSeries};
pub use input::{PointerEvent, PointerPhase, ScrubController, ScrubUpdate};
pub use path::{Path, PathCommand};
pub use plot_types::{AreaPlot, PlotBuilder, SmoothLinePlot};
pub use rendering::{cursor_overlay, CursorOverlay, HighlightPoint};
pub use slider::{RatingSlider, SliderUpdate};
pub use transform::{PlotRect, PlotTransform};
