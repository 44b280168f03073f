//! Drag-to-set rating control.
//!
//! Same resolve-continuous-position-to-discrete-value pattern as the chart
//! scrub, but quantizing into a small fixed integer range instead of a sample
//! index. The persisted value belongs to the caller's form state; the control
//! only proposes values through its callback while a drag is in progress.

use crate::data_types::SliderConfig;
use crate::feedback::FeedbackThrottle;
use crate::input::{PointerEvent, PointerPhase};
use crate::view_controller::ViewController;
use tracing::debug;

/// What one pointer event did to the slider.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderUpdate {
    pub value: Option<u8>,
    pub changed: bool,
    pub pulse: bool,
}

pub struct RatingSlider {
    config: SliderConfig,
    track_width: f32,
    dragging: bool,
    /// Pointer-down seen before the track was measured; resolved once a
    /// measurement arrives instead of quantizing against a zero-width track.
    pending_down: Option<f32>,
    last_propagated: Option<u8>,
    throttle: FeedbackThrottle,
    on_change: Option<Box<dyn FnMut(u8)>>,
}

impl RatingSlider {
    pub fn new(config: SliderConfig) -> Self {
        Self {
            config,
            track_width: 0.0,
            dragging: false,
            pending_down: None,
            last_propagated: None,
            throttle: FeedbackThrottle::new(config.feedback_interval),
            on_change: None,
        }
    }

    /// Callback receiving each accepted value change.
    pub fn on_change(mut self, callback: impl FnMut(u8) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Last value this control proposed, if any.
    pub fn value(&self) -> Option<u8> {
        self.last_propagated
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn is_measured(&self) -> bool {
        self.track_width - self.config.thumb_diameter > 0.0
    }

    /// Records the measured track width. A pointer-down that arrived before
    /// layout resolves now, against real geometry.
    pub fn set_track_width(&mut self, width: f32) -> SliderUpdate {
        self.track_width = width;
        if let Some(x) = self.pending_down {
            if self.is_measured() {
                self.pending_down = None;
                self.dragging = true;
                debug!(x, "resolving deferred pointer-down");
                return self.resolve(x);
            }
        }
        self.unchanged()
    }

    /// Left edge of the thumb for the given value.
    pub fn thumb_offset(&self, value: u8) -> f32 {
        ViewController::thumb_offset(
            value,
            self.config.min,
            self.config.max,
            self.track_width,
            self.config.thumb_diameter,
        )
    }

    /// Width of the filled track portion for the given value.
    pub fn fill_width(&self, value: u8) -> f32 {
        ViewController::fill_width(
            value,
            self.config.min,
            self.config.max,
            self.track_width,
            self.config.thumb_diameter,
        )
    }

    pub fn handle_event(&mut self, event: PointerEvent) -> SliderUpdate {
        let x = event.position.x;
        match event.phase {
            PointerPhase::Down => {
                if !self.is_measured() {
                    self.pending_down = Some(x);
                    return self.unchanged();
                }
                // The thumb jumps to the pressed position immediately.
                self.dragging = true;
                self.resolve(x)
            }
            PointerPhase::Move => {
                if self.dragging {
                    self.resolve(x)
                } else {
                    if self.pending_down.is_some() {
                        self.pending_down = Some(x);
                    }
                    self.unchanged()
                }
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                self.dragging = false;
                self.pending_down = None;
                self.unchanged()
            }
        }
    }

    fn resolve(&mut self, x: f32) -> SliderUpdate {
        let Some(value) = ViewController::quantize_track_offset(
            x,
            self.track_width,
            self.config.thumb_diameter,
            self.config.min,
            self.config.max,
        ) else {
            return self.unchanged();
        };
        if self.last_propagated == Some(value) {
            return self.unchanged();
        }
        self.last_propagated = Some(value);
        let pulse = self.throttle.try_pulse();
        debug!(value, "slider value changed");
        if let Some(callback) = &mut self.on_change {
            callback(value);
        }
        SliderUpdate {
            value: Some(value),
            changed: true,
            pulse,
        }
    }

    fn unchanged(&self) -> SliderUpdate {
        SliderUpdate {
            value: self.last_propagated,
            changed: false,
            pulse: false,
        }
    }
}

impl Default for RatingSlider {
    fn default() -> Self {
        Self::new(SliderConfig::default())
    }
}
