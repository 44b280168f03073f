//! Pointer input handling for chart scrubbing.

use crate::data_types::{ScrubConfig, SharedScrub};
use crate::feedback::FeedbackThrottle;
use crate::transform::PlotRect;
use crate::view_controller::ViewController;
use glam::Vec2;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Raw pointer event relative to the hit-test surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            position: Vec2::new(x, y),
        }
    }
}

/// What one pointer event did to the scrub session.
///
/// `changed` is true only when the resolved index differs from the previous
/// one, so sub-pixel moves cost the host nothing. `pulse` asks the feedback
/// collaborator for a tick and is additionally rate-limited.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrubUpdate {
    pub active_index: Option<usize>,
    pub changed: bool,
    pub pulse: bool,
}

/// State machine resolving an in-progress drag to a sample index.
///
/// Two states: idle (no active index) and dragging. While dragging, every
/// pointer position re-resolves to the nearest sample index; release and
/// cancellation take the same path back to idle so an interrupted gesture
/// can never leave a stale drag flag behind.
pub struct ScrubController {
    rect: PlotRect,
    sample_count: usize,
    active_index: Option<usize>,
    dragging: bool,
    throttle: FeedbackThrottle,
    shared: Option<SharedScrub>,
}

impl ScrubController {
    pub fn new(sample_count: usize, rect: PlotRect) -> Self {
        Self::with_config(sample_count, rect, ScrubConfig::default())
    }

    pub fn with_config(sample_count: usize, rect: PlotRect, config: ScrubConfig) -> Self {
        Self {
            rect,
            sample_count,
            active_index: None,
            dragging: false,
            throttle: FeedbackThrottle::new(config.feedback_interval),
            shared: None,
        }
    }

    /// Publish the session to a state shared by several stacked chart
    /// sections. One drag surface, one index; every section re-derives its
    /// own highlight from it.
    pub fn with_shared_state(mut self, shared: SharedScrub) -> Self {
        self.shared = Some(shared);
        self
    }

    /// Replaces the plot geometry after a layout pass. Stale dimensions must
    /// never be used for hit testing.
    pub fn set_geometry(&mut self, rect: PlotRect) {
        self.rect = rect;
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Whether the controller owns the pointer. Once a drag has started the
    /// hosting view must not cede the gesture to an ancestor scrollable; the
    /// initial down event stays contestable.
    pub fn claims_pointer(&self) -> bool {
        self.dragging
    }

    pub fn handle_event(&mut self, event: PointerEvent) -> ScrubUpdate {
        match event.phase {
            PointerPhase::Down => {
                if !self.rect.is_measured()
                    || self.sample_count < 2
                    || !self.rect.contains(event.position)
                {
                    return self.unchanged();
                }
                self.dragging = true;
                self.resolve(event.position.x)
            }
            PointerPhase::Move => {
                if !self.dragging {
                    return self.unchanged();
                }
                self.resolve(event.position.x)
            }
            PointerPhase::Up | PointerPhase::Cancel => self.release(),
        }
    }

    fn resolve(&mut self, x: f32) -> ScrubUpdate {
        let index = ViewController::map_pixels_to_index(
            x - self.rect.left(),
            self.rect.width,
            self.sample_count,
        );
        let changed = self.active_index != Some(index);
        self.active_index = Some(index);
        let pulse = changed && self.throttle.try_pulse();
        if changed {
            debug!(index, "scrub index changed");
            self.publish();
        }
        ScrubUpdate {
            active_index: self.active_index,
            changed,
            pulse,
        }
    }

    /// Release and interruption are identical: back to idle, index cleared
    /// unconditionally.
    fn release(&mut self) -> ScrubUpdate {
        let changed = self.dragging || self.active_index.is_some();
        self.dragging = false;
        self.active_index = None;
        if changed {
            debug!("scrub session ended");
            self.publish();
        }
        ScrubUpdate {
            active_index: None,
            changed,
            pulse: false,
        }
    }

    fn unchanged(&self) -> ScrubUpdate {
        ScrubUpdate {
            active_index: self.active_index,
            changed: false,
            pulse: false,
        }
    }

    fn publish(&self) {
        if let Some(shared) = &self.shared {
            let mut state = shared.write();
            state.active_index = self.active_index;
            state.is_dragging = self.dragging;
        }
    }
}
