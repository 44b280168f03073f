//! Rate-limited feedback pulses.
//!
//! Pointer-move events arrive per frame; the discrete feedback channel
//! (haptic tick, highlight flash) must not. The throttle enforces a minimum
//! interval between pulses while leaving visual updates untouched.

use crate::data_types::FEEDBACK_INTERVAL;
use std::time::{Duration, Instant};

/// Collaborator invoked once per accepted feedback pulse.
pub trait FeedbackSink {
    fn pulse(&mut self);
}

impl<F: FnMut()> FeedbackSink for F {
    fn pulse(&mut self) {
        self()
    }
}

/// Sink for hosts without a feedback channel.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn pulse(&mut self) {}
}

/// Enforces the minimum interval between feedback pulses.
#[derive(Clone, Copy, Debug)]
pub struct FeedbackThrottle {
    min_interval: Duration,
    last_pulse: Option<Instant>,
}

impl FeedbackThrottle {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_pulse: None,
        }
    }

    /// True when a pulse is allowed now; records the pulse time when it is.
    pub fn try_pulse(&mut self) -> bool {
        let now = Instant::now();
        match self.last_pulse {
            Some(last) if now.duration_since(last) < self.min_interval => false,
            _ => {
                self.last_pulse = Some(now);
                true
            }
        }
    }
}

impl Default for FeedbackThrottle {
    fn default() -> Self {
        Self::new(FEEDBACK_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rapid_changes_pulse_at_most_once() {
        let mut throttle = FeedbackThrottle::default();
        let fired: usize = (0..50).filter(|_| throttle.try_pulse()).count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_pulse_allowed_after_window_elapses() {
        let mut throttle = FeedbackThrottle::new(Duration::from_millis(10));
        assert!(throttle.try_pulse());
        assert!(!throttle.try_pulse());
        std::thread::sleep(Duration::from_millis(15));
        assert!(throttle.try_pulse());
    }

    #[test]
    fn test_closure_sink() {
        let mut count = 0;
        {
            let mut sink = || count += 1;
            sink.pulse();
            sink.pulse();
        }
        assert_eq!(count, 2);
    }
}
