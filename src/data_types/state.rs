use super::data::MetricId;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

/// Scrub state shared between the chart sections stacked over one physical
/// drag surface. The controller driving the surface is the single writer;
/// every section re-derives its highlight from the one index stored here.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SharedScrubState {
    pub active_index: Option<usize>,
    pub is_dragging: bool,
}

pub type SharedScrub = Arc<RwLock<SharedScrubState>>;

impl SharedScrubState {
    pub fn handle() -> SharedScrub {
        Arc::new(RwLock::new(Self::default()))
    }
}

/// Metric series currently visible on a multi-series chart.
///
/// The set is never empty: toggling the last remaining member off is refused,
/// so the chart always has at least one curve to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSeriesSet {
    visible: HashSet<MetricId>,
}

impl ActiveSeriesSet {
    pub fn new(initial: MetricId) -> Self {
        let mut visible = HashSet::new();
        visible.insert(initial);
        Self { visible }
    }

    pub fn insert(&mut self, id: MetricId) {
        self.visible.insert(id);
    }

    /// Flips a metric's visibility. Returns `false` when the toggle was
    /// refused because `id` is the last visible member.
    pub fn toggle(&mut self, id: &MetricId) -> bool {
        if self.visible.contains(id) {
            if self.visible.len() == 1 {
                return false;
            }
            self.visible.remove(id);
        } else {
            self.visible.insert(id.clone());
        }
        true
    }

    pub fn is_visible(&self, id: &MetricId) -> bool {
        self.visible.contains(id)
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetricId> {
        self.visible.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_refuses_to_empty_the_set() {
        let mood = MetricId::from("mood");
        let mut set = ActiveSeriesSet::new(mood.clone());
        assert!(!set.toggle(&mood));
        assert!(set.is_visible(&mood));
    }

    #[test]
    fn test_toggle_flips_visibility() {
        let mood = MetricId::from("mood");
        let sleep = MetricId::from("sleep");
        let mut set = ActiveSeriesSet::new(mood.clone());
        set.insert(sleep.clone());

        assert!(set.toggle(&mood));
        assert!(!set.is_visible(&mood));
        assert!(set.is_visible(&sleep));

        // Sleep is now the last member and sticks.
        assert!(!set.toggle(&sleep));

        assert!(set.toggle(&mood));
        assert!(set.is_visible(&mood));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_shared_state_single_writer() {
        let shared = SharedScrubState::handle();
        {
            let mut state = shared.write();
            state.active_index = Some(14);
            state.is_dragging = true;
        }
        let reader = shared.clone();
        assert_eq!(reader.read().active_index, Some(14));
        assert!(reader.read().is_dragging);
    }
}
