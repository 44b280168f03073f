use serde::{Deserialize, Serialize};

/// Identifier for one metric series on a chart.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricId(pub String);

impl From<&str> for MetricId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MetricId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Value bounds a metric is normalized against before vertical mapping.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainRange {
    pub min: f64,
    pub max: f64,
}

impl DomainRange {
    /// 1-10 rating scales (mood, energy, focus).
    pub const RATING: Self = Self {
        min: 1.0,
        max: 10.0,
    };

    /// Sleep duration in hours.
    pub const SLEEP_HOURS: Self = Self {
        min: 4.0,
        max: 10.0,
    };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Neutral fallback for a series with no recorded values.
    pub fn midpoint(&self) -> f64 {
        self.min + self.span() / 2.0
    }

    /// Fits a range around the given values with a proportional margin, for
    /// metrics without a fixed scale. An empty slice yields the rating range.
    pub fn fit(values: &[f64], margin_pct: f64) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values {
            if v.is_finite() {
                min = min.min(v);
                max = max.max(v);
            }
        }
        if min == f64::INFINITY {
            return Self::RATING;
        }
        let span = if (max - min).abs() < f64::EPSILON {
            1.0
        } else {
            max - min
        };
        Self::new(min - span * margin_pct, max + span * margin_pct)
    }
}

impl Default for DomainRange {
    fn default() -> Self {
        Self::RATING
    }
}

/// Ordered per-time-slot values for one metric, oldest first, most recent
/// ("today") last. Slots with no recorded check-in are `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleSeries {
    slots: Vec<Option<f64>>,
}

impl SampleSeries {
    pub fn new(slots: Vec<Option<f64>>) -> Self {
        Self { slots }
    }

    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            slots: values.into_iter().map(Some).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.slots.get(index).copied().flatten()
    }

    pub fn slots(&self) -> &[Option<f64>] {
        &self.slots
    }

    pub fn has_any_value(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    /// Materializes every slot for curve-building.
    ///
    /// Empty slots are recovered by linear interpolation between the nearest
    /// recorded neighbors, weighted by slot distance; slots with a neighbor on
    /// only one side take that neighbor's value. A series with no recorded
    /// values at all fills with `neutral` (callers pass the domain midpoint).
    pub fn filled(&self, neutral: f64) -> Vec<f64> {
        let n = self.slots.len();
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            if let Some(v) = self.slots[i] {
                out.push(v);
                continue;
            }
            let before = self.slots[..i]
                .iter()
                .rev()
                .enumerate()
                .find_map(|(d, s)| s.map(|v| (d + 1, v)));
            let after = self.slots[i + 1..]
                .iter()
                .enumerate()
                .find_map(|(d, s)| s.map(|v| (d + 1, v)));
            let value = match (before, after) {
                (Some((db, vb)), Some((da, va))) => {
                    vb + (va - vb) * db as f64 / (db + da) as f64
                }
                (Some((_, vb)), None) => vb,
                (None, Some((_, va))) => va,
                (None, None) => neutral,
            };
            out.push(value);
        }
        out
    }
}

/// One metric's data on a chart: its samples and the range they are
/// normalized against.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub id: MetricId,
    pub samples: SampleSeries,
    pub domain: DomainRange,
}

impl ChartSeries {
    pub fn new(id: impl Into<MetricId>, samples: SampleSeries, domain: DomainRange) -> Self {
        Self {
            id: id.into(),
            samples,
            domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_interpolates_midpoint() {
        let series = SampleSeries::new(vec![Some(4.0), None, Some(8.0)]);
        assert_eq!(series.filled(5.5), vec![4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_fill_weights_by_distance() {
        // Gap of two slots between 2 and 8: thirds, not halves.
        let series = SampleSeries::new(vec![Some(2.0), None, None, Some(8.0)]);
        assert_eq!(series.filled(5.0), vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_fill_falls_back_to_single_neighbor() {
        let series = SampleSeries::new(vec![None, None, Some(8.0)]);
        assert_eq!(series.filled(5.5), vec![8.0, 8.0, 8.0]);

        let series = SampleSeries::new(vec![Some(3.0), None, None]);
        assert_eq!(series.filled(5.5), vec![3.0, 3.0, 3.0]);
    }

    #[test]
    fn test_fill_empty_series_uses_neutral() {
        let series = SampleSeries::new(vec![None, None, None]);
        assert_eq!(series.filled(5.5), vec![5.5, 5.5, 5.5]);
        assert!(!series.has_any_value());
    }

    #[test]
    fn test_domain_fit() {
        let range = DomainRange::fit(&[6.0, 7.5, 5.0], 0.1);
        assert!(range.min < 5.0 && range.max > 7.5);
        assert_eq!(DomainRange::fit(&[], 0.1), DomainRange::RATING);
    }

    #[test]
    fn test_domain_midpoint() {
        assert_eq!(DomainRange::RATING.midpoint(), 5.5);
        assert_eq!(DomainRange::SLEEP_HOURS.midpoint(), 7.0);
    }
}
