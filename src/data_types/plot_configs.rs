use eyre::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Minimum interval between feedback pulses. Pointer-move events arrive much
/// faster than a haptic tick should fire.
pub const FEEDBACK_INTERVAL: Duration = Duration::from_millis(80);

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Tension divisor for the cubic control points. Smaller values pull the
    /// tangents shorter, keeping bounded rating data from overshooting its
    /// domain.
    pub tension_divisor: f32,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            tension_divisor: crate::plot_types::CURVE_TENSION_DIVISOR,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrubConfig {
    pub feedback_interval: Duration,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            feedback_interval: FEEDBACK_INTERVAL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub min: u8,
    pub max: u8,
    pub thumb_diameter: f32,
    pub feedback_interval: Duration,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: 10,
            thumb_diameter: 24.0,
            feedback_interval: FEEDBACK_INTERVAL,
        }
    }
}

/// Engine tuning the hosting app can ship as static configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub curve: CurveConfig,
    #[serde(default)]
    pub scrub: ScrubConfig,
    #[serde(default)]
    pub slider: SliderConfig,
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.curve.tension_divisor, 6.0);
        assert_eq!(config.scrub.feedback_interval, Duration::from_millis(80));
        assert_eq!(config.slider.min, 1);
        assert_eq!(config.slider.max, 10);
        assert_eq!(config.slider.thumb_diameter, 24.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            EngineConfig::from_json(r#"{"slider": {"min": 1, "max": 5, "thumb_diameter": 20.0, "feedback_interval": {"secs": 0, "nanos": 80000000}}}"#)
                .unwrap();
        assert_eq!(config.slider.max, 5);
        assert_eq!(config.curve.tension_divisor, 6.0);
    }

    #[test]
    fn test_round_trip() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(EngineConfig::from_json("not json").is_err());
    }
}
