//! Settings for [`crate::report::evaluate`].

use crate::core::{SelectorError, from_json};
use crate::strategy::TOP_MATCHES;

pub const DEFAULT_SPOT_MIN: f64 = 50.0;
pub const DEFAULT_SPOT_MAX: f64 = 150.0;
pub const DEFAULT_SPOT_POINTS: usize = 500;
/// Upper bound on the sampled spot axis.
pub const MAX_SPOT_POINTS: usize = 1_000_000;

/// How many matches to report and which spot axis to draw payoffs on.
///
/// Missing JSON fields fall back to the defaults.
///
/// # Examples
/// ```rust
/// use greekfit::config::EvaluationConfig;
///
/// let config = EvaluationConfig::from_json(r#"{"spot_points": 11}"#).unwrap();
/// assert_eq!(config.spot_points, 11);
/// assert_eq!(config.top_n, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    pub top_n: usize,
    pub spot_min: f64,
    pub spot_max: f64,
    pub spot_points: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            top_n: TOP_MATCHES,
            spot_min: DEFAULT_SPOT_MIN,
            spot_max: DEFAULT_SPOT_MAX,
            spot_points: DEFAULT_SPOT_POINTS,
        }
    }
}

impl EvaluationConfig {
    pub fn validate(&self) -> Result<(), SelectorError> {
        if self.spot_points == 0 {
            return Err(SelectorError::InvalidConfig(
                "spot_points must be > 0".to_string(),
            ));
        }
        if self.spot_points > MAX_SPOT_POINTS {
            return Err(SelectorError::InvalidConfig(format!(
                "spot_points {} exceeds {MAX_SPOT_POINTS}",
                self.spot_points
            )));
        }
        if !self.spot_min.is_finite() || !self.spot_max.is_finite() {
            return Err(SelectorError::InvalidConfig(
                "spot axis bounds must be finite".to_string(),
            ));
        }
        if self.spot_min > self.spot_max {
            return Err(SelectorError::InvalidConfig(format!(
                "spot_min {} exceeds spot_max {}",
                self.spot_min, self.spot_max
            )));
        }
        Ok(())
    }

    /// Decodes and validates.
    pub fn from_json(payload: &str) -> Result<Self, SelectorError> {
        let config: Self = from_json(payload)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EvaluationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.spot_points, 500);
    }

    #[test]
    fn rejects_empty_or_inverted_axis() {
        let empty = EvaluationConfig {
            spot_points: 0,
            ..EvaluationConfig::default()
        };
        assert!(matches!(empty.validate(), Err(SelectorError::InvalidConfig(_))));

        let inverted = EvaluationConfig {
            spot_min: 200.0,
            ..EvaluationConfig::default()
        };
        assert!(inverted.validate().is_err());

        assert!(EvaluationConfig::from_json(r#"{"spot_max": 10.0}"#).is_err());
    }

    #[test]
    fn caps_spot_axis_size() {
        let largest = EvaluationConfig {
            spot_points: MAX_SPOT_POINTS,
            ..EvaluationConfig::default()
        };
        assert!(largest.validate().is_ok());

        let huge = EvaluationConfig::from_json(r#"{"spot_points": 1000000000000000000}"#);
        assert!(matches!(huge, Err(SelectorError::InvalidConfig(_))));
    }
}
