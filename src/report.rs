//! One-shot evaluation of a preference set: ranked matches, payoff curves on a
//! shared spot axis and a theoretical value per match.
//!
//! The report carries everything needed to draw the score bars, the payoff
//! lines and the price list; drawing is left to the caller.
//!
//! # Examples
//! ```rust
//! use greekfit::config::EvaluationConfig;
//! use greekfit::core::{Greek, Preference};
//! use greekfit::market::MarketParams;
//! use greekfit::report::evaluate;
//! use greekfit::strategy::{Catalog, PreferenceSet, Strategy};
//!
//! let prefs = PreferenceSet::any().with(Greek::Delta, Preference::Positive);
//! let report = evaluate(
//!     &Catalog::standard(),
//!     &prefs,
//!     &MarketParams::default(),
//!     &EvaluationConfig::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(report.matches.len(), 3);
//! assert_eq!(report.curves[0].strategy, Strategy::ShortPut);
//! assert_eq!(report.curves[0].values.len(), report.spot_axis.len());
//! assert!(report.valuations[0].value.is_priced());
//! ```

use tracing::debug;

use crate::config::EvaluationConfig;
use crate::core::{SelectorError, from_json};
use crate::market::MarketParams;
use crate::math::linspace;
use crate::pricing::payoff::payoff;
use crate::pricing::valuation::{TheoreticalValue, theoretical_value};
use crate::strategy::{Catalog, PreferenceSet, Strategy, StrategyMatch, suggest_top};

/// Payoff of one strategy sampled on the report's spot axis.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PayoffCurve {
    pub strategy: Strategy,
    pub values: Vec<f64>,
}

/// Theoretical value of one strategy.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrategyValuation {
    pub strategy: Strategy,
    pub value: TheoreticalValue,
}

/// Result of [`evaluate`]. `curves` and `valuations` follow `matches` order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EvaluationReport {
    pub matches: Vec<StrategyMatch>,
    pub spot_axis: Vec<f64>,
    pub curves: Vec<PayoffCurve>,
    pub valuations: Vec<StrategyValuation>,
}

impl EvaluationReport {
    /// True when nothing matched (empty catalog or `top_n == 0`).
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Everything a caller collects before asking for a report.
///
/// `preferences` is mandatory in JSON; `market` and `config` fall back to
/// their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EvaluationRequest {
    pub preferences: PreferenceSet,
    #[serde(default)]
    pub market: MarketParams,
    #[serde(default)]
    pub config: EvaluationConfig,
}

impl EvaluationRequest {
    pub fn from_json(payload: &str) -> Result<Self, SelectorError> {
        from_json(payload)
    }

    pub fn evaluate(&self, catalog: &Catalog) -> Result<EvaluationReport, SelectorError> {
        evaluate(catalog, &self.preferences, &self.market, &self.config)
    }
}

/// Ranks `catalog` against `prefs`, then samples payoffs and quotes values for the top matches.
pub fn evaluate(
    catalog: &Catalog,
    prefs: &PreferenceSet,
    market: &MarketParams,
    config: &EvaluationConfig,
) -> Result<EvaluationReport, SelectorError> {
    config.validate()?;

    let matches = suggest_top(catalog, prefs, config.top_n);
    let spot_axis = linspace(config.spot_min, config.spot_max, config.spot_points);

    let curves = matches
        .iter()
        .map(|m| PayoffCurve {
            strategy: m.strategy,
            values: payoff(m.strategy, &spot_axis, market.strike, market.premium),
        })
        .collect();

    let valuations: Vec<StrategyValuation> = matches
        .iter()
        .map(|m| StrategyValuation {
            strategy: m.strategy,
            value: theoretical_value(m.strategy, market),
        })
        .collect();

    debug!(
        matches = matches.len(),
        spot_points = spot_axis.len(),
        priced = valuations.iter().filter(|v| v.value.is_priced()).count(),
        "evaluation report assembled"
    );

    Ok(EvaluationReport {
        matches,
        spot_axis,
        curves,
        valuations,
    })
}
