//! Module `pricing::payoff`.
//!
//! Expiry profit/loss per strategy across a spot axis, with routines such as
//! `payoff`, `payoff_by_name` and `Strategy::payoff_at`.
//!
//! Wing strikes are fixed: the strangle uses `K ± 10`, while the iron condor
//! and butterfly use absolute wings at 90 and 110 regardless of `K`. The
//! calendar spread is a smooth sinusoidal proxy centred on `K`, not a
//! two-expiry valuation.
//!
//! # Examples
//! ```rust
//! use greekfit::pricing::payoff::payoff;
//! use greekfit::strategy::Strategy;
//!
//! let pnl = payoff(Strategy::LongCall, &[100.0, 150.0], 100.0, 10.0);
//! assert_eq!(pnl, vec![-10.0, 40.0]);
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::warn;

use crate::market::{DEFAULT_PREMIUM, DEFAULT_STRIKE};
use crate::strategy::Strategy;

const STRANGLE_OFFSET: f64 = 10.0;
const STRANGLE_PREMIUM_MULTIPLE: f64 = 1.5;
const LOWER_WING: f64 = 90.0;
const UPPER_WING: f64 = 110.0;
const CALENDAR_AMPLITUDE: f64 = 5.0;
const CALENDAR_SCALE: f64 = 10.0;

/// `max(x, 0)` that lets NaN through.
#[inline]
fn positive_part(x: f64) -> f64 {
    if x > 0.0 || x.is_nan() { x } else { 0.0 }
}

impl Strategy {
    /// Profit/loss at expiry for a single spot.
    ///
    /// [`Strategy::Unknown`] is flat at zero.
    pub fn payoff_at(self, spot: f64, strike: f64, premium: f64) -> f64 {
        let call = |k: f64| positive_part(spot - k);
        let put = |k: f64| positive_part(k - spot);

        match self {
            Self::LongCall => call(strike) - premium,
            Self::LongPut => put(strike) - premium,
            Self::ShortCall => -call(strike) + premium,
            Self::ShortPut => -put(strike) + premium,
            Self::LongStraddle => call(strike) + put(strike) - 2.0 * premium,
            Self::LongStrangle => {
                call(strike + STRANGLE_OFFSET) + put(strike - STRANGLE_OFFSET)
                    - STRANGLE_PREMIUM_MULTIPLE * premium
            }
            Self::IronCondor => {
                let wing = if spot < LOWER_WING {
                    spot - LOWER_WING
                } else if spot >= UPPER_WING {
                    UPPER_WING - spot
                } else {
                    0.0
                };
                wing + premium
            }
            Self::Butterfly => call(LOWER_WING) - 2.0 * call(strike) + call(UPPER_WING),
            Self::CalendarSpread => {
                -CALENDAR_AMPLITUDE * ((spot - strike) / CALENDAR_SCALE).sin() + CALENDAR_AMPLITUDE
            }
            Self::Unknown => 0.0,
        }
    }
}

/// Strike and premium shared by every point of a curve.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PayoffParams {
    pub strike: f64,
    pub premium: f64,
}

impl Default for PayoffParams {
    fn default() -> Self {
        Self {
            strike: DEFAULT_STRIKE,
            premium: DEFAULT_PREMIUM,
        }
    }
}

impl PayoffParams {
    pub fn curve(&self, strategy: Strategy, spots: &[f64]) -> Vec<f64> {
        payoff(strategy, spots, self.strike, self.premium)
    }
}

/// Strategy PnL at expiry for each spot. Output length equals `spots.len()`.
pub fn payoff(strategy: Strategy, spots: &[f64], strike: f64, premium: f64) -> Vec<f64> {
    spots
        .iter()
        .map(|&s| strategy.payoff_at(s, strike, premium))
        .collect()
}

/// [`payoff`] keyed by canonical name; unrecognized names give all zeros.
pub fn payoff_by_name(name: &str, spots: &[f64], strike: f64, premium: f64) -> Vec<f64> {
    let strategy = Strategy::from_name(name);
    if !strategy.is_known() {
        warn!(strategy = name, "unknown strategy, payoff is flat zero");
    }
    payoff(strategy, spots, strike, premium)
}

/// Rayon-parallel [`payoff`]; identical output.
#[cfg(feature = "parallel")]
pub fn payoff_par(strategy: Strategy, spots: &[f64], strike: f64, premium: f64) -> Vec<f64> {
    spots
        .par_iter()
        .map(|&s| strategy.payoff_at(s, strike, premium))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_call() {
        let pnl = payoff(Strategy::LongCall, &[90.0, 100.0, 110.0, 150.0], 100.0, 10.0);
        assert_eq!(pnl, vec![-10.0, -10.0, 0.0, 40.0]);
    }

    #[test]
    fn test_long_put() {
        let pnl = payoff(Strategy::LongPut, &[80.0, 90.0, 100.0, 110.0], 100.0, 5.0);
        assert_eq!(pnl, vec![15.0, 5.0, -5.0, -5.0]);
    }

    #[test]
    fn short_legs_mirror_long_legs() {
        let spots = [60.0, 95.0, 100.0, 105.0, 140.0];
        for (long, short) in [
            (Strategy::LongCall, Strategy::ShortCall),
            (Strategy::LongPut, Strategy::ShortPut),
        ] {
            let l = payoff(long, &spots, 100.0, 7.0);
            let s = payoff(short, &spots, 100.0, 7.0);
            for (a, b) in l.iter().zip(&s) {
                assert_eq!(*a, -*b);
            }
        }
    }

    #[test]
    fn straddle_and_strangle() {
        let straddle = payoff(Strategy::LongStraddle, &[80.0, 100.0, 125.0], 100.0, 10.0);
        assert_eq!(straddle, vec![0.0, -20.0, 5.0]);

        // Wings at 90/110 for K = 100, cost 1.5 * premium.
        let strangle = payoff(Strategy::LongStrangle, &[70.0, 100.0, 130.0], 100.0, 10.0);
        assert_eq!(strangle, vec![5.0, -15.0, 5.0]);
    }

    #[test]
    fn iron_condor_is_piecewise() {
        let pnl = payoff(
            Strategy::IronCondor,
            &[80.0, 90.0, 100.0, 109.999, 110.0, 125.0],
            100.0,
            5.0,
        );
        assert_eq!(pnl, vec![-5.0, 5.0, 5.0, 5.0, 5.0, -10.0]);
    }

    #[test]
    fn iron_condor_wings_ignore_strike() {
        let a = payoff(Strategy::IronCondor, &[85.0, 115.0], 100.0, 0.0);
        let b = payoff(Strategy::IronCondor, &[85.0, 115.0], 250.0, 0.0);
        assert_eq!(a, b);
    }

    #[test]
    fn butterfly_peaks_at_strike() {
        let spots = [80.0, 90.0, 100.0, 105.0, 110.0, 130.0];
        let pnl = payoff(Strategy::Butterfly, &spots, 100.0, 10.0);
        assert_eq!(pnl, vec![0.0, 0.0, 10.0, 5.0, 0.0, 0.0]);
    }

    #[test]
    fn calendar_spread_is_centred_on_strike() {
        let pnl = payoff(Strategy::CalendarSpread, &[100.0], 100.0, 10.0);
        assert!((pnl[0] - 5.0).abs() < 1e-12);
        let trough = 100.0 - 5.0 * std::f64::consts::PI;
        let below = Strategy::CalendarSpread.payoff_at(trough, 100.0, 0.0);
        assert!((below - 10.0).abs() < 1e-12);
    }

    #[test]
    fn unknown_strategy_is_flat_zero() {
        let spots = [50.0, 100.0, 150.0];
        let zeros = payoff_by_name("Jade Lizard", &spots, 100.0, 10.0);
        assert_eq!(zeros, vec![0.0; 3]);
        assert_eq!(
            payoff_by_name("Long Call", &spots, 100.0, 10.0),
            payoff(Strategy::LongCall, &spots, 100.0, 10.0)
        );
        assert!(payoff(Strategy::Unknown, &[], 100.0, 10.0).is_empty());
    }

    #[test]
    fn nan_spot_propagates_through_max() {
        assert!(Strategy::LongCall.payoff_at(f64::NAN, 100.0, 10.0).is_nan());
    }

    #[test]
    fn default_params_match_market_defaults() {
        let params = PayoffParams::default();
        assert_eq!(params.curve(Strategy::LongCall, &[100.0]), vec![-10.0]);
    }
}
