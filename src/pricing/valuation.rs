//! Theoretical value quoted next to a suggested strategy.
//!
//! Only strategies whose name mentions a call or a put get a number, and they
//! get the plain vanilla Black-Scholes price of that side at the market strike.
//! Multi-leg structures are reported as [`TheoreticalValue::Complex`].

use std::fmt;

use crate::core::serialization::non_finite_f64;
use crate::market::MarketParams;
use crate::pricing::european::black_scholes_price;
use crate::strategy::Strategy;

/// Display text for strategies without a closed-form quote.
pub const COMPLEX_LABEL: &str = "Complex to model";

/// Priced value or the "complex" marker.
///
/// Degenerate market inputs can price to NaN or infinity; those encode as
/// `"NaN"`, `"inf"` or `"-inf"` so a report always decodes back.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TheoreticalValue {
    Priced(#[serde(with = "non_finite_f64")] f64),
    Complex,
}

impl TheoreticalValue {
    pub fn price(self) -> Option<f64> {
        match self {
            Self::Priced(price) => Some(price),
            Self::Complex => None,
        }
    }

    pub fn is_priced(self) -> bool {
        matches!(self, Self::Priced(_))
    }
}

impl fmt::Display for TheoreticalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Priced(price) => write!(f, "{price}"),
            Self::Complex => f.write_str(COMPLEX_LABEL),
        }
    }
}

/// Quote for `strategy` under `market`, dispatched by [`Strategy::priced_as`].
///
/// # Examples
/// ```rust
/// use greekfit::market::MarketParams;
/// use greekfit::pricing::valuation::{TheoreticalValue, theoretical_value};
/// use greekfit::strategy::Strategy;
///
/// let market = MarketParams::default();
/// let short_call = theoretical_value(Strategy::ShortCall, &market);
/// let long_call = theoretical_value(Strategy::LongCall, &market);
/// assert_eq!(short_call, long_call);
/// assert_eq!(
///     theoretical_value(Strategy::IronCondor, &market),
///     TheoreticalValue::Complex
/// );
/// ```
pub fn theoretical_value(strategy: Strategy, market: &MarketParams) -> TheoreticalValue {
    match strategy.priced_as() {
        Some(option_type) => TheoreticalValue::Priced(black_scholes_price(
            option_type,
            market.spot,
            market.strike,
            market.maturity,
            market.rate,
            market.vol,
        )),
        None => TheoreticalValue::Complex,
    }
}
