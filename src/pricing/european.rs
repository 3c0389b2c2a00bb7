//! Module `pricing::european`.
//!
//! Textbook Black-Scholes price for European calls and puts on a non-dividend
//! paying underlying, through `black_scholes_price` and its label-keyed variant.
//!
//! References: Hull (11th ed.), Ch. 15.
//!
//! Numerical considerations: inputs are not guarded. `t = 0` or `sigma = 0`
//! divides by zero inside `d1`; the result is whatever IEEE arithmetic yields
//! (NaN at the money, a limit of 0/1 for the CDF terms otherwise).
use tracing::warn;

use crate::math::normal_cdf;
use crate::pricing::OptionType;

/// `(d1, d2)` for spot `s`, strike `k`, maturity `t`, rate `r`, volatility `sigma`.
#[inline]
pub fn d1_d2(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Black-Scholes spot-option price with zero dividend yield.
///
/// Parameters:
/// - `option_type`: call or put payoff direction.
/// - `s`: current spot price.
/// - `k`: strike price.
/// - `t`: time to expiry in years.
/// - `r`: continuously compounded risk-free rate.
/// - `sigma`: annualized volatility.
///
/// # Examples
/// ```rust
/// use greekfit::core::OptionType;
/// use greekfit::pricing::european::black_scholes_price;
///
/// let call = black_scholes_price(OptionType::Call, 100.0, 100.0, 1.0, 0.01, 0.20);
/// let put = black_scholes_price(OptionType::Put, 100.0, 100.0, 1.0, 0.01, 0.20);
/// assert!((call - 8.4333).abs() < 1e-3);
/// assert!(call > put);
/// ```
pub fn black_scholes_price(
    option_type: OptionType,
    s: f64,
    k: f64,
    t: f64,
    r: f64,
    sigma: f64,
) -> f64 {
    let (d1, d2) = d1_d2(s, k, t, r, sigma);
    let df = (-r * t).exp();

    match option_type {
        OptionType::Call => s * normal_cdf(d1) - k * df * normal_cdf(d2),
        OptionType::Put => k * df * normal_cdf(-d2) - s * normal_cdf(-d1),
    }
}

/// [`black_scholes_price`] keyed by `"call"` / `"put"`; any other label prices at 0.
pub fn black_scholes_price_by_label(
    label: &str,
    s: f64,
    k: f64,
    t: f64,
    r: f64,
    sigma: f64,
) -> f64 {
    match OptionType::from_label(label) {
        Some(option_type) => black_scholes_price(option_type, s, k, t, r, sigma),
        None => {
            warn!(option_type = label, "unsupported option type, price is zero");
            0.0
        }
    }
}
