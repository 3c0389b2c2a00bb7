//! Market parameters shared by payoff curves and Black-Scholes pricing.
//!
//! No range checks are applied here. A zero maturity or zero volatility is
//! accepted and propagates as infinity/NaN through the closed-form price.

/// Default strike in underlying price units.
pub const DEFAULT_STRIKE: f64 = 100.0;
/// Default option premium in points.
pub const DEFAULT_PREMIUM: f64 = 10.0;
/// Default spot.
pub const DEFAULT_SPOT: f64 = 100.0;
/// Default time to maturity in years.
pub const DEFAULT_MATURITY: f64 = 1.0;
/// Default continuously compounded risk-free rate.
pub const DEFAULT_RATE: f64 = 0.01;
/// Default annualized volatility.
pub const DEFAULT_VOL: f64 = 0.2;

/// Market snapshot for one evaluation request.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MarketParams {
    /// Strike `K`.
    pub strike: f64,
    /// Premium paid or received per strategy leg.
    pub premium: f64,
    /// Current spot `S0`.
    pub spot: f64,
    /// Time to maturity `T` in years.
    pub maturity: f64,
    /// Risk-free rate `r`.
    pub rate: f64,
    /// Volatility `sigma`.
    pub vol: f64,
}

impl Default for MarketParams {
    fn default() -> Self {
        Self {
            strike: DEFAULT_STRIKE,
            premium: DEFAULT_PREMIUM,
            spot: DEFAULT_SPOT,
            maturity: DEFAULT_MATURITY,
            rate: DEFAULT_RATE,
            vol: DEFAULT_VOL,
        }
    }
}

impl MarketParams {
    /// Starts a builder seeded with the defaults.
    ///
    /// # Examples
    /// ```
    /// use greekfit::market::MarketParams;
    ///
    /// let market = MarketParams::builder().spot(105.0).vol(0.25).build();
    /// assert_eq!(market.spot, 105.0);
    /// assert_eq!(market.strike, 100.0);
    /// ```
    #[inline]
    pub fn builder() -> MarketParamsBuilder {
        MarketParamsBuilder::default()
    }
}

/// Builder for [`MarketParams`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketParamsBuilder {
    params: MarketParams,
}

impl MarketParamsBuilder {
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.params.strike = strike;
        self
    }

    #[inline]
    pub fn premium(mut self, premium: f64) -> Self {
        self.params.premium = premium;
        self
    }

    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.params.spot = spot;
        self
    }

    #[inline]
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.params.maturity = maturity;
        self
    }

    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.params.rate = rate;
        self
    }

    #[inline]
    pub fn vol(mut self, vol: f64) -> Self {
        self.params.vol = vol;
        self
    }

    /// Builds the snapshot as given; nothing is validated.
    pub fn build(self) -> MarketParams {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_starts_from_defaults() {
        let market = MarketParams::builder().build();
        assert_eq!(market, MarketParams::default());
        assert_eq!(market.rate, 0.01);
        assert_eq!(market.vol, 0.2);
    }

    #[test]
    fn builder_accepts_degenerate_inputs() {
        let market = MarketParams::builder().maturity(0.0).vol(0.0).build();
        assert_eq!(market.maturity, 0.0);
        assert_eq!(market.vol, 0.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let market: MarketParams = serde_json::from_str(r#"{"spot": 120.0}"#).unwrap();
        assert_eq!(market.spot, 120.0);
        assert_eq!(market.strike, DEFAULT_STRIKE);
        assert_eq!(market.premium, DEFAULT_PREMIUM);
    }
}
