//! greekfit matches option strategies to a desired Greek-sign profile, draws their
//! expiry payoff curves and quotes a Black-Scholes value for the vanilla ones.
//!
//! The crate has two independent, stateless halves:
//! - [`strategy`]: a catalog of nine strategies with qualitative Greek signs and
//!   a scorer ranking them against a [`strategy::PreferenceSet`].
//! - [`pricing`]: closed-form payoff curves per strategy and the textbook
//!   Black-Scholes price for calls and puts.
//!
//! [`report`] composes both for a single request.
//!
//! Greeks are labels here, never computed from the pricing model.
//!
//! # Feature Flags
//! - `parallel`: enables Rayon-powered payoff curve evaluation.
//!
//! # Quick Start
//! Rank strategies:
//! ```rust
//! use greekfit::core::{Greek, Preference};
//! use greekfit::strategy::{Catalog, PreferenceSet, suggest_strategies};
//!
//! let prefs = PreferenceSet::any()
//!     .with(Greek::Delta, Preference::Neutral)
//!     .with(Greek::Vega, Preference::Negative);
//! let top = suggest_strategies(&Catalog::standard(), &prefs);
//! assert_eq!(top.len(), 3);
//! assert_eq!(top[0].name(), "Iron Condor");
//! ```
//!
//! Draw a payoff curve:
//! ```rust
//! use greekfit::math::linspace;
//! use greekfit::pricing::payoff::payoff;
//! use greekfit::strategy::Strategy;
//!
//! let spots = linspace(50.0, 150.0, 500);
//! let pnl = payoff(Strategy::Butterfly, &spots, 100.0, 10.0);
//! assert_eq!(pnl.len(), spots.len());
//! ```
//!
//! Price a Black-Scholes put:
//! ```rust
//! use greekfit::core::OptionType;
//! use greekfit::pricing::european::black_scholes_price;
//!
//! let px = black_scholes_price(OptionType::Put, 100.0, 100.0, 1.0, 0.01, 0.20);
//! assert!(px > 7.4 && px < 7.5);
//! ```

pub mod config;
pub mod core;
pub mod market;
pub mod math;
pub mod pricing;
pub mod report;
pub mod strategy;
