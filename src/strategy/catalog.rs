//! Greek-sign profiles keyed by strategy.
//!
//! A [`Catalog`] is an explicit, immutable value handed to the scorer. The
//! standard table is available through [`Catalog::standard`]; smaller or
//! alternative catalogs can be built with [`Catalog::new`] or decoded from JSON.

use std::collections::HashSet;

use crate::core::{Greek, GreekSign, SelectorError, from_json, to_json_pretty};
use crate::strategy::Strategy;

/// Qualitative sign of each Greek for one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct StrategyProfile {
    pub delta: GreekSign,
    pub gamma: GreekSign,
    pub vega: GreekSign,
    pub theta: GreekSign,
    pub rho: GreekSign,
}

impl StrategyProfile {
    pub const fn new(
        delta: GreekSign,
        gamma: GreekSign,
        vega: GreekSign,
        theta: GreekSign,
        rho: GreekSign,
    ) -> Self {
        Self {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }
    }

    /// Sign recorded for `greek`.
    pub fn sign(&self, greek: Greek) -> GreekSign {
        match greek {
            Greek::Delta => self.delta,
            Greek::Gamma => self.gamma,
            Greek::Vega => self.vega,
            Greek::Theta => self.theta,
            Greek::Rho => self.rho,
        }
    }
}

/// One row of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CatalogEntry {
    pub strategy: Strategy,
    #[serde(flatten)]
    pub profile: StrategyProfile,
}

const STANDARD_PROFILES: [(Strategy, StrategyProfile); 9] = {
    use crate::core::GreekSign::{Low, Negative as Neg, Neutral as Neu, Positive as Pos};
    [
        (Strategy::LongCall, StrategyProfile::new(Pos, Pos, Pos, Neg, Pos)),
        (Strategy::LongPut, StrategyProfile::new(Neg, Pos, Pos, Neg, Neg)),
        (Strategy::ShortCall, StrategyProfile::new(Neg, Neg, Neg, Pos, Neg)),
        (Strategy::ShortPut, StrategyProfile::new(Pos, Neg, Neg, Pos, Pos)),
        (Strategy::LongStraddle, StrategyProfile::new(Neu, Pos, Pos, Neg, Neu)),
        (Strategy::LongStrangle, StrategyProfile::new(Neu, Pos, Pos, Neg, Neu)),
        (Strategy::IronCondor, StrategyProfile::new(Neu, Neg, Neg, Pos, Neu)),
        (Strategy::Butterfly, StrategyProfile::new(Neu, Pos, Neg, Pos, Neu)),
        (Strategy::CalendarSpread, StrategyProfile::new(Neu, Low, Pos, Neu, Neu)),
    ]
};

/// Ordered strategy profiles. Iteration order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<CatalogEntry>", into = "Vec<CatalogEntry>")]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// The nine standard strategies.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_PROFILES
                .iter()
                .map(|&(strategy, profile)| CatalogEntry { strategy, profile })
                .collect(),
        }
    }

    /// Builds a catalog, rejecting [`Strategy::Unknown`] and duplicates.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, SelectorError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !entry.strategy.is_known() {
                return Err(SelectorError::InvalidCatalog(
                    "catalog entries must name a known strategy".to_string(),
                ));
            }
            if !seen.insert(entry.strategy) {
                return Err(SelectorError::InvalidCatalog(format!(
                    "duplicate strategy {}",
                    entry.strategy
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Keeps only the listed strategies, preserving catalog order.
    pub fn subset(&self, strategies: &[Strategy]) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|entry| strategies.contains(&entry.strategy))
                .copied()
                .collect(),
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn profile(&self, strategy: Strategy) -> Option<&StrategyProfile> {
        self.entries
            .iter()
            .find(|entry| entry.strategy == strategy)
            .map(|entry| &entry.profile)
    }

    pub fn contains(&self, strategy: Strategy) -> bool {
        self.profile(strategy).is_some()
    }

    pub fn from_json(payload: &str) -> Result<Self, SelectorError> {
        from_json(payload)
    }

    pub fn to_json(&self) -> Result<String, SelectorError> {
        to_json_pretty(self)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<CatalogEntry>> for Catalog {
    type Error = SelectorError;

    fn try_from(entries: Vec<CatalogEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<Catalog> for Vec<CatalogEntry> {
    fn from(catalog: Catalog) -> Self {
        catalog.entries
    }
}
