//! Preference matching against a strategy catalog.
//!
//! Each strategy scores `hits / constrained` over the Greeks whose preference
//! is not `any`. A desired `neutral` is also satisfied by a catalog `low`. A
//! preference set with no constraints scores every strategy at zero.
//!
//! Ranking sorts descending on `(score, name)`, so equal scores resolve to the
//! byte-lexicographically greater canonical name first.
//!
//! # Examples
//! ```rust
//! use greekfit::core::{Greek, Preference};
//! use greekfit::strategy::{Catalog, PreferenceSet, Strategy, suggest_strategies};
//!
//! let prefs = PreferenceSet::any().with(Greek::Delta, Preference::Positive);
//! let top = suggest_strategies(&Catalog::standard(), &prefs);
//! assert_eq!(top[0].strategy, Strategy::ShortPut);
//! assert_eq!(top[1].strategy, Strategy::LongCall);
//! assert_eq!(top[0].score, 1.0);
//! ```

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::core::{Greek, Preference, SelectorError};
use crate::strategy::{Catalog, Strategy, StrategyProfile};

/// Number of matches returned by [`suggest_strategies`].
pub const TOP_MATCHES: usize = 3;

/// Desired sign per Greek. Defaults to `any` everywhere.
///
/// JSON decoding requires all five Greeks and rejects any other key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreferenceSet {
    #[serde(rename = "Delta")]
    pub delta: Preference,
    #[serde(rename = "Gamma")]
    pub gamma: Preference,
    #[serde(rename = "Vega")]
    pub vega: Preference,
    #[serde(rename = "Theta")]
    pub theta: Preference,
    #[serde(rename = "Rho")]
    pub rho: Preference,
}

impl PreferenceSet {
    pub const fn new(
        delta: Preference,
        gamma: Preference,
        vega: Preference,
        theta: Preference,
        rho: Preference,
    ) -> Self {
        Self {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }
    }

    /// No constraint on any Greek.
    pub fn any() -> Self {
        Self::default()
    }

    /// Returns a copy with `greek` set to `preference`.
    #[must_use]
    pub fn with(mut self, greek: Greek, preference: Preference) -> Self {
        self.set(greek, preference);
        self
    }

    pub fn set(&mut self, greek: Greek, preference: Preference) {
        *self.slot_mut(greek) = preference;
    }

    pub fn get(&self, greek: Greek) -> Preference {
        match greek {
            Greek::Delta => self.delta,
            Greek::Gamma => self.gamma,
            Greek::Vega => self.vega,
            Greek::Theta => self.theta,
            Greek::Rho => self.rho,
        }
    }

    /// Number of Greeks with a preference other than `any`.
    pub fn constrained(&self) -> usize {
        Greek::ALL
            .iter()
            .filter(|&&greek| self.get(greek) != Preference::Any)
            .count()
    }

    /// Builds a set from `(greek name, label)` pairs such as form fields.
    ///
    /// Every Greek must be present exactly by name (`"Delta"`, ...); a missing
    /// Greek, an unknown key or a label outside `positive|negative|neutral|any`
    /// is an error. A repeated key keeps the last label.
    ///
    /// # Examples
    /// ```rust
    /// use greekfit::core::{Greek, Preference};
    /// use greekfit::strategy::PreferenceSet;
    ///
    /// let prefs = PreferenceSet::from_labels([
    ///     ("Delta", "neutral"),
    ///     ("Gamma", "any"),
    ///     ("Vega", "positive"),
    ///     ("Theta", "any"),
    ///     ("Rho", "any"),
    /// ])
    /// .unwrap();
    /// assert_eq!(prefs.get(Greek::Vega), Preference::Positive);
    ///
    /// assert!(PreferenceSet::from_labels([("Delta", "neutral")]).is_err());
    /// ```
    pub fn from_labels<I, K, V>(labels: I) -> Result<Self, SelectorError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut slots: [Option<Preference>; 5] = [None; 5];
        for (key, value) in labels {
            let greek: Greek = key.as_ref().parse()?;
            let label = value.as_ref();
            let preference: Preference =
                label.parse().map_err(|_| SelectorError::InvalidLabel {
                    field: greek.name().to_string(),
                    value: label.to_string(),
                })?;
            slots[greek as usize] = Some(preference);
        }

        let mut prefs = Self::default();
        for greek in Greek::ALL {
            let preference =
                slots[greek as usize].ok_or_else(|| SelectorError::MissingGreek(greek.to_string()))?;
            prefs.set(greek, preference);
        }
        Ok(prefs)
    }

    fn slot_mut(&mut self, greek: Greek) -> &mut Preference {
        match greek {
            Greek::Delta => &mut self.delta,
            Greek::Gamma => &mut self.gamma,
            Greek::Vega => &mut self.vega,
            Greek::Theta => &mut self.theta,
            Greek::Rho => &mut self.rho,
        }
    }
}

/// One ranked strategy.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrategyMatch {
    /// Fraction of constrained Greeks matched, in `[0, 1]`.
    pub score: f64,
    pub strategy: Strategy,
}

impl StrategyMatch {
    pub fn name(&self) -> &'static str {
        self.strategy.name()
    }

    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.name().cmp(self.name()))
    }
}

/// Match score of one profile.
pub fn score_profile(profile: &StrategyProfile, prefs: &PreferenceSet) -> f64 {
    let (hits, total) = Greek::ALL
        .iter()
        .fold((0_u32, 0_u32), |(hits, total), &greek| {
            let desired = prefs.get(greek);
            if desired == Preference::Any {
                return (hits, total);
            }
            let hit = desired.matches(profile.sign(greek));
            (hits + u32::from(hit), total + 1)
        });

    if total == 0 {
        0.0
    } else {
        f64::from(hits) / f64::from(total)
    }
}

/// Every catalog strategy, best match first.
pub fn rank_strategies(catalog: &Catalog, prefs: &PreferenceSet) -> Vec<StrategyMatch> {
    let mut matches: Vec<StrategyMatch> = catalog
        .iter()
        .map(|entry| {
            let score = score_profile(&entry.profile, prefs);
            trace!(strategy = entry.strategy.name(), score, "scored strategy");
            StrategyMatch {
                score,
                strategy: entry.strategy,
            }
        })
        .collect();
    matches.sort_by(StrategyMatch::rank_cmp);
    matches
}

/// The `n` best matches.
pub fn suggest_top(catalog: &Catalog, prefs: &PreferenceSet, n: usize) -> Vec<StrategyMatch> {
    let mut matches = rank_strategies(catalog, prefs);
    matches.truncate(n);
    debug!(
        candidates = catalog.len(),
        constrained = prefs.constrained(),
        returned = matches.len(),
        best = matches.first().map(StrategyMatch::name),
        "ranked strategies"
    );
    matches
}

/// The [`TOP_MATCHES`] best matches.
pub fn suggest_strategies(catalog: &Catalog, prefs: &PreferenceSet) -> Vec<StrategyMatch> {
    suggest_top(catalog, prefs, TOP_MATCHES)
}
