//! Named option strategies, their Greek-sign catalog and the preference scorer.

pub mod catalog;
pub mod scorer;

use std::fmt;

use crate::core::OptionType;

pub use catalog::{Catalog, CatalogEntry, StrategyProfile};
pub use scorer::{
    PreferenceSet, StrategyMatch, TOP_MATCHES, rank_strategies, score_profile, suggest_strategies,
    suggest_top,
};

/// The closed set of strategies known to the catalog and payoff formulas.
///
/// Names outside the set resolve to [`Strategy::Unknown`], which has a flat
/// zero payoff and is never priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Strategy {
    LongCall,
    LongPut,
    ShortCall,
    ShortPut,
    LongStraddle,
    LongStrangle,
    IronCondor,
    Butterfly,
    CalendarSpread,
    Unknown,
}

impl Strategy {
    /// Every known strategy, in standard catalog order.
    pub const ALL: [Strategy; 9] = [
        Strategy::LongCall,
        Strategy::LongPut,
        Strategy::ShortCall,
        Strategy::ShortPut,
        Strategy::LongStraddle,
        Strategy::LongStrangle,
        Strategy::IronCondor,
        Strategy::Butterfly,
        Strategy::CalendarSpread,
    ];

    /// Canonical display name. Ranking ties are broken on this string.
    pub fn name(self) -> &'static str {
        match self {
            Self::LongCall => "Long Call",
            Self::LongPut => "Long Put",
            Self::ShortCall => "Short Call",
            Self::ShortPut => "Short Put",
            Self::LongStraddle => "Straddle (Long)",
            Self::LongStrangle => "Strangle (Long)",
            Self::IronCondor => "Iron Condor",
            Self::Butterfly => "Butterfly",
            Self::CalendarSpread => "Calendar Spread",
            Self::Unknown => "Unknown",
        }
    }

    /// Exact canonical-name lookup; anything else is [`Strategy::Unknown`].
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == name)
            .unwrap_or(Self::Unknown)
    }

    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }

    /// Vanilla side used to quote a theoretical value.
    ///
    /// Dispatch is on the name: anything containing `"Call"` prices as a call,
    /// then anything containing `"Put"` prices as a put, so short positions
    /// are quoted as the long vanilla. Everything else is not priced.
    pub fn priced_as(self) -> Option<OptionType> {
        let name = self.name();
        if name.contains("Call") {
            Some(OptionType::Call)
        } else if name.contains("Put") {
            Some(OptionType::Put)
        } else {
            None
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Strategy {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for Strategy {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        strategy.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_exactly() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::from_name(strategy.name()), strategy);
            assert!(strategy.is_known());
        }
        assert_eq!(Strategy::from_name("long call"), Strategy::Unknown);
        assert_eq!(Strategy::from_name("Collar"), Strategy::Unknown);
    }

    #[test]
    fn pricing_dispatch_follows_the_name() {
        assert_eq!(Strategy::LongCall.priced_as(), Some(OptionType::Call));
        assert_eq!(Strategy::ShortCall.priced_as(), Some(OptionType::Call));
        assert_eq!(Strategy::LongPut.priced_as(), Some(OptionType::Put));
        assert_eq!(Strategy::ShortPut.priced_as(), Some(OptionType::Put));
        for strategy in [
            Strategy::LongStraddle,
            Strategy::LongStrangle,
            Strategy::IronCondor,
            Strategy::Butterfly,
            Strategy::CalendarSpread,
            Strategy::Unknown,
        ] {
            assert_eq!(strategy.priced_as(), None, "{strategy}");
        }
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&Strategy::LongStraddle).unwrap();
        assert_eq!(json, "\"Straddle (Long)\"");
        let back: Strategy = serde_json::from_str("\"Iron Condor\"").unwrap();
        assert_eq!(back, Strategy::IronCondor);
        let unknown: Strategy = serde_json::from_str("\"Jade Lizard\"").unwrap();
        assert_eq!(unknown, Strategy::Unknown);
    }
}
