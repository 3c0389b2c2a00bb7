use std::fmt;
use std::str::FromStr;

use crate::core::SelectorError;

/// Plain-vanilla option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionType {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
}

impl OptionType {
    /// Exact lowercase label match (`"call"` / `"put"`); anything else is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "call" => Some(Self::Call),
            "put" => Some(Self::Put),
            _ => None,
        }
    }

    /// Lowercase label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// First-order and second-order sensitivities, used here only as qualitative labels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Greek {
    /// Sensitivity to spot.
    Delta,
    /// Sensitivity of delta to spot.
    Gamma,
    /// Sensitivity to volatility.
    Vega,
    /// Sensitivity to time.
    Theta,
    /// Sensitivity to rate.
    Rho,
}

impl Greek {
    /// Every Greek in scoring order.
    pub const ALL: [Greek; 5] = [
        Greek::Delta,
        Greek::Gamma,
        Greek::Vega,
        Greek::Theta,
        Greek::Rho,
    ];

    /// Capitalized display name (`"Delta"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Delta => "Delta",
            Self::Gamma => "Gamma",
            Self::Vega => "Vega",
            Self::Theta => "Theta",
            Self::Rho => "Rho",
        }
    }
}

impl fmt::Display for Greek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Greek {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|greek| greek.name() == s)
            .ok_or_else(|| SelectorError::InvalidLabel {
                field: "greek".to_string(),
                value: s.to_string(),
            })
    }
}

/// Qualitative sign carried by a catalog profile.
///
/// `Low` only appears in catalog data and counts as a weak form of `Neutral`
/// when matched against a [`Preference::Neutral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GreekSign {
    Positive,
    Negative,
    Neutral,
    Low,
}

impl GreekSign {
    /// Lowercase label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for GreekSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GreekSign {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            "low" => Ok(Self::Low),
            other => Err(SelectorError::InvalidLabel {
                field: "greek sign".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Desired sign for one Greek in a preference set.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    Positive,
    Negative,
    Neutral,
    /// No constraint; skipped entirely by the scorer.
    #[default]
    Any,
}

impl Preference {
    /// Lowercase label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Any => "any",
        }
    }

    /// Whether a catalog sign satisfies this preference.
    ///
    /// Matching is asymmetric: a desired `Neutral` accepts `Neutral` and `Low`,
    /// while `Low` is never a desired value. `Any` accepts everything but the
    /// scorer skips it before asking.
    pub fn matches(self, sign: GreekSign) -> bool {
        match (self, sign) {
            (Self::Any, _) => true,
            (Self::Positive, GreekSign::Positive) => true,
            (Self::Negative, GreekSign::Negative) => true,
            (Self::Neutral, GreekSign::Neutral | GreekSign::Low) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Preference {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            "neutral" => Ok(Self::Neutral),
            "any" => Ok(Self::Any),
            other => Err(SelectorError::InvalidLabel {
                field: "preference".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_type_labels_are_exact() {
        assert_eq!(OptionType::from_label("call"), Some(OptionType::Call));
        assert_eq!(OptionType::from_label("put"), Some(OptionType::Put));
        assert_eq!(OptionType::from_label("Call"), None);
        assert_eq!(OptionType::from_label("exotic"), None);
        assert_eq!(OptionType::Put.label(), "put");
    }

    #[test]
    fn greek_names_parse_back() {
        for greek in Greek::ALL {
            assert_eq!(greek.name().parse::<Greek>().unwrap(), greek);
        }
        assert!("delta".parse::<Greek>().is_err());
    }

    #[test]
    fn neutral_preference_accepts_low_but_not_the_reverse() {
        assert!(Preference::Neutral.matches(GreekSign::Neutral));
        assert!(Preference::Neutral.matches(GreekSign::Low));
        assert!(!Preference::Positive.matches(GreekSign::Low));
        assert!(!Preference::Negative.matches(GreekSign::Neutral));
        assert!("low".parse::<Preference>().is_err());
        assert_eq!("low".parse::<GreekSign>().unwrap(), GreekSign::Low);
    }

    #[test]
    fn preference_defaults_to_any() {
        assert_eq!(Preference::default(), Preference::Any);
    }
}
