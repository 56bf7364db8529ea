use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// One of the two mutually exclusive rule sets a filer may choose.
///
/// The new regime is the default; the old regime permits itemized
/// deductions and age-dependent slabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    Old,
    New,
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "old" => Some(Self::Old),
            "new" => Some(Self::New),
            _ => None,
        }
    }
}

impl FromStr for Regime {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidInput::UnrecognizedRegime(s.to_string()))
    }
}

/// Age bracket used to select the old-regime slab table.
///
/// A closed enum: an unknown tag is rejected at parse time, it never
/// falls through to a default table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "below60")]
    Below60,
    #[serde(rename = "60to80")]
    SixtyTo80,
    #[serde(rename = "above80")]
    Above80,
}

impl AgeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Below60 => "below60",
            Self::SixtyTo80 => "60to80",
            Self::Above80 => "above80",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "below60" => Some(Self::Below60),
            "60to80" => Some(Self::SixtyTo80),
            "above80" => Some(Self::Above80),
            _ => None,
        }
    }
}

impl FromStr for AgeGroup {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InvalidInput::UnrecognizedAgeGroup(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn regime_round_trips_through_tags() {
        for regime in [Regime::Old, Regime::New] {
            assert_eq!(Regime::parse(regime.as_str()), Some(regime));
        }
    }

    #[test]
    fn regime_rejects_unknown_tag() {
        let err = "legacy".parse::<Regime>().unwrap_err();

        assert_eq!(err, InvalidInput::UnrecognizedRegime("legacy".to_string()));
    }

    #[test]
    fn age_group_round_trips_through_tags() {
        for group in [AgeGroup::Below60, AgeGroup::SixtyTo80, AgeGroup::Above80] {
            assert_eq!(AgeGroup::parse(group.as_str()), Some(group));
        }
    }

    #[test]
    fn age_group_rejects_unknown_tag_instead_of_defaulting() {
        let err = "below-60".parse::<AgeGroup>().unwrap_err();

        assert_eq!(
            err,
            InvalidInput::UnrecognizedAgeGroup("below-60".to_string())
        );
    }
}
