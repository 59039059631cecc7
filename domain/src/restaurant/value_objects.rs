//! Restaurant value objects
//!
//! # Price
//! - [`PriceTier`] - one of five ordered tiers, `$` to `$$$$$`
//!
//! # Rating
//! - [`Rating`] - whole stars from 1 to 5

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Price tier of a restaurant.
///
/// Stored as the dollar-sign string itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceTier {
    #[serde(rename = "$")]
    One,
    #[default]
    #[serde(rename = "$$")]
    Two,
    #[serde(rename = "$$$")]
    Three,
    #[serde(rename = "$$$$")]
    Four,
    #[serde(rename = "$$$$$")]
    Five,
}

impl PriceTier {
    pub const ALL: [PriceTier; 5] = [
        PriceTier::One,
        PriceTier::Two,
        PriceTier::Three,
        PriceTier::Four,
        PriceTier::Five,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceTier::One => "$",
            PriceTier::Two => "$$",
            PriceTier::Three => "$$$",
            PriceTier::Four => "$$$$",
            PriceTier::Five => "$$$$$",
        }
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PriceTier {
    type Err = ValidationError;

    /// Accepts the dollar-sign form (`$$`) or the tier number (`2`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        PriceTier::ALL
            .into_iter()
            .enumerate()
            .find(|(i, tier)| tier.as_str() == s || (i + 1).to_string() == s)
            .map(|(_, tier)| tier)
            .ok_or_else(|| ValidationError::UnknownPriceTier(s.to_string()))
    }
}

/// Star rating from 1 to 5.
///
/// Older records stored the rating as a string (`"4"`); both forms are
/// read, but it is always written as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RatingRepr", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: i64) -> Result<Self, ValidationError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&stars) {
            Ok(Self(stars as u8))
        } else {
            Err(ValidationError::RatingOutOfRange(stars))
        }
    }

    pub fn stars(&self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(3)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl FromStr for Rating {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let stars = s
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidRating(s.to_string()))?;
        Self::new(stars)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RatingRepr {
    Number(i64),
    Text(String),
}

impl TryFrom<RatingRepr> for Rating {
    type Error = ValidationError;

    fn try_from(repr: RatingRepr) -> Result<Self, Self::Error> {
        match repr {
            RatingRepr::Number(n) => Rating::new(n),
            RatingRepr::Text(s) => s.parse(),
        }
    }
}
