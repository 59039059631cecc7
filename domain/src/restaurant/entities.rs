//! Restaurant entity and its input validation

use super::value_objects::{PriceTier, Rating};
use crate::core::error::ValidationError;
use crate::core::id::RecordId;
use serde::{Deserialize, Serialize};

/// Minimum length of the area/address field, in characters.
pub const MIN_AREA_LEN: usize = 5;

/// A restaurant stored in the `restaurants` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
    pub style: String,
    pub price: PriceTier,
    #[serde(default)]
    pub delivery: bool,
    pub area: String,
    pub rating: Rating,
}

impl Restaurant {
    /// One-line summary, e.g. `Area: Downtown | Price: $$ | Rating: 4/5 | Delivery: Yes`
    pub fn details(&self) -> String {
        format!(
            "Area: {} | Price: {} | Rating: {} | Delivery: {}",
            self.area,
            self.price,
            self.rating,
            if self.delivery { "Yes" } else { "No" }
        )
    }
}

impl std::fmt::Display for Restaurant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.style)
    }
}

/// Input for adding a restaurant, before validation.
#[derive(Debug, Clone, Default)]
pub struct NewRestaurant {
    pub name: String,
    pub style: String,
    pub price: PriceTier,
    pub delivery: bool,
    pub area: String,
    pub rating: Rating,
}

impl NewRestaurant {
    /// Validate the input and assign a fresh id.
    ///
    /// Text fields are trimmed first. Checks run in field order and the
    /// first failure is returned.
    pub fn validate(self) -> Result<Restaurant, ValidationError> {
        let name = self.name.trim();
        let style = self.style.trim();
        let area = self.area.trim();

        if name.is_empty() {
            return Err(ValidationError::EmptyField("Restaurant name"));
        }

        if style.is_empty() {
            return Err(ValidationError::EmptyField("Style/Cuisine"));
        }
        if style.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::StyleContainsDigits);
        }

        if area.is_empty() {
            return Err(ValidationError::EmptyField("Area"));
        }
        if area.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::AreaDigitsOnly);
        }
        if area.chars().count() < MIN_AREA_LEN {
            return Err(ValidationError::AreaTooShort { min: MIN_AREA_LEN });
        }

        Ok(Restaurant {
            id: RecordId::generate(),
            name: name.to_string(),
            style: style.to_string(),
            price: self.price,
            delivery: self.delivery,
            area: area.to_string(),
            rating: self.rating,
        })
    }
}
