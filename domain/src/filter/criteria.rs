//! Filter criteria and evaluation

use crate::restaurant::{PriceTier, Restaurant};
use serde::{Deserialize, Serialize};

/// Conditions a restaurant must meet to stay in the candidate list.
///
/// Every field is optional; an unset field imposes no constraint. Text
/// criteria match case-insensitively anywhere in the field, and a blank
/// text criterion counts as unset.
///
/// # Example
///
/// ```
/// use roulette_domain::{FilterCriteria, PriceTier};
///
/// let criteria = FilterCriteria::new()
///     .with_style("ital")
///     .with_price(PriceTier::Two)
///     .with_min_rating(4);
/// assert!(criteria.is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub style_contains: Option<String>,
    pub price_equals: Option<PriceTier>,
    pub delivery_equals: Option<bool>,
    pub area_contains: Option<String>,
    pub min_rating: Option<u8>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style_contains = Some(style.into());
        self
    }

    pub fn with_price(mut self, price: PriceTier) -> Self {
        self.price_equals = Some(price);
        self
    }

    pub fn with_delivery(mut self, delivery: bool) -> Self {
        self.delivery_equals = Some(delivery);
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area_contains = Some(area.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: u8) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    /// Whether at least one criterion constrains the list
    pub fn is_active(&self) -> bool {
        needle(&self.style_contains).is_some()
            || self.price_equals.is_some()
            || self.delivery_equals.is_some()
            || needle(&self.area_contains).is_some()
            || self.min_rating.is_some()
    }

    /// Whether a single restaurant satisfies every set criterion
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        if let Some(style) = needle(&self.style_contains)
            && !contains_ignore_case(&restaurant.style, &style)
        {
            return false;
        }
        if let Some(price) = self.price_equals
            && restaurant.price != price
        {
            return false;
        }
        if let Some(delivery) = self.delivery_equals
            && restaurant.delivery != delivery
        {
            return false;
        }
        if let Some(area) = needle(&self.area_contains)
            && !contains_ignore_case(&restaurant.area, &area)
        {
            return false;
        }
        if let Some(min) = self.min_rating
            && restaurant.rating.stars() < min
        {
            return false;
        }
        true
    }

    /// Filter a list, keeping the original order
    pub fn apply(&self, restaurants: &[Restaurant]) -> Vec<Restaurant> {
        restaurants
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}

/// Trimmed, lowercased text criterion, or `None` when blank
fn needle(criterion: &Option<String>) -> Option<String> {
    criterion
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::id::RecordId;
    use crate::restaurant::Rating;

    fn restaurant(
        id: &str,
        style: &str,
        price: PriceTier,
        delivery: bool,
        area: &str,
        rating: i64,
    ) -> Restaurant {
        Restaurant {
            id: RecordId::new(id),
            name: format!("Restaurant {}", id),
            style: style.to_string(),
            price,
            delivery,
            area: area.to_string(),
            rating: Rating::new(rating).unwrap(),
        }
    }

    fn sample() -> Vec<Restaurant> {
        vec![
            restaurant("a", "Italian", PriceTier::Two, true, "Downtown", 3),
            restaurant("b", "Sushi", PriceTier::Three, false, "Midtown", 4),
            restaurant("c", "Italian Pizza", PriceTier::One, false, "Uptown", 5),
            restaurant("d", "Thai", PriceTier::Two, true, "Downtown East", 2),
        ]
    }

    fn ids(list: &[Restaurant]) -> Vec<&str> {
        list.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_keeps_everything() {
        let criteria = FilterCriteria::new();
        assert!(!criteria.is_active());
        assert_eq!(criteria.apply(&sample()), sample());
    }

    #[test]
    fn test_min_rating_preserves_order() {
        let list = vec![
            restaurant("r3", "Any", PriceTier::Two, false, "Somewhere", 3),
            restaurant("r4", "Any", PriceTier::Two, false, "Somewhere", 4),
            restaurant("r5", "Any", PriceTier::Two, false, "Somewhere", 5),
        ];
        let result = FilterCriteria::new().with_min_rating(4).apply(&list);
        assert_eq!(ids(&result), vec!["r4", "r5"]);
    }

    #[test]
    fn test_style_is_case_insensitive_substring() {
        let result = FilterCriteria::new().with_style("  ITAL ").apply(&sample());
        assert_eq!(ids(&result), vec!["a", "c"]);
    }

    #[test]
    fn test_blank_text_is_ignored() {
        let criteria = FilterCriteria::new().with_style("   ").with_area("");
        assert!(!criteria.is_active());
        assert_eq!(criteria.apply(&sample()).len(), 4);
    }

    #[test]
    fn test_price_and_delivery_exact() {
        let result = FilterCriteria::new()
            .with_price(PriceTier::Two)
            .with_delivery(true)
            .apply(&sample());
        assert_eq!(ids(&result), vec!["a", "d"]);

        let result = FilterCriteria::new().with_delivery(false).apply(&sample());
        assert_eq!(ids(&result), vec!["b", "c"]);
    }

    #[test]
    fn test_area_substring() {
        let result = FilterCriteria::new().with_area("downtown").apply(&sample());
        assert_eq!(ids(&result), vec!["a", "d"]);
    }

    #[test]
    fn test_matches_iff_every_criterion_holds() {
        let criteria = FilterCriteria::new()
            .with_style("italian")
            .with_min_rating(3);
        for r in sample() {
            let expected = r.style.to_lowercase().contains("italian") && r.rating.stars() >= 3;
            assert_eq!(criteria.matches(&r), expected, "restaurant {}", r.id);
        }
    }

    #[test]
    fn test_adding_a_criterion_never_grows_the_result() {
        let list = sample();
        let steps = [
            FilterCriteria::new(),
            FilterCriteria::new().with_area("town"),
            FilterCriteria::new().with_area("town").with_min_rating(2),
            FilterCriteria::new()
                .with_area("town")
                .with_min_rating(2)
                .with_delivery(true),
            FilterCriteria::new()
                .with_area("town")
                .with_min_rating(2)
                .with_delivery(true)
                .with_price(PriceTier::Two),
            FilterCriteria::new()
                .with_area("town")
                .with_min_rating(2)
                .with_delivery(true)
                .with_price(PriceTier::Two)
                .with_style("thai"),
        ];

        let mut previous = list.clone();
        for criteria in &steps {
            let current = criteria.apply(&list);
            assert!(current.iter().all(|r| previous.contains(r)));
            previous = current;
        }
        assert_eq!(ids(&previous), vec!["d"]);
    }
}
