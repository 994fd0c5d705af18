//! Criteria filtering over the catalog, with the relaxed retry policy.

use crate::models::{Criteria, PropertyListing};
use tracing::debug;

/// How many alternatives the relaxed retry may return.
const MAX_ALTERNATIVES: usize = 3;

/// Outcome of a recommendation query.
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    /// Strict filter found listings.
    Matches(Vec<PropertyListing>),
    /// Strict filter was empty; these come from the relaxed retry and may
    /// themselves be empty.
    Alternatives(Vec<PropertyListing>),
}

/// Catalog-order-preserving AND filter. Fields left unset in the criteria
/// do not constrain anything.
pub fn filter(listings: &[PropertyListing], criteria: &Criteria) -> Vec<PropertyListing> {
    listings
        .iter()
        .filter(|p| criteria.budget.map_or(true, |budget| p.price <= budget))
        .filter(|p| criteria.bedrooms.map_or(true, |n| p.bedrooms == n))
        .filter(|p| criteria.property_type.map_or(true, |t| p.property_type == t))
        .cloned()
        .collect()
}

/// Strict filter first; on an empty result, retry once with the fixed
/// loosening policy: budget stretched by 20%, bedroom constraint dropped,
/// property type kept. Alternatives are capped at three.
pub fn recommend(listings: &[PropertyListing], criteria: &Criteria) -> Recommendation {
    let strict = filter(listings, criteria);
    if !strict.is_empty() {
        return Recommendation::Matches(strict);
    }

    let relaxed = Criteria {
        budget: criteria.budget.map(|budget| (budget as f64 * 1.2) as i64),
        bedrooms: None,
        property_type: criteria.property_type,
    };
    debug!("strict filter empty, retrying with {:?}", relaxed);

    let mut alternatives = filter(listings, &relaxed);
    alternatives.truncate(MAX_ALTERNATIVES);
    Recommendation::Alternatives(alternatives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::PropertyType;

    fn ids(listings: &[PropertyListing]) -> Vec<&str> {
        listings.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn apartments_under_800k() {
        let criteria = Criteria {
            budget: Some(800_000),
            bedrooms: None,
            property_type: Some(PropertyType::Apartment),
        };
        let found = filter(catalog::listings(), &criteria);
        assert_eq!(ids(&found), vec!["prop_004", "prop_005", "prop_006", "prop_008"]);
    }

    #[test]
    fn filtering_is_monotonic() {
        let base = Criteria {
            budget: Some(1_000_000),
            ..Default::default()
        };
        let baseline = filter(catalog::listings(), &base).len();

        let lower_budget = Criteria {
            budget: Some(700_000),
            ..Default::default()
        };
        assert!(filter(catalog::listings(), &lower_budget).len() <= baseline);

        let with_bedrooms = Criteria {
            bedrooms: Some(2),
            ..base.clone()
        };
        assert!(filter(catalog::listings(), &with_bedrooms).len() <= baseline);

        let with_type = Criteria {
            property_type: Some(PropertyType::House),
            ..base
        };
        assert!(filter(catalog::listings(), &with_type).len() <= baseline);
    }

    #[test]
    fn relaxed_retry_stretches_budget_and_keeps_type() {
        // No house sells for <= 900k, but 1.2x reaches prop_007 at 950k.
        let criteria = Criteria {
            budget: Some(900_000),
            bedrooms: None,
            property_type: Some(PropertyType::House),
        };
        match recommend(catalog::listings(), &criteria) {
            Recommendation::Alternatives(alts) => {
                assert_eq!(ids(&alts), vec!["prop_007"]);
            }
            other => panic!("expected alternatives, got {:?}", other),
        }
    }

    #[test]
    fn relaxed_retry_drops_bedrooms_and_caps_at_three() {
        // No 5-bedroom apartment exists; the retry drops the bedroom
        // constraint entirely and truncates to three alternatives.
        let criteria = Criteria {
            budget: Some(800_000),
            bedrooms: Some(5),
            property_type: Some(PropertyType::Apartment),
        };
        match recommend(catalog::listings(), &criteria) {
            Recommendation::Alternatives(alts) => {
                assert_eq!(alts.len(), 3);
                assert!(alts.iter().all(|p| p.property_type == PropertyType::Apartment));
                assert!(alts.iter().all(|p| p.bedrooms != 5));
            }
            other => panic!("expected alternatives, got {:?}", other),
        }
    }

    #[test]
    fn strict_match_skips_relaxation() {
        let criteria = Criteria {
            bedrooms: Some(2),
            ..Default::default()
        };
        match recommend(catalog::listings(), &criteria) {
            Recommendation::Matches(found) => {
                assert_eq!(ids(&found), vec!["prop_001", "prop_005", "prop_008"]);
            }
            other => panic!("expected matches, got {:?}", other),
        }
    }

    #[test]
    fn relaxation_can_still_come_up_empty() {
        let criteria = Criteria {
            budget: Some(100_000),
            bedrooms: None,
            property_type: Some(PropertyType::Townhouse),
        };
        match recommend(catalog::listings(), &criteria) {
            Recommendation::Alternatives(alts) => assert!(alts.is_empty()),
            other => panic!("expected alternatives, got {:?}", other),
        }
    }
}
