//! Reduces raw map features to named business records.

use super::types::{Business, RawFeature};

/// Tag keys consulted for a business category, highest precedence first.
pub const CATEGORY_TAGS: [&str; 3] = ["amenity", "shop", "craft"];

pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Keep named features, in input order, and resolve each one's category.
///
/// Features without a non-empty `name` tag are dropped; no placeholder is
/// invented. Never fails.
pub fn normalize(features: &[RawFeature]) -> Vec<Business> {
    features
        .iter()
        .filter_map(|feature| {
            let name = feature.tag("name")?;
            Some(Business {
                name: name.to_string(),
                category: category_of(feature).to_string(),
            })
        })
        .collect()
}

pub fn category_of(feature: &RawFeature) -> &str {
    CATEGORY_TAGS
        .iter()
        .find_map(|key| feature.tag(key))
        .unwrap_or(UNKNOWN_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn business(name: &str, category: &str) -> Business {
        Business {
            name: name.into(),
            category: category.into(),
        }
    }

    #[test]
    fn test_amenity_beats_shop() {
        let f = RawFeature::with_tags([
            ("name", "Corner"),
            ("amenity", "cafe"),
            ("shop", "bakery"),
        ]);
        assert_eq!(normalize(&[f]), vec![business("Corner", "cafe")]);
    }

    #[test]
    fn test_shop_only() {
        let f = RawFeature::with_tags([("name", "Corner"), ("shop", "bakery")]);
        assert_eq!(normalize(&[f]), vec![business("Corner", "bakery")]);
    }

    #[test]
    fn test_craft_after_shop() {
        let f = RawFeature::with_tags([("name", "Brewhouse"), ("craft", "brewery")]);
        assert_eq!(category_of(&f), "brewery");
        let f = RawFeature::with_tags([
            ("name", "Brewhouse"),
            ("craft", "brewery"),
            ("shop", "alcohol"),
        ]);
        assert_eq!(category_of(&f), "alcohol");
    }

    #[test]
    fn test_no_category_tags_is_unknown() {
        let f = RawFeature::with_tags([("name", "Mystery"), ("building", "yes")]);
        assert_eq!(normalize(&[f]), vec![business("Mystery", "unknown")]);
    }

    #[test]
    fn test_empty_amenity_falls_through() {
        let f = RawFeature::with_tags([("name", "Kiosk"), ("amenity", ""), ("shop", "kiosk")]);
        assert_eq!(category_of(&f), "kiosk");
    }

    #[test]
    fn test_unnamed_features_dropped() {
        let features = vec![
            RawFeature::with_tags([("amenity", Value::from("cafe"))]),
            RawFeature::with_tags([("name", Value::Null), ("amenity", Value::from("cafe"))]),
            RawFeature::with_tags([("name", Value::from("")), ("amenity", Value::from("cafe"))]),
            RawFeature::default(),
        ];
        assert!(normalize(&features).is_empty());
    }

    #[test]
    fn test_keeps_order_and_duplicates() {
        let features = vec![
            RawFeature::with_tags([("name", "Zeta"), ("amenity", "cafe")]),
            RawFeature::with_tags([("amenity", "cafe")]),
            RawFeature::with_tags([("name", "Alpha"), ("amenity", "cafe")]),
            RawFeature::with_tags([("name", "Zeta"), ("amenity", "cafe")]),
        ];
        let names: Vec<_> = normalize(&features).into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Zeta"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize(&[]).is_empty());
    }
}
