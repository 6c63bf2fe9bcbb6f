//! Map features as returned by the area search, and the business records
//! derived from them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One upstream map element (node, way or relation).
///
/// Only the tag mapping is inspected. Tag values are kept as raw JSON so a
/// stray non-string value never fails the whole response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawFeature {
    #[serde(default)]
    pub tags: Option<BTreeMap<String, Value>>,
}

impl RawFeature {
    pub fn with_tags<K, V>(tags: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            tags: Some(tags.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    /// A tag's value if present as a non-empty string.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .as_ref()?
            .get(key)?
            .as_str()
            .filter(|v| !v.is_empty())
    }
}

/// A named business near the searched location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub name: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_element_variants() {
        let json = r#"[
            {"type":"node","id":1,"lat":17.4,"lon":78.4,"tags":{"name":"A","amenity":"cafe"}},
            {"type":"way","id":2,"center":{"lat":17.4,"lon":78.4},"tags":{"name":"B"}},
            {"type":"relation","id":3},
            {"type":"node","id":4,"tags":null}
        ]"#;
        let features: Vec<RawFeature> = serde_json::from_str(json).unwrap();
        assert_eq!(features.len(), 4);
        assert_eq!(features[0].tag("amenity"), Some("cafe"));
        assert_eq!(features[1].tag("name"), Some("B"));
        assert!(features[2].tags.is_none());
        assert!(features[3].tags.is_none());
    }

    #[test]
    fn test_tag_ignores_empty_and_non_string() {
        let f = RawFeature::with_tags([
            ("name", Value::from("")),
            ("shop", Value::Null),
            ("craft", Value::from(7)),
            ("amenity", Value::from("bank")),
        ]);
        assert_eq!(f.tag("name"), None);
        assert_eq!(f.tag("shop"), None);
        assert_eq!(f.tag("craft"), None);
        assert_eq!(f.tag("amenity"), Some("bank"));
        assert_eq!(f.tag("missing"), None);
    }
}
