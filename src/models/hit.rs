//! Raw search hits as stored in the index `_source`.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use super::place::{GeoPoint, RawExtent};

/// Language code -> label, with the reserved `"default"` key
pub type LabelMap = HashMap<String, String>;

/// Read a label map where `null` means "no labels" and `null` entries are
/// dropped, so a missing translation falls back like an absent key.
pub fn lenient_labels<'de, D>(deserializer: D) -> Result<LabelMap, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_optional_labels(deserializer)?.unwrap_or_default())
}

/// Like [`lenient_labels`] but keeps a `null` map as `None`
pub fn lenient_optional_labels<'de, D>(deserializer: D) -> Result<Option<LabelMap>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<HashMap<String, Option<String>>>::deserialize(deserializer)?;
    Ok(raw.map(|labels| {
        labels
            .into_iter()
            .filter_map(|(lang, label)| label.map(|label| (lang, label)))
            .collect()
    }))
}

/// A single ranked hit from the search backend.
///
/// Every field is optional; a hit missing anything still assembles into a
/// (degraded) feature.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<GeoPoint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extent: Option<RawExtent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osm_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osm_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osm_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub housenumber: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osm_type: Option<String>,

    // Language-mapped fields
    #[serde(
        default,
        deserialize_with = "lenient_optional_labels",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<LabelMap>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_labels",
        skip_serializing_if = "Option::is_none"
    )]
    pub country: Option<LabelMap>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_labels",
        skip_serializing_if = "Option::is_none"
    )]
    pub city: Option<LabelMap>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_labels",
        skip_serializing_if = "Option::is_none"
    )]
    pub street: Option<LabelMap>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_labels",
        skip_serializing_if = "Option::is_none"
    )]
    pub state: Option<LabelMap>,
}
