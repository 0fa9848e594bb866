//! Address rows as returned by the address-resolution backend.

use serde::{Deserialize, Deserializer, Serialize};

use super::hit::{lenient_labels, LabelMap};
use super::OsmType;

/// One row of a place's address breakdown.
///
/// `class_key`/`class_value` are OSM-style tag pairs and stay free-form
/// strings since the upstream vocabulary keeps growing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressRecord {
    /// Backend place id, not unique across roles
    pub place_id: i64,

    pub osm_type: OsmType,

    pub osm_id: i64,

    /// Multilingual names: {"default": "...", "de": "...", "fr": "..."}
    #[serde(default, deserialize_with = "lenient_labels")]
    pub name: LabelMap,

    #[serde(rename = "class")]
    pub class_key: String,

    #[serde(rename = "type")]
    pub class_value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_level: Option<u8>,

    pub rank_address: i32,

    /// Empty strings are read as absent
    #[serde(
        default,
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub postcode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

impl AddressRecord {
    /// Create a row with minimal required fields
    pub fn new(
        place_id: i64,
        osm_type: OsmType,
        osm_id: i64,
        class_key: &str,
        class_value: &str,
        rank_address: i32,
    ) -> Self {
        Self {
            place_id,
            osm_type,
            osm_id,
            name: LabelMap::new(),
            class_key: class_key.to_string(),
            class_value: class_value.to_string(),
            admin_level: None,
            rank_address,
            postcode: None,
            place: None,
        }
    }

    pub fn with_name(mut self, lang: &str, name: &str) -> Self {
        self.name.insert(lang.to_string(), name.to_string());
        self
    }

    pub fn with_admin_level(mut self, level: u8) -> Self {
        self.admin_level = Some(level);
        self
    }

    pub fn with_postcode(mut self, postcode: &str) -> Self {
        self.postcode = Some(postcode.to_string()).filter(|p| !p.is_empty());
        self
    }

    pub fn with_place(mut self, place: &str) -> Self {
        self.place = Some(place.to_string());
        self
    }

    /// Tag pair as `key/value`, e.g. `boundary/administrative`
    pub fn tag(&self) -> String {
        format!("{}/{}", self.class_key, self.class_value)
    }
}

impl std::fmt::Display for AddressRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self
            .name
            .get("default")
            .or_else(|| self.name.values().next())
            .map(String::as_str)
            .unwrap_or("");
        write!(
            f,
            "AddressRecord{{place_id={}, name={:?}, osm_key={}, osm_value={}}}",
            self.place_id, name, self.class_key, self.class_value
        )
    }
}
