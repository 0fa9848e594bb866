//! Classification rules over a single address row.
//!
//! Every rule is independent of the others (except `is_useful_for_context`,
//! which reuses two of them). A missing optional field simply means the
//! condition is not met.

use super::curated::is_curated_city_relation;
use crate::models::{AddressRecord, OsmType};

/// `place=*` values that denote a city-like settlement. Sorted.
pub const CITY_PLACE_VALUES: [&str; 4] = ["city", "hamlet", "town", "village"];

/// Keys whose rows are worth showing as context. Sorted.
pub const USEFUL_CONTEXT_KEYS: [&str; 3] = ["boundary", "landuse", "place"];

/// Reserved `place=*` value for states
pub const STATE: &str = "state";

/// Street-level rank band, half-open
const STREET_RANKS: std::ops::Range<i32> = 26..28;

/// Anything ranked below this is a continent, sea or similar
const MIN_CONTEXT_RANK: i32 = 4;

fn is_tag(record: &AddressRecord, key: &str, value: &str) -> bool {
    record.class_key == key && record.class_value == value
}

/// OSM admin_level of countries, states and cities
const COUNTRY_LEVEL: u8 = 2;
const STATE_LEVEL: u8 = 4;
const CITY_LEVEL: u8 = 8;

fn is_admin_boundary(record: &AddressRecord, level: u8) -> bool {
    record.admin_level == Some(level) && is_tag(record, "boundary", "administrative")
}

fn is_city_value(value: &str) -> bool {
    CITY_PLACE_VALUES.binary_search(&value).is_ok()
}

pub fn is_street(record: &AddressRecord) -> bool {
    STREET_RANKS.contains(&record.rank_address)
}

pub fn is_city(record: &AddressRecord) -> bool {
    if record.class_key == "place" && is_city_value(&record.class_value) {
        return true;
    }

    if record.place.as_deref().is_some_and(is_city_value) {
        return true;
    }

    is_admin_boundary(record, CITY_LEVEL)
}

/// Whether the row was manually marked as a city
pub fn is_curated_city(record: &AddressRecord) -> bool {
    record.osm_type == OsmType::Relation && is_curated_city_relation(record.osm_id)
}

pub fn is_postcode(record: &AddressRecord) -> bool {
    is_tag(record, "place", "postcode") || is_tag(record, "boundary", "postal_code")
}

pub fn has_postcode(record: &AddressRecord) -> bool {
    record.postcode.as_deref().is_some_and(|p| !p.is_empty())
}

pub fn has_place(record: &AddressRecord) -> bool {
    record.place.is_some()
}

pub fn is_country(record: &AddressRecord) -> bool {
    is_admin_boundary(record, COUNTRY_LEVEL) || is_tag(record, "place", "country")
}

pub fn is_state(record: &AddressRecord) -> bool {
    is_tag(record, "place", STATE) || is_admin_boundary(record, STATE_LEVEL)
}

pub fn is_useful_for_context(record: &AddressRecord) -> bool {
    if record.name.is_empty() {
        return false;
    }

    if is_postcode(record) {
        return false;
    }

    // already surfaced as the city
    if is_curated_city(record) {
        return false;
    }

    if record.rank_address < MIN_CONTEXT_RANK {
        return false;
    }

    USEFUL_CONTEXT_KEYS
        .binary_search(&record.class_key.as_str())
        .is_ok()
}
