//! Shared geographic primitives: OSM object types, points and extents.

use serde::{Deserialize, Serialize};

use crate::error::ExtentError;

/// Type of OSM object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsmType {
    #[serde(alias = "N")]
    Node,
    #[serde(alias = "W")]
    Way,
    #[serde(alias = "R")]
    Relation,
}

impl std::fmt::Display for OsmType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OsmType::Node => write!(f, "node"),
            OsmType::Way => write!(f, "way"),
            OsmType::Relation => write!(f, "relation"),
        }
    }
}

/// Geographic point (lat/lon)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Bounding box given by its north-west and south-east corners.
///
/// Corners are kept exactly as received; no check is made that `nw` is
/// actually north-west of `se`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub nw: GeoPoint,
    pub se: GeoPoint,
}

impl Extent {
    pub fn new(nw: GeoPoint, se: GeoPoint) -> Self {
        Self { nw, se }
    }

    /// Flat `[nwLon, nwLat, seLon, seLat]` form used in feature properties.
    pub fn to_flat(&self) -> [f64; 4] {
        [self.nw.lon, self.nw.lat, self.se.lon, self.se.lat]
    }
}

/// Extent envelope as stored in the index
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawExtent {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub geo_type: Option<String>,
    #[serde(default)]
    pub coordinates: Vec<Vec<f64>>, // [[nwLon, nwLat], [seLon, seLat]]
}

impl RawExtent {
    pub fn envelope(nw: [f64; 2], se: [f64; 2]) -> Self {
        Self {
            geo_type: Some("envelope".to_string()),
            coordinates: vec![nw.to_vec(), se.to_vec()],
        }
    }
}

impl TryFrom<&RawExtent> for Extent {
    type Error = ExtentError;

    fn try_from(raw: &RawExtent) -> Result<Self, Self::Error> {
        if raw.coordinates.len() != 2 {
            return Err(ExtentError::CornerCount(raw.coordinates.len()));
        }

        let corner = |idx: usize| -> Result<GeoPoint, ExtentError> {
            match raw.coordinates[idx].as_slice() {
                [lon, lat] => Ok(GeoPoint::new(*lat, *lon)),
                other => Err(ExtentError::CornerArity {
                    corner: idx,
                    len: other.len(),
                }),
            }
        };

        Ok(Extent::new(corner(0)?, corner(1)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osm_type_codes() {
        let parsed: OsmType = serde_json::from_str("\"N\"").unwrap();
        assert_eq!(parsed, OsmType::Node);
        let parsed: OsmType = serde_json::from_str("\"relation\"").unwrap();
        assert_eq!(parsed, OsmType::Relation);
        assert_eq!(serde_json::to_string(&OsmType::Way).unwrap(), "\"way\"");
    }

    #[test]
    fn test_extent_keeps_corner_order() {
        // deliberately "wrong" corners must pass through untouched
        let raw = RawExtent::envelope([13.8, 52.4], [13.0, 52.6]);
        let extent = Extent::try_from(&raw).unwrap();
        assert_eq!(extent.to_flat(), [13.8, 52.4, 13.0, 52.6]);
    }

    #[test]
    fn test_extent_wrong_arity() {
        let raw = RawExtent {
            geo_type: None,
            coordinates: vec![vec![13.0, 52.6]],
        };
        assert!(matches!(
            Extent::try_from(&raw),
            Err(ExtentError::CornerCount(1))
        ));

        let raw = RawExtent {
            geo_type: None,
            coordinates: vec![vec![13.0, 52.6], vec![13.8]],
        };
        assert!(matches!(
            Extent::try_from(&raw),
            Err(ExtentError::CornerArity { corner: 1, len: 1 })
        ));
    }
}
