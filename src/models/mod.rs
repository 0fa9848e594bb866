//! Core data models for result shaping.

pub mod address;
pub mod feature;
pub mod hit;
pub mod place;

pub use address::AddressRecord;
pub use feature::{FeatureCollection, GeoFeature, Geometry, Properties};
pub use hit::{LabelMap, SearchHit};
pub use place::{Extent, GeoPoint, OsmType, RawExtent};
