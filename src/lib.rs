//! Geoshape - result shaping for an OSM geocoder
//!
//! Classifies address rows into semantic roles and assembles search hits
//! into localized GeoJSON features.

pub mod assemble;
pub mod classify;
pub mod config;
pub mod elasticsearch;
pub mod error;
pub mod localize;
pub mod models;

pub use assemble::{assemble, FeatureAssembler};
pub use classify::{classify, AddressContext, AddressRoles};
pub use error::{Result, ShapeError};
pub use localize::resolve;
pub use models::{AddressRecord, GeoFeature, OsmType, SearchHit};
