//! Turns raw search hits into localized GeoJSON features.

use rayon::prelude::*;
use tracing::{debug, error, warn};

use crate::localize::resolve;
use crate::models::{Extent, GeoFeature, Geometry, LabelMap, Properties, SearchHit};

/// Assemble `hits` for `lang`, keeping input order
pub fn assemble(hits: &[SearchHit], lang: &str) -> Vec<GeoFeature> {
    FeatureAssembler::new(lang).assemble(hits)
}

/// Builds features for one response language
#[derive(Debug, Clone)]
pub struct FeatureAssembler {
    lang: String,
}

impl FeatureAssembler {
    pub fn new(lang: &str) -> Self {
        Self {
            lang: lang.to_string(),
        }
    }

    pub fn assemble(&self, hits: &[SearchHit]) -> Vec<GeoFeature> {
        debug!("Assembling {} hits for lang '{}'", hits.len(), self.lang);
        hits.iter().map(|hit| self.feature(hit)).collect()
    }

    /// Same as [`assemble`](Self::assemble) but spread over the rayon pool.
    /// Output order still matches `hits`.
    pub fn assemble_par(&self, hits: &[SearchHit]) -> Vec<GeoFeature> {
        debug!(
            "Assembling {} hits for lang '{}' in parallel",
            hits.len(),
            self.lang
        );
        hits.par_iter().map(|hit| self.feature(hit)).collect()
    }

    /// Build the feature for a single hit
    pub fn feature(&self, hit: &SearchHit) -> GeoFeature {
        GeoFeature::new(geometry(hit), self.properties(hit))
    }

    fn properties(&self, hit: &SearchHit) -> Properties {
        let localized = |labels: &Option<LabelMap>| {
            resolve(labels.as_ref(), &self.lang).map(String::from)
        };

        Properties {
            // language independent
            osm_id: hit.osm_id,
            osm_value: hit.osm_value.clone(),
            osm_key: hit.osm_key.clone(),
            postcode: hit.postcode.clone(),
            housenumber: hit.housenumber.clone(),
            osm_type: hit.osm_type.clone(),
            // language specific
            name: localized(&hit.name),
            country: localized(&hit.country),
            city: localized(&hit.city),
            street: localized(&hit.street),
            state: localized(&hit.state),
            extent: extent(hit),
        }
    }
}

fn geometry(hit: &SearchHit) -> Option<Geometry> {
    match hit.coordinate {
        Some(point) => Some(Geometry::point(point.lon, point.lat)),
        None => {
            error!(
                "invalid data [id={:?}, type={:?}], coordinate is missing!",
                hit.osm_id, hit.osm_value
            );
            None
        }
    }
}

fn extent(hit: &SearchHit) -> Option<[f64; 4]> {
    let raw = hit.extent.as_ref()?;
    match Extent::try_from(raw) {
        Ok(extent) => Some(extent.to_flat()),
        Err(e) => {
            warn!("Dropping extent of [id={:?}]: {}", hit.osm_id, e);
            None
        }
    }
}
