//! Elasticsearch client wrapper.

use elasticsearch::{
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    Elasticsearch, SearchParts,
};
use serde_json::{json, Value};
use tracing::{debug, warn};
use url::Url;

use crate::error::{Result, ShapeError};
use crate::models::SearchHit;

/// Elasticsearch client wrapper with connection configuration
#[derive(Clone)]
pub struct EsClient {
    client: Elasticsearch,
    pub index_name: String,
}

impl EsClient {
    /// Create a new Elasticsearch client
    pub fn new(es_url: &str, index_name: &str) -> Result<Self> {
        let url = Url::parse(es_url)?;
        let conn_pool = SingleNodeConnectionPool::new(url);
        let transport = TransportBuilder::new(conn_pool).disable_proxy().build()?;

        let client = Elasticsearch::new(transport);

        Ok(Self {
            client,
            index_name: index_name.to_string(),
        })
    }

    /// Check if cluster is healthy
    pub async fn health_check(&self) -> Result<bool> {
        let response = self
            .client
            .cluster()
            .health(elasticsearch::cluster::ClusterHealthParts::None)
            .send()
            .await?;

        Ok(response.status_code().is_success())
    }

    /// Run a plain text search and return the ranked hits
    pub async fn search_hits(&self, text: &str, lang: &str, size: usize) -> Result<Vec<SearchHit>> {
        let body = json!({
            "query": {
                "multi_match": {
                    "query": text,
                    "fields": [
                        format!("name.{}^2", lang),
                        "name.default^2",
                        "city.default",
                        "street.default",
                        "country.default"
                    ]
                }
            },
            "size": size
        });

        debug!("Search query: {}", serde_json::to_string_pretty(&body)?);

        let response = self
            .client
            .search(SearchParts::Index(&[&self.index_name]))
            .body(body)
            .send()
            .await?;

        let status = response.status_code();
        if !status.is_success() {
            return Err(ShapeError::Status(status.as_u16()));
        }

        let response_body = response.json::<Value>().await?;
        Ok(parse_hits(&response_body))
    }
}

/// Pull `hits.hits[]._source` out of a search response, in rank order
pub fn parse_hits(response_body: &Value) -> Vec<SearchHit> {
    let hits = match response_body["hits"]["hits"].as_array() {
        Some(hits) => hits,
        None => return Vec::new(),
    };

    hits.iter()
        .filter_map(|hit| {
            match serde_json::from_value::<SearchHit>(hit["_source"].clone()) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    warn!("Skipping unreadable hit {}: {}", hit["_id"], e);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hits_keeps_rank_order() {
        let body = json!({
            "hits": {
                "hits": [
                    {"_id": "a", "_source": {"osm_id": 1, "coordinate": {"lat": 1.0, "lon": 2.0}}},
                    {"_id": "b", "_source": {"osm_id": "not a number"}},
                    {"_id": "c", "_source": {"osm_id": 3}}
                ]
            }
        });

        let hits = parse_hits(&body);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].osm_id, Some(1));
        assert_eq!(hits[1].osm_id, Some(3));
    }

    #[test]
    fn test_parse_hits_empty_response() {
        assert!(parse_hits(&json!({})).is_empty());
    }
}
