//! Elasticsearch client and hit extraction.

mod client;

pub use client::{parse_hits, EsClient};
