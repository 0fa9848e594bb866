use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub elasticsearch: EsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EsConfig {
    pub url: String,
    pub index: String,
    /// Number of hits requested per search
    pub size: usize,
}

impl Default for EsConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:9200".to_string(),
            index: "photon".to_string(),
            size: 15,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OutputConfig {
    pub default_lang: String,
    /// Assemble features on the rayon pool
    pub parallel: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_lang: "en".to_string(),
            parallel: false,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[elasticsearch]\nindex = \"places\"\n\n[output]\nparallel = true"
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.elasticsearch.index, "places");
        assert_eq!(config.elasticsearch.url, "http://localhost:9200");
        assert_eq!(config.elasticsearch.size, 15);
        assert!(config.output.parallel);
        assert_eq!(config.output.default_lang, "en");
    }

    #[test]
    fn test_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nparallel = \"yes\"").unwrap();
        assert!(matches!(
            Config::load_from_file(file.path()),
            Err(crate::error::ShapeError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(Config::load_from_file("/nonexistent/geoshape.toml").is_err());
    }
}
