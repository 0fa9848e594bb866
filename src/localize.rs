//! Picks the label for a requested language out of a multilingual map.

use crate::models::LabelMap;

/// Reserved key carrying the untranslated label
pub const DEFAULT_LANG: &str = "default";

/// Resolve `lang` from `labels`, falling back to the `"default"` entry.
///
/// No further fallback is tried: `de-CH` does not fall back to `de`.
pub fn resolve<'a>(labels: Option<&'a LabelMap>, lang: &str) -> Option<&'a str> {
    let labels = labels?;
    labels
        .get(lang)
        .or_else(|| labels.get(DEFAULT_LANG))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(pairs: &[(&str, &str)]) -> LabelMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_requested_language_wins() {
        let map = labels(&[("fr", "Berlin"), ("default", "Berlin (DE)")]);
        assert_eq!(resolve(Some(&map), "fr"), Some("Berlin"));
    }

    #[test]
    fn test_default_fallback() {
        let map = labels(&[("en", "Berlin"), ("default", "Berlin (DE)")]);
        assert_eq!(resolve(Some(&map), "fr"), Some("Berlin (DE)"));
    }

    #[test]
    fn test_no_match() {
        let map = labels(&[("en", "Berlin")]);
        assert_eq!(resolve(Some(&map), "fr"), None);
        assert_eq!(resolve(None, "fr"), None);
    }

    #[test]
    fn test_no_base_language_stripping() {
        let map = labels(&[("de", "Zürich")]);
        assert_eq!(resolve(Some(&map), "de-CH"), None);
    }
}
