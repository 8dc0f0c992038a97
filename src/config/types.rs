// Configuration type definitions

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Typeahead field configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TypeaheadConfig {
    /// Delay before a blurred field closes its option panel
    pub blur_grace_ms: u64,
    /// Rows shown in the option panel before it scrolls
    pub max_visible_options: usize,
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        TypeaheadConfig {
            blur_grace_ms: 100,
            max_visible_options: 8,
        }
    }
}

impl TypeaheadConfig {
    pub fn blur_grace(&self) -> Duration {
        Duration::from_millis(self.blur_grace_ms)
    }
}

/// Location lookup configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Minimum typed characters before a lookup is issued
    pub min_query_len: usize,
    /// Maximum options returned per lookup
    pub max_results: usize,
    /// Call-site debounce; 0 looks up on every qualifying keystroke
    pub debounce_ms: u64,
    /// Place catalog replacing the built-in one
    pub catalog: Option<PathBuf>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            min_query_len: 2,
            max_results: 8,
            debounce_ms: 0,
            catalog: None,
        }
    }
}

impl LookupConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub typeahead: TypeaheadConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Any blur grace value written in the file is carried through unchanged,
    // and the other typeahead field keeps its default.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_blur_grace_parsing(grace in 0u64..10_000) {
            let toml_content = format!(r#"
[typeahead]
blur_grace_ms = {}
"#, grace);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse blur grace: {}", grace);

            let config = config.unwrap();
            prop_assert_eq!(config.typeahead.blur_grace(), Duration::from_millis(grace));
            prop_assert_eq!(config.typeahead.max_visible_options, 8);
        }
    }

    // Missing sections and fields fall back to defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_lookup_section in prop::bool::ANY,
            include_threshold_field in prop::bool::ANY
        ) {
            let toml_content = if !include_lookup_section {
                String::new()
            } else if !include_threshold_field {
                "[lookup]\n".to_string()
            } else {
                r#"
[lookup]
min_query_len = 3
"#.to_string()
            };

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

            let config = config.unwrap();
            if !include_lookup_section || !include_threshold_field {
                prop_assert_eq!(config.lookup.min_query_len, 2);
            } else {
                prop_assert_eq!(config.lookup.min_query_len, 3);
            }
            prop_assert_eq!(config.lookup.max_results, 8);
            prop_assert_eq!(config.lookup.debounce_ms, 0);
            prop_assert!(config.lookup.catalog.is_none());
        }
    }

    #[test]
    fn test_catalog_path_parsing() {
        let config: Config = toml::from_str(
            r#"
[lookup]
catalog = "/tmp/places.json"
debounce_ms = 150
"#,
        )
        .unwrap();

        assert_eq!(config.lookup.catalog, Some(PathBuf::from("/tmp/places.json")));
        assert_eq!(config.lookup.debounce(), Duration::from_millis(150));
    }
}
