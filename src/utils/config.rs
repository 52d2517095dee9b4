// src/utils/config.rs

pub const ENV_INCLUDE_PROKURA: &str = "REGISTER_INCLUDE_PROKURA";
pub const ENV_SHORTEN_FOLDERS: &str = "REGISTER_SHORTEN_FOLDERS";

/// Switches that change what a parse run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Append the Prokura signatories to the managers.
    pub include_prokura: bool,
    /// Use the bounded, sanitized folder identifier instead of `name-city`.
    pub shorten_folder_names: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            include_prokura: false,
            shorten_folder_names: true,
        }
    }
}

impl ExtractorConfig {
    /// Overlays values from the environment onto `self`.
    /// Unset or unparseable variables leave the current value untouched.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_INCLUDE_PROKURA).and_then(|v| parse_flag(&v)) {
            tracing::debug!("{} overrides include_prokura -> {}", ENV_INCLUDE_PROKURA, v);
            self.include_prokura = v;
        }
        if let Some(v) = lookup(ENV_SHORTEN_FOLDERS).and_then(|v| parse_flag(&v)) {
            tracing::debug!("{} overrides shorten_folder_names -> {}", ENV_SHORTEN_FOLDERS, v);
            self.shorten_folder_names = v;
        }
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            tracing::warn!("Ignoring unrecognized boolean value {:?}", other);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_shorten_without_prokura() {
        let config = ExtractorConfig::default();
        assert!(!config.include_prokura);
        assert!(config.shorten_folder_names);
    }

    #[test]
    fn overrides_apply_recognized_values() {
        let config = ExtractorConfig::default().with_overrides(lookup_from(&[
            (ENV_INCLUDE_PROKURA, "yes"),
            (ENV_SHORTEN_FOLDERS, "0"),
        ]));
        assert!(config.include_prokura);
        assert!(!config.shorten_folder_names);
    }

    #[test]
    fn garbage_values_are_ignored() {
        let config = ExtractorConfig::default()
            .with_overrides(lookup_from(&[(ENV_INCLUDE_PROKURA, "maybe")]));
        assert_eq!(config, ExtractorConfig::default());
    }
}
