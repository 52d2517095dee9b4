// src/extractors/excerpt.rs
use serde::{Deserialize, Serialize};

use crate::extractors::fields::{extract_business_address, extract_company_name};
use crate::extractors::roster::{dedup_preserving_order, parse_roster};
use crate::extractors::section::{locate, locate_prokura};
use crate::names::{DecomposedName, NameDecomposer};
use crate::utils::ExtractorConfig;

/// Structured content of one register excerpt.
///
/// Every field defaults to its empty value when the excerpt does not carry it;
/// a missing field never blocks the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcerptRecord {
    pub managers: Vec<String>,
    #[serde(rename = "name")]
    pub company_name: String,
    #[serde(rename = "address")]
    pub business_address: String,
}

impl ExcerptRecord {
    /// True when nothing at all could be extracted.
    pub fn is_empty(&self) -> bool {
        self.managers.is_empty() && self.company_name.is_empty() && self.business_address.is_empty()
    }

    /// Splits every manager display name with the given decomposer.
    pub fn decomposed_managers<D: NameDecomposer + ?Sized>(&self, decomposer: &D) -> Vec<DecomposedName> {
        self.managers.iter().map(|m| decomposer.decompose(m)).collect()
    }
}

/// Composes the section locator, roster parser and field extractors.
#[derive(Debug, Default, Clone)]
pub struct ExcerptParser {
    config: ExtractorConfig,
}

impl ExcerptParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extracts all fields of one excerpt. Empty input yields an empty record.
    pub fn parse(&self, full_text: &str) -> ExcerptRecord {
        let company_name = extract_company_name(full_text);
        let business_address = extract_business_address(full_text);

        let mut managers = parse_roster(locate(full_text));
        if self.config.include_prokura {
            let signatories = parse_roster(locate_prokura(full_text));
            tracing::debug!("Adding {} Prokura entries", signatories.len());
            managers = dedup_preserving_order(managers.into_iter().chain(signatories));
        }

        if company_name.is_empty() {
            tracing::debug!("No company name label found");
        }
        if business_address.is_empty() {
            tracing::debug!("No business address found");
        }

        ExcerptRecord {
            managers,
            company_name,
            business_address,
        }
    }
}

/// Parses an excerpt with the default configuration.
pub fn parse(full_text: &str) -> ExcerptRecord {
    ExcerptParser::new().parse(full_text)
}
