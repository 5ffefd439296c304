//! Configuration options for conversion.
//!
//! The defaulting policy (fallback publisher, fallback license, catalog
//! title) is a business rule, so every default string lives here rather
//! than in the transform code.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_PUBLISHER_NAME: &str = "U.S. Government";
pub const DEFAULT_PUBLISHER_IRI: &str = "https://www.usa.gov/";
pub const DEFAULT_LICENSE_IRI: &str = "https://creativecommons.org/publicdomain/zero/1.0/";
pub const DEFAULT_CATALOG_TITLE: &str = "Data Catalog";
pub const DEFAULT_CATALOG_DESCRIPTION: &str = "Government data catalog";
pub const DEFAULT_DATASET_BASE_IRI: &str = "https://data.gov/datasets/";

/// Options controlling default injection and node identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// `foaf:name` and `skos:prefLabel` of the injected fallback publisher.
    pub default_publisher_name: String,

    /// `@id` of the injected fallback publisher (omitted when `None`).
    pub default_publisher_iri: Option<String>,

    /// License IRI given to distributions without `dcterms:license`.
    pub default_license_iri: String,

    /// `dcterms:title` given to catalogs without a title.
    pub default_catalog_title: String,

    /// `dcterms:description` given to catalogs without a description.
    pub default_catalog_description: String,

    /// Base IRI for dataset `@id`s minted from a relative `identifier`.
    pub dataset_base_iri: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            default_publisher_name: DEFAULT_PUBLISHER_NAME.to_string(),
            default_publisher_iri: Some(DEFAULT_PUBLISHER_IRI.to_string()),
            default_license_iri: DEFAULT_LICENSE_IRI.to_string(),
            default_catalog_title: DEFAULT_CATALOG_TITLE.to_string(),
            default_catalog_description: DEFAULT_CATALOG_DESCRIPTION.to_string(),
            dataset_base_iri: DEFAULT_DATASET_BASE_IRI.to_string(),
        }
    }
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_publisher(mut self, name: impl Into<String>) -> Self {
        self.default_publisher_name = name.into();
        self
    }

    pub fn with_default_publisher_iri(mut self, iri: Option<String>) -> Self {
        self.default_publisher_iri = iri;
        self
    }

    pub fn with_default_license(mut self, iri: impl Into<String>) -> Self {
        self.default_license_iri = iri.into();
        self
    }

    pub fn with_dataset_base_iri(mut self, iri: impl Into<String>) -> Self {
        self.dataset_base_iri = iri.into();
        self
    }

    /// Parses options from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let options: Self = toml::from_str(contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Rejects defaults that would produce non-conformant output.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_publisher_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "default_publisher_name",
                message: "must not be empty".to_string(),
            });
        }
        if self.default_license_iri.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "default_license_iri",
                message: "must not be empty".to_string(),
            });
        }
        if let Some(iri) = &self.default_publisher_iri
            && iri.trim().is_empty()
        {
            return Err(ConfigError::InvalidValue {
                field: "default_publisher_iri",
                message: "must not be empty when set".to_string(),
            });
        }
        Ok(())
    }
}
