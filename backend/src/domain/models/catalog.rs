use serde::{Deserialize, Serialize};

/// Configuration for an animal category (for example which input page the
/// presentation layer should display for it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    /// Index of the category's attribute-entry panel; opaque to the core
    pub input_page: u32,
}

/// Configuration for a species: its input page and the category it belongs
/// to. The category is embedded so resolving it is O(1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesConfig {
    pub name: String,
    pub input_page: u32,
    pub category: CategoryConfig,
}

/// Lookup failures against the catalog. An unrecognized name is always an
/// explicit error returned to the caller, never a silent no-op.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
