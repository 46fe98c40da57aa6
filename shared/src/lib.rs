use serde::{Deserialize, Serialize};

/// One row of the registered-animals list view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalRow {
    /// Identity assigned by the registry (decimal string, strictly increasing)
    pub id: String,
    /// Canonical species name ("Cat", "Dog", "Swan", "Crow")
    pub species: String,
    pub name: String,
    /// Age rendered as text for display
    pub age: String,
    pub gender: String,
    /// Human-readable summary of the species-specific fields
    pub special_characteristics: String,
}

/// Request to register a new animal, carrying the raw values of the input
/// form exactly as the user left them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddAnimalRequest {
    /// Species name picked from the species list
    pub species: String,
    pub name: String,
    /// Raw age entry text; non-numeric input is stored as age 0
    pub age: String,
    pub gender: String,
    pub attributes: AttributeEntries,
}

/// Raw values of every per-species attribute entry widget. Only the entries
/// belonging to the selected species' input panel are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AttributeEntries {
    /// Cat and Dog
    pub teeth_count: u32,
    /// Cat only
    pub claw_length: f64,
    /// Dog only
    pub tail_length: f64,
    /// Swan and Crow
    pub wingspan: f64,
    /// Swan only
    pub color: String,
    /// Crow only
    pub weight: f64,
}

/// An animal category and the input panel the presentation layer shows for
/// it. The page index is opaque to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub name: String,
    pub input_page: u32,
}

/// A species, its input panel, and the category it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesSummary {
    pub name: String,
    pub input_page: u32,
    pub category: CategorySummary,
}
