use serde::{Deserialize, Serialize};

use crate::domain::models::catalog::CatalogError;

/// The closed set of species the registry knows about. The variant name
/// doubles as the canonical species identifier used for catalog keys and
/// display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Cat,
    Dog,
    Swan,
    Crow,
}

impl Species {
    /// Canonical species name.
    pub fn name(&self) -> &'static str {
        match self {
            Species::Cat => "Cat",
            Species::Dog => "Dog",
            Species::Swan => "Swan",
            Species::Crow => "Crow",
        }
    }

    /// Parse a canonical species name. Unrecognized names are an explicit
    /// `UnknownSpecies` error.
    pub fn from_name(name: &str) -> Result<Self, CatalogError> {
        match name {
            "Cat" => Ok(Species::Cat),
            "Dog" => Ok(Species::Dog),
            "Swan" => Ok(Species::Swan),
            "Crow" => Ok(Species::Crow),
            other => Err(CatalogError::UnknownSpecies(other.to_string())),
        }
    }
}

/// Species-specific distinguishing fields, one variant per species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpeciesTraits {
    Cat { teeth_count: u32, claw_length: f64 },
    Dog { teeth_count: u32, tail_length: f64 },
    Swan { wingspan: f64, color: String },
    Crow { wingspan: f64, weight: f64 },
}

/// Domain model for an animal in the registry.
///
/// The common fields are stored exactly as the caller supplied them: an
/// empty name or free-text gender is accepted as-is, and the core performs
/// no validation on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub traits: SpeciesTraits,
}

impl Animal {
    /// Species of this animal, derived from its traits variant.
    pub fn species(&self) -> Species {
        match self.traits {
            SpeciesTraits::Cat { .. } => Species::Cat,
            SpeciesTraits::Dog { .. } => Species::Dog,
            SpeciesTraits::Swan { .. } => Species::Swan,
            SpeciesTraits::Crow { .. } => Species::Crow,
        }
    }

    /// Human-readable summary of the species-specific fields. The format is
    /// fixed per species, so the same animal always yields the same text.
    pub fn special_characteristics(&self) -> String {
        match &self.traits {
            SpeciesTraits::Cat {
                teeth_count,
                claw_length,
            } => format!("Teeth: {}, Claw length: {}", teeth_count, claw_length),
            SpeciesTraits::Dog {
                teeth_count,
                tail_length,
            } => format!("Teeth: {}, Tail length: {}", teeth_count, tail_length),
            SpeciesTraits::Swan { wingspan, color } => {
                format!("Wingspan: {}, Color: {}", wingspan, color)
            }
            SpeciesTraits::Crow { wingspan, weight } => {
                format!("Wingspan: {}, Weight: {}", wingspan, weight)
            }
        }
    }
}

/// An animal as stored by the registry, together with its assigned identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    /// Decimal string of a running counter; strictly increasing, never reused
    pub id: String,
    pub animal: Animal,
}
