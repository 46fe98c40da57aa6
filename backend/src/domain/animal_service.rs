use anyhow::Result;
use log::{debug, info};

use crate::domain::catalog_service::CatalogService;
use crate::domain::commands::animals::{AddAnimalCommand, AddAnimalResult, AnimalListResult};
use crate::domain::models::animal::{Animal, AnimalRecord, Species, SpeciesTraits};

/// Service owning the collection of registered animals.
///
/// Assigns each animal the next sequential identity and keeps the records in
/// insertion order, which is the order they are displayed in. The core is
/// single-threaded; callers are expected to serialize access.
pub struct AnimalService {
    catalog: CatalogService,
    records: Vec<AnimalRecord>,
    next_id: u64,
}

impl AnimalService {
    /// Create a new AnimalService with an empty animal list.
    pub fn new(catalog: CatalogService) -> Self {
        Self {
            catalog,
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Register a new animal.
    ///
    /// The species name is resolved through the catalog first; an
    /// unrecognized name is an `UnknownSpecies` error, so the caller can
    /// tell the user their input was discarded instead of dropping it
    /// silently. Age entry text that fails to parse is stored as 0 and the
    /// add still succeeds (deliberate fallback, not a failure). The common
    /// fields are stored as-is; no other validation happens here.
    pub fn add_animal(&mut self, command: AddAnimalCommand) -> Result<AddAnimalResult> {
        info!(
            "Adding animal: species={}, name={}",
            command.species, command.name
        );

        let species_config = self.catalog.species(&command.species)?;
        let species = Species::from_name(&species_config.name)?;

        // Pick the entries belonging to the selected species' input panel
        let attrs = &command.attributes;
        let traits = match species {
            Species::Cat => SpeciesTraits::Cat {
                teeth_count: attrs.teeth_count,
                claw_length: attrs.claw_length,
            },
            Species::Dog => SpeciesTraits::Dog {
                teeth_count: attrs.teeth_count,
                tail_length: attrs.tail_length,
            },
            Species::Swan => SpeciesTraits::Swan {
                wingspan: attrs.wingspan,
                color: attrs.color.clone(),
            },
            Species::Crow => SpeciesTraits::Crow {
                wingspan: attrs.wingspan,
                weight: attrs.weight,
            },
        };

        // Unparsable age text falls back to 0
        let age = command.age.trim().parse().unwrap_or(0);

        let animal = Animal {
            name: command.name,
            age,
            gender: command.gender,
            traits,
        };

        let record = AnimalRecord {
            id: self.next_id.to_string(),
            animal,
        };
        self.next_id += 1;
        self.records.push(record.clone());

        info!(
            "Registered {} '{}' with ID: {}",
            record.animal.species().name(),
            record.animal.name,
            record.id
        );

        Ok(AddAnimalResult { record })
    }

    /// All registered animals, in the order they were added.
    pub fn list_animals(&self) -> AnimalListResult {
        debug!("Listing {} animals", self.records.len());
        AnimalListResult {
            records: self.records.clone(),
        }
    }
}
