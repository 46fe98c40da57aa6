//! # Animal Registry Backend
//!
//! Synchronous core for a desktop animal record-keeping tool. The
//! presentation layer (window layout, list views, input panels) lives
//! elsewhere and calls in through the [`Backend`] facade:
//! - no async, no I/O layer, no callbacks back into the UI
//! - all state lives in memory for the lifetime of the process
//! - requests and responses use the DTOs from the `shared` crate

use anyhow::Result;
use log::info;

pub mod domain;

use crate::domain::commands::animals::{AddAnimalCommand, AttributeValues};
use crate::domain::models::animal::AnimalRecord;
use crate::domain::models::catalog::{CategoryConfig, SpeciesConfig};
use crate::domain::{AnimalService, CatalogService};
use shared::{AddAnimalRequest, AnimalRow, CategorySummary, SpeciesSummary};

/// Facade that orchestrates the domain services behind the narrow API the
/// presentation layer calls. Purely request/response.
pub struct Backend {
    pub catalog_service: CatalogService,
    pub animal_service: AnimalService,
}

impl Backend {
    /// Create a new backend with the built-in catalog and an empty registry.
    pub fn new() -> Self {
        info!("Initializing animal registry backend");
        let catalog_service = CatalogService::new();
        let animal_service = AnimalService::new(catalog_service.clone());
        Backend {
            catalog_service,
            animal_service,
        }
    }

    /// Register the animal described by the input form and return its list
    /// row. Fails with `UnknownSpecies` if the species name is not in the
    /// catalog.
    pub fn add_animal(&mut self, request: AddAnimalRequest) -> Result<AnimalRow> {
        let command = AddAnimalCommand {
            species: request.species,
            name: request.name,
            age: request.age,
            gender: request.gender,
            attributes: AttributeValues {
                teeth_count: request.attributes.teeth_count,
                claw_length: request.attributes.claw_length,
                tail_length: request.attributes.tail_length,
                wingspan: request.attributes.wingspan,
                color: request.attributes.color,
                weight: request.attributes.weight,
            },
        };
        let result = self.animal_service.add_animal(command)?;
        Ok(animal_row(&result.record))
    }

    /// All registered animals, in the order they were added.
    pub fn list_animals(&self) -> Vec<AnimalRow> {
        self.animal_service
            .list_animals()
            .records
            .iter()
            .map(animal_row)
            .collect()
    }

    /// Species belonging to `category`, or every species when `None`.
    pub fn species_for_category(&self, category: Option<&str>) -> Result<Vec<SpeciesSummary>> {
        let species = self.catalog_service.species_for_category(category)?;
        Ok(species.into_iter().map(species_summary).collect())
    }

    /// Category the given species belongs to.
    pub fn category_for_species(&self, species: &str) -> Result<CategorySummary> {
        let category = self.catalog_service.category_for_species(species)?;
        Ok(category_summary(category))
    }

    /// All configured categories, in configuration order.
    pub fn all_categories(&self) -> Vec<CategorySummary> {
        self.catalog_service
            .all_categories()
            .iter()
            .map(category_summary)
            .collect()
    }

    /// All configured species, in configuration order.
    pub fn all_species(&self) -> Vec<SpeciesSummary> {
        self.catalog_service
            .all_species()
            .iter()
            .map(species_summary)
            .collect()
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}

fn animal_row(record: &AnimalRecord) -> AnimalRow {
    AnimalRow {
        id: record.id.clone(),
        species: record.animal.species().name().to_string(),
        name: record.animal.name.clone(),
        age: record.animal.age.to_string(),
        gender: record.animal.gender.clone(),
        special_characteristics: record.animal.special_characteristics(),
    }
}

fn category_summary(category: &CategoryConfig) -> CategorySummary {
    CategorySummary {
        name: category.name.clone(),
        input_page: category.input_page,
    }
}

fn species_summary(species: &SpeciesConfig) -> SpeciesSummary {
    SpeciesSummary {
        name: species.name.clone(),
        input_page: species.input_page,
        category: category_summary(&species.category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::catalog::CatalogError;
    use shared::AttributeEntries;

    fn cat_request() -> AddAnimalRequest {
        AddAnimalRequest {
            species: "Cat".to_string(),
            name: "Tom".to_string(),
            age: "4".to_string(),
            gender: "Male".to_string(),
            attributes: AttributeEntries {
                teeth_count: 30,
                claw_length: 3.5,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_add_animal_returns_a_list_row() {
        let mut backend = Backend::new();

        let row = backend.add_animal(cat_request()).unwrap();
        assert_eq!(row.id, "1");
        assert_eq!(row.species, "Cat");
        assert_eq!(row.name, "Tom");
        assert_eq!(row.age, "4");
        assert_eq!(row.gender, "Male");
        assert_eq!(row.special_characteristics, "Teeth: 30, Claw length: 3.5");
    }

    #[test]
    fn test_list_animals_reflects_additions_in_order() {
        let mut backend = Backend::new();
        assert!(backend.list_animals().is_empty());

        backend.add_animal(cat_request()).unwrap();
        let mut swan = cat_request();
        swan.species = "Swan".to_string();
        swan.name = "Grace".to_string();
        backend.add_animal(swan).unwrap();

        let rows = backend.list_animals();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Tom");
        assert_eq!(rows[1].name, "Grace");
        assert_eq!(rows[1].id, "2");
    }

    #[test]
    fn test_add_animal_rejects_unknown_species() {
        let mut backend = Backend::new();
        let mut request = cat_request();
        request.species = "Dragon".to_string();

        let err = backend.add_animal(request).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::UnknownSpecies(_))
        ));
        assert!(backend.list_animals().is_empty());
    }

    #[test]
    fn test_non_numeric_age_is_stored_as_zero() {
        let mut backend = Backend::new();
        let mut request = cat_request();
        request.age = "four".to_string();

        let row = backend.add_animal(request).unwrap();
        assert_eq!(row.age, "0");
    }

    #[test]
    fn test_species_for_category_through_the_facade() {
        let backend = Backend::new();

        let all = backend.species_for_category(None).unwrap();
        let names: Vec<&str> = all.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Cat", "Dog", "Swan", "Crow"]);

        let birds = backend.species_for_category(Some("Bird")).unwrap();
        let names: Vec<&str> = birds.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Swan", "Crow"]);

        assert!(backend.species_for_category(Some("Reptile")).is_err());
    }

    #[test]
    fn test_category_for_species_through_the_facade() {
        let backend = Backend::new();

        let category = backend.category_for_species("Cat").unwrap();
        assert_eq!(category.name, "Mammal");
        assert_eq!(category.input_page, 1);

        let err = backend.category_for_species("Dragon").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::UnknownSpecies(_))
        ));
    }

    #[test]
    fn test_catalog_listings() {
        let backend = Backend::new();

        let categories = backend.all_categories();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Mammal");
        assert_eq!(categories[1].name, "Bird");

        let species = backend.all_species();
        assert_eq!(species.len(), 4);
        assert_eq!(species[2].name, "Swan");
        assert_eq!(species[2].input_page, 2);
        assert_eq!(species[2].category.name, "Bird");
    }
}
