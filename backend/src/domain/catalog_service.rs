use log::debug;

use crate::domain::models::catalog::{CatalogError, CategoryConfig, SpeciesConfig};

/// Immutable registry of animal categories and species.
///
/// Seeded once at startup and never mutated afterwards, it decides which
/// species belong to which category and which attribute-entry panel applies
/// to each. Page indices are passed through to the presentation layer
/// uninterpreted.
#[derive(Debug, Clone)]
pub struct CatalogService {
    categories: Vec<CategoryConfig>,
    species: Vec<SpeciesConfig>,
}

impl CatalogService {
    /// Create the catalog with the built-in categories and species.
    pub fn new() -> Self {
        let mammal = CategoryConfig {
            name: "Mammal".to_string(),
            input_page: 1,
        };
        let bird = CategoryConfig {
            name: "Bird".to_string(),
            input_page: 0,
        };

        let species = vec![
            SpeciesConfig {
                name: "Cat".to_string(),
                input_page: 0,
                category: mammal.clone(),
            },
            SpeciesConfig {
                name: "Dog".to_string(),
                input_page: 1,
                category: mammal.clone(),
            },
            SpeciesConfig {
                name: "Swan".to_string(),
                input_page: 2,
                category: bird.clone(),
            },
            SpeciesConfig {
                name: "Crow".to_string(),
                input_page: 3,
                category: bird.clone(),
            },
        ];

        Self {
            categories: vec![mammal, bird],
            species,
        }
    }

    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Result<&CategoryConfig, CatalogError> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| CatalogError::UnknownCategory(name.to_string()))
    }

    /// Look up a species by name.
    pub fn species(&self, name: &str) -> Result<&SpeciesConfig, CatalogError> {
        self.species
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| CatalogError::UnknownSpecies(name.to_string()))
    }

    /// All configured categories, in configuration order.
    pub fn all_categories(&self) -> &[CategoryConfig] {
        &self.categories
    }

    /// All configured species, in configuration order.
    pub fn all_species(&self) -> &[SpeciesConfig] {
        &self.species
    }

    /// Species belonging to the given category, in configuration order.
    /// `None` means "show all species". Pure: the same input always yields
    /// the same sequence.
    pub fn species_for_category(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<&SpeciesConfig>, CatalogError> {
        let filter = match category {
            Some(name) => Some(self.category(name)?),
            None => None,
        };
        let matching: Vec<&SpeciesConfig> = self
            .species
            .iter()
            .filter(|s| filter.map_or(true, |c| s.category.name == c.name))
            .collect();
        debug!(
            "Filtered species for category {:?}: {} of {}",
            category,
            matching.len(),
            self.species.len()
        );
        Ok(matching)
    }

    /// Category a species belongs to, resolved through the back-reference
    /// stored on the species config.
    pub fn category_for_species(&self, name: &str) -> Result<&CategoryConfig, CatalogError> {
        Ok(&self.species(name)?.category)
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_categories() {
        let catalog = CatalogService::new();

        let names: Vec<&str> = catalog
            .all_categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Mammal", "Bird"]);

        assert_eq!(catalog.category("Mammal").unwrap().input_page, 1);
        assert_eq!(catalog.category("Bird").unwrap().input_page, 0);
    }

    #[test]
    fn test_seeded_species() {
        let catalog = CatalogService::new();

        let names: Vec<&str> = catalog
            .all_species()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Cat", "Dog", "Swan", "Crow"]);

        assert_eq!(catalog.species("Cat").unwrap().input_page, 0);
        assert_eq!(catalog.species("Dog").unwrap().input_page, 1);
        assert_eq!(catalog.species("Swan").unwrap().input_page, 2);
        assert_eq!(catalog.species("Crow").unwrap().input_page, 3);
    }

    #[test]
    fn test_species_for_category_none_returns_everything() {
        let catalog = CatalogService::new();
        let all = catalog.species_for_category(None).unwrap();
        let names: Vec<&str> = all.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Cat", "Dog", "Swan", "Crow"]);
    }

    #[test]
    fn test_species_for_category_filters() {
        let catalog = CatalogService::new();

        let mammals = catalog.species_for_category(Some("Mammal")).unwrap();
        let names: Vec<&str> = mammals.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Cat", "Dog"]);

        let birds = catalog.species_for_category(Some("Bird")).unwrap();
        let names: Vec<&str> = birds.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Swan", "Crow"]);
    }

    #[test]
    fn test_species_for_category_is_idempotent() {
        let catalog = CatalogService::new();
        let first = catalog.species_for_category(Some("Bird")).unwrap();
        let second = catalog.species_for_category(Some("Bird")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_category_for_species() {
        let catalog = CatalogService::new();
        assert_eq!(catalog.category_for_species("Cat").unwrap().name, "Mammal");
        assert_eq!(catalog.category_for_species("Swan").unwrap().name, "Bird");
    }

    #[test]
    fn test_category_round_trip_for_every_species() {
        let catalog = CatalogService::new();
        for species in catalog.all_species() {
            let category = catalog.category_for_species(&species.name).unwrap();
            assert_eq!(category.name, species.category.name);
            // the back-reference matches a real configured category
            assert_eq!(catalog.category(&category.name).unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_names_are_errors() {
        let catalog = CatalogService::new();

        let err = catalog.species("Platypus").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownSpecies(name) if name == "Platypus"));

        let err = catalog.category("Reptile").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(name) if name == "Reptile"));

        let err = catalog.species_for_category(Some("Reptile")).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(_)));

        let err = catalog.category_for_species("Platypus").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownSpecies(_)));
    }
}
