//! Selection state for the category and species lists.
//!
//! The category filter, the "show all species" toggle, and the species
//! selection are modeled here as explicit state instead of being read back
//! from live widget state, so the presentation layer only mirrors what this
//! module decides.

use log::debug;

use crate::domain::catalog_service::CatalogService;
use crate::domain::models::catalog::{CatalogError, SpeciesConfig};

/// Which category filter is in effect.
///
/// With no category selected the species list shows everything, same as the
/// explicit "show all" mode; the two are kept apart because switching "show
/// all" off must restore the previous selection.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryState {
    NoneSelected,
    Selected(String),
    ShowAll,
}

/// The pair of input pages the presentation layer should activate for the
/// current species selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivePages {
    pub species_page: u32,
    pub category_page: u32,
}

/// Selection state machine driving species filtering and input-page routing.
#[derive(Debug, Clone)]
pub struct SelectionState {
    category: CategoryState,
    /// Category state to restore when "show all" is switched off
    before_show_all: CategoryState,
    species: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            category: CategoryState::NoneSelected,
            before_show_all: CategoryState::NoneSelected,
            species: None,
        }
    }

    pub fn category(&self) -> &CategoryState {
        &self.category
    }

    pub fn selected_species(&self) -> Option<&str> {
        self.species.as_deref()
    }

    /// Species visible under the current filter, in configuration order.
    pub fn visible_species<'a>(
        &self,
        catalog: &'a CatalogService,
    ) -> Result<Vec<&'a SpeciesConfig>, CatalogError> {
        catalog.species_for_category(self.filter_name())
    }

    /// Apply a category selection.
    ///
    /// Re-filters the species list and resets the species selection to the
    /// first visible entry, so the selection is never left pointing at a
    /// species that is not in the list. While "show all" is active the
    /// category list is inactive; a selection arriving anyway is remembered
    /// and takes effect when the toggle is switched off.
    pub fn select_category(
        &mut self,
        catalog: &CatalogService,
        name: &str,
    ) -> Result<(), CatalogError> {
        catalog.category(name)?;
        debug!("Category selected: {}", name);

        if self.category == CategoryState::ShowAll {
            self.before_show_all = CategoryState::Selected(name.to_string());
            return Ok(());
        }
        self.category = CategoryState::Selected(name.to_string());
        self.reset_species(catalog)
    }

    /// Toggle the "show all species" checkbox. Switching it on shows every
    /// species; switching it off restores the previous category state and
    /// re-filters. Both directions apply the species reset rule.
    pub fn set_show_all(
        &mut self,
        catalog: &CatalogService,
        show_all: bool,
    ) -> Result<(), CatalogError> {
        if show_all {
            if self.category != CategoryState::ShowAll {
                self.before_show_all =
                    std::mem::replace(&mut self.category, CategoryState::ShowAll);
                self.reset_species(catalog)?;
            }
        } else if self.category == CategoryState::ShowAll {
            self.category =
                std::mem::replace(&mut self.before_show_all, CategoryState::NoneSelected);
            self.reset_species(catalog)?;
        }
        Ok(())
    }

    /// Select a species from the list. Does not change the category state.
    pub fn select_species(
        &mut self,
        catalog: &CatalogService,
        name: &str,
    ) -> Result<(), CatalogError> {
        catalog.species(name)?;
        self.species = Some(name.to_string());
        Ok(())
    }

    /// Input pages to activate for the current species selection, if any.
    ///
    /// The category page is resolved from the selected species rather than
    /// from the category filter, because the list may be showing species
    /// from every category.
    pub fn active_pages(
        &self,
        catalog: &CatalogService,
    ) -> Result<Option<ActivePages>, CatalogError> {
        match &self.species {
            Some(name) => {
                let species = catalog.species(name)?;
                Ok(Some(ActivePages {
                    species_page: species.input_page,
                    category_page: species.category.input_page,
                }))
            }
            None => Ok(None),
        }
    }

    fn filter_name(&self) -> Option<&str> {
        match &self.category {
            CategoryState::Selected(name) => Some(name.as_str()),
            CategoryState::NoneSelected | CategoryState::ShowAll => None,
        }
    }

    fn reset_species(&mut self, catalog: &CatalogService) -> Result<(), CatalogError> {
        let visible = catalog.species_for_category(self.filter_name())?;
        self.species = visible.first().map(|s| s.name.clone());
        debug!("Species selection reset to {:?}", self.species);
        Ok(())
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
