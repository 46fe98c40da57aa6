//! # Domain Module
//!
//! Business logic for the animal registry, independent of any UI framework:
//!
//! - **models**: the animal hierarchy and the category/species configuration
//! - **catalog_service**: the immutable configuration registry and the
//!   category/species filtering rules
//! - **animal_service**: identity assignment and the insertion-ordered
//!   animal collection
//! - **selection**: the category/species selection state machine used for
//!   input-page routing
//! - **commands**: internal command and result types the services consume

pub mod animal_service;
pub mod catalog_service;
pub mod commands;
pub mod models;
pub mod selection;

pub use animal_service::AnimalService;
pub use catalog_service::CatalogService;
pub use selection::{ActivePages, CategoryState, SelectionState};
