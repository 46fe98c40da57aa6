//! Domain model types for the animal registry.

pub mod animal;
pub mod catalog;
