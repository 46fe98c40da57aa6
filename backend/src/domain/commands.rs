//! Domain-level command and result types.
//!
//! These structs are used by services inside the domain layer and are **not**
//! exposed to the presentation layer directly. The `Backend` facade is
//! responsible for mapping the public DTOs defined in the `shared` crate to
//! these internal types.

pub mod animals {
    use crate::domain::models::animal::AnimalRecord;

    /// Input for registering a new animal, carrying the raw values of the
    /// input form.
    #[derive(Debug, Clone)]
    pub struct AddAnimalCommand {
        /// Species name as selected in the species list
        pub species: String,
        pub name: String,
        /// Raw age entry text; non-numeric input is coerced to 0
        pub age: String,
        pub gender: String,
        pub attributes: AttributeValues,
    }

    /// Raw per-species attribute entries. Only the values belonging to the
    /// selected species' input panel are read.
    #[derive(Debug, Clone, Default)]
    pub struct AttributeValues {
        pub teeth_count: u32,
        pub claw_length: f64,
        pub tail_length: f64,
        pub wingspan: f64,
        pub color: String,
        pub weight: f64,
    }

    /// Result of registering an animal.
    #[derive(Debug, Clone)]
    pub struct AddAnimalResult {
        pub record: AnimalRecord,
    }

    /// Result of listing the registered animals.
    #[derive(Debug, Clone)]
    pub struct AnimalListResult {
        pub records: Vec<AnimalRecord>,
    }
}
