//! EnzymeML data model and document store
//!
//! This library provides:
//! - The EnzymeML v2 data model with JSON (de)serialization and builders
//! - A SQLite backed store that saves whole documents in one transaction and
//!   loads them back with every relationship hydrated
//! - Referential consistency and JSON schema validation of documents
//! - Reading/writing documents as JSON files and rendering them as tables

#![warn(unused_imports)]

pub mod versions {
    pub use crate::versions::v2 as latest;
    pub mod v2;
}

/// Commonly used types and functionality re-exported for convenience
pub mod prelude {
    pub use crate::io::*;
    pub use crate::store::{EntityKind, Record, Store, StoreError, StoreResult};
    pub use crate::versions::latest::*;
}

/// Persistence of EnzymeML documents
pub mod store {
    pub use crate::store::error::{StoreError, StoreResult};
    pub use crate::store::manager::Store;
    pub use crate::store::profile::LoadProfile;
    pub use crate::store::record::Record;
    pub use crate::store::schema::{EntityKind, KeyKind, Relation, Storage, SCHEMA_VERSION};

    /// Column encodings for enums and lists
    pub(crate) mod codec;
    /// Cascading removal
    mod delete;
    /// Error types of store operations
    pub mod error;
    /// The store handle
    pub mod manager;
    /// Eager load profiles
    pub mod profile;
    /// Hydrating loaders
    mod read;
    /// Model type to table binding
    pub mod record;
    /// Declared tables and relations
    pub mod schema;
    /// Cascading inserts
    mod write;
}

/// Validation of EnzymeML documents and components
pub mod validation {
    pub use crate::validation::consistency::*;
    pub use crate::validation::schema::*;
    /// Main consistency interface
    pub mod consistency;
    /// Validation of equation specifications
    mod equations;
    /// Validation of measurement data
    mod measurements;
    /// Validation of kinetic parameters
    mod parameters;
    /// Validation of reaction specifications
    mod reactions;
    /// Main schema validation interface
    pub mod schema;
    /// Validation of species declarations
    mod species;
}

/// Procedural and helper macros
pub mod macros {
    /// Macros for data extraction
    #[macro_use]
    pub mod extract_macro;
    /// Macros for unit handling
    #[macro_use]
    pub mod unit_macro;
    /// Unit and prefix lookup tables
    pub mod unit_maps;
}

/// IO functionality
pub mod io;

/// Tabular display of documents
pub mod info;

/// Convenience accessors on the data model
pub mod utils;
