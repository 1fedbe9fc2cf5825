//! Declared relational schema of the EnzymeML entity graph.
//!
//! Tables are declared per [`EntityKind`] and relationships per
//! [`Relation`]. The declaration is versioned through [`SCHEMA_VERSION`],
//! which is mirrored to `PRAGMA user_version` once all tables of a store
//! have been created.
//!
//! Natural-keyed tables carry a `digest` column holding the SHA-256 of the
//! entity's canonical JSON. Rows sharing an id are only reused when their
//! digests agree.

use std::fmt;

use serde::Serialize;

/// Version of the table and relationship declaration below.
pub const SCHEMA_VERSION: u32 = 1;

/// Every entity type that owns a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum EntityKind {
    Document,
    Creator,
    Vessel,
    Protein,
    Complex,
    SmallMolecule,
    Reaction,
    ReactionElement,
    Equation,
    Variable,
    Parameter,
    Measurement,
    MeasurementData,
    UnitDefinition,
    BaseUnit,
}

/// How rows of an entity table are identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Caller-supplied string identifier, unique per entity type.
    Natural,
    /// Integer key generated on insert.
    Surrogate,
}

impl KeyKind {
    fn sql_type(self) -> &'static str {
        match self {
            KeyKind::Natural => "TEXT",
            KeyKind::Surrogate => "INTEGER",
        }
    }
}

impl EntityKind {
    /// All entity kinds, in table creation order.
    pub const ALL: [EntityKind; 15] = [
        EntityKind::BaseUnit,
        EntityKind::UnitDefinition,
        EntityKind::Creator,
        EntityKind::Vessel,
        EntityKind::Protein,
        EntityKind::Complex,
        EntityKind::SmallMolecule,
        EntityKind::Variable,
        EntityKind::Equation,
        EntityKind::ReactionElement,
        EntityKind::Reaction,
        EntityKind::Parameter,
        EntityKind::MeasurementData,
        EntityKind::Measurement,
        EntityKind::Document,
    ];

    /// Name of the model type stored under this kind.
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Document => "EnzymeMLDocument",
            EntityKind::Creator => "Creator",
            EntityKind::Vessel => "Vessel",
            EntityKind::Protein => "Protein",
            EntityKind::Complex => "Complex",
            EntityKind::SmallMolecule => "SmallMolecule",
            EntityKind::Reaction => "Reaction",
            EntityKind::ReactionElement => "ReactionElement",
            EntityKind::Equation => "Equation",
            EntityKind::Variable => "Variable",
            EntityKind::Parameter => "Parameter",
            EntityKind::Measurement => "Measurement",
            EntityKind::MeasurementData => "MeasurementData",
            EntityKind::UnitDefinition => "UnitDefinition",
            EntityKind::BaseUnit => "BaseUnit",
        }
    }

    /// Table holding rows of this kind.
    pub fn table(self) -> &'static str {
        match self {
            EntityKind::Document => "documents",
            EntityKind::Creator => "creators",
            EntityKind::Vessel => "vessels",
            EntityKind::Protein => "proteins",
            EntityKind::Complex => "complexes",
            EntityKind::SmallMolecule => "small_molecules",
            EntityKind::Reaction => "reactions",
            EntityKind::ReactionElement => "reaction_elements",
            EntityKind::Equation => "equations",
            EntityKind::Variable => "variables",
            EntityKind::Parameter => "parameters",
            EntityKind::Measurement => "measurements",
            EntityKind::MeasurementData => "measurement_data",
            EntityKind::UnitDefinition => "unit_definitions",
            EntityKind::BaseUnit => "base_units",
        }
    }

    pub fn key(self) -> KeyKind {
        match self {
            EntityKind::Vessel
            | EntityKind::Protein
            | EntityKind::Complex
            | EntityKind::SmallMolecule
            | EntityKind::Reaction
            | EntityKind::Variable
            | EntityKind::Parameter
            | EntityKind::Measurement => KeyKind::Natural,
            EntityKind::Document
            | EntityKind::Creator
            | EntityKind::ReactionElement
            | EntityKind::Equation
            | EntityKind::MeasurementData
            | EntityKind::UnitDefinition
            | EntityKind::BaseUnit => KeyKind::Surrogate,
        }
    }

    /// Relations owned by this kind.
    pub fn relations(self) -> impl Iterator<Item = Relation> {
        Relation::ALL
            .into_iter()
            .filter(move |relation| relation.parent() == self)
    }

    /// Kinds that must be stored alongside this one, found by following
    /// relations transitively.
    pub fn dependencies(self) -> Vec<EntityKind> {
        let mut found: Vec<EntityKind> = Vec::new();
        let mut pending = vec![self];

        while let Some(kind) = pending.pop() {
            for relation in kind.relations() {
                let child = relation.child();
                if child != self && !found.contains(&child) {
                    found.push(child);
                    pending.push(child);
                }
            }
        }

        found.sort();
        found
    }

    /// DDL creating the entity table.
    pub(crate) fn ddl(self) -> &'static str {
        match self {
            EntityKind::Document => {
                "CREATE TABLE IF NOT EXISTS documents (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL,
                    version TEXT NOT NULL,
                    description TEXT,
                    created TEXT,
                    modified TEXT,
                    references_json TEXT NOT NULL
                );"
            }
            EntityKind::Creator => {
                "CREATE TABLE IF NOT EXISTS creators (
                    id INTEGER PRIMARY KEY,
                    given_name TEXT NOT NULL,
                    family_name TEXT NOT NULL,
                    mail TEXT NOT NULL
                );"
            }
            EntityKind::Vessel => {
                "CREATE TABLE IF NOT EXISTS vessels (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    volume REAL NOT NULL,
                    unit_ref INTEGER NOT NULL REFERENCES unit_definitions(id),
                    constant INTEGER NOT NULL,
                    digest TEXT NOT NULL
                );"
            }
            EntityKind::Protein => {
                "CREATE TABLE IF NOT EXISTS proteins (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    constant INTEGER NOT NULL,
                    sequence TEXT,
                    vessel_id TEXT,
                    ecnumber TEXT,
                    organism TEXT,
                    organism_tax_id TEXT,
                    references_json TEXT NOT NULL,
                    digest TEXT NOT NULL
                );"
            }
            EntityKind::Complex => {
                "CREATE TABLE IF NOT EXISTS complexes (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    constant INTEGER NOT NULL,
                    vessel_id TEXT,
                    participants_json TEXT NOT NULL,
                    digest TEXT NOT NULL
                );"
            }
            EntityKind::SmallMolecule => {
                "CREATE TABLE IF NOT EXISTS small_molecules (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    constant INTEGER NOT NULL,
                    vessel_id TEXT,
                    canonical_smiles TEXT,
                    inchi TEXT,
                    inchikey TEXT,
                    synonymous_names_json TEXT NOT NULL,
                    references_json TEXT NOT NULL,
                    digest TEXT NOT NULL
                );"
            }
            EntityKind::Reaction => {
                "CREATE TABLE IF NOT EXISTS reactions (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    reversible INTEGER NOT NULL,
                    kinetic_law_ref INTEGER REFERENCES equations(id),
                    modifiers_json TEXT NOT NULL,
                    digest TEXT NOT NULL
                );"
            }
            EntityKind::ReactionElement => {
                "CREATE TABLE IF NOT EXISTS reaction_elements (
                    id INTEGER PRIMARY KEY,
                    species_id TEXT NOT NULL,
                    stoichiometry REAL NOT NULL
                );"
            }
            EntityKind::Equation => {
                "CREATE TABLE IF NOT EXISTS equations (
                    id INTEGER PRIMARY KEY,
                    species_id TEXT NOT NULL,
                    equation TEXT NOT NULL,
                    equation_type TEXT NOT NULL
                );"
            }
            EntityKind::Variable => {
                "CREATE TABLE IF NOT EXISTS variables (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    symbol TEXT NOT NULL,
                    digest TEXT NOT NULL
                );"
            }
            EntityKind::Parameter => {
                "CREATE TABLE IF NOT EXISTS parameters (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    symbol TEXT NOT NULL,
                    value REAL,
                    unit_ref INTEGER REFERENCES unit_definitions(id),
                    initial_value REAL,
                    upper_bound REAL,
                    lower_bound REAL,
                    stderr REAL,
                    constant INTEGER,
                    digest TEXT NOT NULL
                );"
            }
            EntityKind::Measurement => {
                "CREATE TABLE IF NOT EXISTS measurements (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    group_id TEXT,
                    ph REAL,
                    temperature REAL,
                    temperature_unit_ref INTEGER REFERENCES unit_definitions(id),
                    digest TEXT NOT NULL
                );"
            }
            EntityKind::MeasurementData => {
                "CREATE TABLE IF NOT EXISTS measurement_data (
                    id INTEGER PRIMARY KEY,
                    species_id TEXT NOT NULL,
                    prepared REAL,
                    initial REAL,
                    data_unit_ref INTEGER REFERENCES unit_definitions(id),
                    data_json TEXT NOT NULL,
                    time_json TEXT NOT NULL,
                    time_unit_ref INTEGER REFERENCES unit_definitions(id),
                    data_type TEXT,
                    is_simulated INTEGER
                );"
            }
            EntityKind::UnitDefinition => {
                "CREATE TABLE IF NOT EXISTS unit_definitions (
                    id INTEGER PRIMARY KEY,
                    unit_id TEXT,
                    name TEXT
                );"
            }
            EntityKind::BaseUnit => {
                "CREATE TABLE IF NOT EXISTS base_units (
                    id INTEGER PRIMARY KEY,
                    kind TEXT NOT NULL,
                    exponent INTEGER NOT NULL,
                    multiplier REAL,
                    scale REAL
                );"
            }
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A relationship edge of the entity graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Relation {
    DocumentCreators,
    DocumentVessels,
    DocumentProteins,
    DocumentComplexes,
    DocumentSmallMolecules,
    DocumentReactions,
    DocumentMeasurements,
    DocumentEquations,
    DocumentParameters,
    ReactionSpecies,
    EquationVariables,
    MeasurementSpeciesData,
    UnitBaseUnits,
    VesselUnit,
    ParameterUnit,
    MeasurementTemperatureUnit,
    MeasurementDataUnit,
    MeasurementTimeUnit,
    ReactionKineticLaw,
}

/// Where the rows of a relation live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    /// Ordered join table `(parent, position, child)`.
    JoinTable {
        table: &'static str,
        parent_column: &'static str,
        child_column: &'static str,
    },
    /// Nullable column on the parent table pointing at the child row.
    ForeignKey {
        table: &'static str,
        column: &'static str,
    },
}

impl Relation {
    pub const ALL: [Relation; 19] = [
        Relation::DocumentCreators,
        Relation::DocumentVessels,
        Relation::DocumentProteins,
        Relation::DocumentComplexes,
        Relation::DocumentSmallMolecules,
        Relation::DocumentReactions,
        Relation::DocumentMeasurements,
        Relation::DocumentEquations,
        Relation::DocumentParameters,
        Relation::ReactionSpecies,
        Relation::EquationVariables,
        Relation::MeasurementSpeciesData,
        Relation::UnitBaseUnits,
        Relation::VesselUnit,
        Relation::ParameterUnit,
        Relation::MeasurementTemperatureUnit,
        Relation::MeasurementDataUnit,
        Relation::MeasurementTimeUnit,
        Relation::ReactionKineticLaw,
    ];

    pub fn parent(self) -> EntityKind {
        match self {
            Relation::DocumentCreators
            | Relation::DocumentVessels
            | Relation::DocumentProteins
            | Relation::DocumentComplexes
            | Relation::DocumentSmallMolecules
            | Relation::DocumentReactions
            | Relation::DocumentMeasurements
            | Relation::DocumentEquations
            | Relation::DocumentParameters => EntityKind::Document,
            Relation::ReactionSpecies | Relation::ReactionKineticLaw => EntityKind::Reaction,
            Relation::EquationVariables => EntityKind::Equation,
            Relation::MeasurementSpeciesData | Relation::MeasurementTemperatureUnit => {
                EntityKind::Measurement
            }
            Relation::UnitBaseUnits => EntityKind::UnitDefinition,
            Relation::VesselUnit => EntityKind::Vessel,
            Relation::ParameterUnit => EntityKind::Parameter,
            Relation::MeasurementDataUnit | Relation::MeasurementTimeUnit => {
                EntityKind::MeasurementData
            }
        }
    }

    pub fn child(self) -> EntityKind {
        match self {
            Relation::DocumentCreators => EntityKind::Creator,
            Relation::DocumentVessels => EntityKind::Vessel,
            Relation::DocumentProteins => EntityKind::Protein,
            Relation::DocumentComplexes => EntityKind::Complex,
            Relation::DocumentSmallMolecules => EntityKind::SmallMolecule,
            Relation::DocumentReactions => EntityKind::Reaction,
            Relation::DocumentMeasurements => EntityKind::Measurement,
            Relation::DocumentEquations | Relation::ReactionKineticLaw => EntityKind::Equation,
            Relation::DocumentParameters => EntityKind::Parameter,
            Relation::ReactionSpecies => EntityKind::ReactionElement,
            Relation::EquationVariables => EntityKind::Variable,
            Relation::MeasurementSpeciesData => EntityKind::MeasurementData,
            Relation::UnitBaseUnits => EntityKind::BaseUnit,
            Relation::VesselUnit
            | Relation::ParameterUnit
            | Relation::MeasurementTemperatureUnit
            | Relation::MeasurementDataUnit
            | Relation::MeasurementTimeUnit => EntityKind::UnitDefinition,
        }
    }

    /// Field of the parent model type populated through this relation.
    pub fn field(self) -> &'static str {
        match self {
            Relation::DocumentCreators => "creators",
            Relation::DocumentVessels => "vessels",
            Relation::DocumentProteins => "proteins",
            Relation::DocumentComplexes => "complexes",
            Relation::DocumentSmallMolecules => "small_molecules",
            Relation::DocumentReactions => "reactions",
            Relation::DocumentMeasurements => "measurements",
            Relation::DocumentEquations => "equations",
            Relation::DocumentParameters => "parameters",
            Relation::ReactionSpecies => "species",
            Relation::EquationVariables => "variables",
            Relation::MeasurementSpeciesData => "species_data",
            Relation::UnitBaseUnits => "base_units",
            Relation::VesselUnit | Relation::ParameterUnit => "unit",
            Relation::MeasurementTemperatureUnit => "temperature_unit",
            Relation::MeasurementDataUnit => "data_unit",
            Relation::MeasurementTimeUnit => "time_unit",
            Relation::ReactionKineticLaw => "kinetic_law",
        }
    }

    pub fn storage(self) -> Storage {
        match self {
            Relation::DocumentCreators => join("document_creators", "document_id", "creator_id"),
            Relation::DocumentVessels => join("document_vessels", "document_id", "vessel_id"),
            Relation::DocumentProteins => join("document_proteins", "document_id", "protein_id"),
            Relation::DocumentComplexes => {
                join("document_complexes", "document_id", "complex_id")
            }
            Relation::DocumentSmallMolecules => join(
                "document_small_molecules",
                "document_id",
                "small_molecule_id",
            ),
            Relation::DocumentReactions => {
                join("document_reactions", "document_id", "reaction_id")
            }
            Relation::DocumentMeasurements => {
                join("document_measurements", "document_id", "measurement_id")
            }
            Relation::DocumentEquations => {
                join("document_equations", "document_id", "equation_id")
            }
            Relation::DocumentParameters => {
                join("document_parameters", "document_id", "parameter_id")
            }
            Relation::ReactionSpecies => join("reaction_species", "reaction_id", "element_id"),
            Relation::EquationVariables => {
                join("equation_variables", "equation_id", "variable_id")
            }
            Relation::MeasurementSpeciesData => {
                join("measurement_species_data", "measurement_id", "data_id")
            }
            Relation::UnitBaseUnits => join("unit_base_units", "unit_id", "base_unit_id"),
            Relation::VesselUnit => foreign("vessels", "unit_ref"),
            Relation::ParameterUnit => foreign("parameters", "unit_ref"),
            Relation::MeasurementTemperatureUnit => {
                foreign("measurements", "temperature_unit_ref")
            }
            Relation::MeasurementDataUnit => foreign("measurement_data", "data_unit_ref"),
            Relation::MeasurementTimeUnit => foreign("measurement_data", "time_unit_ref"),
            Relation::ReactionKineticLaw => foreign("reactions", "kinetic_law_ref"),
        }
    }

    /// DDL creating the join table, `None` for foreign-key relations whose
    /// column is part of the parent table.
    pub(crate) fn ddl(self) -> Option<String> {
        let Storage::JoinTable {
            table,
            parent_column,
            child_column,
        } = self.storage()
        else {
            return None;
        };

        let parent = self.parent();
        let child = self.child();

        Some(format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                {parent_column} {parent_type} NOT NULL REFERENCES {parent_table}(id) ON DELETE CASCADE,
                position INTEGER NOT NULL,
                {child_column} {child_type} NOT NULL REFERENCES {child_table}(id),
                PRIMARY KEY ({parent_column}, position)
            );",
            parent_type = parent.key().sql_type(),
            parent_table = parent.table(),
            child_type = child.key().sql_type(),
            child_table = child.table(),
        ))
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.parent(), self.field())
    }
}

const fn join(
    table: &'static str,
    parent_column: &'static str,
    child_column: &'static str,
) -> Storage {
    Storage::JoinTable {
        table,
        parent_column,
        child_column,
    }
}

const fn foreign(table: &'static str, column: &'static str) -> Storage {
    Storage::ForeignKey { table, column }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relations_are_declared_once() {
        let mut relations = Relation::ALL.to_vec();
        relations.sort();
        relations.dedup();
        assert_eq!(relations.len(), Relation::ALL.len());
    }

    #[test]
    fn test_join_tables_match_relationship_list() {
        let joins = Relation::ALL
            .iter()
            .filter(|relation| matches!(relation.storage(), Storage::JoinTable { .. }))
            .count();
        let foreign_keys = Relation::ALL.len() - joins;

        assert_eq!(joins, 13);
        assert_eq!(foreign_keys, 6);
    }

    #[test]
    fn test_foreign_keys_live_on_parent_table() {
        for relation in Relation::ALL {
            if let Storage::ForeignKey { table, .. } = relation.storage() {
                assert_eq!(table, relation.parent().table(), "{relation}");
            }
        }
    }

    #[test]
    fn test_document_depends_on_every_other_kind() {
        let dependencies = EntityKind::Document.dependencies();
        assert_eq!(dependencies.len(), EntityKind::ALL.len() - 1);
        assert!(!dependencies.contains(&EntityKind::Document));
    }

    #[test]
    fn test_leaf_kinds_have_no_dependencies() {
        for kind in [
            EntityKind::Creator,
            EntityKind::Protein,
            EntityKind::Complex,
            EntityKind::SmallMolecule,
            EntityKind::Variable,
            EntityKind::ReactionElement,
            EntityKind::BaseUnit,
        ] {
            assert!(kind.dependencies().is_empty(), "{kind}");
        }
    }

    #[test]
    fn test_vessel_dependencies() {
        assert_eq!(
            EntityKind::Vessel.dependencies(),
            vec![EntityKind::UnitDefinition, EntityKind::BaseUnit]
        );
    }

    #[test]
    fn test_creation_order_respects_dependencies() {
        for (position, kind) in EntityKind::ALL.iter().enumerate() {
            for dependency in kind.dependencies() {
                let dependency_position = EntityKind::ALL
                    .iter()
                    .position(|k| *k == dependency)
                    .expect("dependency is declared");
                assert!(dependency_position < position, "{kind} before {dependency}");
            }
        }
    }
}
