//! Cascading inserts.
//!
//! Every function runs inside the caller's transaction and returns the key
//! of the row it wrote. Children are written before the foreign-key columns
//! that point at them, join rows after the parent row exists.

use log::debug;
use rusqlite::{params, types::ToSql, OptionalExtension, Transaction};
use serde::Serialize;

use crate::prelude::*;
use crate::store::codec::{digest, Json};
use crate::store::error::{StoreError, StoreResult};
use crate::store::schema::{EntityKind, Relation, Storage};

/// Claims a natural key.
///
/// Returns the content digest when the id is free and the row still has to
/// be written, `None` when an identical row is already stored.
fn claim<T: Serialize>(
    tx: &Transaction<'_>,
    kind: EntityKind,
    id: &str,
    value: &T,
) -> StoreResult<Option<String>> {
    let digest = digest(kind, value)?;
    let stored: Option<String> = tx
        .query_row(
            &format!("SELECT digest FROM {} WHERE id = ?1", kind.table()),
            [id],
            |row| row.get(0),
        )
        .optional()
        .map_err(StoreError::persistence(kind))?;

    match stored {
        None => Ok(Some(digest)),
        Some(stored) if stored == digest => {
            debug!("event=insert entity={kind} id={id} status=shared");
            Ok(None)
        }
        Some(_) => Err(StoreError::Conflict {
            entity: kind,
            id: id.to_string(),
        }),
    }
}

/// Inserts every item and records it under `parent` in the relation's join
/// table, preserving list order.
fn link_all<P, C, K, F>(
    tx: &Transaction<'_>,
    relation: Relation,
    parent: &P,
    items: &[C],
    mut insert: F,
) -> StoreResult<()>
where
    P: ToSql,
    K: ToSql,
    F: FnMut(&Transaction<'_>, &C) -> StoreResult<K>,
{
    let Storage::JoinTable {
        table,
        parent_column,
        child_column,
    } = relation.storage()
    else {
        return Err(StoreError::Persistence {
            entity: relation.parent(),
            source: rusqlite::Error::InvalidParameterName(format!(
                "{relation} is not stored in a join table"
            )),
        });
    };

    let sql = format!(
        "INSERT INTO {table} ({parent_column}, position, {child_column}) VALUES (?1, ?2, ?3)"
    );

    for (position, item) in items.iter().enumerate() {
        let child = insert(tx, item)?;
        tx.prepare_cached(&sql)
            .and_then(|mut stmt| stmt.execute(params![parent, position as i64, child]))
            .map_err(StoreError::persistence(relation.parent()))?;
    }

    Ok(())
}

fn optional_unit(
    tx: &Transaction<'_>,
    unit: &Option<UnitDefinition>,
) -> StoreResult<Option<i64>> {
    unit.as_ref().map(|unit| insert_unit(tx, unit)).transpose()
}

pub(crate) fn insert_base_unit(tx: &Transaction<'_>, base: &BaseUnit) -> StoreResult<i64> {
    let kind = EntityKind::BaseUnit;
    tx.execute(
        "INSERT INTO base_units (kind, exponent, multiplier, scale) VALUES (?1, ?2, ?3, ?4)",
        params![base.kind, base.exponent, base.multiplier, base.scale],
    )
    .map_err(StoreError::persistence(kind))?;

    Ok(tx.last_insert_rowid())
}

pub(crate) fn insert_unit(tx: &Transaction<'_>, unit: &UnitDefinition) -> StoreResult<i64> {
    let kind = EntityKind::UnitDefinition;
    tx.execute(
        "INSERT INTO unit_definitions (unit_id, name) VALUES (?1, ?2)",
        params![unit.id, unit.name],
    )
    .map_err(StoreError::persistence(kind))?;

    let id = tx.last_insert_rowid();
    link_all(
        tx,
        Relation::UnitBaseUnits,
        &id,
        &unit.base_units,
        insert_base_unit,
    )?;

    debug!(
        "event=insert entity={kind} id={id} base_units={}",
        unit.base_units.len()
    );
    Ok(id)
}

pub(crate) fn insert_creator(tx: &Transaction<'_>, creator: &Creator) -> StoreResult<i64> {
    tx.execute(
        "INSERT INTO creators (given_name, family_name, mail) VALUES (?1, ?2, ?3)",
        params![creator.given_name, creator.family_name, creator.mail],
    )
    .map_err(StoreError::persistence(EntityKind::Creator))?;

    Ok(tx.last_insert_rowid())
}

pub(crate) fn insert_vessel(tx: &Transaction<'_>, vessel: &Vessel) -> StoreResult<String> {
    let kind = EntityKind::Vessel;
    let Some(digest) = claim(tx, kind, &vessel.id, vessel)? else {
        return Ok(vessel.id.clone());
    };

    let unit_ref = insert_unit(tx, &vessel.unit)?;
    tx.execute(
        "INSERT INTO vessels (id, name, volume, unit_ref, constant, digest)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            vessel.id,
            vessel.name,
            vessel.volume,
            unit_ref,
            vessel.constant,
            digest
        ],
    )
    .map_err(StoreError::persistence(kind))?;

    debug!("event=insert entity={kind} id={}", vessel.id);
    Ok(vessel.id.clone())
}

pub(crate) fn insert_protein(tx: &Transaction<'_>, protein: &Protein) -> StoreResult<String> {
    let kind = EntityKind::Protein;
    let Some(digest) = claim(tx, kind, &protein.id, protein)? else {
        return Ok(protein.id.clone());
    };

    tx.execute(
        "INSERT INTO proteins (id, name, constant, sequence, vessel_id, ecnumber, organism,
                               organism_tax_id, references_json, digest)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            protein.id,
            protein.name,
            protein.constant,
            protein.sequence,
            protein.vessel_id,
            protein.ecnumber,
            protein.organism,
            protein.organism_tax_id,
            Json(&protein.references),
            digest
        ],
    )
    .map_err(StoreError::persistence(kind))?;

    debug!("event=insert entity={kind} id={}", protein.id);
    Ok(protein.id.clone())
}

pub(crate) fn insert_complex(tx: &Transaction<'_>, complex: &Complex) -> StoreResult<String> {
    let kind = EntityKind::Complex;
    let Some(digest) = claim(tx, kind, &complex.id, complex)? else {
        return Ok(complex.id.clone());
    };

    tx.execute(
        "INSERT INTO complexes (id, name, constant, vessel_id, participants_json, digest)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            complex.id,
            complex.name,
            complex.constant,
            complex.vessel_id,
            Json(&complex.participants),
            digest
        ],
    )
    .map_err(StoreError::persistence(kind))?;

    debug!("event=insert entity={kind} id={}", complex.id);
    Ok(complex.id.clone())
}

pub(crate) fn insert_small_molecule(
    tx: &Transaction<'_>,
    molecule: &SmallMolecule,
) -> StoreResult<String> {
    let kind = EntityKind::SmallMolecule;
    let Some(digest) = claim(tx, kind, &molecule.id, molecule)? else {
        return Ok(molecule.id.clone());
    };

    tx.execute(
        "INSERT INTO small_molecules (id, name, constant, vessel_id, canonical_smiles, inchi,
                                      inchikey, synonymous_names_json, references_json, digest)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            molecule.id,
            molecule.name,
            molecule.constant,
            molecule.vessel_id,
            molecule.canonical_smiles,
            molecule.inchi,
            molecule.inchikey,
            Json(&molecule.synonymous_names),
            Json(&molecule.references),
            digest
        ],
    )
    .map_err(StoreError::persistence(kind))?;

    debug!("event=insert entity={kind} id={}", molecule.id);
    Ok(molecule.id.clone())
}

pub(crate) fn insert_variable(tx: &Transaction<'_>, variable: &Variable) -> StoreResult<String> {
    let kind = EntityKind::Variable;
    let Some(digest) = claim(tx, kind, &variable.id, variable)? else {
        return Ok(variable.id.clone());
    };

    tx.execute(
        "INSERT INTO variables (id, name, symbol, digest) VALUES (?1, ?2, ?3, ?4)",
        params![variable.id, variable.name, variable.symbol, digest],
    )
    .map_err(StoreError::persistence(kind))?;

    Ok(variable.id.clone())
}

pub(crate) fn insert_equation(tx: &Transaction<'_>, equation: &Equation) -> StoreResult<i64> {
    let kind = EntityKind::Equation;
    tx.execute(
        "INSERT INTO equations (species_id, equation, equation_type) VALUES (?1, ?2, ?3)",
        params![
            equation.species_id,
            equation.equation,
            equation.equation_type
        ],
    )
    .map_err(StoreError::persistence(kind))?;

    let id = tx.last_insert_rowid();
    link_all(
        tx,
        Relation::EquationVariables,
        &id,
        &equation.variables,
        insert_variable,
    )?;

    debug!(
        "event=insert entity={kind} id={id} variables={}",
        equation.variables.len()
    );
    Ok(id)
}

pub(crate) fn insert_reaction_element(
    tx: &Transaction<'_>,
    element: &ReactionElement,
) -> StoreResult<i64> {
    tx.execute(
        "INSERT INTO reaction_elements (species_id, stoichiometry) VALUES (?1, ?2)",
        params![element.species_id, element.stoichiometry],
    )
    .map_err(StoreError::persistence(EntityKind::ReactionElement))?;

    Ok(tx.last_insert_rowid())
}

pub(crate) fn insert_reaction(tx: &Transaction<'_>, reaction: &Reaction) -> StoreResult<String> {
    let kind = EntityKind::Reaction;
    let Some(digest) = claim(tx, kind, &reaction.id, reaction)? else {
        return Ok(reaction.id.clone());
    };

    let kinetic_law_ref = reaction
        .kinetic_law
        .as_ref()
        .map(|law| insert_equation(tx, law))
        .transpose()?;

    tx.execute(
        "INSERT INTO reactions (id, name, reversible, kinetic_law_ref, modifiers_json, digest)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            reaction.id,
            reaction.name,
            reaction.reversible,
            kinetic_law_ref,
            Json(&reaction.modifiers),
            digest
        ],
    )
    .map_err(StoreError::persistence(kind))?;

    link_all(
        tx,
        Relation::ReactionSpecies,
        &reaction.id,
        &reaction.species,
        insert_reaction_element,
    )?;

    debug!(
        "event=insert entity={kind} id={} species={}",
        reaction.id,
        reaction.species.len()
    );
    Ok(reaction.id.clone())
}

pub(crate) fn insert_parameter(
    tx: &Transaction<'_>,
    parameter: &Parameter,
) -> StoreResult<String> {
    let kind = EntityKind::Parameter;
    let Some(digest) = claim(tx, kind, &parameter.id, parameter)? else {
        return Ok(parameter.id.clone());
    };

    let unit_ref = optional_unit(tx, &parameter.unit)?;
    tx.execute(
        "INSERT INTO parameters (id, name, symbol, value, unit_ref, initial_value, upper_bound,
                                 lower_bound, stderr, constant, digest)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            parameter.id,
            parameter.name,
            parameter.symbol,
            parameter.value,
            unit_ref,
            parameter.initial_value,
            parameter.upper_bound,
            parameter.lower_bound,
            parameter.stderr,
            parameter.constant,
            digest
        ],
    )
    .map_err(StoreError::persistence(kind))?;

    debug!("event=insert entity={kind} id={}", parameter.id);
    Ok(parameter.id.clone())
}

pub(crate) fn insert_measurement_data(
    tx: &Transaction<'_>,
    data: &MeasurementData,
) -> StoreResult<i64> {
    let kind = EntityKind::MeasurementData;
    let data_unit_ref = optional_unit(tx, &data.data_unit)?;
    let time_unit_ref = optional_unit(tx, &data.time_unit)?;

    tx.execute(
        "INSERT INTO measurement_data (species_id, prepared, initial, data_unit_ref, data_json,
                                       time_json, time_unit_ref, data_type, is_simulated)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            data.species_id,
            data.prepared,
            data.initial,
            data_unit_ref,
            Json(&data.data),
            Json(&data.time),
            time_unit_ref,
            data.data_type,
            data.is_simulated
        ],
    )
    .map_err(StoreError::persistence(kind))?;

    let id = tx.last_insert_rowid();
    debug!(
        "event=insert entity={kind} id={id} species_id={} points={}",
        data.species_id,
        data.data.len()
    );
    Ok(id)
}

pub(crate) fn insert_measurement(
    tx: &Transaction<'_>,
    measurement: &Measurement,
) -> StoreResult<String> {
    let kind = EntityKind::Measurement;
    let Some(digest) = claim(tx, kind, &measurement.id, measurement)? else {
        return Ok(measurement.id.clone());
    };

    let temperature_unit_ref = optional_unit(tx, &measurement.temperature_unit)?;
    tx.execute(
        "INSERT INTO measurements (id, name, group_id, ph, temperature, temperature_unit_ref,
                                   digest)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            measurement.id,
            measurement.name,
            measurement.group_id,
            measurement.ph,
            measurement.temperature,
            temperature_unit_ref,
            digest
        ],
    )
    .map_err(StoreError::persistence(kind))?;

    link_all(
        tx,
        Relation::MeasurementSpeciesData,
        &measurement.id,
        &measurement.species_data,
        insert_measurement_data,
    )?;

    debug!(
        "event=insert entity={kind} id={} species_data={}",
        measurement.id,
        measurement.species_data.len()
    );
    Ok(measurement.id.clone())
}

pub(crate) fn insert_document(
    tx: &Transaction<'_>,
    document: &EnzymeMLDocument,
) -> StoreResult<i64> {
    let kind = EntityKind::Document;

    if let Some(id) = document.id {
        let taken = tx
            .query_row("SELECT 1 FROM documents WHERE id = ?1", [id], |_| Ok(()))
            .optional()
            .map_err(StoreError::persistence(kind))?
            .is_some();
        if taken {
            return Err(StoreError::Conflict {
                entity: kind,
                id: id.to_string(),
            });
        }
    }

    tx.execute(
        "INSERT INTO documents (id, name, version, description, created, modified, references_json)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            document.id,
            document.name,
            document.version,
            document.description,
            document.created,
            document.modified,
            Json(&document.references)
        ],
    )
    .map_err(StoreError::persistence(kind))?;

    let id = tx.last_insert_rowid();

    link_all(tx, Relation::DocumentCreators, &id, &document.creators, insert_creator)?;
    link_all(tx, Relation::DocumentVessels, &id, &document.vessels, insert_vessel)?;
    link_all(tx, Relation::DocumentProteins, &id, &document.proteins, insert_protein)?;
    link_all(tx, Relation::DocumentComplexes, &id, &document.complexes, insert_complex)?;
    link_all(
        tx,
        Relation::DocumentSmallMolecules,
        &id,
        &document.small_molecules,
        insert_small_molecule,
    )?;
    link_all(tx, Relation::DocumentReactions, &id, &document.reactions, insert_reaction)?;
    link_all(
        tx,
        Relation::DocumentMeasurements,
        &id,
        &document.measurements,
        insert_measurement,
    )?;
    link_all(tx, Relation::DocumentEquations, &id, &document.equations, insert_equation)?;
    link_all(
        tx,
        Relation::DocumentParameters,
        &id,
        &document.parameters,
        insert_parameter,
    )?;

    debug!(
        "event=insert entity={kind} id={id} entities={}",
        document.entity_count()
    );
    Ok(id)
}
