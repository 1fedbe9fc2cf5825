//! Eager hydration.
//!
//! Every loader returns `Ok(None)` when its row is absent. Relation fields
//! are filled through [`children`] (join tables) and [`owned`] (foreign-key
//! columns); a referenced row that has vanished is a `NotFound` error.

#![allow(clippy::ptr_arg)]

use std::fmt::Display;

use rusqlite::{
    types::{FromSql, ToSql},
    Connection, OptionalExtension, Row,
};

use crate::prelude::*;
use crate::store::codec::Json;
use crate::store::error::{StoreError, StoreResult};
use crate::store::schema::{EntityKind, Relation, Storage};

fn required<K, T, F>(conn: &Connection, kind: EntityKind, key: &K, load: F) -> StoreResult<T>
where
    K: Display,
    F: Fn(&Connection, &K) -> StoreResult<Option<T>>,
{
    load(conn, key)?.ok_or_else(|| StoreError::NotFound {
        entity: kind,
        id: key.to_string(),
    })
}

/// Loads the children recorded under `parent` in the relation's join table,
/// in insertion order.
fn children<P, K, T, F>(
    conn: &Connection,
    relation: Relation,
    parent: &P,
    load: F,
) -> StoreResult<Vec<T>>
where
    P: ToSql,
    K: FromSql + Display,
    F: Fn(&Connection, &K) -> StoreResult<Option<T>>,
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

    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {child_column} FROM {table} WHERE {parent_column} = ?1 ORDER BY position"
        ))
        .map_err(StoreError::persistence(relation.parent()))?;
    let keys = stmt
        .query_map([parent], |row| row.get::<_, K>(0))
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<K>>>())
        .map_err(StoreError::persistence(relation.parent()))?;
    drop(stmt);

    keys.iter()
        .map(|key| required(conn, relation.child(), key, &load))
        .collect()
}

/// Loads the row a nullable foreign-key column points at.
fn owned<T, F>(
    conn: &Connection,
    relation: Relation,
    key: Option<i64>,
    load: F,
) -> StoreResult<Option<T>>
where
    F: Fn(&Connection, &i64) -> StoreResult<Option<T>>,
{
    key.map(|key| required(conn, relation.child(), &key, load))
        .transpose()
}

fn row<K, T, F>(conn: &Connection, kind: EntityKind, sql: &str, key: &K, map: F) -> StoreResult<Option<T>>
where
    K: ToSql,
    F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
{
    conn.prepare_cached(sql)
        .and_then(|mut stmt| stmt.query_row([key], map).optional())
        .map_err(StoreError::persistence(kind))
}

pub(crate) fn load_base_unit(conn: &Connection, id: &i64) -> StoreResult<Option<BaseUnit>> {
    row(
        conn,
        EntityKind::BaseUnit,
        "SELECT kind, exponent, multiplier, scale FROM base_units WHERE id = ?1",
        id,
        |row| {
            Ok(BaseUnit {
                kind: row.get(0)?,
                exponent: row.get(1)?,
                multiplier: row.get(2)?,
                scale: row.get(3)?,
            })
        },
    )
}

pub(crate) fn load_unit(conn: &Connection, id: &i64) -> StoreResult<Option<UnitDefinition>> {
    let stored = row(
        conn,
        EntityKind::UnitDefinition,
        "SELECT unit_id, name FROM unit_definitions WHERE id = ?1",
        id,
        |row| {
            Ok((
                row.get::<_, Option<String>>(0)?,
                row.get::<_, Option<String>>(1)?,
            ))
        },
    )?;

    let Some((unit_id, name)) = stored else {
        return Ok(None);
    };

    Ok(Some(UnitDefinition {
        id: unit_id,
        name,
        base_units: children(conn, Relation::UnitBaseUnits, id, load_base_unit)?,
    }))
}

pub(crate) fn load_creator(conn: &Connection, id: &i64) -> StoreResult<Option<Creator>> {
    row(
        conn,
        EntityKind::Creator,
        "SELECT given_name, family_name, mail FROM creators WHERE id = ?1",
        id,
        |row| {
            Ok(Creator {
                given_name: row.get(0)?,
                family_name: row.get(1)?,
                mail: row.get(2)?,
            })
        },
    )
}

pub(crate) fn load_vessel(conn: &Connection, id: &String) -> StoreResult<Option<Vessel>> {
    let stored = row(
        conn,
        EntityKind::Vessel,
        "SELECT name, volume, unit_ref, constant FROM vessels WHERE id = ?1",
        id,
        |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, bool>(3)?,
            ))
        },
    )?;

    let Some((name, volume, unit_ref, constant)) = stored else {
        return Ok(None);
    };

    Ok(Some(Vessel {
        id: id.clone(),
        name,
        volume,
        unit: required(conn, EntityKind::UnitDefinition, &unit_ref, load_unit)?,
        constant,
    }))
}

pub(crate) fn load_protein(conn: &Connection, id: &String) -> StoreResult<Option<Protein>> {
    row(
        conn,
        EntityKind::Protein,
        "SELECT name, constant, sequence, vessel_id, ecnumber, organism, organism_tax_id,
                references_json
         FROM proteins WHERE id = ?1",
        id,
        |row| {
            Ok(Protein {
                id: id.clone(),
                name: row.get(0)?,
                constant: row.get(1)?,
                sequence: row.get(2)?,
                vessel_id: row.get(3)?,
                ecnumber: row.get(4)?,
                organism: row.get(5)?,
                organism_tax_id: row.get(6)?,
                references: row.get::<_, Json<Vec<String>>>(7)?.0,
            })
        },
    )
}

pub(crate) fn load_complex(conn: &Connection, id: &String) -> StoreResult<Option<Complex>> {
    row(
        conn,
        EntityKind::Complex,
        "SELECT name, constant, vessel_id, participants_json FROM complexes WHERE id = ?1",
        id,
        |row| {
            Ok(Complex {
                id: id.clone(),
                name: row.get(0)?,
                constant: row.get(1)?,
                vessel_id: row.get(2)?,
                participants: row.get::<_, Json<Vec<String>>>(3)?.0,
            })
        },
    )
}

pub(crate) fn load_small_molecule(
    conn: &Connection,
    id: &String,
) -> StoreResult<Option<SmallMolecule>> {
    row(
        conn,
        EntityKind::SmallMolecule,
        "SELECT name, constant, vessel_id, canonical_smiles, inchi, inchikey,
                synonymous_names_json, references_json
         FROM small_molecules WHERE id = ?1",
        id,
        |row| {
            Ok(SmallMolecule {
                id: id.clone(),
                name: row.get(0)?,
                constant: row.get(1)?,
                vessel_id: row.get(2)?,
                canonical_smiles: row.get(3)?,
                inchi: row.get(4)?,
                inchikey: row.get(5)?,
                synonymous_names: row.get::<_, Json<Vec<String>>>(6)?.0,
                references: row.get::<_, Json<Vec<String>>>(7)?.0,
            })
        },
    )
}

pub(crate) fn load_variable(conn: &Connection, id: &String) -> StoreResult<Option<Variable>> {
    row(
        conn,
        EntityKind::Variable,
        "SELECT name, symbol FROM variables WHERE id = ?1",
        id,
        |row| {
            Ok(Variable {
                id: id.clone(),
                name: row.get(0)?,
                symbol: row.get(1)?,
            })
        },
    )
}

pub(crate) fn load_equation(conn: &Connection, id: &i64) -> StoreResult<Option<Equation>> {
    let stored = row(
        conn,
        EntityKind::Equation,
        "SELECT species_id, equation, equation_type FROM equations WHERE id = ?1",
        id,
        |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, EquationType>(2)?,
            ))
        },
    )?;

    let Some((species_id, equation, equation_type)) = stored else {
        return Ok(None);
    };

    Ok(Some(Equation {
        species_id,
        equation,
        equation_type,
        variables: children(conn, Relation::EquationVariables, id, load_variable)?,
    }))
}

pub(crate) fn load_reaction_element(
    conn: &Connection,
    id: &i64,
) -> StoreResult<Option<ReactionElement>> {
    row(
        conn,
        EntityKind::ReactionElement,
        "SELECT species_id, stoichiometry FROM reaction_elements WHERE id = ?1",
        id,
        |row| {
            Ok(ReactionElement {
                species_id: row.get(0)?,
                stoichiometry: row.get(1)?,
            })
        },
    )
}

pub(crate) fn load_reaction(conn: &Connection, id: &String) -> StoreResult<Option<Reaction>> {
    let stored = row(
        conn,
        EntityKind::Reaction,
        "SELECT name, reversible, kinetic_law_ref, modifiers_json FROM reactions WHERE id = ?1",
        id,
        |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, bool>(1)?,
                row.get::<_, Option<i64>>(2)?,
                row.get::<_, Json<Vec<String>>>(3)?,
            ))
        },
    )?;

    let Some((name, reversible, kinetic_law_ref, Json(modifiers))) = stored else {
        return Ok(None);
    };

    Ok(Some(Reaction {
        id: id.clone(),
        name,
        reversible,
        kinetic_law: owned(
            conn,
            Relation::ReactionKineticLaw,
            kinetic_law_ref,
            load_equation,
        )?,
        species: children(conn, Relation::ReactionSpecies, id, load_reaction_element)?,
        modifiers,
    }))
}

pub(crate) fn load_parameter(conn: &Connection, id: &String) -> StoreResult<Option<Parameter>> {
    let stored = row(
        conn,
        EntityKind::Parameter,
        "SELECT name, symbol, value, unit_ref, initial_value, upper_bound, lower_bound, stderr,
                constant
         FROM parameters WHERE id = ?1",
        id,
        |row| {
            Ok((
                Parameter {
                    id: id.clone(),
                    name: row.get(0)?,
                    symbol: row.get(1)?,
                    value: row.get(2)?,
                    unit: None,
                    initial_value: row.get(4)?,
                    upper_bound: row.get(5)?,
                    lower_bound: row.get(6)?,
                    stderr: row.get(7)?,
                    constant: row.get(8)?,
                },
                row.get::<_, Option<i64>>(3)?,
            ))
        },
    )?;

    let Some((parameter, unit_ref)) = stored else {
        return Ok(None);
    };

    Ok(Some(Parameter {
        unit: owned(conn, Relation::ParameterUnit, unit_ref, load_unit)?,
        ..parameter
    }))
}

pub(crate) fn load_measurement_data(
    conn: &Connection,
    id: &i64,
) -> StoreResult<Option<MeasurementData>> {
    let stored = row(
        conn,
        EntityKind::MeasurementData,
        "SELECT species_id, prepared, initial, data_unit_ref, data_json, time_json,
                time_unit_ref, data_type, is_simulated
         FROM measurement_data WHERE id = ?1",
        id,
        |row| {
            Ok((
                MeasurementData {
                    species_id: row.get(0)?,
                    prepared: row.get(1)?,
                    initial: row.get(2)?,
                    data_unit: None,
                    data: row.get::<_, Json<Vec<f64>>>(4)?.0,
                    time: row.get::<_, Json<Vec<f64>>>(5)?.0,
                    time_unit: None,
                    data_type: row.get(7)?,
                    is_simulated: row.get(8)?,
                },
                row.get::<_, Option<i64>>(3)?,
                row.get::<_, Option<i64>>(6)?,
            ))
        },
    )?;

    let Some((data, data_unit_ref, time_unit_ref)) = stored else {
        return Ok(None);
    };

    Ok(Some(MeasurementData {
        data_unit: owned(conn, Relation::MeasurementDataUnit, data_unit_ref, load_unit)?,
        time_unit: owned(conn, Relation::MeasurementTimeUnit, time_unit_ref, load_unit)?,
        ..data
    }))
}

pub(crate) fn load_measurement(
    conn: &Connection,
    id: &String,
) -> StoreResult<Option<Measurement>> {
    let stored = row(
        conn,
        EntityKind::Measurement,
        "SELECT name, group_id, ph, temperature, temperature_unit_ref
         FROM measurements WHERE id = ?1",
        id,
        |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<String>>(1)?,
                row.get::<_, Option<f64>>(2)?,
                row.get::<_, Option<f64>>(3)?,
                row.get::<_, Option<i64>>(4)?,
            ))
        },
    )?;

    let Some((name, group_id, ph, temperature, temperature_unit_ref)) = stored else {
        return Ok(None);
    };

    Ok(Some(Measurement {
        id: id.clone(),
        name,
        species_data: children(
            conn,
            Relation::MeasurementSpeciesData,
            id,
            load_measurement_data,
        )?,
        group_id,
        ph,
        temperature,
        temperature_unit: owned(
            conn,
            Relation::MeasurementTemperatureUnit,
            temperature_unit_ref,
            load_unit,
        )?,
    }))
}

pub(crate) fn load_document(
    conn: &Connection,
    id: &i64,
) -> StoreResult<Option<EnzymeMLDocument>> {
    let stored = row(
        conn,
        EntityKind::Document,
        "SELECT name, version, description, created, modified, references_json
         FROM documents WHERE id = ?1",
        id,
        |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<String>>(3)?,
                row.get::<_, Option<String>>(4)?,
                row.get::<_, Json<Vec<String>>>(5)?,
            ))
        },
    )?;

    let Some((name, version, description, created, modified, Json(references))) = stored else {
        return Ok(None);
    };

    Ok(Some(EnzymeMLDocument {
        id: Some(*id),
        name,
        version,
        description,
        created,
        modified,
        creators: children(conn, Relation::DocumentCreators, id, load_creator)?,
        vessels: children(conn, Relation::DocumentVessels, id, load_vessel)?,
        proteins: children(conn, Relation::DocumentProteins, id, load_protein)?,
        complexes: children(conn, Relation::DocumentComplexes, id, load_complex)?,
        small_molecules: children(
            conn,
            Relation::DocumentSmallMolecules,
            id,
            load_small_molecule,
        )?,
        reactions: children(conn, Relation::DocumentReactions, id, load_reaction)?,
        measurements: children(conn, Relation::DocumentMeasurements, id, load_measurement)?,
        equations: children(conn, Relation::DocumentEquations, id, load_equation)?,
        parameters: children(conn, Relation::DocumentParameters, id, load_parameter)?,
        references,
    }))
}
