//! Cascading removal.
//!
//! The counterpart of [`crate::store::write`]. A parent row is deleted before
//! the rows it owns: its join rows go with it through `ON DELETE CASCADE`, and
//! no foreign-key column points at the children any more when they are
//! removed. Natural-keyed rows and equations survive while a join row or a
//! foreign key elsewhere still refers to them.

use log::debug;
use rusqlite::{params, types::FromSql, types::ToSql, OptionalExtension, Transaction};

use crate::store::error::{StoreError, StoreResult};
use crate::store::schema::{EntityKind, Relation, Storage};

/// Children recorded under `parent` in the relation's join table.
fn linked<P, K>(tx: &Transaction<'_>, relation: Relation, parent: &P) -> StoreResult<Vec<K>>
where
    P: ToSql,
    K: FromSql,
{
    let Storage::JoinTable {
        table,
        parent_column,
        child_column,
    } = relation.storage()
    else {
        return Ok(Vec::new());
    };

    let mut stmt = tx
        .prepare_cached(&format!(
            "SELECT {child_column} FROM {table} WHERE {parent_column} = ?1 ORDER BY position"
        ))
        .map_err(StoreError::persistence(relation.parent()))?;

    let children = stmt
        .query_map([parent], |row| row.get(0))
        .and_then(|rows| rows.collect::<rusqlite::Result<Vec<K>>>())
        .map_err(StoreError::persistence(relation.parent()))?;
    Ok(children)
}

/// Row key stored in the relation's foreign-key column of `parent`.
fn pointed<P: ToSql>(
    tx: &Transaction<'_>,
    relation: Relation,
    parent: &P,
) -> StoreResult<Option<i64>> {
    let Storage::ForeignKey { table, column } = relation.storage() else {
        return Ok(None);
    };

    let key: Option<Option<i64>> = tx
        .query_row(
            &format!("SELECT {column} FROM {table} WHERE id = ?1"),
            [parent],
            |row| row.get(0),
        )
        .optional()
        .map_err(StoreError::persistence(relation.parent()))?;
    Ok(key.flatten())
}

/// Whether any parent still refers to `child` through the relation.
fn in_use<K: ToSql>(tx: &Transaction<'_>, relation: Relation, child: &K) -> StoreResult<bool> {
    let (table, column) = match relation.storage() {
        Storage::JoinTable {
            table,
            child_column,
            ..
        } => (table, child_column),
        Storage::ForeignKey { table, column } => (table, column),
    };

    tx.query_row(
        &format!("SELECT EXISTS (SELECT 1 FROM {table} WHERE {column} = ?1)"),
        [child],
        |row| row.get(0),
    )
    .map_err(StoreError::persistence(relation.child()))
}

fn remove<K: ToSql>(tx: &Transaction<'_>, kind: EntityKind, key: &K) -> StoreResult<usize> {
    tx.execute(
        &format!("DELETE FROM {} WHERE id = ?1", kind.table()),
        params![key],
    )
    .map_err(StoreError::persistence(kind))
}

fn remove_unit(tx: &Transaction<'_>, unit: Option<i64>) -> StoreResult<()> {
    let Some(unit) = unit else {
        return Ok(());
    };

    let base_units: Vec<i64> = linked(tx, Relation::UnitBaseUnits, &unit)?;
    remove(tx, EntityKind::UnitDefinition, &unit)?;
    for base_unit in &base_units {
        remove(tx, EntityKind::BaseUnit, base_unit)?;
    }
    Ok(())
}

/// Removes a natural-keyed row without owned children once `relation` no
/// longer refers to it.
fn release_leaf(tx: &Transaction<'_>, relation: Relation, id: &str) -> StoreResult<bool> {
    if in_use(tx, relation, &id)? {
        return Ok(false);
    }
    Ok(remove(tx, relation.child(), &id)? > 0)
}

fn release_vessel(tx: &Transaction<'_>, id: &str) -> StoreResult<bool> {
    if in_use(tx, Relation::DocumentVessels, &id)? {
        return Ok(false);
    }

    let unit = pointed(tx, Relation::VesselUnit, &id)?;
    let removed = remove(tx, EntityKind::Vessel, &id)?;
    remove_unit(tx, unit)?;
    Ok(removed > 0)
}

fn release_parameter(tx: &Transaction<'_>, id: &str) -> StoreResult<bool> {
    if in_use(tx, Relation::DocumentParameters, &id)? {
        return Ok(false);
    }

    let unit = pointed(tx, Relation::ParameterUnit, &id)?;
    let removed = remove(tx, EntityKind::Parameter, &id)?;
    remove_unit(tx, unit)?;
    Ok(removed > 0)
}

fn release_equation(tx: &Transaction<'_>, id: i64) -> StoreResult<bool> {
    if in_use(tx, Relation::DocumentEquations, &id)?
        || in_use(tx, Relation::ReactionKineticLaw, &id)?
    {
        return Ok(false);
    }

    let variables: Vec<String> = linked(tx, Relation::EquationVariables, &id)?;
    let removed = remove(tx, EntityKind::Equation, &id)?;
    for variable in &variables {
        release_leaf(tx, Relation::EquationVariables, variable)?;
    }
    Ok(removed > 0)
}

fn release_reaction(tx: &Transaction<'_>, id: &str) -> StoreResult<bool> {
    if in_use(tx, Relation::DocumentReactions, &id)? {
        return Ok(false);
    }

    let kinetic_law = pointed(tx, Relation::ReactionKineticLaw, &id)?;
    let elements: Vec<i64> = linked(tx, Relation::ReactionSpecies, &id)?;
    let removed = remove(tx, EntityKind::Reaction, &id)?;
    for element in &elements {
        remove(tx, EntityKind::ReactionElement, element)?;
    }
    if let Some(kinetic_law) = kinetic_law {
        release_equation(tx, kinetic_law)?;
    }
    Ok(removed > 0)
}

fn release_measurement(tx: &Transaction<'_>, id: &str) -> StoreResult<bool> {
    if in_use(tx, Relation::DocumentMeasurements, &id)? {
        return Ok(false);
    }

    let temperature_unit = pointed(tx, Relation::MeasurementTemperatureUnit, &id)?;
    let species_data: Vec<i64> = linked(tx, Relation::MeasurementSpeciesData, &id)?;
    let removed = remove(tx, EntityKind::Measurement, &id)?;

    for data in &species_data {
        let data_unit = pointed(tx, Relation::MeasurementDataUnit, data)?;
        let time_unit = pointed(tx, Relation::MeasurementTimeUnit, data)?;
        remove(tx, EntityKind::MeasurementData, data)?;
        remove_unit(tx, data_unit)?;
        remove_unit(tx, time_unit)?;
    }
    remove_unit(tx, temperature_unit)?;
    Ok(removed > 0)
}

/// Deletes a document together with every row only it refers to.
///
/// Returns `false` when no document has the id.
pub(crate) fn delete_document(tx: &Transaction<'_>, id: i64) -> StoreResult<bool> {
    let creators: Vec<i64> = linked(tx, Relation::DocumentCreators, &id)?;
    let vessels: Vec<String> = linked(tx, Relation::DocumentVessels, &id)?;
    let proteins: Vec<String> = linked(tx, Relation::DocumentProteins, &id)?;
    let complexes: Vec<String> = linked(tx, Relation::DocumentComplexes, &id)?;
    let small_molecules: Vec<String> = linked(tx, Relation::DocumentSmallMolecules, &id)?;
    let reactions: Vec<String> = linked(tx, Relation::DocumentReactions, &id)?;
    let measurements: Vec<String> = linked(tx, Relation::DocumentMeasurements, &id)?;
    let equations: Vec<i64> = linked(tx, Relation::DocumentEquations, &id)?;
    let parameters: Vec<String> = linked(tx, Relation::DocumentParameters, &id)?;

    if remove(tx, EntityKind::Document, &id)? == 0 {
        return Ok(false);
    }

    let mut released = 0;
    for creator in &creators {
        if !in_use(tx, Relation::DocumentCreators, creator)? {
            released += remove(tx, EntityKind::Creator, creator)?;
        }
    }
    for vessel in &vessels {
        released += usize::from(release_vessel(tx, vessel)?);
    }
    for protein in &proteins {
        released += usize::from(release_leaf(tx, Relation::DocumentProteins, protein)?);
    }
    for complex in &complexes {
        released += usize::from(release_leaf(tx, Relation::DocumentComplexes, complex)?);
    }
    for small_molecule in &small_molecules {
        released += usize::from(release_leaf(
            tx,
            Relation::DocumentSmallMolecules,
            small_molecule,
        )?);
    }
    for reaction in &reactions {
        released += usize::from(release_reaction(tx, reaction)?);
    }
    for measurement in &measurements {
        released += usize::from(release_measurement(tx, measurement)?);
    }
    for equation in &equations {
        released += usize::from(release_equation(tx, *equation)?);
    }
    for parameter in &parameters {
        released += usize::from(release_parameter(tx, parameter)?);
    }

    debug!(
        "event=delete entity={} id={id} released={released}",
        EntityKind::Document
    );
    Ok(true)
}
