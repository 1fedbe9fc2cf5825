//! Binding between model types and their tables.

use std::fmt::Display;

use rusqlite::{
    types::{FromSql, ToSql},
    Connection, Transaction,
};

use crate::prelude::*;
use crate::store::error::StoreResult;
use crate::store::read;
use crate::store::schema::EntityKind;
use crate::store::write;

/// A model type that can be stored.
///
/// `insert` writes the value and everything reachable from it within the
/// given transaction. `load` hydrates every relation listed by the kind's
/// [`LoadProfile`](crate::store::profile::LoadProfile) and returns `None`
/// when no row matches the key.
pub trait Record: Sized {
    type Key: ToSql + FromSql + Display + Clone;

    const KIND: EntityKind;

    fn insert(tx: &Transaction<'_>, value: &Self) -> StoreResult<Self::Key>;

    fn load(conn: &Connection, key: &Self::Key) -> StoreResult<Option<Self>>;
}

macro_rules! record {
    ($($ty:ty => $kind:ident, $key:ty, $insert:path, $load:path;)+) => {
        $(
            impl Record for $ty {
                type Key = $key;

                const KIND: EntityKind = EntityKind::$kind;

                fn insert(tx: &Transaction<'_>, value: &Self) -> StoreResult<$key> {
                    $insert(tx, value)
                }

                fn load(conn: &Connection, key: &$key) -> StoreResult<Option<Self>> {
                    $load(conn, key)
                }
            }
        )+
    };
}

record! {
    EnzymeMLDocument => Document, i64, write::insert_document, read::load_document;
    Creator => Creator, i64, write::insert_creator, read::load_creator;
    Vessel => Vessel, String, write::insert_vessel, read::load_vessel;
    Protein => Protein, String, write::insert_protein, read::load_protein;
    Complex => Complex, String, write::insert_complex, read::load_complex;
    SmallMolecule => SmallMolecule, String, write::insert_small_molecule, read::load_small_molecule;
    Reaction => Reaction, String, write::insert_reaction, read::load_reaction;
    ReactionElement => ReactionElement, i64, write::insert_reaction_element, read::load_reaction_element;
    Equation => Equation, i64, write::insert_equation, read::load_equation;
    Variable => Variable, String, write::insert_variable, read::load_variable;
    Parameter => Parameter, String, write::insert_parameter, read::load_parameter;
    Measurement => Measurement, String, write::insert_measurement, read::load_measurement;
    MeasurementData => MeasurementData, i64, write::insert_measurement_data, read::load_measurement_data;
    UnitDefinition => UnitDefinition, i64, write::insert_unit, read::load_unit;
    BaseUnit => BaseUnit, i64, write::insert_base_unit, read::load_base_unit;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of<T: Record>() -> EntityKind {
        T::KIND
    }

    #[test]
    fn test_every_kind_has_a_record() {
        let kinds = [
            kind_of::<EnzymeMLDocument>(),
            kind_of::<Creator>(),
            kind_of::<Vessel>(),
            kind_of::<Protein>(),
            kind_of::<Complex>(),
            kind_of::<SmallMolecule>(),
            kind_of::<Reaction>(),
            kind_of::<ReactionElement>(),
            kind_of::<Equation>(),
            kind_of::<Variable>(),
            kind_of::<Parameter>(),
            kind_of::<Measurement>(),
            kind_of::<MeasurementData>(),
            kind_of::<UnitDefinition>(),
            kind_of::<BaseUnit>(),
        ];

        for kind in EntityKind::ALL {
            assert!(kinds.contains(&kind), "{kind}");
        }
    }
}
