//! Column encodings for values that SQLite has no native type for.
//!
//! Closed enumerations are stored as their serialized string and rejected
//! on read when the string is not a known variant. List-valued fields are
//! stored as JSON arrays in a single column.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{de::DeserializeOwned, Serialize};
use sha2::{Digest, Sha256};

use crate::prelude::{DataTypes, EquationType, UnitType};
use crate::store::error::{StoreError, StoreResult};
use crate::store::schema::EntityKind;

/// Implements `ToSql`/`FromSql` for closed string enumerations using their
/// serde representation.
macro_rules! sql_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToSql for $ty {
                fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                    match serde_json::to_value(self) {
                        Ok(serde_json::Value::String(value)) => Ok(ToSqlOutput::from(value)),
                        Ok(other) => Err(rusqlite::Error::ToSqlConversionFailure(
                            format!("{} encoded as non-string {other}", stringify!($ty)).into(),
                        )),
                        Err(err) => Err(rusqlite::Error::ToSqlConversionFailure(Box::new(err))),
                    }
                }
            }

            impl FromSql for $ty {
                fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                    let text = value.as_str()?;
                    serde_json::from_value(serde_json::Value::String(text.to_string())).map_err(
                        |_| {
                            FromSqlError::Other(
                                format!("unknown {} '{text}'", stringify!($ty)).into(),
                            )
                        },
                    )
                }
            }
        )+
    };
}

sql_enum!(EquationType, DataTypes, UnitType);

/// Column holding a JSON encoded value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Json<T>(pub T);

impl<T: Serialize> ToSql for Json<T> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let encoded = serde_json::to_string(&self.0)
            .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))?;
        Ok(ToSqlOutput::from(encoded))
    }
}

impl<T: DeserializeOwned> FromSql for Json<T> {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        serde_json::from_str(text)
            .map(Json)
            .map_err(|err| FromSqlError::Other(Box::new(err)))
    }
}

/// Content digest of an entity: SHA-256 over its JSON encoding, hex encoded.
pub(crate) fn digest<T: Serialize>(entity: EntityKind, value: &T) -> StoreResult<String> {
    let encoded = serde_json::to_vec(value)
        .map_err(|source| StoreError::Serialization { entity, source })?;

    let mut hasher = Sha256::new();
    hasher.update(&encoded);
    Ok(format!("{:x}", hasher.finalize()))
}
