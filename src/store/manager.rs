//! The persistence manager.
//!
//! A [`Store`] owns one SQLite connection for its whole lifetime. Opening a
//! store creates the tables of every registered entity kind; saving and
//! loading go through the [`Record`] implementation of the model type.
//!
//! ```no_run
//! use enzymeml_db::prelude::*;
//!
//! let doc = load_enzmldoc("doc.json").expect("Failed to load document");
//! let mut store = Store::open_all("enzymeml.db").expect("Failed to open store");
//!
//! let id = store.save_document(&doc).expect("Failed to save document");
//! let loaded = store.get_document(id).expect("Failed to load document");
//! assert_eq!(loaded.name, doc.name);
//!
//! store.close().expect("Failed to close store");
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};
use rusqlite::Connection;

use crate::prelude::EnzymeMLDocument;
use crate::store::delete;
use crate::store::error::{StoreError, StoreResult};
use crate::store::profile::LoadProfile;
use crate::store::record::Record;
use crate::store::schema::{EntityKind, Relation, SCHEMA_VERSION};

/// Handle on an EnzymeML database.
///
/// Every operation fails with [`StoreError::Closed`] once [`Store::close`]
/// has been called. Dropping the store releases the connection as well.
#[derive(Debug)]
pub struct Store {
    conn: Option<Connection>,
    location: String,
    registered: BTreeSet<EntityKind>,
}

impl Store {
    /// Opens or creates the database at `path` and prepares the tables of
    /// the given entity kinds.
    ///
    /// Every kind reachable through the relations of a registered kind has
    /// to be registered too. The parent directory is created if missing.
    pub fn open(path: impl AsRef<Path>, kinds: &[EntityKind]) -> StoreResult<Self> {
        let path = path.as_ref();
        let location = path.display().to_string();
        let open_error = |reason: String| StoreError::StorageOpen {
            path: location.clone(),
            reason,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| open_error(err.to_string()))?;
        }

        let conn = Connection::open(path).map_err(|err| open_error(err.to_string()))?;
        Self::initialize(conn, location, kinds)
    }

    /// Opens the database at `path` with every entity kind registered.
    pub fn open_all(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::open(path, &EntityKind::ALL)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory(kinds: &[EntityKind]) -> StoreResult<Self> {
        let location = ":memory:".to_string();
        let conn = Connection::open_in_memory().map_err(|err| StoreError::StorageOpen {
            path: location.clone(),
            reason: err.to_string(),
        })?;
        Self::initialize(conn, location, kinds)
    }

    /// Prepares an open connection. On failure the connection is dropped
    /// with the error.
    fn initialize(mut conn: Connection, location: String, kinds: &[EntityKind]) -> StoreResult<Self> {
        let started = Instant::now();
        let registered: BTreeSet<EntityKind> = kinds.iter().copied().collect();

        for kind in &registered {
            if let Some(missing) = kind
                .dependencies()
                .into_iter()
                .find(|dependency| !registered.contains(dependency))
            {
                return Err(StoreError::StorageInit {
                    entity: *kind,
                    reason: format!("depends on {missing}, which is not registered"),
                });
            }

            LoadProfile::of(*kind)
                .verify()
                .map_err(|reason| StoreError::StorageInit {
                    entity: *kind,
                    reason,
                })?;
        }

        let open_error = |err: rusqlite::Error| StoreError::StorageOpen {
            path: location.clone(),
            reason: err.to_string(),
        };

        conn.pragma_update(None, "foreign_keys", true)
            .map_err(open_error)?;

        let found: u32 = conn
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .map_err(open_error)?;
        if found > SCHEMA_VERSION {
            return Err(StoreError::SchemaVersion {
                found,
                supported: SCHEMA_VERSION,
            });
        }

        let tx = conn.transaction().map_err(open_error)?;
        for kind in EntityKind::ALL.into_iter().filter(|k| registered.contains(k)) {
            tx.execute_batch(kind.ddl())
                .map_err(StoreError::init(kind))?;
            debug!("event=create_table entity={kind} table={}", kind.table());
        }
        for relation in Relation::ALL
            .into_iter()
            .filter(|relation| registered.contains(&relation.parent()))
        {
            if let Some(ddl) = relation.ddl() {
                tx.execute_batch(&ddl)
                    .map_err(StoreError::init(relation.parent()))?;
                debug!("event=create_table relation={relation}");
            }
        }
        tx.pragma_update(None, "user_version", SCHEMA_VERSION)
            .map_err(open_error)?;
        tx.commit().map_err(open_error)?;

        for kind in &registered {
            let exists: bool = conn
                .query_row(
                    "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [kind.table()],
                    |row| row.get(0),
                )
                .map_err(StoreError::init(*kind))?;
            if !exists {
                return Err(StoreError::StorageInit {
                    entity: *kind,
                    reason: format!("table '{}' is missing", kind.table()),
                });
            }
        }

        info!(
            "event=store_open status=ok path={} kinds={} schema_version={} duration_ms={}",
            location,
            registered.len(),
            SCHEMA_VERSION,
            started.elapsed().as_millis()
        );

        Ok(Self {
            conn: Some(conn),
            location,
            registered,
        })
    }

    /// Entity kinds whose tables this store manages.
    pub fn registered(&self) -> &BTreeSet<EntityKind> {
        &self.registered
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn is_closed(&self) -> bool {
        self.conn.is_none()
    }

    fn connection(&self, kind: EntityKind) -> StoreResult<&Connection> {
        let conn = self.conn.as_ref().ok_or(StoreError::Closed)?;
        if !self.registered.contains(&kind) {
            return Err(StoreError::Unregistered(kind));
        }
        Ok(conn)
    }

    fn connection_mut(&mut self, kind: EntityKind) -> StoreResult<&mut Connection> {
        let conn = self.conn.as_mut().ok_or(StoreError::Closed)?;
        if !self.registered.contains(&kind) {
            return Err(StoreError::Unregistered(kind));
        }
        Ok(conn)
    }

    /// Saves `value` and everything reachable from it in one transaction.
    ///
    /// Returns the key of the stored row. On any error nothing is written.
    pub fn save<T: Record>(&mut self, value: &T) -> StoreResult<T::Key> {
        let started = Instant::now();
        let conn = self.connection_mut(T::KIND)?;
        let tx = conn
            .transaction()
            .map_err(StoreError::persistence(T::KIND))?;

        let key = match T::insert(&tx, value) {
            Ok(key) => key,
            Err(err) => {
                if let Err(rollback) = tx.rollback() {
                    warn!("event=rollback entity={} error=\"{rollback}\"", T::KIND);
                }
                warn!("event=save entity={} status=rejected error=\"{err}\"", T::KIND);
                return Err(err);
            }
        };

        tx.commit().map_err(StoreError::persistence(T::KIND))?;

        info!(
            "event=save entity={} id={} status=ok duration_ms={}",
            T::KIND,
            key,
            started.elapsed().as_millis()
        );
        Ok(key)
    }

    /// Loads the entity stored under `key` with every relation hydrated.
    pub fn get<T: Record>(&self, key: impl Into<T::Key>) -> StoreResult<T> {
        let conn = self.connection(T::KIND)?;
        let key = key.into();

        debug!(
            "event=load entity={} id={} paths={}",
            T::KIND,
            key,
            LoadProfile::of(T::KIND).paths().len()
        );

        T::load(conn, &key)?.ok_or_else(|| StoreError::NotFound {
            entity: T::KIND,
            id: key.to_string(),
        })
    }

    /// Loads every stored entity of type `T`, ordered by key.
    pub fn get_all<T: Record>(&self) -> StoreResult<Vec<T>> {
        self.scan(None)
    }

    /// Loads at most `limit` entities of type `T`, ordered by key.
    pub fn get_limited<T: Record>(&self, limit: usize) -> StoreResult<Vec<T>> {
        self.scan(Some(limit))
    }

    fn scan<T: Record>(&self, limit: Option<usize>) -> StoreResult<Vec<T>> {
        let conn = self.connection(T::KIND)?;
        let limit = limit.map_or(-1, |n| i64::try_from(n).unwrap_or(i64::MAX));

        let mut stmt = conn
            .prepare(&format!(
                "SELECT id FROM {} ORDER BY id LIMIT ?1",
                T::KIND.table()
            ))
            .map_err(StoreError::persistence(T::KIND))?;
        let keys = stmt
            .query_map([limit], |row| row.get::<_, T::Key>(0))
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(StoreError::persistence(T::KIND))?;
        drop(stmt);

        debug!(
            "event=scan entity={} limit={} rows={}",
            T::KIND,
            limit,
            keys.len()
        );

        keys.into_iter()
            .map(|key| {
                T::load(conn, &key)?.ok_or_else(|| StoreError::NotFound {
                    entity: T::KIND,
                    id: key.to_string(),
                })
            })
            .collect()
    }

    /// Number of stored rows of type `T`.
    pub fn count<T: Record>(&self) -> StoreResult<usize> {
        let conn = self.connection(T::KIND)?;
        let count: i64 = conn
            .query_row(
                &format!("SELECT COUNT(*) FROM {}", T::KIND.table()),
                [],
                |row| row.get(0),
            )
            .map_err(StoreError::persistence(T::KIND))?;

        Ok(usize::try_from(count).unwrap_or_default())
    }

    pub fn save_document(&mut self, document: &EnzymeMLDocument) -> StoreResult<i64> {
        self.save(document)
    }

    pub fn get_document(&self, id: i64) -> StoreResult<EnzymeMLDocument> {
        self.get(id)
    }

    pub fn get_all_documents(&self) -> StoreResult<Vec<EnzymeMLDocument>> {
        self.get_all()
    }

    pub fn get_documents(&self, limit: usize) -> StoreResult<Vec<EnzymeMLDocument>> {
        self.get_limited(limit)
    }

    /// Removes a document.
    ///
    /// Its list memberships go with it, as does every entity no other
    /// document or reaction refers to, together with the units, reaction
    /// elements and species data those entities own. Entities shared with
    /// another document stay in place.
    pub fn delete_document(&mut self, id: i64) -> StoreResult<()> {
        let kind = EntityKind::Document;
        let start = Instant::now();
        let conn = self.connection_mut(kind)?;
        let tx = conn.transaction().map_err(StoreError::persistence(kind))?;

        if !delete::delete_document(&tx, id)? {
            return Err(StoreError::NotFound {
                entity: kind,
                id: id.to_string(),
            });
        }
        tx.commit().map_err(StoreError::persistence(kind))?;

        info!(
            "event=delete entity={kind} id={id} status=ok duration_ms={}",
            start.elapsed().as_millis()
        );
        Ok(())
    }

    /// Releases the connection.
    pub fn close(&mut self) -> StoreResult<()> {
        let conn = self.conn.take().ok_or(StoreError::Closed)?;
        conn.close().map_err(|(_, err)| StoreError::Release(err))?;

        info!("event=store_close path={}", self.location);
        Ok(())
    }
}
