use thiserror::Error;

use crate::store::schema::EntityKind;

/// Result alias used by all store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Represents errors that can occur while initializing, writing to or
/// reading from a [`Store`](crate::store::Store).
///
/// Every error is terminal to the operation that raised it. Failed saves
/// are rolled back before the error is returned.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The storage file or its parent directory could not be opened or
    /// created.
    #[error("Failed to open storage at '{path}': {reason}")]
    StorageOpen { path: String, reason: String },

    /// The schema of an entity type could not be created or verified.
    #[error("Failed to initialize storage for {entity}: {reason}")]
    StorageInit { entity: EntityKind, reason: String },

    /// The file was written by a newer schema than this build supports.
    #[error("Storage schema version {found} is newer than supported version {supported}")]
    SchemaVersion { found: u32, supported: u32 },

    /// A write or read statement failed.
    #[error("Failed to persist {entity}: {source}")]
    Persistence {
        entity: EntityKind,
        #[source]
        source: rusqlite::Error,
    },

    /// A natural key is already taken by an entity with different content.
    #[error("{entity} '{id}' already exists with different content")]
    Conflict { entity: EntityKind, id: String },

    /// An entity could not be encoded for storage.
    #[error("Failed to encode {entity}: {source}")]
    Serialization {
        entity: EntityKind,
        #[source]
        source: serde_json::Error,
    },

    /// No row matches the requested key.
    #[error("{entity} '{id}' not found")]
    NotFound { entity: EntityKind, id: String },

    /// The entity type was not supplied when the store was opened.
    #[error("{0} is not registered with this store")]
    Unregistered(EntityKind),

    /// The store has been closed.
    #[error("Storage has been closed")]
    Closed,

    /// The connection could not be released cleanly.
    #[error("Failed to release storage: {0}")]
    Release(#[source] rusqlite::Error),
}

impl StoreError {
    /// Whether the error was raised while opening the store.
    pub fn is_init(&self) -> bool {
        matches!(
            self,
            StoreError::StorageOpen { .. }
                | StoreError::StorageInit { .. }
                | StoreError::SchemaVersion { .. }
        )
    }

    /// Whether the error was raised by a failed write or read.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            StoreError::Persistence { .. }
                | StoreError::Conflict { .. }
                | StoreError::Serialization { .. }
        )
    }

    pub(crate) fn persistence(entity: EntityKind) -> impl FnOnce(rusqlite::Error) -> StoreError {
        move |source| StoreError::Persistence { entity, source }
    }

    pub(crate) fn init(entity: EntityKind) -> impl FnOnce(rusqlite::Error) -> StoreError {
        move |source| StoreError::StorageInit {
            entity,
            reason: source.to_string(),
        }
    }
}
