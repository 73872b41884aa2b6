use std::collections::TryReserveError;
use thiserror::Error;

/// Errors returned by [`HashTable`](crate::HashTable) construction, and by
/// insertion once the rejected value has been taken back.
#[derive(Error, Debug)]
pub enum TableError {
    /// A table needs at least one slot.
    #[error("hash table capacity must be at least 1")]
    ZeroCapacity,

    /// The slot array could not be reserved.
    #[error("could not allocate {capacity} hash table slots")]
    Allocation {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },

    /// Every slot reachable by the key's probe sequence holds another entry.
    #[error("hash table is full: no free slot reachable for key {key:?}")]
    TableFull { key: String },
}

pub type Result<T> = std::result::Result<T, TableError>;

/// A rejected [`HashTable::insert`](crate::HashTable::insert). The table never
/// took ownership, so the value comes back with the error.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InsertError<V> {
    #[error("hash table is full: no free slot reachable for key {key:?}")]
    TableFull { key: String, value: V },
}

impl<V> InsertError<V> {
    pub fn key(&self) -> &str {
        match self {
            InsertError::TableFull { key, .. } => key,
        }
    }

    pub fn into_value(self) -> V {
        match self {
            InsertError::TableFull { value, .. } => value,
        }
    }
}

/// Drops the value and keeps the key.
impl<V> From<InsertError<V>> for TableError {
    fn from(err: InsertError<V>) -> Self {
        match err {
            InsertError::TableFull { key, .. } => TableError::TableFull { key },
        }
    }
}
