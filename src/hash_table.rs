//! HashTable: fixed-capacity open addressing with double hashing and tombstones.
//!
//! Invariants
//! - The slot array length is the capacity and never changes.
//! - `count` equals the number of `Occupied` slots.
//! - A key occupies at most one slot.
//! - A slot never returns to `Empty` once written.

use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::error::{InsertError, Result, TableError};
use crate::hashing::{KeyHasher, Polynomial, ProbeSequence};
use crate::slot::Slot;
use core::fmt;

/// Slot count the team lookup was sized for: 45 teams, two slots each.
pub const DEFAULT_CAPACITY: usize = 90;

/// Capacity that keeps the load factor at or below one half.
pub fn recommended_capacity(expected_entries: usize) -> usize {
    expected_entries.saturating_mul(2).max(1)
}

pub struct HashTable<V, H = Polynomial, D = LogDiagnostics> {
    slots: Vec<Slot<V>>,
    count: usize,
    hasher: H,
    diagnostics: D,
}

impl<V> HashTable<V> {
    /// Creates a table of `capacity` empty slots with the default hasher and
    /// log-backed diagnostics.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_hasher_and_diagnostics(capacity, Polynomial::default(), LogDiagnostics)
    }
}

impl<V, H: KeyHasher> HashTable<V, H> {
    pub fn with_hasher(capacity: usize, hasher: H) -> Result<Self> {
        Self::with_hasher_and_diagnostics(capacity, hasher, LogDiagnostics)
    }
}

impl<V, D: Diagnostics> HashTable<V, Polynomial, D> {
    pub fn with_diagnostics(capacity: usize, diagnostics: D) -> Result<Self> {
        Self::with_hasher_and_diagnostics(capacity, Polynomial::default(), diagnostics)
    }
}

/// Iterator over live entries in slot order.
pub struct Iter<'a, V> {
    it: core::slice::Iter<'a, Slot<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.by_ref().find_map(|slot| match slot {
            Slot::Occupied { key, value } => Some((&**key, value)),
            _ => None,
        })
    }
}

impl<V, H, D> HashTable<V, H, D>
where
    H: KeyHasher,
    D: Diagnostics,
{
    /// Creates a table of `capacity` empty slots.
    ///
    /// Fails with `ZeroCapacity` for an empty table and with `Allocation`
    /// when the slot array cannot be reserved.
    pub fn with_hasher_and_diagnostics(capacity: usize, hasher: H, diagnostics: D) -> Result<Self> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|source| TableError::Allocation { capacity, source })?;
        slots.resize_with(capacity, Slot::default);
        Ok(Self {
            slots,
            count: 0,
            hasher,
            diagnostics,
        })
    }

    fn probes(&self, key: &str) -> ProbeSequence {
        ProbeSequence::for_key(&self.hasher, key, self.slots.len())
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn tombstones(&self) -> usize {
        self.slots.iter().filter(|s| s.is_tombstone()).count()
    }

    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.slots.len() as f64
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Inserts `value` under a private copy of `key`.
    ///
    /// If `key` is already present its value is replaced and the old value
    /// returned; the live count is unchanged. Otherwise the entry goes into
    /// the first tombstone on the key's probe chain, or the first empty slot
    /// if the chain has no tombstone before it. The chain is walked up to the
    /// first empty slot even after a tombstone is seen, so a key stored
    /// further along is updated rather than duplicated.
    ///
    /// Returns `InsertError::TableFull` when no reachable slot is free. The
    /// table is left unchanged and `value` is handed back inside the error.
    pub fn insert(&mut self, key: &str, value: V) -> core::result::Result<Option<V>, InsertError<V>> {
        let mut free = None;
        for (attempt, index) in self.probes(key) {
            match &mut self.slots[index] {
                Slot::Empty => {
                    if free.is_none() {
                        free = Some(index);
                    }
                    break;
                }
                Slot::Occupied { key: k, value: v } if **k == *key => {
                    let old = core::mem::replace(v, value);
                    self.diagnostics.updated(key, index);
                    return Ok(Some(old));
                }
                Slot::Tombstone => {
                    if free.is_none() {
                        free = Some(index);
                    }
                    self.diagnostics.collision(key, attempt, index);
                }
                Slot::Occupied { .. } => self.diagnostics.collision(key, attempt, index),
            }
        }

        let Some(index) = free else {
            self.diagnostics.table_full(key);
            return Err(InsertError::TableFull {
                key: key.to_owned(),
                value,
            });
        };
        self.slots[index] = Slot::Occupied {
            key: key.into(),
            value,
        };
        self.count += 1;
        self.diagnostics.inserted(key, index);
        Ok(None)
    }

    fn find_index(&self, key: &str) -> Option<usize> {
        for (attempt, index) in self.probes(key) {
            let slot = &self.slots[index];
            if slot.is_empty() {
                break;
            }
            if slot.holds(key) {
                self.diagnostics.found(key, index);
                return Some(index);
            }
            self.diagnostics.collision(key, attempt, index);
        }
        self.diagnostics.not_found(key);
        None
    }

    /// Value stored under `key`.
    ///
    /// Tombstones do not end the walk; the first empty slot does.
    pub fn search(&self, key: &str) -> Option<&V> {
        let index = self.find_index(key)?;
        self.slots[index].value()
    }

    pub fn search_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.find_index(key)?;
        match &mut self.slots[index] {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find_index(key).is_some()
    }

    /// Removes `key`, leaving a tombstone in its slot, and returns its value.
    ///
    /// The live count drops only when an entry was actually removed.
    pub fn delete(&mut self, key: &str) -> Option<V> {
        let index = self.find_index(key)?;
        let Slot::Occupied { value, .. } = core::mem::replace(&mut self.slots[index], Slot::Tombstone)
        else {
            unreachable!("find_index only yields occupied slots");
        };
        self.count -= 1;
        self.diagnostics.deleted(key, index);
        Some(value)
    }

    /// Every slot, in index order.
    pub fn slots(&self) -> &[Slot<V>] {
        &self.slots
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            it: self.slots.iter(),
        }
    }

    /// Snapshot of every slot's state; render it with `Display`.
    pub fn dump(&self) -> Dump<'_, V> {
        Dump {
            slots: &self.slots,
            count: self.count,
        }
    }
}

/// Deterministic listing of a table's slots.
pub struct Dump<'a, V> {
    slots: &'a [Slot<V>],
    count: usize,
}

impl<V: fmt::Debug> fmt::Display for Dump<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Hash table contains {} entries in {} slots:",
            self.count,
            self.slots.len()
        )?;
        for (i, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "\tHash Table[{i:02}] is empty")?,
                Slot::Tombstone => writeln!(f, "\tHash Table[{i:02}] has been deleted")?,
                Slot::Occupied { key, value } => {
                    writeln!(f, "\tHash Table[{i:02}] has k:v = {key}:{value:?}")?
                }
            }
        }
        Ok(())
    }
}
