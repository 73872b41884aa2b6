//! Diagnostic hooks invoked by the table at fixed points of each operation.
//!
//! A table owns one `Diagnostics` implementation, chosen at construction.
//! Hooks take `&self` and only receive plain data (indices and keys), so they
//! cannot observe the table while a probe is in progress.

use log::{debug, trace, warn};

pub trait Diagnostics {
    /// A new entry was placed at `index`.
    fn inserted(&self, _key: &str, _index: usize) {}

    /// An existing entry's value was replaced in place.
    fn updated(&self, _key: &str, _index: usize) {}

    /// The probe for `key` passed over a slot it could not use.
    fn collision(&self, _key: &str, _attempt: usize, _index: usize) {}

    /// A search or delete matched at `index`.
    fn found(&self, _key: &str, _index: usize) {}

    /// A search or delete ran out of chain without a match.
    fn not_found(&self, _key: &str) {}

    /// The entry at `index` was replaced by a tombstone.
    fn deleted(&self, _key: &str, _index: usize) {}

    /// An insert exhausted the probe sequence.
    fn table_full(&self, _key: &str) {}
}

/// Emits every hook through the `log` facade.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn inserted(&self, key: &str, index: usize) {
        debug!("inserted hash table[{index:02}] key {key}");
    }

    fn updated(&self, key: &str, index: usize) {
        debug!("updated hash table[{index:02}] key {key}");
    }

    fn collision(&self, key: &str, attempt: usize, index: usize) {
        trace!("probe {attempt} for key {key} passed over slot {index:02}");
    }

    fn found(&self, key: &str, index: usize) {
        debug!("found key {key} in bucket {index:02}");
    }

    fn not_found(&self, key: &str) {
        debug!("key {key} is not in the hash table");
    }

    fn deleted(&self, key: &str, index: usize) {
        debug!("deleted key {key} from bucket {index:02}");
    }

    fn table_full(&self, key: &str) {
        warn!("no free slot reachable for key {key}");
    }
}

/// Discards every hook.
#[derive(Copy, Clone, Debug, Default)]
pub struct Silent;

impl Diagnostics for Silent {}
