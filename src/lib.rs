//! dh-table: a fixed-capacity, open-addressed hash table from string keys
//! to owned values, with double hashing and tombstone deletion.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small table whose probing and deletion rules can be checked
//!   slot by slot.
//! - Layers:
//!   - hashing: polynomial string hash, the `(h1 + i * (h2 + 1)) mod m`
//!     combination, and a `ProbeSequence` iterator over it.
//!   - Slot: `Empty | Tombstone | Occupied { key, value }`.
//!   - HashTable<V, H, D>: a `Vec` of slots sized once at construction,
//!     a live counter, a `KeyHasher` and a `Diagnostics` sink.
//!   - team / roster / console: the team-record collaborators that fill a
//!     table from CSV and drive lookups.
//!
//! Constraints
//! - Fixed capacity: no growth, no rehash. Size the table at roughly twice
//!   the expected entry count (`recommended_capacity`).
//! - Single-threaded: every mutation takes `&mut self`; sharing across
//!   threads needs one lock around the whole table.
//! - Keys are stored as private `Box<str>` copies; values are moved in and
//!   dropped exactly once (handed back on update and delete, dropped with
//!   the table otherwise).
//!
//! Probing
//! - Insert, search and delete walk the same sequence. A tombstone never
//!   ends a walk; an empty slot always does.
//! - Insert walks to the first empty slot before placing a new key, so a key
//!   further down its chain is updated rather than duplicated. The new entry
//!   takes the first tombstone seen, if any.
//! - Every walk is bounded by the sequence period `m / gcd(step, m)`, which
//!   is at most the capacity. An insert that finds no free slot returns
//!   `InsertError::TableFull` with the value handed back.
//! - A prime capacity does not make every walk cover the table. A key whose
//!   secondary hash is `m - 1` has step `m`, which is 0 mod m for any `m`;
//!   it reaches only its home slot and is `TableFull` once that is taken.
//!
//! Accounting
//! - `len()` always equals the number of occupied slots; deleting an absent
//!   key leaves it unchanged.
//!
//! Diagnostics
//! - The table calls its `Diagnostics` at insert, update, collision, hit,
//!   miss, delete and table-full. `LogDiagnostics` (the default) forwards to
//!   `log`; `Silent` drops everything.

pub mod console;
pub mod diagnostics;
pub mod error;
pub mod hash_table;
mod hash_table_proptest;
pub mod hashing;
pub mod logger;
pub mod roster;
pub mod slot;
pub mod team;

// Public surface
pub use diagnostics::{Diagnostics, LogDiagnostics, Silent};
pub use error::{InsertError, TableError};
pub use hash_table::{recommended_capacity, Dump, HashTable, DEFAULT_CAPACITY};
pub use hashing::{combined_hash, generic_hash, KeyHasher, Polynomial, ProbeSequence};
pub use slot::Slot;
pub use team::TeamInfo;
