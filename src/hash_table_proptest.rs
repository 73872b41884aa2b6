#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can inspect the
// slot array directly.

use crate::diagnostics::Silent;
use crate::error::InsertError;
use crate::hash_table::HashTable;
use crate::hashing::{KeyHasher, Polynomial};
use hashbrown::{HashMap, HashSet};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

// Pool-indexed operations so shrinking moves toward earlier keys and shorter
// op lists.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, i32),
    Delete(usize),
    Search(usize),
    Mutate(usize, i32),
    Miss(String),
    Dump,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<Op>)> {
    (1usize..=12, proptest::collection::vec("[A-Z]{0,4}", 1..=10)).prop_flat_map(
        |(capacity, pool)| {
            let idx = 0..pool.len();
            let op = prop_oneof![
                3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
                2 => idx.clone().prop_map(Op::Delete),
                2 => idx.clone().prop_map(Op::Search),
                1 => (idx, any::<i32>()).prop_map(|(i, d)| Op::Mutate(i, d)),
                1 => "[a-z]{1,3}".prop_map(Op::Miss),
                1 => Just(Op::Dump),
            ];
            proptest::collection::vec(op, 1..80)
                .prop_map(move |ops| (capacity, pool.clone(), ops))
        },
    )
}

/// Every key hashes to (0, 0): the probe walks slots 0, 1, 2, ... in order.
#[derive(Clone, Copy, Default)]
struct ConstHasher;

impl KeyHasher for ConstHasher {
    fn hash_pair(&self, _key: &str, _buckets: usize) -> (usize, usize) {
        (0, 0)
    }
}

// State-machine equivalence against a hashbrown::HashMap model.
// Invariants checked after every op:
// - `len` equals the model's length and the number of occupied slots.
// - No key occupies two slots.
// - `TableFull` only for keys absent from the model; the table is unchanged
//   and the value comes back.
// - Tombstones never turn back into empty slots.
// - `dump` renders one line per slot plus a header.
fn run_scenario<H: KeyHasher>(
    capacity: usize,
    hasher: H,
    full_coverage: bool,
    pool: &[String],
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut sut: HashTable<i32, H, Silent> =
        HashTable::with_hasher_and_diagnostics(capacity, hasher, Silent)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
    let mut model: HashMap<String, i32> = HashMap::new();
    let mut ever_written: HashSet<usize> = HashSet::new();

    for op in ops {
        match op {
            Op::Insert(i, v) => {
                let k = &pool[i];
                match sut.insert(k, v) {
                    Ok(old) => {
                        prop_assert_eq!(old, model.insert(k.clone(), v));
                    }
                    Err(InsertError::TableFull { key, value }) => {
                        prop_assert_eq!(&key, k);
                        prop_assert_eq!(value, v);
                        prop_assert!(!model.contains_key(k), "update must never be TableFull");
                        if full_coverage {
                            prop_assert_eq!(sut.len(), capacity);
                        }
                    }
                }
            }
            Op::Delete(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.delete(k), model.remove(k));
                prop_assert!(sut.search(k).is_none());
            }
            Op::Search(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.search(k), model.get(k));
                prop_assert_eq!(sut.contains_key(k), model.contains_key(k));
            }
            Op::Mutate(i, d) => {
                let k = &pool[i];
                match (sut.search_mut(k), model.get_mut(k)) {
                    (Some(s), Some(m)) => {
                        *s = s.wrapping_add(d);
                        *m = m.wrapping_add(d);
                    }
                    (None, None) => {}
                    (s, m) => prop_assert!(false, "presence mismatch: {:?} vs {:?}", s, m),
                }
            }
            Op::Miss(k) => {
                // lower-case keys are never in the upper-case pool
                prop_assert!(sut.search(&k).is_none());
                prop_assert!(sut.delete(&k).is_none());
            }
            Op::Dump => {
                let text = sut.dump().to_string();
                prop_assert_eq!(text.lines().count(), capacity + 1);
            }
        }

        prop_assert_eq!(sut.len(), model.len());
        let occupied = sut.slots().iter().filter(|s| s.is_occupied()).count();
        prop_assert_eq!(occupied, sut.len());

        let mut keys = HashSet::new();
        for (index, slot) in sut.slots().iter().enumerate() {
            if let Some(k) = slot.key() {
                prop_assert!(keys.insert(k.to_owned()), "duplicate key {}", k);
                prop_assert_eq!(slot.value(), model.get(k));
            }
            if slot.is_empty() {
                prop_assert!(!ever_written.contains(&index), "slot {} reverted to empty", index);
            } else {
                ever_written.insert(index);
            }
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((capacity, pool, ops) in arb_scenario()) {
        run_scenario(capacity, Polynomial::default(), false, &pool, ops)?;
    }
}

// Same invariants under worst-case collisions: every key shares one chain,
// so deletes and re-inserts constantly cross tombstones.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((capacity, pool, ops) in arb_scenario()) {
        run_scenario(capacity, ConstHasher, true, &pool, ops)?;
    }
}
