#![cfg(test)]

// Property tests for BoundedContext kept inside the crate, next to the
// storage they exercise.

use crate::bounded_context::BoundedContext;
use crate::error::CapacityExceeded;
use proptest::prelude::*;
use std::collections::HashMap;

const CAP: usize = 8;

type Ctx = BoundedContext<String, i32, CAP>;

// Pool-indexed operations so shrinking converges on few, early keys.
#[derive(Clone, Debug)]
enum OpI {
    Set(usize, i32),
    Derive(usize, i32),
    Get(usize),
    Contains(String),
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,4}", 1..=6).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Set(i, v)),
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Derive(i, v)),
            idx.clone().prop_map(OpI::Get),
            "[a-z]{0,4}".prop_map(OpI::Contains),
        ];
        proptest::collection::vec(op, 1..40).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn snapshot(ctx: &Ctx, pool: &[String]) -> Vec<Option<i32>> {
    pool.iter().map(|k| ctx.get(k.as_str()).copied()).collect()
}

// Property: State-machine equivalence against a last-write-wins HashMap
// plus a write counter.
// Invariants exercised across random operation sequences:
// - The first `CAP` writes succeed; every later one fails with
//   CapacityExceeded and changes nothing.
// - `get` returns the most recent value written for a key.
// - Derive never changes what the parent resolves.
// - `len`/`remaining`/`is_full` track the write counter.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut = Ctx::new();
        let mut model: HashMap<String, i32> = HashMap::new();
        let mut writes = 0usize;

        for op in ops {
            match op {
                OpI::Set(i, v) => {
                    let k = pool[i].clone();
                    let before = sut.clone();
                    match sut.set(k.clone(), v) {
                        Ok(()) => {
                            prop_assert!(writes < CAP, "set must fail once full");
                            writes += 1;
                            model.insert(k, v);
                        }
                        Err(e) => {
                            prop_assert_eq!(e, CapacityExceeded { capacity: CAP });
                            prop_assert_eq!(writes, CAP);
                            prop_assert_eq!(&sut, &before, "failed set must not modify");
                        }
                    }
                }
                OpI::Derive(i, v) => {
                    let k = pool[i].clone();
                    let parent_view = snapshot(&sut, &pool);
                    match sut.with_value(k.clone(), v) {
                        Ok(child) => {
                            prop_assert!(writes < CAP, "derive must fail once full");
                            prop_assert_eq!(snapshot(&sut, &pool), parent_view);
                            prop_assert_eq!(child.len(), sut.len() + 1);
                            writes += 1;
                            model.insert(k, v);
                            sut = child;
                        }
                        Err(e) => {
                            prop_assert_eq!(e, CapacityExceeded { capacity: CAP });
                            prop_assert_eq!(writes, CAP);
                            prop_assert_eq!(snapshot(&sut, &pool), parent_view);
                        }
                    }
                }
                OpI::Get(i) => {
                    let k = &pool[i];
                    let first = sut.get(k.as_str()).copied();
                    prop_assert_eq!(first, model.get(k).copied());
                    // Reads are idempotent.
                    prop_assert_eq!(sut.get(k.as_str()).copied(), first);
                }
                OpI::Contains(s) => {
                    prop_assert_eq!(sut.contains_key(s.as_str()), model.contains_key(&s));
                }
            }

            prop_assert_eq!(sut.len(), writes);
            prop_assert_eq!(sut.remaining(), CAP - writes);
            prop_assert_eq!(sut.is_full(), writes == CAP);
        }

        // Final sweep: every pool key agrees with the model.
        for k in &pool {
            prop_assert_eq!(sut.get(k.as_str()).copied(), model.get(k).copied());
        }
    }
}

// Property: set and derive are interchangeable for the resulting visible
// state; they differ only in whether a new instance is produced.
proptest! {
    #[test]
    fn prop_set_and_derive_agree(writes in proptest::collection::vec(("[a-c]", any::<i32>()), 0..=CAP)) {
        let mut by_set = Ctx::new();
        let mut by_derive = Ctx::new();
        for (k, v) in writes {
            by_set.set(k.clone(), v).unwrap();
            by_derive = Ctx::derive(Some(&by_derive), k, v).unwrap();
        }
        prop_assert_eq!(by_set, by_derive);
    }
}
