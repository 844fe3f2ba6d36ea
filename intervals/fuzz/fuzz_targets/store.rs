#![no_main]

use arbitrary::Arbitrary;
use freshness_intervals::{Error, Store};
use libfuzzer_sys::fuzz_target;

/// Ids are folded into a small window so the model stays cheap to check.
const DOMAIN: u64 = 256;

#[derive(Arbitrary, Debug)]
enum Operation {
    Set { start: u64, end: u64 },
    SetTo { start: u64, end: u64, state: bool },
    IsSet { id: u64 },
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    operations: Vec<Operation>,
}

fn update(store: &mut Store, model: &mut [bool], start: u64, end: u64, state: bool) {
    let (start, end) = (start % DOMAIN, end % DOMAIN);
    match store.try_set_range_to(start, end, state) {
        Ok(()) => {
            for slot in &mut model[start as usize..=end as usize] {
                *slot = state;
            }
        }
        Err(Error::InvalidRange { .. }) => assert!(start > end),
        Err(err) => panic!("unexpected error: {err}"),
    }
}

fn fuzz(input: FuzzInput) {
    let mut store = Store::new();
    let mut model = [false; DOMAIN as usize];

    for operation in input.operations {
        match operation {
            Operation::Set { start, end } => update(&mut store, &mut model, start, end, true),
            Operation::SetTo { start, end, state } => {
                update(&mut store, &mut model, start, end, state)
            }
            Operation::IsSet { id } => {
                let id = id % DOMAIN;
                assert_eq!(store.is_set(id), model[id as usize]);
            }
        }

        for pair in store.markers().windows(2) {
            assert!(pair[0].id < pair[1].id);
            assert_ne!(pair[0].state, pair[1].state);
        }
    }

    let expected = model.iter().filter(|&&state| state).count() as u64;
    assert_eq!(store.count_set_extent(), expected);
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
