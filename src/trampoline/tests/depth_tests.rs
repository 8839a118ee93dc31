//! Tests that recursion depth is bounded by the heap, not the native stack

use super::helpers::{chain_entrypoint, Fault};
use crate::demos::get_max::{framed_get_max, max_entrypoint};
use crate::trampoline::TrampolineConfig;
use std::cell::Cell;

const DEEP: usize = 1_000_000;

#[test]
fn test_million_deep_maximum() {
    let values: Vec<i64> = (0..DEEP as i64).rev().collect();
    assert_eq!(framed_get_max(&values, 0).unwrap(), DEEP as i64 - 1);
}

#[test]
fn test_million_deep_chain_uses_one_driver() {
    let fault = Cell::new(Fault::None);
    let entry = chain_entrypoint(&fault, TrampolineConfig::default());

    assert_eq!(entry.run(DEEP).unwrap(), DEEP);

    let stats = entry.stats();
    assert_eq!(stats.drivers_started, 1);
    assert_eq!(stats.max_depth, DEEP + 1);
    assert_eq!(stats.frames_retired, DEEP as u64 + 1);
    assert_eq!(entry.depth(), 0);
}

#[test]
fn test_deep_run_from_small_thread_stack() {
    let values: Vec<i64> = (0..200_000).map(|i| (i * 7919) % 100_003).collect();
    let expected = *values.iter().max().unwrap();

    // 256 KiB of native stack is far too little for 200k native frames
    let handle = std::thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(move || {
            let entry = max_entrypoint(&values, TrampolineConfig::default());
            entry.run(0)
        })
        .unwrap();

    assert_eq!(handle.join().unwrap().unwrap(), expected);
}
