//! First lookup of a curve from many threads at once.
//!
//! Kept in its own test binary so that no other test builds the record first.

use ecc_point::lookup;
use std::{
    ptr,
    sync::{Arc, Barrier},
    thread,
};

#[test]
fn concurrent_first_lookup() {
    const THREADS: usize = 8;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let name = if i % 2 == 0 { "secp224r1" } else { "nistp224" };
                barrier.wait();
                lookup(name).unwrap()
            })
        })
        .collect();

    let records: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(records.windows(2).all(|w| ptr::eq(w[0], w[1])));
    assert_eq!(records[0].name(), "NIST P-224");
}
