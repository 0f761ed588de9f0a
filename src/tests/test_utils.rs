//! Shared test utilities: deterministic clocks and id assertions

use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::TimeSource;

/// Clock that only moves when the test moves it
///
/// Clones share the same time, so a test can keep a handle while the
/// generator owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    millis: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(millis: u64) -> Self {
        Self {
            millis: Rc::new(Cell::new(millis)),
        }
    }

    pub fn set(&self, millis: u64) {
        self.millis.set(millis);
    }

    pub fn advance(&self, millis: u64) {
        self.millis.set(self.millis.get() + millis);
    }
}

impl TimeSource for ManualClock {
    fn current_millis(&self) -> u64 {
        self.millis.get()
    }
}

/// Clock replaying a fixed list of readings, repeating the last one
#[derive(Debug)]
pub struct StepClock {
    values: Vec<u64>,
    index: Cell<usize>,
    reads: Cell<usize>,
}

impl StepClock {
    pub fn new(values: Vec<u64>) -> Self {
        assert!(!values.is_empty(), "StepClock needs at least one reading");
        Self {
            values,
            index: Cell::new(0),
            reads: Cell::new(0),
        }
    }

    /// Total number of readings taken so far
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl TimeSource for StepClock {
    fn current_millis(&self) -> u64 {
        let i = self.index.get();
        self.reads.set(self.reads.get() + 1);
        if i + 1 < self.values.len() {
            self.index.set(i + 1);
        }
        self.values[i]
    }
}

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[u64], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert that IDs are strictly increasing in the order given
pub fn assert_strictly_increasing(ids: &[u64]) {
    for (i, pair) in ids.windows(2).enumerate() {
        assert!(
            pair[1] > pair[0],
            "ID at position {} ({}) is not greater than previous ID ({})",
            i + 1,
            pair[1],
            pair[0]
        );
    }
}

/// Assert collection has expected unique count and is increasing once sorted
pub fn assert_unique_and_monotonic(mut ids: Vec<u64>, expected_count: usize) {
    assert_unique_ids(&ids, expected_count);
    ids.sort_unstable();
    assert_strictly_increasing(&ids);
}
