//! The benchmark state: two long-lived lists and a probe value.
//!
//! Append and retrieval run directly against the shared lists. Removal
//! runs against a fresh copy built on every call, so the shared lists
//! never shrink and repeated batches start from the same contents. The
//! copy is part of the measured work.

use std::collections::LinkedList;

/// Number of elements each list is seeded with (`0..SEED_LEN`).
pub const SEED_LEN: i32 = 10;

/// Probe used as the appended value and as the retrieval index.
pub const DEFAULT_PROBE: i32 = 5;

/// Array-backed and link-backed lists measured side by side.
///
/// Built once per measured operation and kept for the whole trial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkSuite {
    array: Vec<i32>,
    linked: LinkedList<i32>,
    probe: i32,
}

impl BenchmarkSuite {
    /// Build the standard suite: both lists hold `[0..9]`, probe is 5.
    pub fn new() -> Self {
        let seed: Vec<i32> = (0..SEED_LEN).collect();
        Self::with_contents(&seed, DEFAULT_PROBE)
    }

    /// Build a suite whose lists both start with `values`.
    pub fn with_contents(values: &[i32], probe: i32) -> Self {
        log::debug!(
            "listbench: building suite with {} elements, probe {probe}",
            values.len()
        );
        Self {
            array: values.to_vec(),
            linked: values.iter().copied().collect(),
            probe,
        }
    }

    /// Current contents of the array-backed list.
    pub fn array(&self) -> &[i32] {
        &self.array
    }

    /// Current contents of the linked list.
    pub fn linked(&self) -> &LinkedList<i32> {
        &self.linked
    }

    /// The probe value.
    pub fn probe(&self) -> i32 {
        self.probe
    }

    /// Append the probe to the array-backed list.
    ///
    /// Always `true`: a push always changes the list.
    pub fn append_array(&mut self) -> bool {
        self.array.push(self.probe);
        true
    }

    /// Append the probe to the tail of the linked list. Always `true`.
    pub fn append_linked(&mut self) -> bool {
        self.linked.push_back(self.probe);
        true
    }

    /// Element of the array-backed list at index `probe`.
    ///
    /// `None` if the probe is negative or past the end.
    pub fn get_array(&self) -> Option<i32> {
        let index = usize::try_from(self.probe).ok()?;
        self.array.get(index).copied()
    }

    /// Element of the linked list at index `probe`, reached by walking
    /// from whichever end is closer.
    pub fn get_linked(&self) -> Option<i32> {
        let index = usize::try_from(self.probe).ok()?;
        nth_from_nearest_end(&self.linked, index)
    }

    /// Copy the array-backed list and remove its head, shifting the rest.
    ///
    /// The shared list is left untouched.
    pub fn remove_array_head(&self) -> Option<i32> {
        let mut local = self.array.clone();
        if local.is_empty() {
            return None;
        }
        Some(local.remove(0))
    }

    /// Copy the linked list and unlink its head.
    ///
    /// The shared list is left untouched.
    pub fn remove_linked_head(&self) -> Option<i32> {
        let mut local = self.linked.clone();
        local.pop_front()
    }
}

impl Default for BenchmarkSuite {
    fn default() -> Self {
        Self::new()
    }
}

fn nth_from_nearest_end(list: &LinkedList<i32>, index: usize) -> Option<i32> {
    let len = list.len();
    if index >= len {
        return None;
    }
    if index < len / 2 {
        list.iter().nth(index).copied()
    } else {
        list.iter().rev().nth(len - 1 - index).copied()
    }
}
