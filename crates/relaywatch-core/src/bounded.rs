//! Bounded display buffers.
//!
//! A [`BoundedLog`] is an append-only view with a fixed maximum retained
//! entry count and a defined eviction direction: insertion beyond the cap
//! evicts from the opposite end, so the most recent N entries are always
//! retained. The `len <= cap` invariant holds immediately after every
//! insertion and is never exceeded in observable state.

use std::collections::VecDeque;

/// Where new entries are inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsertEnd {
    /// New entries appended at the back (chat transcript); evict the front.
    Back,
    /// New entries prepended at the front (notice log); evict the back.
    Front,
}

/// Ordered sequence of rendered entries with a fixed cap.
#[derive(Debug, Clone)]
pub struct BoundedLog<T> {
    entries: VecDeque<T>,
    cap: usize,
    insert_end: InsertEnd,
}

impl<T> BoundedLog<T> {
    /// A log where new entries land at the back (newest-last), like a chat
    /// transcript.
    pub fn newest_last(cap: usize) -> Self {
        Self { entries: VecDeque::with_capacity(cap), cap, insert_end: InsertEnd::Back }
    }

    /// A log where new entries land at the front (newest-first), like a
    /// notice feed.
    pub fn newest_first(cap: usize) -> Self {
        Self { entries: VecDeque::with_capacity(cap), cap, insert_end: InsertEnd::Front }
    }

    /// Insert an entry, evicting the oldest from the opposite end if the
    /// cap would be exceeded.
    pub fn push(&mut self, entry: T) {
        match self.insert_end {
            InsertEnd::Back => {
                self.entries.push_back(entry);
                if self.entries.len() > self.cap {
                    self.entries.pop_front();
                }
            },
            InsertEnd::Front => {
                self.entries.push_front(entry);
                if self.entries.len() > self.cap {
                    self.entries.pop_back();
                }
            },
        }
        debug_assert!(self.entries.len() <= self.cap);
    }

    /// Remove every entry. The cap and eviction direction are unchanged.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in display order (front to back).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Current number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum retained entry count.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Entry at the given display position.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn newest_last_evicts_from_front() {
        let mut log = BoundedLog::newest_last(3);
        for n in 0..5 {
            log.push(n);
        }

        assert_eq!(log.len(), 3);
        let retained: Vec<_> = log.iter().copied().collect();
        assert_eq!(retained, [2, 3, 4]);
    }

    #[test]
    fn newest_first_evicts_from_back() {
        let mut log = BoundedLog::newest_first(3);
        for n in 0..5 {
            log.push(n);
        }

        assert_eq!(log.len(), 3);
        let retained: Vec<_> = log.iter().copied().collect();
        assert_eq!(retained, [4, 3, 2]);
    }

    #[test]
    fn clear_empties_without_changing_cap() {
        let mut log = BoundedLog::newest_first(2);
        log.push(1);
        log.push(2);

        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.cap(), 2);
    }

    proptest! {
        /// The cap invariant holds immediately after every insertion, and
        /// the newest entry is always retained.
        #[test]
        fn cap_never_exceeded(cap in 1usize..64, values in prop::collection::vec(any::<u32>(), 0..256)) {
            let mut newest_last = BoundedLog::newest_last(cap);
            let mut newest_first = BoundedLog::newest_first(cap);

            for value in values {
                newest_last.push(value);
                newest_first.push(value);

                prop_assert!(newest_last.len() <= cap);
                prop_assert!(newest_first.len() <= cap);
                prop_assert_eq!(newest_last.iter().last(), Some(&value));
                prop_assert_eq!(newest_first.get(0), Some(&value));
            }
        }
    }
}
