//! Fringe containers for the scored searches.
//!
//! - [`RoundFringe`]: a plain vector swept by index each round and
//!   re-sorted between rounds.
//! - [`BestEntryFrontier`]: a min-heap with an expanded-state set, popping one
//!   best entry at a time.
//!
//! Both use `BTreeSet`/`Vec` (not `HashSet`) so iteration order never depends
//! on hashing.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use pancake_kernel::stack::state::StackState;

use crate::algorithm::ScoreRule;
use crate::node::{fringe_order, FrontierKey, FringeEntry};

/// Live fringe for round-sweep expansion.
///
/// Indices are positions in the live vector: removing entry `i` shifts every
/// later entry down by one, and pushed entries land at the end.
#[derive(Debug)]
pub struct RoundFringe {
    entries: Vec<FringeEntry>,
    high_water: usize,
}

impl RoundFringe {
    /// A fringe holding only `root`.
    #[must_use]
    pub fn new(root: FringeEntry) -> Self {
        Self {
            entries: vec![root],
            high_water: 1,
        }
    }

    /// Entry at live index `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FringeEntry> {
        self.entries.get(index)
    }

    /// Append an entry at the end.
    pub fn push(&mut self, entry: FringeEntry) {
        self.entries.push(entry);
        self.high_water = self.high_water.max(self.entries.len());
    }

    /// Remove the entry at live index `index`, shifting later entries down.
    pub fn remove(&mut self, index: usize) -> Option<FringeEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Between-round sort: score ascending, larger last state first.
    ///
    /// Stable, so entries equal on both keys keep their relative order. This
    /// is the same result as sorting by last state descending and then
    /// stable-sorting by score.
    pub fn sort_round(&mut self, rule: ScoreRule) {
        self.entries.sort_by(|a, b| fringe_order(rule, a, b));
    }

    /// Current entry count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the fringe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest entry count observed.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Entries in current order.
    #[must_use]
    pub fn entries(&self) -> &[FringeEntry] {
        &self.entries
    }
}

#[derive(Debug)]
struct HeapItem {
    key: Reverse<FrontierKey>,
    entry: FringeEntry,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Best-first frontier for best-entry expansion.
///
/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse` to pop the
/// lowest [`FrontierKey`] first.
#[derive(Debug)]
pub struct BestEntryFrontier {
    rule: ScoreRule,
    heap: BinaryHeap<HeapItem>,
    expanded: BTreeSet<StackState>,
    next_creation_order: u64,
    high_water: usize,
}

impl BestEntryFrontier {
    /// An empty frontier scoring entries with `rule`.
    #[must_use]
    pub fn new(rule: ScoreRule) -> Self {
        Self {
            rule,
            heap: BinaryHeap::new(),
            expanded: BTreeSet::new(),
            next_creation_order: 0,
            high_water: 0,
        }
    }

    /// Push an entry, stamping it with the next creation order.
    pub fn push(&mut self, entry: FringeEntry) {
        let key = FrontierKey {
            score: entry.score(self.rule),
            last: *entry.last(),
            creation_order: self.next_creation_order,
        };
        self.next_creation_order += 1;
        self.heap.push(HeapItem {
            key: Reverse(key),
            entry,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Pop the best entry.
    #[must_use]
    pub fn pop(&mut self) -> Option<FringeEntry> {
        self.heap.pop().map(|item| item.entry)
    }

    /// Record `state` as expanded. Returns `false` if it already was.
    pub fn mark_expanded(&mut self, state: StackState) -> bool {
        self.expanded.insert(state)
    }

    /// Whether `state` has been expanded.
    #[must_use]
    pub fn is_expanded(&self, state: &StackState) -> bool {
        self.expanded.contains(state)
    }

    /// Current entry count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest entry count observed.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
