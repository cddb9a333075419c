//! Frontier containers used by the search engines.
//!
//! - `FifoFrontier`: first-in first-out, drives breadth-first search.
//! - `StackFrontier`: last-in first-out, drives depth-limited search.
//! - `PriorityFrontier`: min-priority queue keyed by an evaluation score, drives A*.
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Common interface of the unprioritized frontiers.
pub trait Frontier<T> {
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
pub struct FifoFrontier<T> {
    queue: VecDeque<T>,
}

impl<T> FifoFrontier<T> {
    pub fn new() -> Self {
        FifoFrontier {
            queue: VecDeque::new(),
        }
    }
}

impl<T> Default for FifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for FifoFrontier<T> {
    fn push(&mut self, item: T) {
        self.queue.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[derive(Debug)]
pub struct StackFrontier<T> {
    stack: Vec<T>,
}

impl<T> StackFrontier<T> {
    pub fn new() -> Self {
        StackFrontier { stack: Vec::new() }
    }
}

impl<T> Default for StackFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for StackFrontier<T> {
    fn push(&mut self, item: T) {
        self.stack.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

// Heap entry ordered only by (priority, seq); the payload takes no part in
// comparisons, so `T` needs no `Ord`.
struct Prioritized<T> {
    priority: u32,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Prioritized<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Prioritized<T> {}

impl<T> Ord for Prioritized<T> {
    // Reversed so that `BinaryHeap`, a max-heap, yields the smallest priority,
    // and among equal priorities the earliest push.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Prioritized<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue.
///
/// `pop` returns the item with the lowest priority. Ties are broken by
/// insertion order: of several items with equal priority, the one pushed first
/// comes out first. The tie-break is deterministic, which makes repeated
/// searches return the same path.
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<Prioritized<T>>,
    next_seq: u64,
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, item: T, priority: u32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Prioritized {
            priority,
            seq,
            item,
        });
    }

    /// Removes the lowest-priority item, returning it with its priority.
    pub fn pop(&mut self) -> Option<(T, u32)> {
        self.heap.pop().map(|entry| (entry.item, entry.priority))
    }

    pub fn peek_priority(&self) -> Option<u32> {
        self.heap.peek().map(|entry| entry.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut frontier = FifoFrontier::new();
        for i in 0..4 {
            frontier.push(i);
        }
        assert_eq!(frontier.len(), 4);
        assert_eq!(frontier.pop(), Some(0));
        frontier.push(9);
        assert_eq!(frontier.pop(), Some(1));
        assert_eq!(frontier.pop(), Some(2));
        assert_eq!(frontier.pop(), Some(3));
        assert_eq!(frontier.pop(), Some(9));
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_stack_order() {
        let mut frontier = StackFrontier::new();
        frontier.push('a');
        frontier.push('b');
        frontier.push('c');
        assert_eq!(frontier.pop(), Some('c'));
        frontier.push('d');
        assert_eq!(frontier.pop(), Some('d'));
        assert_eq!(frontier.pop(), Some('b'));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn test_priority_pops_lowest_first() {
        let mut frontier = PriorityFrontier::new();
        frontier.push("seven", 7);
        frontier.push("two", 2);
        frontier.push("five", 5);
        assert_eq!(frontier.peek_priority(), Some(2));
        assert_eq!(frontier.pop(), Some(("two", 2)));
        assert_eq!(frontier.pop(), Some(("five", 5)));
        assert_eq!(frontier.pop(), Some(("seven", 7)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_priority_ties_break_by_insertion_order() {
        let mut frontier = PriorityFrontier::new();
        for name in ["first", "second", "third"] {
            frontier.push(name, 3);
        }
        frontier.push("urgent", 1);
        frontier.push("fourth", 3);

        let order: Vec<&str> = std::iter::from_fn(|| frontier.pop().map(|(item, _)| item)).collect();
        assert_eq!(order, vec!["urgent", "first", "second", "third", "fourth"]);
    }
}
