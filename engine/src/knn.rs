use crate::maped_distance::MapedDistance;
use std::{cmp::Reverse, collections::BinaryHeap};

type MinHeap<T> = BinaryHeap<Reverse<T>>;

/// Keeps the `k` greatest candidates seen so far.
///
/// Used both to pick the nearest neighbours of a user and to cut a ranking
/// down to the requested number of recommendations.
pub struct MinHeapKnn {
    k: usize,
    min_heap: MinHeap<MapedDistance>,
}

impl MinHeapKnn {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            min_heap: BinaryHeap::with_capacity(k),
        }
    }

    pub fn update<I>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = MapedDistance>,
    {
        for candidate in candidates {
            if self.min_heap.len() < self.k {
                self.min_heap.push(Reverse(candidate));
            } else if let Some(Reverse(minimum)) = self.min_heap.peek() {
                if candidate > *minimum {
                    self.min_heap.pop();
                    self.min_heap.push(Reverse(candidate));
                }
            }
        }
    }

    /// Best candidate first
    pub fn into_vec(self) -> Vec<MapedDistance> {
        self.min_heap
            .into_sorted_vec()
            .into_iter()
            .map(|r| r.0)
            .collect()
    }
}
