#[cfg(test)]
#[path = "../../tests/unit/algorithms/shortest_path_test.rs"]
mod shortest_path_test;

use crate::models::DenseMatrix;
use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Computes single source shortest distances over the given weight matrix using Dijkstra's
/// algorithm with a binary heap. Unreachable nodes get `INFINITY`.
pub fn shortest_distances(weights: &DenseMatrix, source: usize) -> Vec<Float> {
    let mut distances = vec![Float::INFINITY; weights.dim()];
    distances[source] = 0.;

    let mut heap = BinaryHeap::new();
    heap.push(HeapEntry { cost: 0., node: source });

    while let Some(HeapEntry { cost, node }) = heap.pop() {
        if compare_floats(cost, distances[node]) == Ordering::Greater {
            continue;
        }

        for neighbor in weights.nonzero_row(node) {
            let candidate = cost + weights.get(node, neighbor);
            if compare_floats(candidate, distances[neighbor]) == Ordering::Less {
                distances[neighbor] = candidate;
                heap.push(HeapEntry { cost: candidate, node: neighbor });
            }
        }
    }

    distances
}

/// Computes single source minimum hop counts (segment counts) over the adjacency matrix
/// using breadth first search. Unreachable nodes get `INFINITY`.
pub fn shortest_hops(adjacency: &DenseMatrix, source: usize) -> Vec<Float> {
    let mut hops = vec![Float::INFINITY; adjacency.dim()];
    hops[source] = 0.;

    let mut queue = VecDeque::from([source]);
    while let Some(node) = queue.pop_front() {
        for neighbor in adjacency.nonzero_row(node) {
            if hops[neighbor].is_infinite() {
                hops[neighbor] = hops[node] + 1.;
                queue.push_back(neighbor);
            }
        }
    }

    hops
}

struct HeapEntry {
    cost: Float,
    node: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && compare_floats(self.cost, other.cost) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed comparison turns the max heap into a min heap
        compare_floats(other.cost, self.cost)
    }
}
