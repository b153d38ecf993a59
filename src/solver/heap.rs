use std::cmp::Ordering;

/// Min-heap entry keyed on tentative distance, ties popped in push order.
#[derive(Clone, Copy, Debug)]
pub(super) struct HeapEntry {
    pub dist: f64,
    pub seq: u64,
    pub node: usize,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

#[cfg(test)]
mod tests {
    use super::HeapEntry;
    use std::collections::BinaryHeap;

    #[test]
    fn pops_smallest_distance_then_oldest() {
        let mut heap = BinaryHeap::new();
        for (seq, (dist, node)) in [(3.0, 0), (1.0, 1), (1.0, 2), (2.0, 3)].into_iter().enumerate() {
            heap.push(HeapEntry {
                dist,
                seq: seq as u64,
                node,
            });
        }
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|e| e.node)).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }
}
