//! Single-source shortest paths over a `GridGraph` with early exit.
//!
//! Dijkstra with a binary heap and lazy deletion: a node may sit in the heap
//! several times, and every pop of an already settled node is skipped. The
//! visited check on pop is what keeps the search correct without a
//! decrease-key heap.
//!
//! The search stops as soon as the destination is popped. Distances of other
//! nodes left in the workspace after a solve are only upper bounds.
//!
//! Relaxation accepts equal-cost improvements (`<=`), so among tied paths the
//! most recently discovered predecessor wins. Adjacency order is fixed by
//! graph construction and heap ties pop first-in-first-out, which keeps the
//! chosen path reproducible.

mod heap;

use crate::error::ScissorsError;
use crate::graph::GridGraph;
use crate::types::{GridPoint, LivewirePath};
use heap::HeapEntry;
use log::debug;
use serde::Serialize;
use std::collections::BinaryHeap;
use std::time::Instant;

/// Counters of the last solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveStats {
    /// Nodes finalised before the destination was reached
    pub settled: usize,
    /// Heap pushes, including the source
    pub pushed: usize,
    /// Pops of already settled nodes
    pub stale_pops: usize,
    pub elapsed_ms: f64,
}

/// Buffers reused across solves on graphs of the same size.
#[derive(Debug, Default)]
pub struct SolverWorkspace {
    dist: Vec<f64>,
    prev: Vec<Option<usize>>,
    visited: Vec<bool>,
    heap: BinaryHeap<HeapEntry>,
    seq: u64,
    stats: SolveStats,
}

impl SolverWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all buffers and sizes them for `nodes` entries.
    fn reset(&mut self, nodes: usize) {
        self.dist.clear();
        self.dist.resize(nodes, f64::INFINITY);
        self.prev.clear();
        self.prev.resize(nodes, None);
        self.visited.clear();
        self.visited.resize(nodes, false);
        self.heap.clear();
        self.seq = 0;
        self.stats = SolveStats::default();
    }

    fn push(&mut self, dist: f64, node: usize) {
        self.heap.push(HeapEntry {
            dist,
            seq: self.seq,
            node,
        });
        self.seq += 1;
        self.stats.pushed += 1;
    }

    /// Least-cost path from `source` to `destination`, both in image-global
    /// coordinates.
    ///
    /// An unreachable destination yields the single point `[destination]`;
    /// see [`LivewirePath::is_degenerate`].
    pub fn solve(
        &mut self,
        graph: &GridGraph,
        source: GridPoint,
        destination: GridPoint,
    ) -> Result<LivewirePath, ScissorsError> {
        let src = graph
            .index_of(source)
            .ok_or(ScissorsError::AnchorOutsideGraph {
                row: source.row,
                col: source.col,
            })?;
        let dst = graph
            .index_of(destination)
            .ok_or(ScissorsError::AnchorOutsideGraph {
                row: destination.row,
                col: destination.col,
            })?;

        let start = Instant::now();
        self.reset(graph.node_count());
        self.dist[src] = 0.0;
        self.push(0.0, src);

        while let Some(HeapEntry { node, .. }) = self.heap.pop() {
            if self.visited[node] {
                self.stats.stale_pops += 1;
                continue;
            }
            self.visited[node] = true;
            self.stats.settled += 1;
            if node == dst {
                break;
            }
            let base = self.dist[node];
            for edge in graph.neighbors_at(node) {
                let Some(next) = graph.index_of(edge.target) else {
                    continue;
                };
                if self.visited[next] {
                    continue;
                }
                let candidate = base + edge.weight;
                if candidate <= self.dist[next] {
                    self.dist[next] = candidate;
                    self.prev[next] = Some(node);
                    self.push(candidate, next);
                }
            }
        }

        let path = self.reconstruct(graph, dst);
        self.stats.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "solve ({}, {}) -> ({}, {}): len={} cost={:.6e} settled={} pushed={} in {:.3} ms",
            source.row,
            source.col,
            destination.row,
            destination.col,
            path.len(),
            path.cost,
            self.stats.settled,
            self.stats.pushed,
            self.stats.elapsed_ms
        );
        Ok(path)
    }

    /// Walk predecessor links back from `dst` and reverse.
    fn reconstruct(&self, graph: &GridGraph, dst: usize) -> LivewirePath {
        let mut points = Vec::new();
        let mut cur = Some(dst);
        while let Some(idx) = cur {
            points.push(graph.point_at(idx));
            if points.len() > self.prev.len() {
                break;
            }
            cur = self.prev[idx];
        }
        points.reverse();
        LivewirePath {
            points,
            cost: self.dist[dst],
        }
    }

    /// Counters of the most recent solve.
    pub fn last_stats(&self) -> SolveStats {
        self.stats
    }

    /// Tentative distance of a global point after the last solve.
    ///
    /// Exact only for the destination of that solve and nodes settled before
    /// it; everything else is an upper bound or infinity.
    pub fn distance(&self, graph: &GridGraph, p: GridPoint) -> Option<f64> {
        graph.index_of(p).and_then(|i| self.dist.get(i).copied())
    }
}

/// One-off solve with a fresh workspace.
pub fn shortest_path(
    graph: &GridGraph,
    source: GridPoint,
    destination: GridPoint,
) -> Result<LivewirePath, ScissorsError> {
    SolverWorkspace::new().solve(graph, source, destination)
}
