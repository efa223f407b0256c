//! Routing trait and default Dijkstra implementation.
//!
//! # Search state
//!
//! All per-query bookkeeping — tentative cost, visited flag, predecessor
//! edge — lives in a query-owned map keyed by `VertexRef`, never on the graph
//! itself.  That keeps the graph immutable during queries and makes
//! concurrent queries over a shared `&StreetGraph` safe, with no bulk
//! clearing between queries.
//!
//! # Costs
//!
//! Edge costs are `f64` and must be non-negative; the skip-finalized
//! discipline below is only valid under that assumption (the crime penalty
//! only ever adds cost, so the weighting pass preserves it).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use ss_graph::{EdgeRef, GraphError, GraphResult, StreetGraph, VertexRef};

/// Tentative cost of an unreached vertex.  A large finite number rather than
/// `f64::INFINITY` because it participates in comparisons against real path
/// sums; any genuine route through a city map stays far below it.
pub const MAX_WEIGHT: f64 = 1e8;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: an ordered list of edges and the total
/// weighted cost.
#[derive(Debug, Clone)]
pub struct Route {
    /// Edges to traverse in order, from start to destination.
    pub edges: Vec<EdgeRef>,
    /// Finalized tentative cost of the destination.
    pub total_cost: f64,
}

impl Route {
    /// `true` if start and destination are the same vertex.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }

    /// Road labels along the route, for reporting.
    pub fn labels(&self, graph: &StreetGraph) -> GraphResult<Vec<String>> {
        self.edges
            .iter()
            .map(|&e| graph.edge_label(e).map(str::to_owned))
            .collect()
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// The default [`DijkstraRouter`] is exact; implement this trait to swap in
/// A* or a heuristic engine without touching callers.
pub trait Router {
    /// Compute a least-cost route from `start` to `end`.
    ///
    /// `Ok(None)` means no path exists — an ordinary answer, not a fault.
    /// `Err(GraphError::Position)` means a handle did not belong to `graph`.
    fn route(
        &self,
        graph: &StreetGraph,
        start: VertexRef,
        end: VertexRef,
    ) -> Result<Option<Route>, GraphError>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm over the street graph, reading each edge's
/// effective (crime-weighted) cost.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(
        &self,
        graph: &StreetGraph,
        start: VertexRef,
        end: VertexRef,
    ) -> Result<Option<Route>, GraphError> {
        shortest_path(graph, start, end)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

struct SearchRecord {
    cost:    f64,
    visited: bool,
    prev:    Option<EdgeRef>,
}

impl SearchRecord {
    fn unreached() -> Self {
        Self { cost: MAX_WEIGHT, visited: false, prev: None }
    }
}

/// Frontier entry ordered as a min-heap by cost.  `f64` has no total order,
/// so `BinaryHeap` needs an explicit `Ord` via `total_cmp`; the vertex is a
/// deterministic tie-breaker.
struct FrontierEntry {
    cost:   f64,
    vertex: VertexRef,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; invert so the cheapest entry pops first.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

pub fn shortest_path(
    graph: &StreetGraph,
    start: VertexRef,
    end: VertexRef,
) -> Result<Option<Route>, GraphError> {
    // Validate both endpoints up front so a foreign handle faults even when
    // the search would never reach it.
    graph.position(start)?;
    graph.position(end)?;

    if start == end {
        return Ok(Some(Route { edges: vec![], total_cost: 0.0 }));
    }

    let mut records: FxHashMap<VertexRef, SearchRecord> = FxHashMap::default();
    records.insert(start, SearchRecord { cost: 0.0, visited: false, prev: None });

    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry { cost: 0.0, vertex: start });

    while let Some(FrontierEntry { vertex, .. }) = frontier.pop() {
        // Entries are not removed on improvement; a vertex already finalized
        // through a cheaper entry is skipped here.
        let cost = match records.get(&vertex) {
            Some(r) if !r.visited => r.cost,
            _ => continue,
        };

        if vertex == end {
            return Ok(Some(reconstruct(graph, &records, start, end, cost)?));
        }

        for &edge in graph.outgoing(vertex)? {
            let target = graph.to(edge)?;
            let candidate = cost + graph.cost(edge)?;

            let record = records.entry(target).or_insert_with(SearchRecord::unreached);
            // Finalized vertices are never re-relaxed; valid because costs
            // are non-negative.
            if record.visited {
                continue;
            }
            if candidate < record.cost {
                record.cost = candidate;
                record.prev = Some(edge);
                frontier.push(FrontierEntry { cost: candidate, vertex: target });
            }
        }

        if let Some(record) = records.get_mut(&vertex) {
            record.visited = true;
        }
    }

    // Frontier exhausted before the destination was reached.
    Ok(None)
}

/// Walk predecessor edges backward from the destination, then reverse for
/// start→destination order.
fn reconstruct(
    graph: &StreetGraph,
    records: &FxHashMap<VertexRef, SearchRecord>,
    start: VertexRef,
    end: VertexRef,
    total_cost: f64,
) -> GraphResult<Route> {
    let mut edges = Vec::new();
    let mut current = end;
    while current != start {
        let Some(edge) = records.get(&current).and_then(|r| r.prev) else {
            break;
        };
        edges.push(edge);
        current = graph.from(edge)?;
    }
    edges.reverse();
    Ok(Route { edges, total_cost })
}
