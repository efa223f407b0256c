//! Street graph: an owner-validated directed graph with incidence lists.
//!
//! # Data layout
//!
//! Vertices and edges live in slot arenas.  A slot holds a generation counter
//! and an `Option` payload; removal clears the payload, bumps the generation,
//! and pushes the slot onto a free list for reuse.  Handles ([`VertexRef`],
//! [`EdgeRef`]) carry the issuing graph's tag plus `(slot, generation)`, so
//! validation is three integer comparisons:
//!
//! ```text
//! handle.graph == graph.tag  &&  slot in range  &&  slot.generation == handle.generation
//! ```
//!
//! A handle from another graph instance, or one invalidated by removal, fails
//! with [`GraphError::Position`] — never a silent no-op, never an aliased
//! recycled slot.
//!
//! # Structural invariants
//!
//! - No self-loops; no two edges with the same ordered `(from, to)` pair.
//! - Incidence lists only ever hold edges of the same graph.
//! - A vertex cannot be removed while any edge is incident to it.

use std::sync::atomic::{AtomicU32, Ordering};

use ss_core::GeoPoint;

use crate::crime::{CrimeCategory, CrimeStats, WeightingPolicy};
use crate::error::{GraphError, GraphResult};

/// Issues a unique tag per graph instance, process-wide.
static NEXT_GRAPH_TAG: AtomicU32 = AtomicU32::new(0);

// ── Handles ───────────────────────────────────────────────────────────────────

/// Handle to a vertex of a specific [`StreetGraph`] instance.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct VertexRef {
    graph:      u32,
    slot:       u32,
    generation: u32,
}

/// Handle to an edge of a specific [`StreetGraph`] instance.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct EdgeRef {
    graph:      u32,
    slot:       u32,
    generation: u32,
}

impl std::fmt::Display for VertexRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VertexRef({})", self.slot)
    }
}

impl std::fmt::Display for EdgeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EdgeRef({})", self.slot)
    }
}

// ── Slot arenas ───────────────────────────────────────────────────────────────

struct VertexSlot {
    generation: u32,
    data:       Option<VertexData>,
}

struct VertexData {
    label:    String,
    position: GeoPoint,
    out:      Vec<EdgeRef>,
    inc:      Vec<EdgeRef>,
}

struct EdgeSlot {
    generation: u32,
    data:       Option<EdgeData>,
}

struct EdgeData {
    label:     String,
    from:      VertexRef,
    to:        VertexRef,
    base_cost: f64,
    /// Effective cost read by the router; starts at `base_cost` and is
    /// mutated by crime-weighting passes.
    cost:      f64,
    crime:     CrimeStats,
}

// ── StreetGraph ───────────────────────────────────────────────────────────────

/// Directed street graph with per-edge crime statistics.
///
/// An undirected road is modeled as two edges with the same label and base
/// cost pointing in opposite directions; the map loader in `ss-ingest`
/// follows that convention.
pub struct StreetGraph {
    tag:           u32,
    vertices:      Vec<VertexSlot>,
    edges:         Vec<EdgeSlot>,
    free_vertices: Vec<u32>,
    free_edges:    Vec<u32>,
    live_vertices: usize,
    live_edges:    usize,
}

impl StreetGraph {
    pub fn new() -> Self {
        Self {
            tag:           NEXT_GRAPH_TAG.fetch_add(1, Ordering::Relaxed),
            vertices:      Vec::new(),
            edges:         Vec::new(),
            free_vertices: Vec::new(),
            free_edges:    Vec::new(),
            live_vertices: 0,
            live_edges:    0,
        }
    }

    // ── Handle validation ─────────────────────────────────────────────────

    fn vertex(&self, v: VertexRef) -> GraphResult<&VertexData> {
        if v.graph != self.tag {
            return Err(GraphError::Position);
        }
        self.vertices
            .get(v.slot as usize)
            .filter(|s| s.generation == v.generation)
            .and_then(|s| s.data.as_ref())
            .ok_or(GraphError::Position)
    }

    fn vertex_mut(&mut self, v: VertexRef) -> GraphResult<&mut VertexData> {
        if v.graph != self.tag {
            return Err(GraphError::Position);
        }
        self.vertices
            .get_mut(v.slot as usize)
            .filter(|s| s.generation == v.generation)
            .and_then(|s| s.data.as_mut())
            .ok_or(GraphError::Position)
    }

    fn edge(&self, e: EdgeRef) -> GraphResult<&EdgeData> {
        if e.graph != self.tag {
            return Err(GraphError::Position);
        }
        self.edges
            .get(e.slot as usize)
            .filter(|s| s.generation == e.generation)
            .and_then(|s| s.data.as_ref())
            .ok_or(GraphError::Position)
    }

    fn edge_mut(&mut self, e: EdgeRef) -> GraphResult<&mut EdgeData> {
        if e.graph != self.tag {
            return Err(GraphError::Position);
        }
        self.edges
            .get_mut(e.slot as usize)
            .filter(|s| s.generation == e.generation)
            .and_then(|s| s.data.as_mut())
            .ok_or(GraphError::Position)
    }

    // ── Insertion ─────────────────────────────────────────────────────────

    /// Insert a vertex.  Always succeeds.
    pub fn insert_vertex(&mut self, label: impl Into<String>, position: GeoPoint) -> VertexRef {
        let data = VertexData {
            label: label.into(),
            position,
            out: Vec::new(),
            inc: Vec::new(),
        };
        self.live_vertices += 1;
        match self.free_vertices.pop() {
            Some(slot) => {
                let s = &mut self.vertices[slot as usize];
                s.data = Some(data);
                VertexRef { graph: self.tag, slot, generation: s.generation }
            }
            None => {
                let slot = self.vertices.len() as u32;
                self.vertices.push(VertexSlot { generation: 0, data: Some(data) });
                VertexRef { graph: self.tag, slot, generation: 0 }
            }
        }
    }

    /// Insert a directed edge from `from` to `to` with the given label and
    /// base cost.
    ///
    /// # Errors
    ///
    /// - [`GraphError::Position`] if either endpoint is invalid or foreign.
    /// - [`GraphError::Loop`] if `from == to`, or if an edge with the same
    ///   ordered endpoint pair already exists.  The duplicate check scans the
    ///   shorter of `from`'s outgoing and `to`'s incoming lists:
    ///   O(min(deg(from), deg(to))).
    pub fn insert_edge(
        &mut self,
        from: VertexRef,
        to: VertexRef,
        label: impl Into<String>,
        cost: f64,
    ) -> GraphResult<EdgeRef> {
        if from == to {
            // Still surface Position first for a bad handle compared to itself.
            self.vertex(from)?;
            return Err(GraphError::Loop);
        }

        {
            let f = self.vertex(from)?;
            let t = self.vertex(to)?;
            let check: &[EdgeRef] = if f.out.len() > t.inc.len() { &t.inc } else { &f.out };
            for &candidate in check {
                let data = self.edge(candidate)?;
                if data.from == from && data.to == to {
                    return Err(GraphError::Loop);
                }
            }
        }

        let data = EdgeData {
            label: label.into(),
            from,
            to,
            base_cost: cost,
            cost,
            crime: CrimeStats::default(),
        };
        self.live_edges += 1;
        let e = match self.free_edges.pop() {
            Some(slot) => {
                let s = &mut self.edges[slot as usize];
                s.data = Some(data);
                EdgeRef { graph: self.tag, slot, generation: s.generation }
            }
            None => {
                let slot = self.edges.len() as u32;
                self.edges.push(EdgeSlot { generation: 0, data: Some(data) });
                EdgeRef { graph: self.tag, slot, generation: 0 }
            }
        };
        self.vertex_mut(from)?.out.push(e);
        self.vertex_mut(to)?.inc.push(e);
        Ok(e)
    }

    // ── Removal ───────────────────────────────────────────────────────────

    /// Remove a vertex with no incident edges, invalidating its handle.
    ///
    /// # Errors
    ///
    /// [`GraphError::Position`] for an invalid handle;
    /// [`GraphError::Removal`] while any incident edge remains.
    pub fn remove_vertex(&mut self, v: VertexRef) -> GraphResult<()> {
        let data = self.vertex(v)?;
        if !data.out.is_empty() || !data.inc.is_empty() {
            return Err(GraphError::Removal);
        }
        let slot = &mut self.vertices[v.slot as usize];
        slot.data = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_vertices.push(v.slot);
        self.live_vertices -= 1;
        Ok(())
    }

    /// Remove an edge, detaching it from both endpoint incidence lists and
    /// invalidating its handle.
    pub fn remove_edge(&mut self, e: EdgeRef) -> GraphResult<()> {
        let (from, to) = {
            let data = self.edge(e)?;
            (data.from, data.to)
        };
        self.vertex_mut(from)?.out.retain(|&x| x != e);
        self.vertex_mut(to)?.inc.retain(|&x| x != e);
        let slot = &mut self.edges[e.slot as usize];
        slot.data = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_edges.push(e.slot);
        self.live_edges -= 1;
        Ok(())
    }

    // ── Incidence and traversal ───────────────────────────────────────────

    /// `true` if `e` touches `v` in either direction.
    pub fn incident(&self, v: VertexRef, e: EdgeRef) -> GraphResult<bool> {
        let data = self.vertex(v)?;
        self.edge(e)?;
        Ok(data.out.contains(&e) || data.inc.contains(&e))
    }

    /// All live vertex handles, in slot order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexRef> + '_ {
        let tag = self.tag;
        self.vertices.iter().enumerate().filter_map(move |(i, s)| {
            s.data
                .as_ref()
                .map(|_| VertexRef { graph: tag, slot: i as u32, generation: s.generation })
        })
    }

    /// All live edge handles, in slot order.
    ///
    /// Slot order also fixes the tie-breaking of the incident-assignment
    /// scan: of two equidistant edges the earlier-inserted one wins.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef> + '_ {
        let tag = self.tag;
        self.edges.iter().enumerate().filter_map(move |(i, s)| {
            s.data
                .as_ref()
                .map(|_| EdgeRef { graph: tag, slot: i as u32, generation: s.generation })
        })
    }

    /// Outgoing edges of `v`.
    pub fn outgoing(&self, v: VertexRef) -> GraphResult<&[EdgeRef]> {
        Ok(&self.vertex(v)?.out)
    }

    /// Incoming edges of `v`.
    pub fn incoming(&self, v: VertexRef) -> GraphResult<&[EdgeRef]> {
        Ok(&self.vertex(v)?.inc)
    }

    /// Source endpoint of `e`.
    pub fn from(&self, e: EdgeRef) -> GraphResult<VertexRef> {
        Ok(self.edge(e)?.from)
    }

    /// Destination endpoint of `e`.
    pub fn to(&self, e: EdgeRef) -> GraphResult<VertexRef> {
        Ok(self.edge(e)?.to)
    }

    // ── Payload accessors ─────────────────────────────────────────────────

    pub fn vertex_label(&self, v: VertexRef) -> GraphResult<&str> {
        Ok(&self.vertex(v)?.label)
    }

    pub fn position(&self, v: VertexRef) -> GraphResult<GeoPoint> {
        Ok(self.vertex(v)?.position)
    }

    pub fn edge_label(&self, e: EdgeRef) -> GraphResult<&str> {
        Ok(&self.edge(e)?.label)
    }

    /// Effective cost of `e` as read by the router.
    pub fn cost(&self, e: EdgeRef) -> GraphResult<f64> {
        Ok(self.edge(e)?.cost)
    }

    /// Base cost of `e` as loaded from the map, untouched by weighting.
    pub fn base_cost(&self, e: EdgeRef) -> GraphResult<f64> {
        Ok(self.edge(e)?.base_cost)
    }

    pub fn set_cost(&mut self, e: EdgeRef, cost: f64) -> GraphResult<()> {
        self.edge_mut(e)?.cost = cost;
        Ok(())
    }

    /// Midpoint of the edge's endpoints — its representative position for
    /// nearest-edge queries.
    pub fn edge_midpoint(&self, e: EdgeRef) -> GraphResult<GeoPoint> {
        let data = self.edge(e)?;
        let from = self.vertex(data.from)?.position;
        let to = self.vertex(data.to)?.position;
        Ok(from.midpoint(to))
    }

    pub fn vertex_count(&self) -> usize {
        self.live_vertices
    }

    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    pub fn is_empty(&self) -> bool {
        self.live_vertices == 0
    }

    // ── Crime weighting ───────────────────────────────────────────────────

    /// Count one incident report of `category` against `e`.
    pub fn record_crime(&mut self, e: EdgeRef, category: CrimeCategory) -> GraphResult<()> {
        self.edge_mut(e)?.crime.record(category);
        Ok(())
    }

    /// Total reports counted against `e`, all categories.
    pub fn crime_total(&self, e: EdgeRef) -> GraphResult<u32> {
        Ok(self.edge(e)?.crime.total())
    }

    pub fn crime_stats(&self, e: EdgeRef) -> GraphResult<&CrimeStats> {
        Ok(&self.edge(e)?.crime)
    }

    /// Fold the edge's current crime penalty into its effective cost under
    /// the given policy.
    pub fn apply_crime_weight(&mut self, e: EdgeRef, policy: WeightingPolicy) -> GraphResult<()> {
        let data = self.edge_mut(e)?;
        let penalty = data.crime.penalty();
        data.cost = match policy {
            WeightingPolicy::Accumulate => data.cost + penalty,
            WeightingPolicy::Recompute => data.base_cost + penalty,
        };
        Ok(())
    }
}

impl Default for StreetGraph {
    fn default() -> Self {
        Self::new()
    }
}
