//! Assignment of incident reports to their nearest road segment.
//!
//! Each incident is charged to the live edge whose midpoint is closest in
//! coordinate-degree space, by a linear scan over all edges.  The scan keeps
//! the first-encountered edge on exact ties — in particular, of the two
//! directed edges modeling one undirected road (identical midpoints), the
//! earlier-inserted direction absorbs the report.  Not geometrically
//! meaningful, but incidents are sparse relative to segment length and the
//! ordering is deterministic.

use ss_core::Incident;
use ss_graph::{CrimeCategory, EdgeRef, GraphResult, StreetGraph, WeightingPolicy};

/// Charge every incident to its nearest edge, then fold the accumulated
/// penalties into edge costs under `policy`.
///
/// Edges whose crime total is still zero after assignment keep their current
/// cost; everything else is re-costed once per call.  Under
/// [`WeightingPolicy::Accumulate`] calling this twice with the same incidents
/// therefore compounds the penalty rather than repeating it.
pub fn assign_incidents(
    graph: &mut StreetGraph,
    incidents: &[Incident],
    policy: WeightingPolicy,
) -> GraphResult<()> {
    for incident in incidents {
        let Some(edge) = nearest_edge(graph, incident)? else {
            // No edges in the graph; nothing to charge.
            return Ok(());
        };
        graph.record_crime(edge, CrimeCategory::from_code(&incident.code))?;
    }

    let live: Vec<EdgeRef> = graph.edges().collect();
    for edge in live {
        if graph.crime_total(edge)? > 0 {
            graph.apply_crime_weight(edge, policy)?;
        }
    }
    Ok(())
}

/// The live edge whose midpoint is nearest to the incident's position, or
/// `None` for a graph with no edges.
pub fn nearest_edge(graph: &StreetGraph, incident: &Incident) -> GraphResult<Option<EdgeRef>> {
    let mut best: Option<(EdgeRef, f64)> = None;
    for edge in graph.edges() {
        let distance = graph
            .edge_midpoint(edge)?
            .degree_distance(incident.position);
        // Strict `<` keeps the first-encountered edge on exact ties.
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((edge, distance));
        }
    }
    Ok(best.map(|(edge, _)| edge))
}
