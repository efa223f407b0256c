//! Road-map file loader.
//!
//! # File format
//!
//! One road per line, whitespace-separated:
//!
//! ```text
//! <from-location> <to-location> <base-cost> <road-label>
//! ```
//!
//! A location name is `"<lon>,<lat>"`, e.g. `-76.620491,39.331299`; the
//! loader splits on the comma to derive the vertex position.  Each line
//! inserts **both** directed edges with the same label and cost — the
//! two-edge convention by which the core receives an effectively undirected
//! graph.  Duplicate lines in real map data trip the graph's `Loop` fault;
//! those insertions are dropped per edge and loading continues.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use rustc_hash::FxHashMap;

use ss_core::GeoPoint;
use ss_graph::{GraphError, StreetGraph, VertexRef};

use crate::error::IngestError;

// ── Locations ─────────────────────────────────────────────────────────────────

/// Location-name table: maps the map file's vertex names to graph handles.
pub struct Locations {
    by_name: FxHashMap<String, VertexRef>,
}

impl Locations {
    /// Look up a location by name.
    ///
    /// An unknown name is the CLI-facing lookup fault; queries never reach
    /// the router with an unresolved endpoint.
    pub fn resolve(&self, name: &str) -> Result<VertexRef, IngestError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| IngestError::UnknownLocation(name.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// All known location names, unordered.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a street graph and its location-name table from a map file.
pub fn load_map(path: &Path) -> Result<(StreetGraph, Locations), IngestError> {
    let file = std::fs::File::open(path)?;
    load_map_reader(file)
}

/// Like [`load_map`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from embedded
/// data.
pub fn load_map_reader<R: Read>(reader: R) -> Result<(StreetGraph, Locations), IngestError> {
    let mut graph = StreetGraph::new();
    let mut by_name: FxHashMap<String, VertexRef> = FxHashMap::default();

    for line in BufReader::new(reader).lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let &[from, to, cost, label] = fields.as_slice() else {
            return Err(IngestError::Parse(format!(
                "expected 4 fields, got {}: {trimmed:?}",
                fields.len()
            )));
        };
        let cost: f64 = cost
            .parse()
            .map_err(|_| IngestError::Parse(format!("bad base cost {cost:?}")))?;

        let f = intern_location(&mut graph, &mut by_name, from)?;
        let t = intern_location(&mut graph, &mut by_name, to)?;

        // Undirected road: one directed edge each way.  A duplicate or
        // degenerate line faults with Loop; drop that edge and keep loading.
        for (a, b) in [(f, t), (t, f)] {
            match graph.insert_edge(a, b, label, cost) {
                Ok(_) | Err(GraphError::Loop) => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok((graph, Locations { by_name }))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Return the vertex for `name`, inserting it on first sight.  The position
/// is derived from the name itself: `"<lon>,<lat>"`.
fn intern_location(
    graph: &mut StreetGraph,
    by_name: &mut FxHashMap<String, VertexRef>,
    name: &str,
) -> Result<VertexRef, IngestError> {
    if let Some(&v) = by_name.get(name) {
        return Ok(v);
    }

    let (lon, lat) = name.split_once(',').ok_or_else(|| {
        IngestError::Parse(format!("location name {name:?} is not \"<lon>,<lat>\""))
    })?;
    let lon: f64 = lon
        .parse()
        .map_err(|_| IngestError::Parse(format!("bad longitude in {name:?}")))?;
    let lat: f64 = lat
        .parse()
        .map_err(|_| IngestError::Parse(format!("bad latitude in {name:?}")))?;

    let v = graph.insert_vertex(name, GeoPoint::new(lat, lon));
    by_name.insert(name.to_owned(), v);
    Ok(v)
}
