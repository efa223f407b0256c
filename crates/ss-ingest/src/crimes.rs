//! Crime-feed payload parser.
//!
//! The feed is a Socrata-style open-data export: a JSON array in which every
//! field is a string, e.g.
//!
//! ```json
//! [{"crimedate":"2019-09-13","crimecode":"4E","location":"300 SAINT PAUL PL",
//!   "inside_outside":"O","longitude":"-76.61","latitude":"39.29",
//!   "total_incidents":"1"}]
//! ```
//!
//! A payload that is not valid JSON at the top level is a parse error.
//! Individual records with missing or unparsable required fields are dropped
//! silently — a report without a usable position is irrelevant to routing,
//! and the core is promised only well-formed records.

use std::path::Path;

use serde::Deserialize;

use ss_core::{GeoPoint, Incident};

use crate::error::IngestError;

// ── Raw feed record ───────────────────────────────────────────────────────────

/// One record as it appears on the wire.  Everything optional; conversion
/// decides what is required.
#[derive(Deserialize)]
struct RawIncident {
    crimecode:       Option<String>,
    location:        Option<String>,
    inside_outside:  Option<String>,
    total_incidents: Option<String>,
    longitude:       Option<String>,
    latitude:        Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse a crime-feed payload into well-formed incident records, dropping
/// records with missing or bad required fields.
pub fn parse_incidents(payload: &str) -> Result<Vec<Incident>, IngestError> {
    let raw: Vec<RawIncident> = serde_json::from_str(payload)
        .map_err(|e| IngestError::Parse(format!("crime payload: {e}")))?;
    Ok(raw.into_iter().filter_map(convert).collect())
}

/// Read and parse a crime-feed payload file.
pub fn read_incidents(path: &Path) -> Result<Vec<Incident>, IngestError> {
    let payload = std::fs::read_to_string(path)?;
    parse_incidents(&payload)
}

// ── Conversion ────────────────────────────────────────────────────────────────

/// Required: code, location, and parsable lat/lon/count.  `None` drops the
/// record.
fn convert(raw: RawIncident) -> Option<Incident> {
    let lon: f64 = raw.longitude?.trim().parse().ok()?;
    let lat: f64 = raw.latitude?.trim().parse().ok()?;
    let reports: u32 = raw.total_incidents?.trim().parse().ok()?;
    let code = raw.crimecode?;
    let location = raw.location?;
    // Anything not explicitly flagged indoors counts as outdoors.
    let outdoors = !raw
        .inside_outside
        .is_some_and(|s| s.trim().to_ascii_uppercase().starts_with('I'));

    Some(Incident {
        code,
        location,
        outdoors,
        reports,
        position: GeoPoint::new(lat, lon),
    })
}
