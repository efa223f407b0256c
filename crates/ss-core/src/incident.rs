//! Reported crime incident record.

use crate::GeoPoint;

/// One well-formed incident report from the open-data crime feed.
///
/// Produced exclusively by the `ss-ingest` payload parser, which drops
/// records with missing or unparsable numeric fields before they get here.
/// The severity category is derived from `code` at assignment time, not
/// stored, so the record stays a plain transcription of the feed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Incident {
    /// UCR crime code, e.g. `"4E"`.  The leading digit drives severity.
    pub code: String,
    /// Free-text approximate address.
    pub location: String,
    /// `false` when the report was flagged as indoors.
    pub outdoors: bool,
    /// Number of reports aggregated into this record by the feed.
    pub reports: u32,
    /// Reported position.
    pub position: GeoPoint,
}
