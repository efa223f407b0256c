//! `ss-ingest` — the I/O collaborators around the routing core.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`map`]    | `load_map`, `load_map_reader`, `Locations` name table     |
//! | [`crimes`] | `parse_incidents`, `read_incidents`                       |
//! | [`error`]  | `IngestError`, `IngestResult<T>`                          |
//!
//! The contract with the core is narrow: the map loader produces a populated
//! `StreetGraph` plus a location-name table, and the crime parser produces a
//! sequence of well-formed [`ss_core::Incident`] records.  Malformed incident
//! records are dropped here and never surface as core faults.

pub mod crimes;
pub mod error;
pub mod map;


pub use crimes::{parse_incidents, read_incidents};
pub use error::{IngestError, IngestResult};
pub use map::{Locations, load_map, load_map_reader};
