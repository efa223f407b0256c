//! `ss-graph` — owner-validated street graph and crime weighting model.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`graph`] | `StreetGraph`, `VertexRef`, `EdgeRef`                      |
//! | [`crime`] | `CrimeCategory`, `CrimeStats`, `WeightingPolicy`           |
//! | [`error`] | `GraphError`, `GraphResult<T>`                             |
//!
//! # Handle model (summary)
//!
//! Vertices and edges are addressed by `Copy` handles carrying the issuing
//! graph's tag plus a slot index and generation.  Every operation validates
//! the handle in O(1); a handle from another graph, or one left over after a
//! removal, fails with [`GraphError::Position`] rather than silently aliasing
//! a recycled slot.

pub mod crime;
pub mod error;
pub mod graph;


pub use crime::{CrimeCategory, CrimeStats, WeightingPolicy};
pub use error::{GraphError, GraphResult};
pub use graph::{EdgeRef, StreetGraph, VertexRef};
