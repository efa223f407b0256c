//! `ss-route` — crime-weighted routing over a [`ss_graph::StreetGraph`].
//!
//! # Crate layout
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`router`] | `Router` trait, `Route`, `DijkstraRouter`            |
//! | [`assign`] | `assign_incidents`, `nearest_edge`                   |
//!
//! # Lifecycle
//!
//! The intended order is: build the graph, run [`assign::assign_incidents`]
//! over the full incident set, then run route queries.  Weighting passes and
//! queries are not designed to interleave.  Queries themselves keep all
//! search state in a per-query map, so any number of them may share one
//! `&StreetGraph`.

pub mod assign;
pub mod router;

#[cfg(test)]
mod tests;

pub use assign::{assign_incidents, nearest_edge};
pub use router::{DijkstraRouter, MAX_WEIGHT, Route, Router, shortest_path};
