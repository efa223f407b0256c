//! `ss-core` — foundational types for the streetsafe routing tool.
//!
//! This crate is a dependency of every other `ss-*` crate.  It intentionally
//! has no `ss-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                  |
//! |--------------|-------------------------------------------|
//! | [`geo`]      | `GeoPoint`, midpoint, degree distance     |
//! | [`incident`] | `Incident` (reported crime record)        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod incident;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use incident::Incident;
