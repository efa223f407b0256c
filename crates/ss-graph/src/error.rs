//! Graph-subsystem error type.

use thiserror::Error;

/// Errors produced by `ss-graph`.
///
/// `Position` is always a usage error and never recoverable by retry.
/// `Loop` is expected during bulk map loading from imperfect data, so bulk
/// callers catch and discard it per edge.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex or edge handle is foreign to this graph or stale")]
    Position,

    #[error("edge would form a self-loop or duplicate an existing ordered pair")]
    Loop,

    #[error("vertex still has incident edges and cannot be removed")]
    Removal,
}

pub type GraphResult<T> = Result<T, GraphError>;
