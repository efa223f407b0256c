//! Ingest-subsystem error type.

use thiserror::Error;

use ss_graph::GraphError;

/// Errors produced by `ss-ingest`.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("unknown location {0:?}")]
    UnknownLocation(String),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type IngestResult<T> = Result<T, IngestError>;
