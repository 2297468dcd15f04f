use crate::LineId;
use elevation::ElevationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("{0}")]
    Elevation(#[from] ElevationError),

    #[error("no line with id {0}")]
    UnknownLine(LineId),

    #[error("analysis already running for line {0}")]
    AnalysisPending(LineId),

    #[error("line {0} already has an analysis result")]
    AlreadyAnalyzed(LineId),
}
