use thiserror::Error;

#[derive(Error, Debug)]
pub enum ElevationError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),
}
