//! Application state for the profile drawing session.
//!
//! A [`Session`] owns everything the rendering layers consume: the
//! collection of completed [`ProfileLine`]s and the state of the
//! in-progress drawing gesture. All mutation goes through it.

mod error;
mod line;
mod store;

pub use crate::{
    error::SessionError,
    line::{AnalysisState, LineId, ProfileLine, PALETTE},
    store::{Click, Drawing, Session},
};
