use elevation::{geo::Coord, Profile, C};
use std::fmt;

/// Colors assigned to new lines, cycled by position in the
/// collection.
pub const PALETTE: [&str; 4] = [
    "#EF476F", // pink
    "#06D6A0", // green
    "#118AB2", // blue
    "#FFD166", // yellow
];

/// Identity of a profile line.
///
/// Unique for the lifetime of a session; never reused, even after
/// the line is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub(crate) u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request state of a line's optional AI terrain description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnalysisState {
    /// Never requested.
    #[default]
    Idle,

    /// A request is in flight; further requests are rejected until it
    /// settles.
    Pending,

    /// A description was produced. Kept until the line is deleted.
    Done(String),

    /// The last request failed. A new request may be made.
    Failed,
}

impl AnalysisState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns the description, if one was produced.
    pub fn result(&self) -> Option<&str> {
        match self {
            Self::Done(text) => Some(text),
            _ => None,
        }
    }
}

/// A completed user-drawn segment and its synthesized profile.
///
/// Lines are created whole: the profile data is fully populated
/// before the line enters the session's collection. Afterwards only
/// the analysis state changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileLine {
    pub(crate) id: LineId,

    /// First endpoint, as clicked.
    pub start: Coord<C>,

    /// Second endpoint, as clicked.
    pub end: Coord<C>,

    /// Display color, from [`PALETTE`].
    pub color: &'static str,

    /// Display name, `Profile N`.
    pub name: String,

    /// The synthesized elevation data.
    pub profile: Profile,

    /// Request state of the AI terrain description.
    pub analysis: AnalysisState,
}

impl ProfileLine {
    pub fn id(&self) -> LineId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::AnalysisState;

    #[test]
    fn test_analysis_state_accessors() {
        assert!(!AnalysisState::Idle.is_pending());
        assert!(AnalysisState::Pending.is_pending());
        assert_eq!(AnalysisState::Idle.result(), None);
        assert_eq!(AnalysisState::Failed.result(), None);
        assert_eq!(
            AnalysisState::Done("rolling hills".to_owned()).result(),
            Some("rolling hills")
        );
    }
}
