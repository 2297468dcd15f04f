use crate::{AnalysisState, LineId, ProfileLine, SessionError, PALETTE};
use elevation::{geo::Coord, Profile, Synth, C};
use log::{debug, warn};
use rand::Rng;

/// Where the user is in the two-click drawing gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Drawing {
    /// No segment in progress.
    #[default]
    Idle,

    /// One endpoint chosen; the next click completes a segment.
    AwaitingSecondPoint {
        /// The confirmed first endpoint.
        pending: Coord<C>,
    },
}

/// Outcome of feeding one map click into the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Click {
    /// The click armed a new segment's start point.
    Started,

    /// The click completed a segment; the new line's id.
    Completed(LineId),

    /// The click was dropped because a synthesis was in flight.
    Ignored,
}

/// Owns all drawing state: the visible line collection, the
/// in-progress gesture, and the busy guard that serializes
/// synthesis.
#[derive(Debug, Default)]
pub struct Session {
    lines: Vec<ProfileLine>,
    drawing: Drawing,
    next_id: u64,
    synthesizing: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible lines, in insertion order.
    pub fn lines(&self) -> &[ProfileLine] {
        &self.lines
    }

    pub fn drawing(&self) -> Drawing {
        self.drawing
    }

    /// True while a segment completion is being synthesized. Clicks
    /// arriving in that window are dropped.
    pub fn is_synthesizing(&self) -> bool {
        self.synthesizing
    }

    pub fn line(&self, id: LineId) -> Option<&ProfileLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    fn line_mut(&mut self, id: LineId) -> Result<&mut ProfileLine, SessionError> {
        self.lines
            .iter_mut()
            .find(|line| line.id() == id)
            .ok_or(SessionError::UnknownLine(id))
    }

    /// Feeds one map click into the drawing gesture.
    ///
    /// The first click arms a segment. Every further click
    /// synthesizes the segment from the pending point to the click,
    /// appends the finished line, and re-arms at the new endpoint, so
    /// drawing chains until [`cancel`](Self::cancel). A failed
    /// synthesis leaves all state untouched; the same click can be
    /// retried.
    pub async fn map_click<R: Rng>(
        &mut self,
        coord: Coord<C>,
        synth: &mut Synth<R>,
    ) -> Result<Click, SessionError> {
        if self.synthesizing {
            return Ok(Click::Ignored);
        }

        match self.drawing {
            Drawing::Idle => {
                self.drawing = Drawing::AwaitingSecondPoint { pending: coord };
                Ok(Click::Started)
            }
            Drawing::AwaitingSecondPoint { pending } => {
                self.synthesizing = true;
                let built = Profile::new(pending, coord, synth).await;
                self.synthesizing = false;
                let profile = built?;

                let id = LineId(self.next_id);
                self.next_id += 1;
                let index = self.lines.len();
                self.lines.push(ProfileLine {
                    id,
                    start: pending,
                    end: coord,
                    color: PALETTE[index % PALETTE.len()],
                    name: format!("Profile {}", index + 1),
                    profile,
                    analysis: AnalysisState::Idle,
                });
                self.drawing = Drawing::AwaitingSecondPoint { pending: coord };
                debug!("appended line {id}; lines: {}", self.lines.len());
                Ok(Click::Completed(id))
            }
        }
    }

    /// Abandons the in-progress segment, if any. Completed lines are
    /// unaffected.
    pub fn cancel(&mut self) {
        self.drawing = Drawing::Idle;
    }

    /// Removes the line with `id`, preserving the order of the rest.
    /// Returns false if there is no such line.
    pub fn delete(&mut self, id: LineId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != id);
        self.lines.len() != before
    }

    /// Marks `id` as having an analysis request in flight and returns
    /// the line, for prompt building.
    ///
    /// Rejected while a request is pending and once a result exists;
    /// a failed request may be retried.
    pub fn begin_analysis(&mut self, id: LineId) -> Result<&ProfileLine, SessionError> {
        let line = self.line_mut(id)?;
        match line.analysis {
            AnalysisState::Pending => Err(SessionError::AnalysisPending(id)),
            AnalysisState::Done(_) => Err(SessionError::AlreadyAnalyzed(id)),
            AnalysisState::Idle | AnalysisState::Failed => {
                line.analysis = AnalysisState::Pending;
                Ok(&*line)
            }
        }
    }

    /// Records a finished analysis for `id`.
    pub fn complete_analysis(&mut self, id: LineId, text: String) -> Result<(), SessionError> {
        let line = self.line_mut(id)?;
        line.analysis = AnalysisState::Done(text);
        Ok(())
    }

    /// Clears the in-flight mark after a failed analysis. A previous
    /// result is never replaced by a failure.
    pub fn fail_analysis(&mut self, id: LineId) {
        match self.line_mut(id) {
            Ok(line) if line.analysis.is_pending() => line.analysis = AnalysisState::Failed,
            Ok(_) => {}
            // The line may have been deleted while the request was in
            // flight.
            Err(_) => warn!("fail_analysis: no line with id {id}"),
        }
    }
}
