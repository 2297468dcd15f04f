//! Optional AI terrain descriptions for profile lines.
//!
//! The feature degrades gracefully: without an API key
//! ([`Analyst::from_env`] returns `None`) nothing is requested and
//! the rest of the system is unaffected.

mod error;
mod gemini;

pub use crate::{
    error::AnalystError,
    gemini::{Analyst, API_KEY_VAR},
};

use log::warn;
use session::{LineId, Session};

/// Runs one description request for the line `id`, keeping the line's
/// request state consistent on every exit path.
///
/// The line is marked pending before the request goes out and settles
/// to done or failed before this returns, so a caller can always
/// retry after an error. Other lines are never touched.
pub async fn analyze_line(
    analyst: &Analyst,
    session: &mut Session,
    id: LineId,
) -> Result<(), AnalystError> {
    let prompt = {
        let line = session.begin_analysis(id)?;
        gemini::build_prompt(line)
    };

    match analyst.generate(&prompt).await {
        Ok(text) => {
            session.complete_analysis(id, text)?;
            Ok(())
        }
        Err(err) => {
            warn!("analysis failed for line {id}: {err}");
            session.fail_analysis(id);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Analyst;

    #[test]
    fn test_from_env() {
        // Set and unset in one test; env vars are process-wide.
        std::env::remove_var(super::API_KEY_VAR);
        assert!(Analyst::from_env().is_none());

        std::env::set_var(super::API_KEY_VAR, "");
        assert!(Analyst::from_env().is_none());

        std::env::set_var(super::API_KEY_VAR, "test-key");
        assert!(Analyst::from_env().is_some());

        std::env::remove_var(super::API_KEY_VAR);
    }
}
