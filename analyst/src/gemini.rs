//! Gemini `generateContent` client used for terrain descriptions.

use crate::AnalystError;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use session::ProfileLine;

const MODEL_ID: &str = "gemini-2.5-flash";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Environment variable the API key is read from.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Every 5th sample is plenty of context for a landform description
/// and keeps the prompt small.
const PROMPT_DECIMATION: usize = 5;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// First non-empty text part, if any.
    pub(crate) fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .flat_map(|candidate| candidate.content.parts)
            .map(|part| part.text)
            .find(|text| !text.is_empty())
    }
}

/// HTTP client for terrain description requests.
#[derive(Debug, Clone)]
pub struct Analyst {
    client: HttpClient,
    api_key: String,
}

impl Analyst {
    pub fn new(api_key: String) -> Self {
        Self {
            client: HttpClient::new(),
            api_key,
        }
    }

    /// Returns a client configured from [`API_KEY_VAR`], or `None` if
    /// the variable is unset or empty.
    pub fn from_env() -> Option<Self> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.is_empty() => Some(Self::new(key)),
            _ => None,
        }
    }

    pub(crate) async fn generate(&self, prompt: &str) -> Result<String, AnalystError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(format!("{API_BASE}/{MODEL_ID}:generateContent"))
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalystError::Api { status, body });
        }

        let generated: GenerateResponse = response.json().await?;
        generated.into_text().ok_or(AnalystError::EmptyResponse)
    }
}

/// Builds the description prompt from a decimated subset of `line`'s
/// samples.
pub(crate) fn build_prompt(line: &ProfileLine) -> String {
    let data = line
        .profile
        .points
        .iter()
        .step_by(PROMPT_DECIMATION)
        .map(|point| format!("distance:{}m, elevation:{}m", point.distance_m, point.elevation_m))
        .collect::<Vec<_>>()
        .join("; ");

    format!(
        "Analyze the landform of the following terrain profile data \
         (distance vs elevation).\nData: [{data}].\nBriefly describe its \
         physical shape (for example: a steep ascent, a flat plateau, a \
         V-shaped valley, rolling hills) in one or two sentences."
    )
}

#[cfg(test)]
mod tests {
    use super::{build_prompt, GenerateResponse};
    use elevation::{geo::Coord, Synth};
    use session::{Click, Session};

    #[tokio::test]
    async fn test_prompt_decimation() {
        let mut session = Session::new();
        let mut synth = Synth::seeded(9);
        session
            .map_click(Coord { x: 105.0, y: 35.0 }, &mut synth)
            .await
            .unwrap();
        let Click::Completed(id) = session
            .map_click(Coord { x: 106.0, y: 34.0 }, &mut synth)
            .await
            .unwrap()
        else {
            panic!("expected a completed line");
        };

        let prompt = build_prompt(session.line(id).unwrap());
        // 51 samples decimated by 5 leaves indices 0, 5, .., 50.
        assert_eq!(prompt.matches("distance:").count(), 11);
        assert!(prompt.starts_with("Analyze the landform"));
        assert!(prompt.contains("distance:0m"));
    }

    #[test]
    fn test_response_text_extraction() {
        let raw = r#"{
            "candidates": [
                {
                    "content": {
                        "parts": [{"text": "A gentle rolling ridge."}],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                }
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.into_text().as_deref(), Some("A gentle rolling ridge."));
    }

    #[test]
    fn test_empty_response() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.into_text(), None);
    }
}
