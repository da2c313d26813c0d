//! Persona reply service client
//!
//! Builds a single text prompt from a role-tagged transcript and a fixed
//! persona description, forwards it to a hosted generation endpoint, and
//! returns the completion text verbatim. No streaming, no retry, no
//! post-processing.

use serde::{Deserialize, Serialize};

use solomon_core::prelude::*;
use solomon_core::TranscriptEntry;

/// The fixed persona framing prepended to every prompt.
pub const DEFAULT_PERSONA: &str = "You are an 85-year-old version of the user. \
Respond to their questions or comments with the wisdom, perspective, and \
personality you've gained over the years. Be introspective, thoughtful, and \
occasionally humorous. Your responses should reflect on past experiences and \
how they've shaped your views.";

/// The fixed cue appended after the transcript.
pub const REPLY_CUE: &str = "85-year-old self:";

/// Generation request body (`stream` is always `false`; replies arrive whole).
#[derive(Debug, Clone, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Assemble the full prompt: persona framing, the transcript serialized as
/// `"<role>: <content>"` lines in order, then the reply cue.
pub fn build_prompt(persona: &str, transcript: &[TranscriptEntry]) -> String {
    let conversation = transcript
        .iter()
        .map(|entry| format!("{}: {}", entry.role, entry.content))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{persona}\n\nCurrent conversation:\n{conversation}\n\n{REPLY_CUE}")
}

/// Client for the hosted text-generation endpoint.
#[derive(Debug, Clone)]
pub struct PersonaClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    persona: String,
}

impl PersonaClient {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        persona: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            persona: persona.into(),
        }
    }

    /// Forward the transcript to the generation endpoint and return the raw
    /// completion text. Only default generation parameters are used.
    pub async fn compose_reply(&self, transcript: &[TranscriptEntry]) -> Result<String> {
        let prompt = build_prompt(&self.persona, transcript);
        debug!(chars = prompt.len(), model = %self.model, "Requesting persona reply");

        let request = GenerateRequest {
            model: &self.model,
            prompt: &prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::persona(format!("request to {} failed: {e}", self.endpoint)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::persona(format!(
                "generation endpoint returned {status}: {body}"
            )));
        }

        let completion: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::persona(format!("undecodable completion: {e}")))?;

        Ok(completion.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solomon_core::Role;

    #[test]
    fn test_prompt_contains_persona_transcript_and_cue_in_order() {
        let transcript = vec![
            TranscriptEntry::new(Role::User, "What should I do with my life?"),
            TranscriptEntry::new(Role::FutureSelf, "Less worrying, more walking."),
        ];

        let prompt = build_prompt(DEFAULT_PERSONA, &transcript);

        let persona_at = prompt.find("85-year-old version of the user").unwrap();
        let first_at = prompt.find("user: What should I do with my life?").unwrap();
        let second_at = prompt
            .find("85-year-old self: Less worrying, more walking.")
            .unwrap();
        let cue_at = prompt.rfind(REPLY_CUE).unwrap();

        assert!(persona_at < first_at);
        assert!(first_at < second_at);
        assert!(second_at < cue_at);
    }

    #[test]
    fn test_prompt_with_empty_transcript_still_has_framing_and_cue() {
        let prompt = build_prompt(DEFAULT_PERSONA, &[]);
        assert!(prompt.starts_with(DEFAULT_PERSONA));
        assert!(prompt.contains("Current conversation:"));
        assert!(prompt.ends_with(REPLY_CUE));
    }

    #[test]
    fn test_prompt_serializes_one_line_per_entry() {
        let transcript = vec![
            TranscriptEntry::new(Role::User, "one"),
            TranscriptEntry::new(Role::User, "two"),
            TranscriptEntry::new(Role::FutureSelf, "three"),
        ];
        let prompt = build_prompt("persona", &transcript);
        assert!(prompt.contains("user: one\nuser: two\n85-year-old self: three"));
    }
}
