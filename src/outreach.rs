//! Outreach message generation.
//!
//! The text service is an external collaborator: one request per user
//! action, no retry, and a failure never touches the stores.

use std::time::Duration;

use serde::Deserialize;

use crate::{error::GenerationError, models::Prospect};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_AGENCY: &str = "Eyoha Digitals";

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const FAILURE_MESSAGE: &str = "Failed to generate message. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutreachRequest {
    pub business_name: String,
    pub contact_person: String,
    pub notes: String,
}

impl From<&Prospect> for OutreachRequest {
    fn from(prospect: &Prospect) -> Self {
        Self {
            business_name: prospect.business_name.clone(),
            contact_person: prospect.contact_person.clone(),
            notes: prospect.notes.clone(),
        }
    }
}

impl OutreachRequest {
    pub fn prompt(&self, agency: &str) -> String {
        let contact_person = non_empty_or(&self.contact_person, "there");
        let notes = non_empty_or(&self.notes, "None");
        format!(
            "You are an expert salesperson for {agency}. Your goal is to write a short, friendly, and professional outreach message to a potential client.

Use the following information to personalize the message:
- Business Name: {business_name}
- Contact Person: {contact_person}
- Notes about them: {notes}

Base the message on this template, but adapt it to sound natural and personal based on the provided info. Keep it concise (under 100 words) and engaging.

Template: \"{script}\"

Begin the message now:",
            business_name = self.business_name,
            script = base_script(agency),
        )
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() { fallback } else { value }
}

/// The short sales script the generated messages are based on.
pub fn base_script(agency: &str) -> String {
    format!(
        "Hello, my name is [Name]. I work at {agency}, a digital marketing agency that helps businesses like yours increase brand visibility and boost client engagement on social media. I've noticed your page has good potential, and I believe consistent professional content can improve your reach. Can we talk briefly about how our agency can support your growth?"
    )
}

pub trait OutreachGenerator {
    fn generate(
        &self,
        request: &OutreachRequest,
    ) -> impl Future<Output = Result<String, GenerationError>>;
}

/// Result of one generation attempt, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutreachOutcome {
    Generated { message: String },
    Failed { reason: String },
}

/// Run one generation for `prospect`. Errors are logged and turned into a
/// user-facing failure; retrying is up to the caller.
pub async fn request_outreach<G: OutreachGenerator>(
    generator: &G,
    prospect: &Prospect,
) -> OutreachOutcome {
    let request = OutreachRequest::from(prospect);
    match generator.generate(&request).await {
        Ok(text) => OutreachOutcome::Generated {
            message: text.trim().to_string(),
        },
        Err(e) => {
            tracing::error!(prospect = %prospect.id, error = %e, "outreach generation failed");
            OutreachOutcome::Failed {
                reason: FAILURE_MESSAGE.to_string(),
            }
        }
    }
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    agency: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        agency: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: model.into(),
            agency: agency.into(),
            base_url: GEMINI_API_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateResponse {
    fn text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

impl OutreachGenerator for GeminiClient {
    async fn generate(&self, request: &OutreachRequest) -> Result<String, GenerationError> {
        let api_key = self.api_key.as_deref().ok_or(GenerationError::MissingApiKey)?;
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": request.prompt(&self.agency) }] }]
        });

        tracing::debug!(model = %self.model, business = %request.business_name, "requesting outreach message");
        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(GenerationError::Status { status, body });
        }

        let parsed: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| GenerationError::Parse(e.to_string()))?;
        parsed.text().ok_or(GenerationError::EmptyResponse)
    }
}
