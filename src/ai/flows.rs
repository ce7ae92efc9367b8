use super::client::{GenerationRequest, GenerationService};
use super::prompts;
use super::schema_utils;
use crate::core::forms::{ContactSubmission, ProfileContent, ProfileRequest, SpamVerdict};
use crate::error::FlowError;
use async_trait::async_trait;
use schemars::{JsonSchema, schema_for};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// Sends one prompt and parses the reply as `T`. The response schema is
/// derived from `T` and passed both to the API and, as documentation, in the
/// instructions. Malformed replies are reported, never retried.
pub async fn generate_structured<T: DeserializeOwned + JsonSchema>(
    service: &dyn GenerationService,
    instructions: &str,
    user_prompt: String,
    label: &'static str,
) -> Result<T, FlowError> {
    let raw_schema = schema_for!(T);
    let raw_schema_text = serde_json::to_string_pretty(&raw_schema)?;
    let response_schema = schema_utils::to_response_schema(&raw_schema)?;

    let request = GenerationRequest {
        system_prompt: format!("{instructions}\nREQUIRED OUTPUT SCHEMA:\n{raw_schema_text}"),
        user_prompt,
        response_schema: Some(response_schema),
        label,
    };

    let text = service.generate(&request).await?;
    serde_json::from_str(&text).map_err(|e| {
        log::warn!("[{label}] reply did not match schema: {e}");
        FlowError::MalformedOutput(format!("{label} parse failed: {e}"))
    })
}

pub struct SpamFilterFlow {
    service: Arc<dyn GenerationService>,
}

impl SpamFilterFlow {
    pub fn new(service: Arc<dyn GenerationService>) -> Self {
        Self { service }
    }

    pub async fn check(&self, submission: &ContactSubmission) -> Result<SpamVerdict, FlowError> {
        generate_structured(
            self.service.as_ref(),
            prompts::SPAM_FILTER_PROMPT,
            spam_prompt(submission),
            "SpamFilter",
        )
        .await
    }
}

fn spam_prompt(submission: &ContactSubmission) -> String {
    let mut prompt = format!(
        "Classify this contact form submission.\n\nName: {}\nEmail: {}\n",
        submission.name, submission.email
    );
    if let Some(topic) = &submission.topic {
        prompt.push_str(&format!("Topic: {topic}\n"));
    }
    prompt.push_str(&format!("Message:\n{}", submission.message));
    prompt
}

/// Produces the about-me and journey text for a pair of profile links.
#[async_trait]
pub trait ProfileContentSource: Send + Sync {
    async fn generate(&self, request: &ProfileRequest) -> Result<ProfileContent, FlowError>;
}

pub struct ProfileContentFlow {
    service: Arc<dyn GenerationService>,
}

impl ProfileContentFlow {
    pub fn new(service: Arc<dyn GenerationService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ProfileContentSource for ProfileContentFlow {
    async fn generate(&self, request: &ProfileRequest) -> Result<ProfileContent, FlowError> {
        let user = format!(
            "LinkedIn profile: {}\nGitHub profile: {}\n\nWrite the profile content.",
            request.linkedin_profile_url, request.github_profile_url
        );
        generate_structured(
            self.service.as_ref(),
            prompts::PROFILE_CONTENT_PROMPT,
            user,
            "ProfileContent",
        )
        .await
    }
}

pub const MOCK_ABOUT_ME: &str = "I'm a software engineer who enjoys turning ideas into fast, \
reliable products. I work across the stack, from systems code to polished interfaces, and I \
care about clean architecture, good tooling, and sharing what I learn with the community.";

pub const MOCK_JOURNEY: &str = "My journey started with tinkering on small scripts and open \
source projects, grew through internships and a first role building web applications, and led \
to designing larger distributed systems. Along the way I picked up new languages, mentored \
others, and kept shipping side projects to explore new technology.";

/// Stand-in source that waits, then returns fixed text without calling a
/// model.
pub struct MockProfileContent {
    delay: Duration,
}

impl MockProfileContent {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ProfileContentSource for MockProfileContent {
    async fn generate(&self, request: &ProfileRequest) -> Result<ProfileContent, FlowError> {
        log::info!(
            "🧪 mock profile content for {} / {}",
            request.linkedin_profile_url,
            request.github_profile_url
        );
        tokio::time::sleep(self.delay).await;
        Ok(ProfileContent {
            about_me_section: MOCK_ABOUT_ME.to_string(),
            journey_timeline: MOCK_JOURNEY.to_string(),
        })
    }
}
