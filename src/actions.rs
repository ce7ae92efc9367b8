use crate::ai::client::GenerationService;
use crate::ai::flows::{ProfileContentSource, SpamFilterFlow};
use crate::core::forms::{ContactReceipt, ContactSubmission, FormData, FormResult, ProfileContent};
use crate::core::validation::{validate_contact, validate_profile};
use crate::error::ActionError;
use crate::notifier::Notifier;
use std::fmt::Display;
use std::sync::Arc;
use uuid::Uuid;

pub const INVALID_FORM_MESSAGE: &str = "Please correct the errors below.";
pub const CONTACT_SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
pub const PROFILE_SUCCESS_MESSAGE: &str = "Content generated successfully!";
const SPAM_REASON_FALLBACK: &str = "Not provided";
const UNEXPECTED_FALLBACK: &str = "An unexpected error occurred. Please try again later.";

/// Handles contact form submissions: validate, screen for spam, deliver.
pub struct ContactAction {
    spam_filter: SpamFilterFlow,
    notifier: Arc<dyn Notifier>,
}

impl ContactAction {
    pub fn new(service: Arc<dyn GenerationService>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            spam_filter: SpamFilterFlow::new(service),
            notifier,
        }
    }

    pub async fn submit(&self, form: &FormData) -> FormResult<ContactReceipt> {
        let reference = Uuid::new_v4().to_string();

        let submission = match validate_contact(form) {
            Ok(submission) => submission,
            Err(errors) => {
                log::info!(
                    "[{reference}] contact form rejected: invalid {:?}",
                    errors.fields().collect::<Vec<_>>()
                );
                return FormResult::Invalid {
                    message: INVALID_FORM_MESSAGE.to_string(),
                    errors,
                };
            }
        };

        match self.screen_and_send(&submission).await {
            Ok(Screened::Delivered) => {
                log::info!("✅ [{reference}] contact message accepted");
                FormResult::Success {
                    message: CONTACT_SUCCESS_MESSAGE.to_string(),
                    data: ContactReceipt { reference },
                }
            }
            Ok(Screened::Spam(reason)) => {
                log::warn!("🚫 [{reference}] contact message flagged as spam");
                let reason = reason.as_deref().unwrap_or(SPAM_REASON_FALLBACK);
                FormResult::Error {
                    error: format!("Your message was flagged as spam. Reason: {reason}"),
                    spam: true,
                }
            }
            Err(e) => {
                log::error!("❌ [{reference}] contact submission failed: {e}");
                unexpected_error(&e)
            }
        }
    }

    async fn screen_and_send(&self, submission: &ContactSubmission) -> Result<Screened, ActionError> {
        let verdict = self.spam_filter.check(submission).await?;
        if verdict.is_spam {
            return Ok(Screened::Spam(verdict.spam_reason));
        }
        self.notifier.send(submission).await?;
        Ok(Screened::Delivered)
    }
}

/// Handles the profile-content form: validate both links, then ask the
/// configured source for about-me and journey text.
pub struct ProfileAction {
    source: Arc<dyn ProfileContentSource>,
}

impl ProfileAction {
    pub fn new(source: Arc<dyn ProfileContentSource>) -> Self {
        Self { source }
    }

    pub async fn generate(&self, form: &FormData) -> FormResult<ProfileContent> {
        let request = match validate_profile(form) {
            Ok(request) => request,
            Err(errors) => {
                let message = errors.first().unwrap_or(INVALID_FORM_MESSAGE).to_string();
                return FormResult::Invalid { message, errors };
            }
        };

        match self.source.generate(&request).await {
            Ok(data) => FormResult::Success {
                message: PROFILE_SUCCESS_MESSAGE.to_string(),
                data,
            },
            Err(e) => {
                log::error!("❌ profile content generation failed: {e}");
                unexpected_error(&ActionError::from(e))
            }
        }
    }
}

enum Screened {
    Spam(Option<String>),
    Delivered,
}

fn unexpected_error<T>(err: &impl Display) -> FormResult<T> {
    let detail = err.to_string();
    let error = if detail.trim().is_empty() {
        UNEXPECTED_FALLBACK.to_string()
    } else {
        format!("An unexpected error occurred: {detail}")
    };
    FormResult::Error { error, spam: false }
}
