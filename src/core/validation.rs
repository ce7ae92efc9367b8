use super::forms::{ContactSubmission, FieldErrors, FormData, ProfileRequest};
use regex::{Regex, RegexBuilder};
use reqwest::Url;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^[a-z0-9_'+.\-]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .case_insensitive(true)
        .build()
        .expect("email pattern compiles")
});

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

/// Checks a contact form submission. Every violated field is reported, with
/// at most one message per field.
pub fn validate_contact(form: &FormData) -> Result<ContactSubmission, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = required(form, "name", "Name is required.", &mut errors);
    if let Some(name) = &name {
        if name.chars().count() < NAME_MIN_CHARS {
            errors.add("name", "Name must be at least 2 characters.");
        }
    }

    let email = required(form, "email", "Email is required.", &mut errors);
    if let Some(email) = &email {
        if !is_valid_email(email) {
            errors.add("email", "Please enter a valid email address.");
        }
    }

    let message = required(form, "message", "Message is required.", &mut errors);
    if let Some(message) = &message {
        if message.chars().count() < MESSAGE_MIN_CHARS {
            errors.add("message", "Message must be at least 10 characters.");
        }
    }

    let topic = form
        .get("topic")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) if errors.is_empty() => Ok(ContactSubmission {
            name,
            email,
            message,
            topic,
        }),
        _ => Err(errors),
    }
}

/// Checks the profile-content form: both profile links must be absolute URLs.
pub fn validate_profile(form: &FormData) -> Result<ProfileRequest, FieldErrors> {
    let mut errors = FieldErrors::default();

    let linkedin = required_url(
        form,
        "linkedinProfileUrl",
        "LinkedIn profile URL is required.",
        "Please enter a valid LinkedIn URL.",
        &mut errors,
    );
    let github = required_url(
        form,
        "githubProfileUrl",
        "GitHub profile URL is required.",
        "Please enter a valid GitHub URL.",
        &mut errors,
    );

    match (linkedin, github) {
        (Some(linkedin_profile_url), Some(github_profile_url)) => Ok(ProfileRequest {
            linkedin_profile_url,
            github_profile_url,
        }),
        _ => Err(errors),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}

fn required(
    form: &FormData,
    field: &str,
    missing: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match form.get(field) {
        Some(value) => Some(value.trim().to_string()),
        None => {
            errors.add(field, missing);
            None
        }
    }
}

fn required_url(
    form: &FormData,
    field: &str,
    missing: &str,
    invalid: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    let value = required(form, field, missing, errors)?;
    if is_valid_url(&value) {
        Some(value)
    } else {
        errors.add(field, invalid);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormData {
        pairs.iter().copied().collect()
    }

    #[test]
    fn boundary_lengths_pass() {
        let submission = validate_contact(&form(&[
            ("name", "Al"),
            ("email", "a@b.com"),
            ("message", "1234567890"),
        ]))
        .unwrap();
        assert_eq!(submission.name, "Al");
        assert_eq!(submission.topic, None);
    }

    #[test]
    fn reports_every_violated_field_at_once() {
        let errors = validate_contact(&form(&[
            ("name", "A"),
            ("email", "bad"),
            ("message", "short"),
        ]))
        .unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.get("name").unwrap(),
            ["Name must be at least 2 characters."]
        );
        assert_eq!(
            errors.get("email").unwrap(),
            ["Please enter a valid email address."]
        );
        assert_eq!(
            errors.get("message").unwrap(),
            ["Message must be at least 10 characters."]
        );
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["name", "email", "message"]);
    }

    #[test]
    fn absent_fields_are_required() {
        let errors = validate_contact(&FormData::default()).unwrap_err();
        assert_eq!(errors.get("name").unwrap(), ["Name is required."]);
        assert_eq!(errors.get("email").unwrap(), ["Email is required."]);
        assert_eq!(errors.get("message").unwrap(), ["Message is required."]);
        assert!(errors.get("topic").is_none());
    }

    #[test]
    fn trims_fields_and_counts_after_trimming() {
        let submission = validate_contact(&form(&[
            ("name", "  Grace  "),
            ("email", " grace@navy.mil "),
            ("message", "  I would like to talk about compilers.  "),
            ("topic", "  Collaboration "),
        ]))
        .unwrap();
        assert_eq!(submission.name, "Grace");
        assert_eq!(submission.email, "grace@navy.mil");
        assert_eq!(submission.message, "I would like to talk about compilers.");
        assert_eq!(submission.topic.as_deref(), Some("Collaboration"));

        let errors = validate_contact(&form(&[
            ("name", " A "),
            ("email", "a@b.com"),
            ("message", "   123456789   "),
        ]))
        .unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["name", "message"]);
    }

    #[test]
    fn blank_topic_is_absent() {
        let submission = validate_contact(&form(&[
            ("name", "Al"),
            ("email", "a@b.com"),
            ("message", "1234567890"),
            ("topic", "   "),
        ]))
        .unwrap();
        assert_eq!(submission.topic, None);
    }

    #[test]
    fn validation_is_idempotent() {
        let input = form(&[("name", "A"), ("email", "x@y"), ("message", "hello world!")]);
        assert_eq!(validate_contact(&input), validate_contact(&input));
        let ok = form(&[("name", "Ada"), ("email", "ada@lovelace.org"), ("message", "hello world!")]);
        assert_eq!(validate_contact(&ok), validate_contact(&ok));
    }

    #[test]
    fn email_syntax() {
        for good in ["a@b.com", "first.last+tag@sub.example.co", "o'neil@mail.ie", "A_B-c@X-Y.ORG"] {
            assert!(is_valid_email(good), "{good} should be valid");
        }
        for bad in [
            "bad",
            "a@b",
            "@b.com",
            ".a@b.com",
            "a..b@c.com",
            "a.@b.com",
            "a@-b.com",
            "a@b.c",
            "a b@c.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn profile_urls_must_parse() {
        let request = validate_profile(&form(&[
            ("linkedinProfileUrl", "https://www.linkedin.com/in/ada"),
            ("githubProfileUrl", "https://github.com/ada"),
        ]))
        .unwrap();
        assert_eq!(request.github_profile_url, "https://github.com/ada");

        let errors = validate_profile(&form(&[
            ("linkedinProfileUrl", "https://www.linkedin.com/in/ada"),
            ("githubProfileUrl", "github.com/ada"),
        ]))
        .unwrap_err();
        assert!(errors.get("linkedinProfileUrl").is_none());
        assert_eq!(
            errors.get("githubProfileUrl").unwrap(),
            ["Please enter a valid GitHub URL."]
        );
    }

    #[test]
    fn profile_reports_both_fields() {
        let errors = validate_profile(&form(&[("linkedinProfileUrl", "not a url")])).unwrap_err();
        assert_eq!(errors.first(), Some("Please enter a valid LinkedIn URL."));
        assert_eq!(
            errors.get("githubProfileUrl").unwrap(),
            ["GitHub profile URL is required."]
        );
    }
}
