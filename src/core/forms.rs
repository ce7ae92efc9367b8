use schemars::JsonSchema;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// Raw fields of one HTML form submission. A missing key and an explicit
/// `null` both mean the field is absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct FormData(HashMap<String, Option<String>>);

impl FormData {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(|v| v.as_deref())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpamVerdict {
    #[schemars(description = "True if the message is spam, promotional, or abusive.")]
    pub is_spam: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Short reason for the classification. Only set when isSpam is true.")]
    pub spam_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub linkedin_profile_url: String,
    pub github_profile_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileContent {
    #[schemars(description = "A first-person 'About Me' paragraph.")]
    pub about_me_section: String,
    #[schemars(description = "A narrative paragraph describing the career journey in chronological order.")]
    pub journey_timeline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReceipt {
    pub reference: String,
}

/// Field name -> violation messages, kept in the order fields were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, Vec<String>)>,
}

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(name, _)| name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((field.to_string(), vec![message])),
        }
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    pub fn first(&self) -> Option<&str> {
        self.entries
            .first()
            .and_then(|(_, messages)| messages.first())
            .map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

/// Outcome of one form action. Exactly one of validation errors, success
/// data or a user-facing error is carried.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FormResult<T> {
    Invalid { message: String, errors: FieldErrors },
    Success { message: String, data: T },
    Error { error: String, spam: bool },
}

impl<T> FormResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, FormResult::Success { .. })
    }

    pub fn is_spam(&self) -> bool {
        matches!(self, FormResult::Error { spam: true, .. })
    }

    /// The text the UI shows above the form.
    pub fn message(&self) -> &str {
        match self {
            FormResult::Invalid { message, .. } | FormResult::Success { message, .. } => message,
            FormResult::Error { error, .. } => error,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            FormResult::Invalid { errors, .. } => Some(errors),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn data(&self) -> Option<&T> {
        match self {
            FormResult::Success { data, .. } => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn form_data_treats_null_as_absent() {
        let form: FormData =
            serde_json::from_value(json!({ "name": "Ada", "topic": null })).unwrap();
        assert_eq!(form.get("name"), Some("Ada"));
        assert_eq!(form.get("topic"), None);
        assert_eq!(form.get("email"), None);
    }

    #[test]
    fn verdict_without_reason_keeps_reason_absent() {
        let verdict: SpamVerdict = serde_json::from_str(r#"{"isSpam": false}"#).unwrap();
        assert_eq!(verdict.spam_reason, None);
        assert_eq!(serde_json::to_value(&verdict).unwrap(), json!({ "isSpam": false }));
    }

    #[test]
    fn field_errors_serialize_in_check_order() {
        let mut errors = FieldErrors::default();
        errors.add("name", "too short");
        errors.add("email", "bad");
        errors.add("name", "again");
        let text = serde_json::to_string(&errors).unwrap();
        assert_eq!(text, r#"{"name":["too short","again"],"email":["bad"]}"#);
        assert_eq!(errors.first(), Some("too short"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn form_result_is_tagged_by_status() {
        let spam: FormResult<ContactReceipt> = FormResult::Error {
            error: "nope".into(),
            spam: true,
        };
        assert!(spam.is_spam());
        assert_eq!(
            serde_json::to_value(&spam).unwrap(),
            json!({ "status": "error", "error": "nope", "spam": true })
        );

        let ok = FormResult::Success {
            message: "done".into(),
            data: ContactReceipt { reference: "r1".into() },
        };
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({ "status": "success", "message": "done", "data": { "reference": "r1" } })
        );
    }
}
