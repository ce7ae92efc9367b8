use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("HTTP Error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("API Error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("No text content returned")]
    EmptyResponse,
}

impl From<reqwest::Error> for ServiceError {
    // Request URLs never reach error text.
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Http(err.without_url())
    }
}

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("Schema Error: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("Malformed model output: {0}")]
    MalformedOutput(String),
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Failures an action recovers from by showing a generic message.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error(transparent)]
    Flow(#[from] FlowError),

    #[error(transparent)]
    Send(#[from] SendError),
}
