use crate::core::forms::ContactSubmission;
use crate::error::SendError;
use async_trait::async_trait;
use std::time::Duration;

/// Delivers an accepted contact message to the site owner.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), SendError>;
}

/// Pretends to deliver: waits for `delay`, then logs the delivery.
pub struct SimulatedNotifier {
    delay: Duration,
}

impl SimulatedNotifier {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Notifier for SimulatedNotifier {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), SendError> {
        tokio::time::sleep(self.delay).await;
        log::info!(
            "📨 delivered message from {} ({} chars, topic: {})",
            submission.name,
            submission.message.chars().count(),
            submission.topic.as_deref().unwrap_or("none")
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn simulated_send_waits_for_delay() {
        let notifier = SimulatedNotifier::new(Duration::from_millis(20));
        let submission = ContactSubmission {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello there, friend".into(),
            topic: None,
        };
        let started = Instant::now();
        notifier.send(&submission).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
