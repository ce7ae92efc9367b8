mod actions;
mod config;
mod error;
mod notifier;
mod core {
    pub mod forms;
    pub mod validation;
}
mod ai {
    pub mod client;
    pub mod flows;
    pub mod prompts;
    pub mod schema_utils;
    #[cfg(test)]
    pub mod fakes;
}

use actions::{ContactAction, ProfileAction};
use ai::client::{GeminiClient, GenerationService};
use ai::flows::{MockProfileContent, ProfileContentFlow, ProfileContentSource};
use config::{ProfileSourceKind, Settings};
use crate::core::forms::{FormData, FormResult};
use dotenv::dotenv;
use notifier::SimulatedNotifier;
use serde::Serialize;
use std::io::Read;
use std::sync::Arc;

const USAGE: &str = "usage: folio-flows <contact|profile> < form.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let form_kind = std::env::args().nth(1).ok_or(USAGE)?;

    let settings = Settings::from_env()?;
    let client = GeminiClient::new(&settings.api_key, &settings.model, settings.timeout)?;
    log::info!("model: {}", client.model());
    let service: Arc<dyn GenerationService> = Arc::new(client);

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let form: FormData = serde_json::from_str(&input)?;

    let output = match form_kind.as_str() {
        "contact" => {
            let notifier = Arc::new(SimulatedNotifier::new(settings.send_delay));
            let action = ContactAction::new(service, notifier);
            render(&action.submit(&form).await)?
        }
        "profile" => {
            let source: Arc<dyn ProfileContentSource> = match settings.profile_source {
                ProfileSourceKind::Model => Arc::new(ProfileContentFlow::new(service)),
                ProfileSourceKind::Mock => Arc::new(MockProfileContent::new(settings.profile_delay)),
            };
            let action = ProfileAction::new(source);
            render(&action.generate(&form).await)?
        }
        _ => return Err(USAGE.into()),
    };

    println!("{output}");
    Ok(())
}

fn render<T: Serialize>(result: &FormResult<T>) -> serde_json::Result<String> {
    if result.is_success() {
        log::info!("✅ {}", result.message());
    } else if result.is_spam() {
        log::warn!("🚫 {}", result.message());
    } else if let Some(errors) = result.errors() {
        log::info!("{} invalid field(s): {}", errors.len(), result.message());
    } else {
        log::error!("❌ {}", result.message());
    }
    serde_json::to_string_pretty(result)
}
