use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::error;

use salesight::ai::GeminiClient;
use salesight::api::function_handler;
use salesight::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    salesight::setup_logging();

    // Missing configuration keeps the runtime from accepting any request.
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    let generator = Arc::new(
        GeminiClient::new(config.gemini_api_key, config.gemini_model).map_err(|e| {
            error!("Failed to initialize Gemini client: {}", e);
            Error::from(e)
        })?,
    );

    run(service_fn(move |event: LambdaEvent<Value>| {
        let generator = Arc::clone(&generator);
        async move { function_handler(event, generator.as_ref()).await }
    }))
    .await
}
