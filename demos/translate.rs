//! Manual smoke test against the real DeepL API
//!
//! Requires DEEPL_AUTH_KEY in the environment or a .env file.
//!
//! ```sh
//! cargo run --example translate -- "Hello, how are you?" DE
//! ```

use deepl_plugin::{DeeplPlugin, HandlerPayload, Message};
use dotenvy::dotenv;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deepl_plugin=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let text = args.next().unwrap_or_else(|| "Hello, World!".to_string());
    let target_lang = args.next().unwrap_or_else(|| "DE".to_string());

    let plugin = DeeplPlugin::from_settings(&deepl_plugin::EnvSettings)?;

    let message = Message::new(json!({
        "text": text,
        "targetLang": target_lang,
        "debug": true
    }));

    let ok = plugin
        .translate
        .handle(
            &message,
            Some(|payload: HandlerPayload| {
                println!("{}", payload.text);
                println!("{}", serde_json::to_string_pretty(&payload.content).unwrap());
            }),
        )
        .await;

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}
