use deepl_plugin::{DeeplClient, DeeplConfig, TranslationRequest, DEEPL_AUTH_KEY};

fn settings(key: &str) -> Option<String> {
    (key == DEEPL_AUTH_KEY).then(|| "test_key".to_string())
}

#[tokio::main]
async fn main() {
    let config = DeeplConfig::resolve(&settings)
        .unwrap()
        .with_endpoint("http://127.0.0.1:59999/v2/translate".to_string());
    let client = DeeplClient::new(config).unwrap();
    let err = client.translate(&TranslationRequest::new("Hello", "DE")).await.unwrap_err();
    println!("{err:?}");
    println!("{err}");
}
