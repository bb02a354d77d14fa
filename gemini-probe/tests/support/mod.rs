#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gemini_probe::Client;

pub fn build_gemini_client(base_url: &str) -> Client {
    Client::builder()
        .api_key("test-key")
        .base_url(base_url)
        .build()
        .unwrap()
}

pub fn sample_listing() -> Value {
    json!({
        "models": [
            {
                "name": "models/embedding-gecko-001",
                "supportedGenerationMethods": ["embedText", "countTextTokens"]
            },
            {
                "name": "models/gemini-2.0-flash",
                "displayName": "Gemini 2.0 Flash",
                "supportedGenerationMethods": ["generateContent", "countTokens"]
            },
            {
                "name": "models/gemini-embedding-001",
                "supportedGenerationMethods": ["embedContent"]
            },
            {
                "name": "models/Gemini-Flash-Latest",
                "supportedGenerationMethods": ["generateContent"]
            },
            {
                "name": "models/gemini-pro-vision"
            },
            {
                "name": "models/gemma-3-27b-it",
                "supportedGenerationMethods": ["generateContent"]
            },
            {
                "name": "models/gemini-1.5-pro",
                "supportedGenerationMethods": ["countTokens", "generateContent", "createCachedContent"]
            }
        ]
    })
}

pub async fn mount_listing(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
