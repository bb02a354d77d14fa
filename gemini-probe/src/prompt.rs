//! Prompt tester: send one single-turn prompt and hand back the raw reply.

use std::io::Write;

use gemini_probe_types::{GenerationRequest, GenerationResponse};
use tracing::info;

use crate::client::{redact_key, Client};
use crate::error::Result;
use crate::report::render_prompt_outcome;

/// 默认模型。
pub const DEFAULT_MODEL: &str = "gemini-flash-latest";
/// 默认提示词。
pub const DEFAULT_PROMPT: &str = "Hello, are you working?";

/// Prompt tester 配置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    /// 目标模型，可带或不带 `models/` 前缀。
    pub model: String,
    /// 发送的提示词。
    pub prompt: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl PromptConfig {
    #[must_use]
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::single_prompt(self.prompt.clone())
    }
}

/// 请求地址（已去除凭据），用于打印。
///
/// # Errors
/// 模型名无法组成合法 URL 时返回错误。
pub fn target_url(client: &Client, config: &PromptConfig) -> Result<String> {
    let url = client.models().generate_content_url(&config.model)?;
    Ok(redact_key(&url))
}

/// 发送一次 `generateContent` 请求。
///
/// # Errors
/// 传输失败、远端拒绝或请求序列化失败时返回错误；不重试。
pub async fn run(client: &Client, config: &PromptConfig) -> Result<GenerationResponse> {
    let response = client
        .models()
        .generate_content(&config.model, &config.request())
        .await?;
    info!(model = %config.model, status = response.status, "prompt answered");
    Ok(response)
}

/// 完整的控制台过程：先打印请求地址与 `Sending request...`，再打印结果。
///
/// 返回请求是否成功。
///
/// # Errors
/// 仅当写入 `out` 失败时返回错误。
pub async fn run_reported<W: Write>(
    client: &Client,
    config: &PromptConfig,
    out: &mut W,
) -> Result<bool> {
    let outcome = match target_url(client, config) {
        Ok(url) => {
            writeln!(out, "Testing URL: {url}")?;
            writeln!(out, "Sending request...")?;
            out.flush()?;
            run(client, config).await
        }
        Err(err) => Err(err),
    };
    write!(out, "{}", render_prompt_outcome(&outcome))?;
    out.flush()?;
    Ok(outcome.is_ok())
}
