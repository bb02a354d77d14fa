use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `generateContent` 的原始成功响应。
///
/// 响应体按原样保存，不做结构解析；调用方需要时可用 [`GenerationResponse::json`]
/// 自行解码。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GenerationResponse {
    /// HTTP 状态码。
    pub status: u16,
    /// 响应头（同名头以 `, ` 合并）。
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// 原始响应体文本。
    pub body: String,
}

impl GenerationResponse {
    /// 将响应体解码为 JSON。
    ///
    /// # Errors
    /// 响应体不是合法 JSON 时返回错误。
    pub fn json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }

    /// 读取响应头（名称小写）。
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
