use serde::{Deserialize, Serialize};

/// 对话内容。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// 消息内容片段。
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// 创建单段文本内容。
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::text(text)],
        }
    }

    /// 从 parts 构建内容。
    #[must_use]
    pub const fn from_parts(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    /// 提取第一段文本。
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.parts.first().map(|part| part.text.as_str())
    }
}

/// 内容部分（纯文本）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl Part {
    /// 创建文本 Part。
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// `generateContent` 请求体。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub contents: Vec<Content>,
}

impl GenerationRequest {
    /// 单轮、单段文本的请求。
    pub fn single_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::text(prompt)],
        }
    }

    /// 从多个内容构建请求（保持顺序）。
    #[must_use]
    pub const fn from_contents(contents: Vec<Content>) -> Self {
        Self { contents }
    }

    /// 提取第一条内容的第一段文本。
    #[must_use]
    pub fn prompt_text(&self) -> Option<&str> {
        self.contents.first().and_then(Content::first_text)
    }
}
