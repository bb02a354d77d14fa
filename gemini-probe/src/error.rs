//! Error definitions for the probe.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP client error: {source}")]
    HttpClient {
        #[from]
        source: reqwest::Error,
    },

    #[error("API error (status {status}): {body}")]
    ApiError { status: u16, body: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// 错误类别，供调用方按类别分支而不解析文本。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 域名解析、连接、TLS 等传输层失败。
    Transport,
    /// 服务端返回非 2xx 状态。
    Rejection,
    /// 响应结构不符合预期。
    DataShape,
    /// 本地配置无效。
    Config,
    /// 本地文件读写失败。
    Io,
}

impl Error {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::HttpClient { .. } => ErrorKind::Transport,
            Self::ApiError { .. } => ErrorKind::Rejection,
            Self::Serialization { .. } => ErrorKind::DataShape,
            Self::InvalidConfig { .. } => ErrorKind::Config,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// 远端拒绝时的状态码。
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cover_taxonomy() {
        let rejected = Error::ApiError {
            status: 403,
            body: "{\"error\":\"invalid key\"}".into(),
        };
        assert_eq!(rejected.kind(), ErrorKind::Rejection);
        assert_eq!(rejected.status(), Some(403));

        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let shape = Error::from(serde_err);
        assert_eq!(shape.kind(), ErrorKind::DataShape);
        assert_eq!(shape.status(), None);

        let io = Error::from(std::io::Error::other("disk full"));
        assert_eq!(io.kind(), ErrorKind::Io);

        let config = Error::InvalidConfig {
            message: "bad".into(),
        };
        assert_eq!(config.kind(), ErrorKind::Config);
    }

    #[test]
    fn api_error_display_includes_status_and_body() {
        let err = Error::ApiError {
            status: 500,
            body: "boom".into(),
        };
        assert_eq!(err.to_string(), "API error (status 500): boom");
    }
}
