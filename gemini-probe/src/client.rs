//! Client configuration and transport layer.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as HttpClient, Proxy, Url};
use tracing::debug;

use crate::error::{Error, Result};

/// 默认服务地址（Gemini API）。
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";
/// 默认 API 版本。
pub const DEFAULT_API_VERSION: &str = "v1beta";
/// 凭据所在的查询参数名。
pub(crate) const KEY_PARAM: &str = "key";

/// Gemini 客户端。
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub http: HttpClient,
    pub config: ClientConfig,
    pub api_client: ApiClient,
}

/// 客户端配置。
#[derive(Clone)]
pub struct ClientConfig {
    /// API 密钥，以 `key` 查询参数发送。
    pub api_key: String,
    /// HTTP 配置。
    pub http_options: HttpOptions,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("http_options", &self.http_options)
            .finish()
    }
}

/// HTTP 配置。
#[derive(Debug, Clone, Default)]
pub struct HttpOptions {
    /// 请求超时（秒）；默认不设超时。
    pub timeout: Option<u64>,
    pub proxy: Option<String>,
    pub headers: HashMap<String, String>,
    pub base_url: Option<String>,
    pub api_version: Option<String>,
}

impl Client {
    /// 使用 API Key 创建客户端。
    ///
    /// # Errors
    /// 当密钥为空或构建 HTTP 客户端失败时返回错误。
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// 从环境变量创建客户端。
    ///
    /// 依次读取 `GEMINI_API_KEY`、`GOOGLE_API_KEY`；`GENAI_BASE_URL`（或
    /// `GEMINI_BASE_URL`）与 `GENAI_API_VERSION` 为空白时忽略。
    ///
    /// # Errors
    /// 当环境变量缺失或构建客户端失败时返回错误。
    pub fn from_env() -> Result<Self> {
        Self::builder_from_env()?.build()
    }

    /// 从环境变量预填 Builder，便于再叠加命令行覆盖项。
    ///
    /// # Errors
    /// 当 API Key 环境变量缺失时返回错误。
    pub fn builder_from_env() -> Result<ClientBuilder> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .map_err(|_| Error::InvalidConfig {
                message: "GEMINI_API_KEY or GOOGLE_API_KEY not found".into(),
            })?;
        let mut builder = Self::builder().api_key(api_key);
        if let Ok(base_url) =
            std::env::var("GENAI_BASE_URL").or_else(|_| std::env::var("GEMINI_BASE_URL"))
        {
            if !base_url.trim().is_empty() {
                builder = builder.base_url(base_url);
            }
        }
        if let Ok(api_version) = std::env::var("GENAI_API_VERSION") {
            if !api_version.trim().is_empty() {
                builder = builder.api_version(api_version);
            }
        }
        Ok(builder)
    }

    /// 创建 Builder。
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// 访问 Models API。
    #[must_use]
    pub fn models(&self) -> crate::models::Models {
        crate::models::Models::new(self.inner.clone())
    }

    /// 当前配置。
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

/// 客户端 Builder。
#[derive(Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    http_options: HttpOptions,
}

impl ClientBuilder {
    /// 设置 API Key。
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// 设置请求超时（秒）。
    #[must_use]
    pub const fn timeout(mut self, secs: u64) -> Self {
        self.http_options.timeout = Some(secs);
        self
    }

    /// 设置代理。
    #[must_use]
    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.http_options.proxy = Some(url.into());
        self
    }

    /// 增加默认 HTTP 头。
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.http_options.headers.insert(key.into(), value.into());
        self
    }

    /// 设置自定义基础 URL。
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.http_options.base_url = Some(base_url.into());
        self
    }

    /// 设置 API 版本。
    #[must_use]
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.http_options.api_version = Some(api_version.into());
        self
    }

    /// 构建客户端。
    ///
    /// # Errors
    /// 当密钥缺失或为空、参数无效或构建 HTTP 客户端失败时返回错误。
    pub fn build(self) -> Result<Client> {
        let Self {
            api_key,
            http_options,
        } = self;

        let api_key = Self::resolve_api_key(api_key)?;
        let headers = Self::build_headers(&http_options)?;
        let http = Self::build_http_client(&http_options, headers)?;
        let config = ClientConfig {
            api_key,
            http_options,
        };
        let api_client = ApiClient::new(&config)?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                http,
                config,
                api_client,
            }),
        })
    }

    fn resolve_api_key(api_key: Option<String>) -> Result<String> {
        let api_key = api_key.ok_or_else(|| Error::InvalidConfig {
            message: "API key required".into(),
        })?;
        let trimmed = api_key.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidConfig {
                message: "API key must not be empty".into(),
            });
        }
        if trimmed.chars().any(char::is_control) {
            return Err(Error::InvalidConfig {
                message: "Invalid API key value".into(),
            });
        }
        Ok(trimmed.to_string())
    }

    fn build_headers(http_options: &HttpOptions) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (key, value) in &http_options.headers {
            let name =
                HeaderName::from_bytes(key.as_bytes()).map_err(|_| Error::InvalidConfig {
                    message: format!("Invalid header name: {key}"),
                })?;
            let value = HeaderValue::from_str(value).map_err(|_| Error::InvalidConfig {
                message: format!("Invalid header value for {key}"),
            })?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    fn build_http_client(http_options: &HttpOptions, headers: HeaderMap) -> Result<HttpClient> {
        let mut http_builder = HttpClient::builder();
        if let Some(timeout) = http_options.timeout {
            http_builder = http_builder.timeout(Duration::from_secs(timeout));
        }

        if let Some(proxy_url) = &http_options.proxy {
            let proxy = Proxy::all(proxy_url).map_err(|e| Error::InvalidConfig {
                message: format!("Invalid proxy: {e}"),
            })?;
            http_builder = http_builder.proxy(proxy);
        }

        if !headers.is_empty() {
            http_builder = http_builder.default_headers(headers);
        }

        Ok(http_builder.build()?)
    }
}

impl ClientInner {
    /// 拼接 `{base}{version}/{path}`，不含凭据。
    ///
    /// # Errors
    /// 当拼接结果不是合法 URL 时返回错误。
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let base = &self.api_client.base_url;
        let version = &self.api_client.api_version;
        let raw = format!("{base}{version}/{}", path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|err| Error::InvalidConfig {
            message: format!("Invalid endpoint {raw}: {err}"),
        })
    }

    /// 注入 `key` 查询参数后发送请求。
    ///
    /// # Errors
    /// 请求构建失败返回 [`Error::InvalidConfig`]；网络请求失败返回 [`Error::HttpClient`]。
    pub async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let mut request = request.build().map_err(|err| Error::InvalidConfig {
            message: format!("Invalid request: {}", err.without_url()),
        })?;
        debug!(
            method = %request.method(),
            url = %redact_key(request.url()),
            "sending request"
        );
        request
            .url_mut()
            .query_pairs_mut()
            .append_pair(KEY_PARAM, &self.config.api_key);
        let response = self
            .http
            .execute(request)
            .await
            .map_err(reqwest::Error::without_url)?;
        debug!(status = response.status().as_u16(), "response received");
        Ok(response)
    }
}

/// 去掉 URL 中的 `key` 查询参数，用于打印和日志。
#[must_use]
pub fn redact_key(url: &Url) -> String {
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(name, _)| name != KEY_PARAM)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();
    let mut redacted = url.clone();
    if retained.is_empty() {
        redacted.set_query(None);
    } else {
        redacted.query_pairs_mut().clear().extend_pairs(retained);
    }
    redacted.to_string()
}

pub(crate) struct ApiClient {
    pub base_url: String,
    pub api_version: String,
}

impl ApiClient {
    /// 创建 API 地址配置。
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config
            .http_options
            .base_url
            .as_deref()
            .map_or_else(|| DEFAULT_BASE_URL.to_string(), normalize_base_url);
        Url::parse(&base_url).map_err(|err| Error::InvalidConfig {
            message: format!("Invalid base URL {base_url}: {err}"),
        })?;

        let api_version = config
            .http_options
            .api_version
            .as_deref()
            .map(|version| version.trim().trim_matches('/').to_string())
            .filter(|version| !version.is_empty())
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        Ok(Self {
            base_url,
            api_version,
        })
    }
}

fn normalize_base_url(base_url: &str) -> String {
    let mut value = base_url.trim().to_string();
    if !value.ends_with('/') {
        value.push('/');
    }
    value
}
