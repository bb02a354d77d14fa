//! Command-line surface shared by the `list-models` and `test-prompt` binaries.

use std::path::PathBuf;

use clap::{Args, Parser};
use tracing_subscriber::EnvFilter;

use crate::client::{Client, ClientBuilder};
use crate::error::Result;
use crate::filter::{ModelFilter, DEFAULT_NAME_CONTAINS, DEFAULT_REQUIRED_METHOD};
use crate::lister::{ListerConfig, DEFAULT_OUTPUT_PATH};
use crate::prompt::{PromptConfig, DEFAULT_MODEL, DEFAULT_PROMPT};

/// Connection overrides layered on top of the environment.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Override the API base URL
    #[arg(long, env = "GENAI_BASE_URL")]
    pub base_url: Option<String>,

    /// Override the API version segment
    #[arg(long, env = "GENAI_API_VERSION")]
    pub api_version: Option<String>,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Proxy URL for all requests
    #[arg(long)]
    pub proxy: Option<String>,
}

impl ConnectionArgs {
    /// Build a client from `GEMINI_API_KEY`/`GOOGLE_API_KEY` plus these overrides.
    ///
    /// # Errors
    /// Returns an error when the key is missing or an override is invalid.
    pub fn client(&self) -> Result<Client> {
        self.apply(Client::builder_from_env()?).build()
    }

    fn apply(&self, mut builder: ClientBuilder) -> ClientBuilder {
        if let Some(base_url) = self.base_url.as_deref().filter(|v| !v.trim().is_empty()) {
            builder = builder.base_url(base_url);
        }
        if let Some(version) = self.api_version.as_deref().filter(|v| !v.trim().is_empty()) {
            builder = builder.api_version(version);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(proxy) = &self.proxy {
            builder = builder.proxy(proxy);
        }
        builder
    }
}

/// List Gemini models that support a generation method and save their names.
#[derive(Parser, Debug)]
#[command(name = "list-models")]
#[command(version)]
pub struct ListModelsArgs {
    /// File to write, one model name per line (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Case-insensitive substring the model name must contain
    #[arg(long, default_value = DEFAULT_NAME_CONTAINS)]
    pub name_contains: String,

    /// Generation method the model must support
    #[arg(long, default_value = DEFAULT_REQUIRED_METHOD)]
    pub method: String,

    /// Page size for the listing request
    #[arg(long)]
    pub page_size: Option<i32>,

    /// Follow nextPageToken until every page is read
    #[arg(long)]
    pub all_pages: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

impl ListModelsArgs {
    #[must_use]
    pub fn lister_config(&self) -> ListerConfig {
        ListerConfig {
            output_path: self.output.clone(),
            filter: ModelFilter::new(&self.name_contains, &self.method),
            page_size: self.page_size,
            all_pages: self.all_pages,
        }
    }
}

/// Send one prompt to a Gemini model and print the raw response.
#[derive(Parser, Debug)]
#[command(name = "test-prompt")]
#[command(version)]
pub struct TestPromptArgs {
    /// Model to call, with or without the `models/` prefix
    #[arg(short, long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Prompt text
    #[arg(short, long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

impl TestPromptArgs {
    #[must_use]
    pub fn prompt_config(&self) -> PromptConfig {
        PromptConfig {
            model: self.model.clone(),
            prompt: self.prompt.clone(),
        }
    }
}

/// Load `.env` and install a stderr `fmt` subscriber (`RUST_LOG`, default `warn`).
pub fn init() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .try_init()
        .ok();
}
