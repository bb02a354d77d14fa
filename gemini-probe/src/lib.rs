//! Probe the Gemini API: list models by capability and smoke-test `generateContent`.

pub mod cli;
pub mod client;
pub mod error;
pub mod filter;
mod http_response;
pub mod lister;
pub mod models;
pub mod prompt;
pub mod report;

#[cfg(test)]
mod test_support;

pub use gemini_probe_types as types;

pub use client::{Client, ClientBuilder, ClientConfig, HttpOptions};
pub use error::{Error, ErrorKind, Result};
pub use filter::ModelFilter;
pub use lister::{ListerConfig, ListerReport};
pub use prompt::PromptConfig;
