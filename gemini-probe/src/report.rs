//! Console rendering for both flows.
//!
//! Both binaries print everything, errors included, to stdout; these helpers
//! return the text so it can be asserted on without a terminal.

use std::error::Error as StdError;

use gemini_probe_types::GenerationResponse;

use crate::error::{Error, Result};
use crate::lister::ListerReport;

/// Prompt tester 输出。
#[must_use]
pub fn render_prompt_outcome(outcome: &Result<GenerationResponse>) -> String {
    match outcome {
        Ok(response) => format!("Status: {}\nResponse:\n{}\n", response.status, response.body),
        Err(err) => render_prompt_error(err),
    }
}

/// 按错误类别输出：远端拒绝、传输失败、其余。
#[must_use]
pub fn render_prompt_error(err: &Error) -> String {
    match err {
        Error::ApiError { status, body } => format!("HTTP Error: {status}\n{body}\n"),
        Error::HttpClient { source } => format!("URL Error: {}\n", reason_chain(source)),
        _ => format!("General Error: {err}\n"),
    }
}

/// Lister 输出。
#[must_use]
pub fn render_lister_outcome(outcome: &Result<ListerReport>) -> String {
    match outcome {
        Ok(report) => format!("Models saved to {}\n", report.output_path.display()),
        Err(err) => format!("Error: {err}\n"),
    }
}

/// 将错误及其 source 链拼成一行。
fn reason_chain(err: &dyn StdError) -> String {
    let mut reason = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !reason.contains(&text) {
            reason.push_str(": ");
            reason.push_str(&text);
        }
        source = cause.source();
    }
    reason
}
