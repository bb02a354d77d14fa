//! Send one prompt to a Gemini model and print the raw reply.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use gemini_probe::cli::{self, TestPromptArgs};
use gemini_probe::{prompt, report};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    cli::init();
    let args = TestPromptArgs::parse();
    let config = args.prompt_config();

    let succeeded = match args.connection.client() {
        Ok(client) => prompt::run_reported(&client, &config, &mut io::stdout())
            .await
            .unwrap_or(false),
        Err(err) => {
            print!("{}", report::render_prompt_outcome(&Err(err)));
            false
        }
    };

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
