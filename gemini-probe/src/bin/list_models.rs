//! Save the names of Gemini models that support `generateContent`.

use std::process::ExitCode;

use clap::Parser;
use gemini_probe::cli::{self, ListModelsArgs};
use gemini_probe::{lister, report};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    cli::init();
    let args = ListModelsArgs::parse();

    let outcome = match args.connection.client() {
        Ok(client) => lister::run(&client, &args.lister_config()).await,
        Err(err) => Err(err),
    };
    print!("{}", report::render_lister_outcome(&outcome));

    if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
