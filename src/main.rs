mod analyzer;
mod cli;

use std::process::ExitCode;

use log::debug;

#[tokio::main]
async fn main() -> ExitCode {
    // Settings may come from a .env file in the working directory
    let dotenv = dotenvy::dotenv();
    env_logger::init();
    if let Ok(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    match cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
