use clap::Parser;
use ping_service::{
    config::{Cli, Config},
    error::{ServiceError, exit_code},
    logging, server,
    state::AppState,
};
use std::process::ExitCode;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<ExitCode, ServiceError> {
    let config = Config::from(Cli::parse());

    logging::init(&config);
    debug!("config: {:?}", config);

    let debug = config.debug;
    let result = server::run(AppState::new(config)).await;

    exit_code(result, debug).map(ExitCode::from)
}
