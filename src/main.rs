use clap::Parser;
use delivery_predict::banner;
use delivery_predict::cli::Cli;
use delivery_predict::client::HttpPredictor;
use delivery_predict::controller::{SubmissionController, SubmissionOutcome};
use delivery_predict::presentation::ConsoleSurface;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    banner::print_banner();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    if let Err(e) = dotenv {
        log::debug!("No .env file loaded: {}", e);
    }

    let client_config = match cli.client_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let form = match cli.form() {
        Ok(form) => form,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::from(2);
        }
    };

    log::info!("Prediction endpoint: {}", client_config.endpoint());

    let predictor = HttpPredictor::new(reqwest::Client::new(), client_config);
    let controller = SubmissionController::new(predictor, ConsoleSurface);

    match controller.submit(form).await {
        SubmissionOutcome::Predicted { .. } => ExitCode::SUCCESS,
        SubmissionOutcome::Failed { .. } | SubmissionOutcome::Ignored => ExitCode::FAILURE,
    }
}
