//! Hatchery CLI entrypoint for handling one submission issue.

use std::io::{self, Write};
use std::process::ExitCode;

use hatchery::actions::write_error_command;
use hatchery::{
    HatcheryConfig, HatcheryError, OctocrabSubmissionGateway, PersonalAccessToken,
    ProvisionedRepository, RustrictFilter, SubmissionFailure, SubmissionWorkflow,
};
use ortho_config::OrthoConfig;
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_LOG_FILTER: &str = "hatchery=info";

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Setup(#[from] HatcheryError),
    #[error(transparent)]
    Submission(#[from] SubmissionFailure),
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report_error(&error.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

async fn run() -> Result<(), RunError> {
    let config = load_config()?;

    let token = PersonalAccessToken::new(config.resolve_token()?)?;
    let api_base = config.resolve_api_url()?;
    let context = config.run_context()?;

    let gateway = OctocrabSubmissionGateway::for_token(&token, &api_base, &context)?;
    let workflow = SubmissionWorkflow::new(
        &gateway,
        RustrictFilter,
        context,
        config.workflow_config(),
    )?;
    let repository = workflow.run().await?;

    write_summary(workflow.context().organisation().as_str(), &repository)?;
    Ok(())
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`HatcheryError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<HatcheryConfig, HatcheryError> {
    HatcheryConfig::load().map_err(|error| HatcheryError::Configuration {
        message: error.to_string(),
    })
}

fn write_summary(owner: &str, repository: &ProvisionedRepository) -> Result<(), HatcheryError> {
    let mut stdout = io::stdout().lock();
    let message = format!(
        "Created {owner}/{name} for {creator}\nInvitation: {url}",
        name = repository.name,
        creator = repository.creator,
        url = repository.invitation_url,
    );

    writeln!(stdout, "{message}").map_err(|error| HatcheryError::Io {
        message: error.to_string(),
    })
}

/// Writes the failure to stderr and as a workflow annotation on stdout.
fn report_error(message: &str) {
    if writeln!(io::stderr().lock(), "{message}").is_err() {
        return;
    }
    if let Err(error) = write_error_command(&mut io::stdout().lock(), message) {
        tracing::warn!("failed to write error annotation: {error}");
    }
}
