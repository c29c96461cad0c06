use anyhow::{Context, Result};
use ipweather::{ApiClient, Presenter, ReportError, ReporterConfig, logging, report};
use std::io::{IsTerminal, Write};
use std::process::ExitCode;
use tracing::error;

fn run(config: ReporterConfig) -> Result<()> {
    let client = ApiClient::new(config).context("Client setup error")?;
    let presenter = Presenter::new(std::io::stdout().is_terminal());

    let text = report::generate(&client, &presenter).context("Weather report error")?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write report")?;
    Ok(())
}

fn main() -> ExitCode {
    let config = ReporterConfig::default();
    logging::init(&config.logging);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(report_error) = e.downcast_ref::<ReportError>() {
                error!("{}", report_error.user_message());
            }
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
