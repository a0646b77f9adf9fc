use eyre::{Result, eyre};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    /// Plain lines for CloudWatch, which stamps its own timestamps.
    Lambda,
    Terminal,
}

/// Initialize the tracing subscriber. The filter comes from RUST_LOG and
/// defaults to `info`.
pub fn init_tracing(output: LogOutput) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match output {
        LogOutput::Lambda => tracing_subscriber::registry()
            .with(
                fmt::Layer::new()
                    .with_ansi(false)
                    .without_time()
                    .with_target(true),
            )
            .with(filter)
            .try_init(),
        LogOutput::Terminal => tracing_subscriber::registry()
            .with(fmt::Layer::default().with_ansi(true).with_target(true))
            .with(filter)
            .try_init(),
    };
    result.map_err(|e| eyre!("Failed to set global default subscriber: {}", e))?;

    tracing::debug!(
        target: "cfn_relay::utils::tracing",
        ?output,
        "Tracing initialized. Filter configured via RUST_LOG env var."
    );

    Ok(())
}
