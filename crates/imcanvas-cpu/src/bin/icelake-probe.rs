//! Exits with 1 when the host CPU supports the Icelake extension set, 0 otherwise.

use std::process::ExitCode;

use imcanvas_cpu::{detect_supported_instruction, probe_exit_code};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    let mask = detect_supported_instruction();
    let code = probe_exit_code(mask);
    tracing::info!(?mask, code, "icelake probe");
    Ok(ExitCode::from(code))
}
