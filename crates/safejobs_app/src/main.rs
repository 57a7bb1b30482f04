mod config;
mod logging;
mod session;

use std::io;

use anyhow::Context;
use pipeline_logging::pipeline_info;
use safejobs_core::ExitStatus;
use safejobs_engine::Engine;

use crate::config::AppConfig;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    logging::initialize(config.log_destination);
    pipeline_info!(
        "Starting safejobs: search={} safe_states={} max_attempts={}",
        config.engine.search.endpoint,
        config.engine.safe_states_url,
        config.max_attempts
    );

    let engine = Engine::new(config.engine).context("failed to start HTTP runtime")?;
    let safe_states = engine.scrape_safe_states();

    let status = session::run_session(
        &engine,
        safe_states,
        config.max_attempts,
        io::stdin().lock(),
        io::stdout().lock(),
    )
    .context("terminal IO failed")?;

    match status {
        ExitStatus::Success => Ok(()),
        other => std::process::exit(other.code()),
    }
}
