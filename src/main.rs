mod cli;
mod command_handlers;
mod config;
mod console;
mod error;
mod host;
mod installer;
mod layout;
mod logging;
mod platform;
mod remote;
mod scripts;
mod session;
#[cfg(test)]
mod testing;
mod tweaks;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::IttConfig;
use crate::console::{StdinPrompt, TerminalReporter};
use crate::host::PowerShellHost;
use crate::remote::HttpSource;
use crate::session::Session;

// Every command outcome exits 0; only setup failures (bad config) return an error.
fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let cfg = IttConfig::load(cli.config.as_deref())?;
    tracing::debug!(?cfg, "loaded config");

    let remote = HttpSource::new()?;
    let host = PowerShellHost::new(cfg.powershell_program(), cfg.host.mode);
    let reporter = TerminalReporter::new();
    let mut prompt = StdinPrompt;
    let mut session = Session {
        config: &cfg,
        remote: &remote,
        host: &host,
        reporter: &reporter,
        prompt: &mut prompt,
    };
    command_handlers::dispatch::dispatch(Command::from_args(&cli.args), &mut session)?;
    Ok(())
}
