use crate::command_handlers::summarize;
use crate::installer;
use crate::session::Session;
use anyhow::Result;

/// Per-package failures are reported inside the pipeline and never fail the command.
pub fn run_install(names: &[String], auto_confirm: bool, session: &mut Session) -> Result<()> {
    let reqs = installer::requests(names, auto_confirm);
    let outcomes = installer::install_all(&reqs, session);
    summarize("installed", &outcomes, session.reporter);
    Ok(())
}
