use crate::command_handlers::summarize;
use crate::session::Session;
use crate::tweaks;
use anyhow::Result;

pub fn run_tweak(names: &[String], auto_confirm: bool, session: &mut Session) -> Result<()> {
    let reqs = tweaks::requests(names, auto_confirm);
    let outcomes = tweaks::apply_all(&reqs, session);
    summarize("applied", &outcomes, session.reporter);
    Ok(())
}
