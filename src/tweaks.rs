use crate::console::confirm;
use crate::error::IttError;
use crate::host::{run_to_console, ExecutionResult};
use crate::installer::Outcome;
use crate::layout::validate_name;
use crate::scripts;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweakRequest {
    pub name: String,
    pub auto_confirm: bool,
}

pub fn requests(names: &[String], auto_confirm: bool) -> Vec<TweakRequest> {
    names
        .iter()
        .map(|name| TweakRequest { name: name.clone(), auto_confirm })
        .collect()
}

/// Apply each tweak in order. Tweaks run straight from the remote URL, so a bad
/// name only shows up on the host's error stream.
pub fn apply_all(reqs: &[TweakRequest], session: &mut Session) -> Vec<(String, Outcome)> {
    if reqs.is_empty() {
        session.reporter.info("[i] No tweak names provided");
        return Vec::new();
    }
    let mut outcomes = Vec::with_capacity(reqs.len());
    for req in reqs {
        let outcome = match apply(req, session) {
            Ok(Some(result)) => Outcome::Completed(result),
            Ok(None) => Outcome::Declined,
            Err(e) => {
                session.reporter.error(&format!("[x] {}: {e}", req.name));
                Outcome::Skipped(e)
            }
        };
        outcomes.push((req.name.clone(), outcome));
    }
    outcomes
}

fn apply(req: &TweakRequest, session: &mut Session) -> Result<Option<ExecutionResult>, IttError> {
    let name = req.name.as_str();
    validate_name(name)?;
    session.reporter.info(&format!("[+] Applying tweak: {name}"));

    if !req.auto_confirm {
        let question = format!("Are you sure you want to apply '{name}'? (yes/y to confirm)");
        if !confirm(&mut *session.prompt, &question) {
            tracing::debug!("tweak {name} declined");
            return Ok(None);
        }
    }

    let url = session.config.tweak_script_url(name);
    tracing::debug!("running tweak from {url}");
    let result = run_to_console(session.host, &scripts::remote_run(&url), session.reporter)?;
    Ok(Some(result))
}
