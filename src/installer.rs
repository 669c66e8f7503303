use crate::console::confirm;
use crate::error::IttError;
use crate::host::{run_to_console, ExecutionResult};
use crate::layout::{validate_name, PackageLayout};
use crate::scripts;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequest {
    pub name: String,
    pub auto_confirm: bool,
}

/// How one requested name ended. Failures are values, never panics or early returns
/// out of the batch.
#[derive(Debug)]
pub enum Outcome {
    Completed(ExecutionResult),
    Declined,
    Skipped(IttError),
}

#[cfg(test)]
impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }
}

pub fn requests(names: &[String], auto_confirm: bool) -> Vec<PackageRequest> {
    names
        .iter()
        .map(|name| PackageRequest { name: name.clone(), auto_confirm })
        .collect()
}

/// Install each package in order, one at a time. A failed or declined package
/// never stops the ones after it.
pub fn install_all(reqs: &[PackageRequest], session: &mut Session) -> Vec<(String, Outcome)> {
    if reqs.is_empty() {
        session.reporter.info("[i] No package names provided");
        return Vec::new();
    }
    let mut outcomes = Vec::with_capacity(reqs.len());
    for req in reqs {
        let outcome = install_package(req, session);
        if let Outcome::Skipped(e) = &outcome {
            session.reporter.error(&format!("[x] {}: {e}", req.name));
        }
        outcomes.push((req.name.clone(), outcome));
    }
    outcomes
}

pub fn install_package(req: &PackageRequest, session: &mut Session) -> Outcome {
    match install_steps(req, session) {
        Ok(Some(result)) => Outcome::Completed(result),
        Ok(None) => Outcome::Declined,
        Err(e) => Outcome::Skipped(e),
    }
}

// Ok(None) means the user said no.
fn install_steps(
    req: &PackageRequest,
    session: &mut Session,
) -> Result<Option<ExecutionResult>, IttError> {
    let cfg = session.config;
    let name = req.name.as_str();
    validate_name(name)?;
    let url = cfg.package_script_url(name);

    if cfg.probe {
        session.remote.probe(name, &url)?;
    }

    if !req.auto_confirm {
        session.reporter.warn("[i] By installing, you accept licenses for the packages.");
        let question = format!("Are you sure you want to install the package '{name}' (y/No)");
        if !confirm(&mut *session.prompt, &question) {
            tracing::debug!("install of {name} declined");
            return Ok(None);
        }
    }

    session.reporter.info(&format!("[i] Downloading the following package {name}"));
    let layout = PackageLayout::new(&cfg.downloads_dir(), name);
    let tools = layout.ensure_dirs()?;
    tracing::debug!("tools dir {}", tools.display());

    let script = session.remote.fetch(name, &url)?;
    let script_path = layout.write_install_script(&script.text)?;
    tracing::debug!(
        "wrote {} bytes from {} to {}",
        script.text.len(),
        script.url,
        script_path.display()
    );

    let helper = cfg.helper_script();
    if !helper.is_file() {
        session
            .reporter
            .warn(&format!("[!] Helper script not found at {}", helper.display()));
    }
    let body = scripts::install(&helper, &script_path);
    let result = run_to_console(session.host, &body, session.reporter)?;
    Ok(Some(result))
}
