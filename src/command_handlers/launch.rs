use crate::error::IttError;
use crate::host::run_to_console;
use crate::scripts;
use crate::session::Session;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Hand off to the full ITT app: an elevated PowerShell running the bootstrap script.
pub fn bootstrap(session: &mut Session) -> Result<()> {
    let cfg = session.config;
    session.reporter.info("Starting ITT...");
    let script = scripts::bootstrap(&cfg.powershell_program(), &cfg.bootstrap_url);
    if let Err(e) = run_to_console(session.host, &script, session.reporter) {
        session.reporter.error(&format!("[x] {e}"));
    }
    Ok(())
}

/// Feed a saved `.itt` selection file to the ITT app and wait for it.
pub fn quick_install(file: Option<&str>, session: &mut Session) -> Result<()> {
    let cfg = session.config;
    let Some(file) = file.filter(|f| !f.trim().is_empty()) else {
        session.reporter.info("[i] Missing file path. Use: itt q <file.itt>");
        return Ok(());
    };
    let path = match resolve_itt_file(Path::new(file)) {
        Ok(p) => p,
        Err(e) => {
            session.reporter.error(&format!("[x] {e}"));
            return Ok(());
        }
    };
    tracing::debug!("quick install from {}", path.display());
    let script = scripts::quick_install(&cfg.powershell_program(), &cfg.bootstrap_url, &path);
    if let Err(e) = run_to_console(session.host, &script, session.reporter) {
        session.reporter.error(&format!("[x] Failed to start process: {e}"));
    }
    Ok(())
}

fn resolve_itt_file(file: &Path) -> Result<PathBuf, IttError> {
    let abs = std::path::absolute(file).map_err(|e| IttError::io("resolving", file, e))?;
    if !abs.is_file() {
        return Err(IttError::io(
            "reading",
            &abs,
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        ));
    }
    Ok(abs)
}
