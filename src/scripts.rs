//! PowerShell snippets handed to the script host.

use std::path::Path;

const ELEVATED_FLAGS: &str = "-NoProfile -ExecutionPolicy Bypass -Command";

/// Single-quoted PowerShell literal; embedded quotes are doubled.
pub fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

fn quote_path(p: &Path) -> String {
    quote(&p.to_string_lossy())
}

/// Dot-source the helper, then the package script, in one session so the
/// helper's functions are visible to the install script.
pub fn install(helper: &Path, install_script: &Path) -> String {
    let helper_dir = helper.parent().unwrap_or(helper);
    format!(
        "$env:PSModulePath = {} + [IO.Path]::PathSeparator + $env:PSModulePath\n. {}\n. {}\n",
        quote_path(helper_dir),
        quote_path(helper),
        quote_path(install_script),
    )
}

/// Fetch and execute in memory; nothing touches disk.
pub fn remote_run(url: &str) -> String {
    format!("irm {} | iex", quote(url))
}

/// Start an elevated PowerShell that runs the bootstrap script.
pub fn bootstrap(program: &str, bootstrap_url: &str) -> String {
    let args = format!("{ELEVATED_FLAGS} irm {bootstrap_url} | iex");
    format!(
        "Start-Process {} -ArgumentList {} -Verb RunAs",
        quote(program),
        quote(&args)
    )
}

/// Start an elevated PowerShell that downloads the bootstrap script, compiles it
/// and runs it with `-i <itt_file>`, waiting for it to finish.
pub fn quick_install(program: &str, bootstrap_url: &str, itt_file: &Path) -> String {
    // No double quotes: they do not survive the child's command-line parsing.
    let args = format!(
        "{ELEVATED_FLAGS} & ([scriptblock]::Create((irm {bootstrap_url}))) -i {}",
        quote_path(itt_file)
    );
    format!(
        "Start-Process {} -ArgumentList {} -Verb RunAs -Wait",
        quote(program),
        quote(&args)
    )
}
