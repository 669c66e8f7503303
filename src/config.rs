use crate::error::IttError;
use crate::platform::platform;
use fs_err as fs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_PACKAGES_URL: &str =
    "https://raw.githubusercontent.com/itt-co/itt-packages/main/automation";
pub const DEFAULT_TWEAKS_URL: &str = "https://raw.githubusercontent.com/itt-co/itt-tweaks/main";
pub const DEFAULT_BOOTSTRAP_URL: &str = "bit.ly/ittea";
pub const CONFIG_FILE_NAME: &str = "itt.toml";

/// Resolved settings used by every command.
#[derive(Debug, Clone)]
pub struct IttConfig {
    /// `<common app data>/itt` unless overridden.
    pub home: PathBuf,
    pub packages_url: String,
    pub tweaks_url: String,
    pub bootstrap_url: String,
    /// HEAD the install script before prompting.
    pub probe: bool,
    pub on_empty: EmptyAction,
    pub host: HostConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmptyAction {
    #[default]
    Bootstrap,
    Noop,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HostMode {
    #[default]
    Streaming,
    Buffered,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct HostConfig {
    /// PowerShell executable; falls back to the platform default.
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub mode: HostMode,
}

/// On-disk shape of itt.toml. Every key is optional.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    home: Option<PathBuf>,
    #[serde(default)]
    packages_url: Option<String>,
    #[serde(default)]
    tweaks_url: Option<String>,
    #[serde(default)]
    bootstrap_url: Option<String>,
    #[serde(default)]
    probe: Option<bool>,
    #[serde(default)]
    on_empty: Option<EmptyAction>,
    #[serde(default)]
    host: HostConfig,
}

impl IttConfig {
    /// Load from `explicit` (must exist), else `<home>/itt.toml` when present,
    /// else defaults. `ITT_*` environment variables win over the file.
    pub fn load(explicit: Option<&Path>) -> Result<Self, IttError> {
        Self::load_with(explicit, |key| std::env::var(key).ok())
    }

    fn load_with(
        explicit: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, IttError> {
        let file = match explicit {
            Some(path) => read_file(path)?,
            None => {
                let home = default_home(&env)?;
                let candidate = home.join(CONFIG_FILE_NAME);
                if candidate.is_file() {
                    read_file(&candidate)?
                } else {
                    tracing::debug!("no config at {}, using defaults", candidate.display());
                    ConfigFile::default()
                }
            }
        };
        resolve(file, &env)
    }

    pub fn downloads_dir(&self) -> PathBuf {
        self.home.join("downloads")
    }

    /// Shared helper every install script expects to be dot-sourced first.
    pub fn helper_script(&self) -> PathBuf {
        self.home
            .join("automation")
            .join("functions")
            .join("Install-ITTPackage.ps1")
    }

    pub fn package_script_url(&self, name: &str) -> String {
        format!("{}/{name}/install.ps1", self.packages_url)
    }

    pub fn tweak_script_url(&self, name: &str) -> String {
        format!("{}/{name}/run.ps1", self.tweaks_url)
    }

    pub fn powershell_program(&self) -> String {
        self.host
            .program
            .clone()
            .unwrap_or_else(|| platform().default_powershell().to_string())
    }
}

fn read_file(path: &Path) -> Result<ConfigFile, IttError> {
    let data = fs::read_to_string(path).map_err(|e| IttError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    toml::from_str(&data).map_err(|e| IttError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn default_home(env: &impl Fn(&str) -> Option<String>) -> Result<PathBuf, IttError> {
    if let Some(home) = env("ITT_HOME").filter(|h| !h.trim().is_empty()) {
        return Ok(PathBuf::from(home));
    }
    platform()
        .common_app_data()
        .map(|d| d.join("itt"))
        .ok_or_else(|| IttError::Config {
            path: PathBuf::from(CONFIG_FILE_NAME),
            message: "cannot determine the common application data directory; set ITT_HOME"
                .into(),
        })
}

fn resolve(file: ConfigFile, env: &impl Fn(&str) -> Option<String>) -> Result<IttConfig, IttError> {
    let home = match env("ITT_HOME").filter(|h| !h.trim().is_empty()) {
        Some(h) => PathBuf::from(h),
        None => match file.home {
            Some(h) => h,
            None => default_home(env)?,
        },
    };
    let pick = |key: &str, from_file: Option<String>, default: &str| -> String {
        let raw = env(key).or(from_file).unwrap_or_else(|| default.to_string());
        raw.trim_end_matches('/').to_string()
    };
    let mut host = file.host;
    if let Some(program) = env("ITT_POWERSHELL") {
        host.program = Some(program);
    }
    Ok(IttConfig {
        home,
        packages_url: pick("ITT_PACKAGES_URL", file.packages_url, DEFAULT_PACKAGES_URL),
        tweaks_url: pick("ITT_TWEAKS_URL", file.tweaks_url, DEFAULT_TWEAKS_URL),
        bootstrap_url: pick("ITT_BOOTSTRAP_URL", file.bootstrap_url, DEFAULT_BOOTSTRAP_URL),
        probe: file.probe.unwrap_or(true),
        on_empty: file.on_empty.unwrap_or_default(),
        host,
    })
}
