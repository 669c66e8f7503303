pub fn platform() -> &'static dyn PlatformOps {
    &ConcretePlatform
}

use std::path::PathBuf;

pub trait PlatformOps: Sync + Send {
    /// Machine-wide data root that `itt/` lives under.
    fn common_app_data(&self) -> Option<PathBuf>;
    /// PowerShell executable looked up on PATH when none is configured.
    fn default_powershell(&self) -> &'static str;
}

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use unix::UNIX_PLATFORM as ConcretePlatform;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::WINDOWS_PLATFORM as ConcretePlatform;
