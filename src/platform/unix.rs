use crate::platform::PlatformOps;
use std::path::PathBuf;

pub static UNIX_PLATFORM: Unix = Unix;

pub struct Unix;

impl PlatformOps for Unix {
    fn common_app_data(&self) -> Option<PathBuf> {
        dirs::data_dir()
    }
    fn default_powershell(&self) -> &'static str {
        "pwsh"
    }
}
