use crate::platform::PlatformOps;
use std::path::PathBuf;

pub static WINDOWS_PLATFORM: Windows = Windows;

pub struct Windows;

impl PlatformOps for Windows {
    fn common_app_data(&self) -> Option<PathBuf> { Some(std::env::var_os("ProgramData").map(PathBuf::from).unwrap_or_else(|| PathBuf::from(r"C:\ProgramData"))) }
    fn default_powershell(&self) -> &'static str { "powershell" }
}
