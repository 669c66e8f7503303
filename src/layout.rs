use crate::error::IttError;
use fs_err as fs;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9._+-]+$").unwrap());

/// Names end up both in URLs and as a directory component.
pub fn validate_name(name: &str) -> Result<(), IttError> {
    if name == "." || name == ".." || !NAME_RE.is_match(name) {
        return Err(IttError::Usage(format!("invalid name '{name}'")));
    }
    Ok(())
}

/// `<downloads>/<name>/tools/install.ps1`
#[derive(Debug, Clone)]
pub struct PackageLayout {
    pub root: PathBuf,
}

impl PackageLayout {
    pub fn new(downloads: &Path, name: &str) -> Self {
        Self { root: downloads.join(name) }
    }

    pub fn tools_dir(&self) -> PathBuf {
        self.root.join("tools")
    }

    pub fn install_script(&self) -> PathBuf {
        self.tools_dir().join("install.ps1")
    }

    /// Idempotent; existing directories are left alone.
    pub fn ensure_dirs(&self) -> Result<PathBuf, IttError> {
        let tools = self.tools_dir();
        fs::create_dir_all(&tools).map_err(|e| IttError::io("creating dir", &tools, e))?;
        Ok(tools)
    }

    /// Overwrites any previous script verbatim.
    pub fn write_install_script(&self, text: &str) -> Result<PathBuf, IttError> {
        let path = self.install_script();
        fs::write(&path, text).map_err(|e| IttError::io("writing", &path, e))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        for n in ["vlc", "7zip", "notepad++", "google-chrome", "dotnet.8", "Node_JS"] {
            assert!(validate_name(n).is_ok(), "{n}");
        }
    }

    #[test]
    fn rejects_path_like_names() {
        for n in ["", ".", "..", "../etc", "a/b", r"a\b", "with space", "-y;rm"] {
            assert!(matches!(validate_name(n), Err(IttError::Usage(_))), "{n}");
        }
    }

    #[test]
    fn ensure_dirs_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let layout = PackageLayout::new(&dir.path().join("downloads"), "foo");
        let first = layout.ensure_dirs().unwrap();
        let second = layout.ensure_dirs().unwrap();
        assert_eq!(first, second);
        assert!(first.is_dir());
        assert_eq!(std::fs::read_dir(&first).unwrap().count(), 0);
        assert!(first.ends_with(Path::new("downloads/foo/tools")));
    }

    #[test]
    fn write_overwrites_previous_script() {
        let dir = tempfile::tempdir().unwrap();
        let layout = PackageLayout::new(dir.path(), "foo");
        layout.ensure_dirs().unwrap();
        layout.write_install_script("old content that is longer").unwrap();
        let path = layout.write_install_script("Write-Output 1").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "Write-Output 1");
    }

    #[test]
    fn write_without_dirs_fails_with_io() {
        let dir = tempfile::tempdir().unwrap();
        let layout = PackageLayout::new(dir.path(), "missing");
        let err = layout.write_install_script("x").unwrap_err();
        assert!(matches!(err, IttError::Io { .. }));
    }
}
