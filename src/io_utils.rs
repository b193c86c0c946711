use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::config::LOG_FILE_NAME;

/// `debug.log` in the directory holding the running executable.
pub fn default_log_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to resolve executable path")?;
    let dir = exe
        .parent()
        .ok_or_else(|| anyhow!("executable {} has no parent directory", exe.display()))?;
    Ok(log_path_in(dir))
}

pub fn log_path_in(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE_NAME)
}

pub fn open_log(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_in() {
        assert_eq!(
            log_path_in(Path::new("/opt/node")),
            PathBuf::from("/opt/node/debug.log")
        );
    }

    #[test]
    fn test_default_log_path_is_next_to_executable() {
        let path = default_log_path().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(path.parent(), exe.parent());
        assert_eq!(path.file_name().unwrap(), LOG_FILE_NAME);
    }

    #[test]
    fn test_open_missing_log() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_log(&log_path_in(dir.path())).unwrap_err();
        assert!(err.to_string().contains("debug.log"));
    }
}
