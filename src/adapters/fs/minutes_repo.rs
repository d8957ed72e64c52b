//! Implements MinutesRepoPort. Whole-file reads and rewrites.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::domain::DomainError;
use crate::ports::MinutesRepoPort;

/// Filesystem minutes repository. Each file is opened, fully consumed, and
/// closed before anything else happens; a rewrite replaces the whole file.
pub struct FsMinutesRepo;

impl MinutesRepoPort for FsMinutesRepo {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, DomainError> {
        let text = fs::read_to_string(path)
            .map_err(|e| DomainError::Repo(format!("read {}: {}", path.display(), e)))?;
        Ok(text.lines().map(str::to_string).collect())
    }

    fn write_lines(&self, path: &Path, lines: &[String]) -> Result<(), DomainError> {
        let mut text = lines.join("\n");
        text.push('\n');
        fs::write(path, text)
            .map_err(|e| DomainError::Repo(format!("write {}: {}", path.display(), e)))?;
        info!(path = %path.display(), lines = lines.len(), "rewrote minutes file");
        Ok(())
    }
}
