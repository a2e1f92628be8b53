// Token persistence: a single personal access token kept in a plain text
// file that only its owner may read.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::CliError;

/// Expand a leading `~` to the user's home directory.
///
/// Paths without the marker are returned unchanged. If no home directory
/// can be determined the path is returned as-is.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(path),
    };
    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Write `token` as the whole content of the file at `path`.
///
/// Missing parent directories are created. A previous token is replaced;
/// since it is read-only it is removed first. Afterwards the file is
/// restricted to owner read.
pub fn store(path: &Path, token: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    if path.exists() {
        fs::remove_file(path)
            .with_context(|| format!("Failed to replace token file {}", path.display()))?;
    }

    let mut file = create_private(path)
        .with_context(|| format!("Failed to create token file {}", path.display()))?;
    file.write_all(token.as_bytes())
        .with_context(|| format!("Failed to write token file {}", path.display()))?;
    drop(file);
    restrict_to_owner_read(path)?;

    debug!(path = %path.display(), "token stored");
    Ok(())
}

/// Return the first line of the token file at `path`.
///
/// Fails with [`CliError::NoToken`] if the file does not exist.
pub fn retrieve(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CliError::NoToken.into());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read token file {}", path.display()))?;
    debug!(path = %path.display(), "token loaded");

    Ok(data.lines().next().unwrap_or_default().to_string())
}

/// Create `path` so that only the owner can access it from the start.
#[cfg(unix)]
fn create_private(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn create_private(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

#[cfg(unix)]
fn restrict_to_owner_read(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o400))
        .with_context(|| format!("Failed to set permissions on {}", path.display()))
}

#[cfg(not(unix))]
fn restrict_to_owner_read(path: &Path) -> Result<()> {
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_readonly(true);
    fs::set_permissions(path, perms)
        .with_context(|| format!("Failed to set permissions on {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_home_leaves_plain_paths_alone() {
        assert_eq!(expand_home("/etc/token"), PathBuf::from("/etc/token"));
        assert_eq!(expand_home("relative/token"), PathBuf::from("relative/token"));
        // `~user` is not expanded
        assert_eq!(expand_home("~other/token"), PathBuf::from("~other/token"));
    }

    #[cfg(unix)]
    #[test]
    fn new_token_file_is_never_group_or_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        drop(create_private(&path).unwrap());

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0);
    }

    #[test]
    fn expand_home_replaces_marker() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_home("~/.github/token"), home.join(".github/token"));
        assert_eq!(expand_home("~"), home);
    }
}
