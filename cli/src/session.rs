//! Stored bearer token between CLI invocations.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default location of the token file, `$HOME/.fieldnotes/token`.
pub fn default_token_path() -> PathBuf {
    let home = std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    home.join(".fieldnotes").join("token")
}

/// Read a stored token. A missing or empty file means "not logged in".
pub fn load_token(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let token = contents.trim();
            Ok((!token.is_empty()).then(|| token.to_string()))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write the token, creating parent directories. The file is private to the user on unix.
pub fn save_token(path: &Path, token: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(token.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Remove the stored token. Returns false if there was none.
pub fn clear_token(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("token");

        assert_eq!(load_token(&path).unwrap(), None);

        save_token(&path, "abc.def.ghi").unwrap();
        assert_eq!(load_token(&path).unwrap().as_deref(), Some("abc.def.ghi"));

        // Overwrites rather than appends.
        save_token(&path, "second").unwrap();
        assert_eq!(load_token(&path).unwrap().as_deref(), Some("second"));

        assert!(clear_token(&path).unwrap());
        assert!(!clear_token(&path).unwrap());
        assert_eq!(load_token(&path).unwrap(), None);
    }

    #[test]
    fn test_empty_file_is_not_a_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "  \n").unwrap();
        assert_eq!(load_token(&path).unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_token_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        save_token(&path, "secret").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_default_path_ends_with_token() {
        let path = default_token_path();
        assert!(path.ends_with(".fieldnotes/token"));
    }
}
