// LogTally - platform/fs.rs
//
// Input file validation and opening. The only place that touches the
// filesystem for log input; core receives an opened reader.

use crate::util::constants;
use crate::util::error::InputError;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Check `path` and open it for buffered reading.
///
/// Checks run in order: existence, regular file, `.log` extension (when
/// `require_log_extension` is set), then open. The first failing check
/// determines the error.
pub fn open_log_file(
    path: &Path,
    require_log_extension: bool,
) -> Result<BufReader<File>, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(InputError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    if require_log_extension && !has_log_extension(path) {
        return Err(InputError::WrongExtension {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "Log file opened");
    Ok(BufReader::new(file))
}

/// True when the file name ends in `.log`. Case-sensitive.
fn has_log_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == constants::LOG_FILE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufRead;
    use tempfile::TempDir;

    #[test]
    fn test_open_valid_log_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "2024-01-15 10:00:00 INFO start\n").unwrap();

        let reader = open_log_file(&path, true).unwrap();
        assert_eq!(reader.lines().count(), 1);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let result = open_log_file(&dir.path().join("absent.log"), true);
        assert!(matches!(result, Err(InputError::NotFound { .. })));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("logs.log");
        std::fs::create_dir(&sub).unwrap();
        let result = open_log_file(&sub, true);
        assert!(matches!(result, Err(InputError::NotAFile { .. })));
    }

    #[test]
    fn test_wrong_extension_rejected_only_when_required() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.txt");
        std::fs::write(&path, "2024-01-15 10:00:00 INFO start\n").unwrap();

        let strict = open_log_file(&path, true);
        assert!(matches!(strict, Err(InputError::WrongExtension { .. })));
        assert!(open_log_file(&path, false).is_ok());
    }
}
