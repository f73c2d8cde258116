use crate::error::FileAccessError;
use anyhow::{Context, Result};
use std::io::Write;

/// Read the whole file as text.
pub fn read_contents(filename: &str) -> std::result::Result<String, FileAccessError> {
    log::debug!("Reading {}", filename);
    std::fs::read_to_string(filename).map_err(|e| FileAccessError::new(filename, e))
}

/// Write the file's contents verbatim, or an `Error reading` line if it can't be read.
///
/// Non-empty contents without a final newline get one, so whatever follows
/// starts on its own line.
pub fn read_file<W: Write>(filename: &str, out: &mut W) -> Result<()> {
    match read_contents(filename) {
        Ok(content) => {
            out.write_all(content.as_bytes())
                .context("failed to write file contents")?;
            if !content.is_empty() && !content.ends_with('\n') {
                writeln!(out).context("failed to write file contents")?;
            }
        }
        Err(err) => {
            log::warn!("Could not read {}: {}", err.filename, err);
            writeln!(out, "Error reading {}: {}", err.filename, err)
                .context("failed to write error report")?;
        }
    }
    Ok(())
}

pub fn print_contents<W: Write, S: AsRef<str>>(filenames: &[S], out: &mut W) -> Result<()> {
    for filename in filenames {
        read_file(filename.as_ref(), out)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn path_str(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn test_prints_contents_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = path_str(&dir, "env.cloud");
        std::fs::write(&path, "DB_SECRET=abc123\nHOST=localhost").unwrap();

        let mut out = Vec::new();
        read_file(&path, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "DB_SECRET=abc123\nHOST=localhost\n");
    }

    #[test]
    fn test_trailing_newline_not_doubled() {
        let dir = TempDir::new().unwrap();
        let path = path_str(&dir, "env.cloud");
        std::fs::write(&path, "HOST=localhost\n").unwrap();

        let mut out = Vec::new();
        read_file(&path, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "HOST=localhost\n");
    }

    #[test]
    fn test_empty_file_prints_nothing() {
        let dir = TempDir::new().unwrap();
        let path = path_str(&dir, "env.cloud");
        std::fs::write(&path, "").unwrap();

        let mut out = Vec::new();
        read_file(&path, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_error_line_after_unterminated_file() {
        let dir = TempDir::new().unwrap();
        let present = path_str(&dir, "env.cloud");
        let missing = path_str(&dir, ".env.local");
        std::fs::write(&present, "DB_SECRET=abc123\nHOST=localhost").unwrap();

        let mut out = Vec::new();
        print_contents(&[present, missing.clone()], &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[..2], ["DB_SECRET=abc123", "HOST=localhost"]);
        assert!(lines[2].starts_with(&format!("Error reading {}: ", missing)));
    }

    #[test]
    fn test_missing_file_reports_one_line() {
        let dir = TempDir::new().unwrap();
        let path = path_str(&dir, ".env.local");

        let mut out = Vec::new();
        read_file(&path, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with(&format!("Error reading {}: ", path)));
        assert_eq!(out.lines().count(), 1);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_invalid_utf8_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = path_str(&dir, "env.cloud");
        std::fs::write(&path, [0x4b, 0x45, 0x59, 0xff, 0xfe]).unwrap();

        let mut out = Vec::new();
        read_file(&path, &mut out).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .starts_with(&format!("Error reading {}: ", path)));
    }

    #[test]
    fn test_error_does_not_stop_later_files() {
        let dir = TempDir::new().unwrap();
        let missing = path_str(&dir, "env.cloud");
        let present = path_str(&dir, ".env.local");
        std::fs::write(&present, "API_KEY=1\n").unwrap();

        let mut out = Vec::new();
        print_contents(&[missing.clone(), present], &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with(&format!("Error reading {}: ", missing)));
        assert_eq!(lines.next(), Some("API_KEY=1"));
        assert_eq!(lines.next(), None);
    }
}
