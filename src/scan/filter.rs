use super::patterns::PatternSet;
use crate::error::{FileAccessError, ScanError};
use anyhow::Result;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

fn scan_file<W: Write>(
    filename: &str,
    patterns: &PatternSet,
    out: &mut W,
) -> std::result::Result<(), ScanError> {
    log::debug!("Scanning {}", filename);
    let file = File::open(filename).map_err(|e| FileAccessError::new(filename, e))?;

    for (line_num, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| FileAccessError::new(filename, e))?;
        if patterns.matches(&line) {
            log::debug!("{}:{} matched", filename, line_num + 1);
            writeln!(out, "{}: {}", filename, line.trim()).map_err(ScanError::Output)?;
        }
    }

    Ok(())
}

/// Write every matching line of `filename` as `<filename>: <trimmed line>`.
///
/// Matches found before a read error are kept; the error line follows them.
pub fn check_file<W: Write>(filename: &str, patterns: &PatternSet, out: &mut W) -> Result<()> {
    match scan_file(filename, patterns, out) {
        Ok(()) => Ok(()),
        Err(ScanError::Access(err)) => {
            log::warn!("Could not scan {}: {}", err.filename, err);
            writeln!(out, "Error {}: {}", err.filename, err)?;
            Ok(())
        }
        Err(err @ ScanError::Output(_)) => Err(err.into()),
    }
}

pub fn check_files<W: Write, S: AsRef<str>>(filenames: &[S], out: &mut W) -> Result<()> {
    let patterns = PatternSet::sensitive();
    for filename in filenames {
        check_file(filename.as_ref(), &patterns, out)?;
    }
    out.flush()?;
    Ok(())
}
