//! Log file scanning: per-level occurrence counts and level filtering.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::types::errors::{QuartetError, QuartetResult};

/// Recognized log levels, in classification and display order.
pub const LOG_LEVELS: [&str; 4] = ["INFO", "ERROR", "WARNING", "DEBUG"];

/// Per-level occurrence counts plus the lines matching an optional filter.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    /// Occurrences per level keyword.
    pub counts: HashMap<String, usize>,

    /// Full text of the lines matching the requested filter level.
    pub filtered_lines: Vec<String>,
}

impl ScanReport {
    /// Count for a single level (0 when the level never occurred).
    pub fn count(&self, level: &str) -> usize {
        self.counts.get(level).copied().unwrap_or(0)
    }

    /// Levels that occurred at least once, in `levels` order.
    pub fn present_levels<'a>(&self, levels: &'a [String]) -> Vec<&'a str> {
        levels
            .iter()
            .map(String::as_str)
            .filter(|lvl| self.counts.contains_key(*lvl))
            .collect()
    }
}

/// Lazily yields trimmed lines from the file at `path`.
///
/// Missing files and directory paths are reported as dedicated error
/// variants so the CLI can render them as plain messages.
pub fn read_lines<P: AsRef<Path>>(path: P) -> QuartetResult<impl Iterator<Item = String>> {
    let path = path.as_ref();
    if path.is_dir() {
        return Err(QuartetError::PathIsDirectory(path.display().to_string()));
    }
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            QuartetError::FileNotFound(path.display().to_string())
        } else {
            QuartetError::Io(e)
        }
    })?;
    let reader = BufReader::new(file);
    Ok(reader.lines().filter_map(|result| match result {
        Ok(line) => Some(line.trim().to_string()),
        Err(err) => {
            // Keep scanning past an unreadable line instead of truncating
            // the whole file, but say so.
            tracing::warn!("skipping unreadable line: {}", err);
            None
        }
    }))
}

/// Classifies a line by the first matching level keyword, in `levels` order.
pub fn classify<'a>(line: &str, levels: &'a [String]) -> Option<&'a str> {
    let upper = line.to_uppercase();
    levels
        .iter()
        .map(String::as_str)
        .find(|lvl| upper.contains(*lvl))
}

/// Scans the log file at `path`, counting entries per level.
///
/// Only lines for `level_filter` are retained in full, to keep memory
/// proportional to the filtered subset rather than the whole file.
pub fn scan<P: AsRef<Path>>(
    path: P,
    levels: &[String],
    level_filter: Option<&str>,
) -> QuartetResult<ScanReport> {
    let mut report = ScanReport::default();

    for line in read_lines(path)? {
        if let Some(level) = classify(&line, levels) {
            *report.counts.entry(level.to_string()).or_insert(0) += 1;
            if Some(level) == level_filter {
                report.filtered_lines.push(line);
            }
        }
    }

    tracing::debug!(
        total = report.counts.values().sum::<usize>(),
        "log scan finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    const SAMPLE: &str = "\
2024-01-22 08:30:01 INFO User logged in successfully.
2024-01-22 09:00:45 ERROR Database connection failed.
2024-01-22 10:30:55 WARNING Disk usage above 80%.
2024-01-22 11:05:00 DEBUG Starting data backup process.
2024-01-22 11:30:15 ERROR Backup process failed.
";

    fn levels() -> Vec<String> {
        LOG_LEVELS.iter().map(|s| s.to_string()).collect()
    }

    fn sample_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_lines_strips_whitespace() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"  padded line  \n").unwrap();

        let lines: Vec<String> = read_lines(file.path()).unwrap().collect();
        assert_eq!(lines, vec!["padded line"]);
    }

    #[test]
    fn test_read_lines_missing_file() {
        let err = read_lines("nonexistent_file.log").err().unwrap();
        assert!(matches!(err, QuartetError::FileNotFound(_)));
    }

    #[test]
    fn test_read_lines_directory() {
        let dir = TempDir::new().unwrap();
        let err = read_lines(dir.path()).err().unwrap();
        assert!(matches!(err, QuartetError::PathIsDirectory(_)));
    }

    #[test]
    fn test_read_lines_continues_past_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"INFO first\n\xff\xfe garbage\nERROR last\n")
            .unwrap();

        let lines: Vec<String> = read_lines(file.path()).unwrap().collect();
        assert_eq!(lines, vec!["INFO first", "ERROR last"]);
    }

    #[test]
    fn test_classify_first_matching_level_wins() {
        let levels = levels();
        assert_eq!(classify("INFO something", &levels), Some("INFO"));
        // Both keywords present: order of the level set decides.
        assert_eq!(classify("INFO about an ERROR", &levels), Some("INFO"));
        assert_eq!(classify("plain line", &levels), None);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let levels = levels();
        assert_eq!(classify("debug trace output", &levels), Some("DEBUG"));
    }

    #[test]
    fn test_scan_counts_per_level() {
        let file = sample_file();
        let report = scan(file.path(), &levels(), None).unwrap();

        assert_eq!(report.count("INFO"), 1);
        assert_eq!(report.count("ERROR"), 2);
        assert_eq!(report.count("WARNING"), 1);
        assert_eq!(report.count("DEBUG"), 1);
        assert!(report.filtered_lines.is_empty());
    }

    #[test]
    fn test_scan_collects_filtered_lines() {
        let file = sample_file();
        let report = scan(file.path(), &levels(), Some("ERROR")).unwrap();

        assert_eq!(report.filtered_lines.len(), 2);
        assert!(report.filtered_lines[0].contains("Database connection failed"));
        assert!(report.filtered_lines[1].contains("Backup process failed"));
    }

    #[test]
    fn test_scan_filter_without_matches() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"2024-01-22 08:30:01 INFO ok\n").unwrap();

        let report = scan(file.path(), &levels(), Some("DEBUG")).unwrap();
        assert_eq!(report.count("INFO"), 1);
        assert!(report.filtered_lines.is_empty());
    }

    #[test]
    fn test_present_levels_keeps_display_order() {
        let file = sample_file();
        let report = scan(file.path(), &levels(), None).unwrap();
        let levels = levels();
        assert_eq!(
            report.present_levels(&levels),
            vec!["INFO", "ERROR", "WARNING", "DEBUG"]
        );
    }
}
