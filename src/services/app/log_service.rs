//! Tail of the application log file, shown in the "Log file" tab.

use std::collections::VecDeque;
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// File name (sans `.log`) used by the log plugin's file target.
pub const LOG_FILE_NAME: &str = "esx-toolkit";

/// Upper bound on lines returned for one request.
pub const MAX_TAIL_LINES: usize = 2000;

/// Path of the log file inside the app log directory.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(format!("{LOG_FILE_NAME}.log"))
}

/// Last `n` lines of the log file, oldest first.
///
/// Streams the file keeping only `n` lines in memory. A missing file yields
/// no lines; bytes that are not UTF-8 are replaced rather than failing.
pub fn read_log_tail(log_path: &Path, n: usize) -> io::Result<Vec<String>> {
    let n = n.min(MAX_TAIL_LINES);
    let file = match fs::File::open(log_path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut tail = VecDeque::with_capacity(n);
    for line in BufReader::new(file).split(b'\n') {
        let line = line?;
        if tail.len() == n {
            tail.pop_front();
        }
        let text = String::from_utf8_lossy(&line);
        tail.push_back(text.trim_end_matches('\r').to_string());
    }
    Ok(tail.into())
}

#[cfg(test)]
#[path = "tests/log_service_tests.rs"]
mod tests;
