use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Bytes read from the head of each file for sniffing.
const SNIFF_LEN: u64 = 8192;

const MIME_EMPTY: &str = "application/x-empty";
const MIME_TEXT: &str = "text/plain";
const MIME_BINARY: &str = "application/octet-stream";

/// Detected type of one file. `error` is set instead of `mime` when the
/// file could not be read.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FileTypeEntry {
    pub name: String,
    pub mime: Option<String>,
    pub error: Option<String>,
}

impl FileTypeEntry {
    /// `name: type` line for the log pane.
    pub fn to_line(&self) -> String {
        match (&self.mime, &self.error) {
            (Some(mime), _) => format!("{}: {}", self.name, mime),
            (None, Some(err)) => format!("{}: error ({})", self.name, err),
            (None, None) => format!("{}: unknown", self.name),
        }
    }
}

/// Lazily report the type of every regular file directly inside `directory`.
///
/// Only opening the directory itself can fail; unreadable files produce an
/// entry carrying the error so the rest of the scan continues.
pub fn report_file_types(directory: &Path) -> io::Result<impl Iterator<Item = FileTypeEntry>> {
    let entries = fs::read_dir(directory)?;

    Ok(entries.filter_map(|entry| {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable directory entry: {e}");
                return None;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            return None;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        Some(match detect_mime(&path) {
            Ok(mime) => FileTypeEntry {
                name,
                mime: Some(mime.to_string()),
                error: None,
            },
            Err(e) => {
                log::warn!("Failed to sniff {}: {e}", path.display());
                FileTypeEntry {
                    name,
                    mime: None,
                    error: Some(e.to_string()),
                }
            }
        })
    }))
}

/// Detect a file's MIME type from its content, ignoring the extension.
pub fn detect_mime(path: &Path) -> io::Result<&'static str> {
    let mut head = Vec::new();
    fs::File::open(path)?.take(SNIFF_LEN).read_to_end(&mut head)?;

    if head.is_empty() {
        return Ok(MIME_EMPTY);
    }
    if let Some(kind) = infer::get(&head) {
        return Ok(kind.mime_type());
    }
    Ok(if looks_like_text(&head) {
        MIME_TEXT
    } else {
        MIME_BINARY
    })
}

fn looks_like_text(head: &[u8]) -> bool {
    if head.contains(&0) {
        return false;
    }
    match std::str::from_utf8(head) {
        Ok(_) => true,
        // A multi-byte character cut off by the sniff window is still text
        Err(e) => e.error_len().is_none() && head.len() as u64 == SNIFF_LEN,
    }
}
