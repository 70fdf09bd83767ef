// File: src/files.rs
// Purpose: Attachment metadata and the file-summary line

use serde::{Deserialize, Serialize};

/// Summary shown while no files are attached
pub const EMPTY_FILE_SUMMARY: &str = "No files selected";

/// Metadata for one attached file
///
/// Only name, content type, and size travel with the request; file contents
/// never enter the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub content_type: String,
    pub size: u64,
}

impl FileMeta {
    /// Create attachment metadata
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            size,
        }
    }
}

/// Human-readable summary of an attachment list
///
/// `No files selected` when empty, otherwise a count and the comma-joined
/// names, singular below two files: `1 file selected: roof.jpg`.
pub fn file_summary(files: &[FileMeta]) -> String {
    if files.is_empty() {
        return EMPTY_FILE_SUMMARY.to_string();
    }

    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    let plural = if files.len() > 1 { "s" } else { "" };

    format!(
        "{} file{} selected: {}",
        files.len(),
        plural,
        names.join(", ")
    )
}
