//! Persists the merged configuration document.

use std::fs;
use std::path::Path;

use super::document::ConfigDocument;
use crate::error::PersistError;

/// Serializes the document and writes it atomically: the content lands in a
/// sibling temp file first and is renamed over the destination, so a consumer
/// reading the file at startup never observes a half-written document. On
/// failure the previous file, if any, is left untouched.
pub fn write_document(document: &ConfigDocument, destination: &Path) -> Result<(), PersistError> {
    let rendered = document.to_pretty_json()?;

    let file_name = destination
        .file_name()
        .ok_or_else(|| PersistError::InvalidDestination {
            path: destination.to_path_buf(),
        })?;

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| PersistError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    // The temp file must live in the destination directory: rename is only
    // atomic within a filesystem.
    let staging = destination.with_file_name(format!("{}.tmp", file_name.to_string_lossy()));

    fs::write(&staging, rendered).map_err(|source| PersistError::Io {
        path: staging.clone(),
        source,
    })?;

    fs::rename(&staging, destination).map_err(|source| {
        let _ = fs::remove_file(&staging);
        PersistError::Io {
            path: destination.to_path_buf(),
            source,
        }
    })
}
