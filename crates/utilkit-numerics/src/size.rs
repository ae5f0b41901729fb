//! File size formatting and upload size screening.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NumericsError, Result};
use crate::number::to_fixed_1;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Human readable size: `"512bytes"`, `"1.5KB"`, `"3.2MB"`.
pub fn file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes}bytes")
    } else if bytes < MIB {
        format!("{}KB", to_fixed_1(bytes as f64 / KIB as f64))
    } else {
        format!("{}MB", to_fixed_1(bytes as f64 / MIB as f64))
    }
}

/// A named file and its size in bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub size: u64,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Read the size of a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|source| NumericsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, metadata.len()))
    }
}

/// A file over the size limit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedFile {
    pub name: String,
    /// Message naming the file's size, e.g. `"This image weighs 4.0MB"`.
    pub size: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSizeReport {
    pub accepted: Vec<FileEntry>,
    pub rejected: Vec<RejectedFile>,
}

impl FileSizeReport {
    pub fn all_accepted(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Split `files` into those within `max_mb` megabytes and those over it.
///
/// The limit is rounded to whole bytes; a file exactly at the limit is
/// accepted.
pub fn calculate_size_files(files: &[FileEntry], max_mb: f64) -> FileSizeReport {
    let limit = (max_mb * MIB as f64).round().max(0.0) as u64;
    let mut report = FileSizeReport::default();
    for file in files {
        if file.size <= limit {
            report.accepted.push(file.clone());
        } else {
            debug!(name = %file.name, size = file.size, limit, "file over size limit");
            report.rejected.push(RejectedFile {
                name: file.name.clone(),
                size: format!("This image weighs {}", file_size(file.size)),
            });
        }
    }
    report
}
