//! Numeric formatting for utilkit.
//!
//! Durations, byte sizes, abbreviated counts, and screening of files against
//! an upload size limit.

pub mod duration;
pub mod error;
pub mod image;
pub mod number;
pub mod size;

use serde::{Deserialize, Serialize};

pub use duration::{format_duration, video_duration};
pub use error::NumericsError;
pub use image::{ImageDescriptor, DEFAULT_IMAGE_TYPE};
pub use number::{clamp, shorten_large_number};
pub use size::{calculate_size_files, file_size, FileEntry, FileSizeReport, RejectedFile};

/// Defaults for size screening.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericsConfig {
    /// Upload limit in megabytes used by [`calculate_size_files`] callers.
    pub max_upload_mb: f64,
}

impl Default for NumericsConfig {
    fn default() -> Self {
        Self { max_upload_mb: 3.0 }
    }
}
