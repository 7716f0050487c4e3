// sortperf - Sorting-algorithm benchmark report generator
//
// Copyright (c) 2025 sortperf contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for the reporting stage.
//!
//! These errors are fatal for the stage that raises them: failing to write
//! the aggregate table or the PDF aborts the run. Per-chart drawing failures
//! are deliberately NOT represented here; the chart renderer downgrades them
//! to [`crate::chart::SkippedChart`] so one bad chart cannot abort a run
//! whose ingestion and aggregation already succeeded.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while writing report artifacts.
#[derive(Debug, Error)]
pub enum ReportError {
    /// I/O error creating directories or output files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the CSV writer for the aggregate table.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A rendered chart image exists but could not be decoded for embedding.
    #[error("Failed to decode chart image '{path}': {message}")]
    Image {
        /// Path of the unreadable image.
        path: PathBuf,
        /// Decoder error message.
        message: String,
    },

    /// Error composing or saving the PDF document.
    #[error("PDF error: {0}")]
    Pdf(String),
}

/// Convenience alias for `Result` with [`ReportError`].
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_error_display() {
        let err = ReportError::Image {
            path: PathBuf::from("plots/cpu_a.txt.png"),
            message: "bad magic".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to decode chart image 'plots/cpu_a.txt.png': bad magic"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReportError>();
    }
}
