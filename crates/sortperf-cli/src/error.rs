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

//! Structured error type for the sortperf CLI.

use sortperf_core::IngestError;
use sortperf_report::ReportError;
use thiserror::Error;

/// Any failure that aborts a CLI run.
///
/// Ingestion and aggregation errors surface here before any output artifact
/// is written; reporting errors surface after aggregation succeeded.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading, parsing or reducing the results table failed.
    #[error("{0}")]
    Ingest(#[from] IngestError),

    /// Writing an output artifact failed.
    #[error("{0}")]
    Report(#[from] ReportError),
}

/// Convenience alias for `Result` with [`CliError`].
pub type Result<T> = std::result::Result<T, CliError>;
