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

//! Error types for ingestion, grouping and aggregation.

use thiserror::Error;

/// Errors raised while reading and reducing the benchmark results table.
///
/// Ingestion is fail-fast: any of these aborts the whole run before output
/// artifacts are written. A partial report could mislead, so there is no
/// partial-success mode.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A required column is absent from the CSV header.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A numeric cell failed to parse.
    ///
    /// `row` is the 1-based index of the data row (the header is row 0).
    #[error("Invalid value in column '{column}' at row {row}: '{value}'")]
    InvalidValue {
        /// Column name containing the bad cell.
        column: String,
        /// 1-based data row index.
        row: usize,
        /// The offending cell text.
        value: String,
    },

    /// Records sharing an `input_id` disagree on the problem size `n`.
    ///
    /// Each benchmark input file has exactly one size, so this can only mean
    /// the results table mixes runs of a regenerated input.
    #[error(
        "Inconsistent problem size for input '{input_id}': expected n={expected_n}, found n={found_n}"
    )]
    HeterogeneousGroup {
        /// Grouping key with the conflict.
        input_id: String,
        /// Size recorded by the group's first record.
        expected_n: u64,
        /// Conflicting size found later in the group.
        found_n: u64,
    },

    /// An empty group reached the aggregator.
    ///
    /// Groups produced by [`crate::group::group_records`] are non-empty by
    /// construction; this is a programming-contract violation, not a data
    /// error.
    #[error("Invariant violation: empty group for input '{input_id}'")]
    EmptyGroup {
        /// Grouping key of the degenerate group.
        input_id: String,
    },

    /// I/O error while reading the input table.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying CSV reader.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience alias for `Result` with [`IngestError`].
pub type Result<T> = std::result::Result<T, IngestError>;
