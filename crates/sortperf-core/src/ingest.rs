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

//! CSV ingestion of benchmark trial rows.
//!
//! The benchmark harness appends one row per trial to its results file with
//! the header:
//!
//! ```text
//! n,sel_comp,sel_swaps,sel_copies,sel_cpu,mer_comp,mer_swaps,mer_copies,mer_cpu,heap_comp,heap_swaps,heap_copies,heap_cpu,filename
//! ```
//!
//! Columns are resolved by name, so column order is irrelevant and extra
//! columns are ignored. A missing required column or an unparsable numeric
//! cell aborts the run with enough context (column, row) to diagnose.

use crate::error::{IngestError, Result};
use crate::record::{Algorithm, AlgorithmMetrics, MetricFamily, TrialRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Column holding the originating input file's identity.
pub const INPUT_ID_COLUMN: &str = "filename";

/// Column holding the problem size.
pub const SIZE_COLUMN: &str = "n";

/// Resolved header indices for one results table.
struct ColumnMap {
    input_id: usize,
    n: usize,
    // Indexed [algorithm][family] in `Algorithm::ALL` / `MetricFamily::ALL` order.
    metrics: [[usize; 4]; 3],
}

impl ColumnMap {
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| IngestError::MissingColumn(name.to_string()))
        };

        let mut metrics = [[0usize; 4]; 3];
        for (ai, algorithm) in Algorithm::ALL.iter().enumerate() {
            for (fi, family) in MetricFamily::ALL.iter().enumerate() {
                let name = format!(
                    "{}_{}",
                    algorithm.column_prefix(),
                    family.column_suffix()
                );
                metrics[ai][fi] = find(&name)?;
            }
        }

        Ok(ColumnMap {
            input_id: find(INPUT_ID_COLUMN)?,
            n: find(SIZE_COLUMN)?,
            metrics,
        })
    }
}

fn cell<'r>(record: &'r csv::StringRecord, idx: usize, column: &str, row: usize) -> Result<&'r str> {
    record
        .get(idx)
        .map(str::trim)
        .ok_or_else(|| IngestError::InvalidValue {
            column: column.to_string(),
            row,
            value: String::new(),
        })
}

fn parse_count(record: &csv::StringRecord, idx: usize, column: &str, row: usize) -> Result<u64> {
    let raw = cell(record, idx, column, row)?;
    raw.parse::<u64>().map_err(|_| IngestError::InvalidValue {
        column: column.to_string(),
        row,
        value: raw.to_string(),
    })
}

fn parse_seconds(record: &csv::StringRecord, idx: usize, column: &str, row: usize) -> Result<f64> {
    let raw = cell(record, idx, column, row)?;
    raw.parse::<f64>().map_err(|_| IngestError::InvalidValue {
        column: column.to_string(),
        row,
        value: raw.to_string(),
    })
}

/// Parse the benchmark results table from any reader.
///
/// Returns records in file order. Fails fast on the first malformed cell or
/// missing column; no partial result is ever returned.
///
/// # Errors
///
/// - [`IngestError::MissingColumn`] if the header lacks a required column.
/// - [`IngestError::InvalidValue`] if a numeric cell does not parse, naming
///   the column and the 1-based data row.
/// - [`IngestError::Csv`] for malformed CSV framing.
pub fn read_trials<R: Read>(reader: R) -> Result<Vec<TrialRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = ColumnMap::resolve(&headers)?;

    let mut records = Vec::new();
    for (record_idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        let row = record_idx + 1;

        let input_id = cell(&record, columns.input_id, INPUT_ID_COLUMN, row)?.to_string();
        let n = parse_count(&record, columns.n, SIZE_COLUMN, row)?;
        if n == 0 {
            return Err(IngestError::InvalidValue {
                column: SIZE_COLUMN.to_string(),
                row,
                value: "0".to_string(),
            });
        }

        let mut per_algorithm = [AlgorithmMetrics {
            comparisons: 0,
            swaps: 0,
            copies: 0,
            cpu_seconds: 0.0,
        }; 3];

        for (ai, algorithm) in Algorithm::ALL.iter().enumerate() {
            let prefix = algorithm.column_prefix();
            // columns.metrics[ai] is in MetricFamily::ALL order:
            // [Comparisons, Copies, Swaps, Cpu].
            let [comp, copies, swaps, cpu] = columns.metrics[ai];
            per_algorithm[ai] = AlgorithmMetrics {
                comparisons: parse_count(&record, comp, &format!("{prefix}_comp"), row)?,
                copies: parse_count(&record, copies, &format!("{prefix}_copies"), row)?,
                swaps: parse_count(&record, swaps, &format!("{prefix}_swaps"), row)?,
                cpu_seconds: parse_seconds(&record, cpu, &format!("{prefix}_cpu"), row)?,
            };
        }

        records.push(TrialRecord {
            input_id,
            n,
            selection: per_algorithm[0],
            merge: per_algorithm[1],
            heap: per_algorithm[2],
        });
    }

    Ok(records)
}

/// Parse the benchmark results table from a file on disk.
///
/// # Errors
///
/// [`IngestError::Io`] if the file cannot be opened, otherwise as
/// [`read_trials`].
pub fn read_trials_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<TrialRecord>> {
    let file = File::open(path)?;
    read_trials(file)
}
