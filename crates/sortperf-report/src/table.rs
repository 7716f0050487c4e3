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

//! Aggregate table output.
//!
//! One row per input group, group order preserved. The column set is fixed:
//! means for every algorithm/metric pair plus the comparisons standard
//! deviation for SelectionSort only (the headline metric's variability).

use crate::error::Result;
use sortperf_core::{AggregateRow, Algorithm};
use std::path::Path;

/// Fixed header of the aggregate table.
pub const AGGREGATE_HEADER: [&str; 15] = [
    "filename",
    "n",
    "sel_comp_mean",
    "sel_comp_std",
    "sel_swaps_mean",
    "sel_copies_mean",
    "sel_cpu_mean",
    "mer_comp_mean",
    "mer_swaps_mean",
    "mer_copies_mean",
    "mer_cpu_mean",
    "heap_comp_mean",
    "heap_swaps_mean",
    "heap_copies_mean",
    "heap_cpu_mean",
];

/// Format one statistic cell.
///
/// Uses Rust's shortest-roundtrip float formatting, which is deterministic,
/// so re-running on unchanged input produces a byte-identical table. An
/// undefined standard deviation (singleton group) is written as the explicit
/// marker `NaN`, never silently coerced to `0`.
fn stat_cell(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        value.to_string()
    }
}

/// Write the aggregate table, overwriting any previous run's file.
///
/// With zero groups the file contains only the header row.
///
/// # Errors
///
/// [`crate::error::ReportError::Csv`] or [`crate::error::ReportError::Io`]
/// on write failure.
pub fn write_aggregate_table(rows: &[AggregateRow], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().from_path(path)?;
    writer.write_record(AGGREGATE_HEADER)?;

    for row in rows {
        let sel = row.means(Algorithm::Selection);
        let mer = row.means(Algorithm::Merge);
        let heap = row.means(Algorithm::Heap);
        writer.write_record([
            row.input_id.clone(),
            row.n.to_string(),
            stat_cell(sel.comparisons),
            stat_cell(row.comparisons_std(Algorithm::Selection)),
            stat_cell(sel.swaps),
            stat_cell(sel.copies),
            stat_cell(sel.cpu_seconds),
            stat_cell(mer.comparisons),
            stat_cell(mer.swaps),
            stat_cell(mer.copies),
            stat_cell(mer.cpu_seconds),
            stat_cell(heap.comparisons),
            stat_cell(heap.swaps),
            stat_cell(heap.copies),
            stat_cell(heap.cpu_seconds),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
