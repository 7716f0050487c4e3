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

//! Pipeline driver for the `sortperf` binary.
//!
//! One-shot batch transform: ingest the results table, group by input,
//! aggregate, then emit the aggregate table, the per-group charts and the
//! paginated report under the output root. Single-threaded throughout; each
//! group is processed to completion before the next begins.

pub mod error;

pub use error::{CliError, Result};

use colored::Colorize;
use sortperf_core::{aggregate, group_records, read_trials_from_path, AggregateRow};
use sortperf_report::{
    assemble_report, render_group_charts, write_aggregate_table, AGGREGATE_TABLE_NAME,
    PLOTS_DIR_NAME, REPORT_NAME,
};
use std::fs;
use std::path::Path;

/// Run the full pipeline.
///
/// * `input` - path to the benchmark results CSV.
/// * `out_root` - directory receiving `aggregated_results.csv`, `plots/`
///   and `report.pdf` (the CLI passes the current working directory).
///
/// Nothing is written until ingestion and aggregation have fully succeeded,
/// so a malformed input aborts without leaving partial artifacts behind.
/// Individual chart failures are reported as warnings and never abort the
/// run (skipped charts simply have no report page).
///
/// # Errors
///
/// [`CliError::Ingest`] for any input problem, [`CliError::Report`] if an
/// output artifact cannot be written.
pub fn run(input: &Path, out_root: &Path) -> Result<()> {
    let records = read_trials_from_path(input)?;
    let total_records = records.len();
    let groups = group_records(records)?;
    let rows = groups
        .iter()
        .map(aggregate)
        .collect::<sortperf_core::Result<Vec<AggregateRow>>>()?;

    let table_path = out_root.join(AGGREGATE_TABLE_NAME);
    write_aggregate_table(&rows, &table_path)?;

    let plots_dir = out_root.join(PLOTS_DIR_NAME);
    fs::create_dir_all(&plots_dir).map_err(sortperf_report::ReportError::Io)?;
    for row in &rows {
        let outcome = render_group_charts(row, &plots_dir)?;
        for skipped in &outcome.skipped {
            eprintln!(
                "{} chart '{}' for '{}' skipped: {}",
                "warning:".yellow().bold(),
                skipped.family.file_stem(),
                skipped.input_id,
                skipped.reason
            );
        }
    }

    let report_path = out_root.join(REPORT_NAME);
    assemble_report(
        &input.display().to_string(),
        &rows,
        total_records,
        &plots_dir,
        &report_path,
    )?;

    println!("Aggregated CSV: {}", AGGREGATE_TABLE_NAME.bold());
    println!("Plots: directory '{PLOTS_DIR_NAME}/'");
    println!(
        "{} Relatório PDF gerado: {}",
        "✓".green(),
        REPORT_NAME.bold()
    );
    Ok(())
}
