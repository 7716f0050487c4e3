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

//! sortperf command line interface.

use clap::error::ErrorKind;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// sortperf - sorting benchmark report generator
///
/// Aggregates a benchmark results table (one row per trial) by input file,
/// then writes `aggregated_results.csv`, per-input comparison charts under
/// `plots/` and the paginated `report.pdf` into the current directory,
/// overwriting previous runs.
///
/// # Examples
///
/// ```bash
/// sortperf results_compare_detailed.csv
/// ```
#[derive(Parser)]
#[command(name = "sortperf")]
#[command(author, version, about = "Aggregate sorting benchmark results into charts and a PDF report", long_about = None)]
struct Cli {
    /// Benchmark results CSV produced by the sorting harness.
    input: PathBuf,
}

fn main() -> ExitCode {
    // clap's default `parse()` exits with status 2 and reports argument
    // errors on stderr; this tool's contract is a usage message on stdout
    // and status 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            return if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = e.print();
                ExitCode::SUCCESS
            } else {
                println!("{e}");
                ExitCode::FAILURE
            };
        }
    };

    match sortperf_cli::run(&cli.input, Path::new(".")) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
