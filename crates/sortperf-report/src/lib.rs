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

//! Report artifacts for sorting-benchmark aggregates.
//!
//! Consumes [`sortperf_core::AggregateRow`]s and produces the three output
//! artifacts, all with fixed names under a caller-supplied output root:
//!
//! - [`AGGREGATE_TABLE_NAME`] via [`write_aggregate_table`]
//! - `plots/*.png` via [`render_group_charts`] (one chart per metric family
//!   per input group)
//! - [`REPORT_NAME`] via [`assemble_report`]
//!
//! The output root is explicit configuration rather than ambient working
//! directory state, so the whole pipeline can run against a scratch
//! directory in tests.

pub mod chart;
pub mod error;
pub mod pdf;
pub mod table;

pub use chart::{
    chart_filename, input_basename, render_group_charts, sanitize_identity, GroupCharts,
    RenderedChart, SkippedChart,
};
pub use error::{ReportError, Result};
pub use pdf::assemble_report;
pub use table::{write_aggregate_table, AGGREGATE_HEADER};

/// Fixed name of the aggregate table artifact.
pub const AGGREGATE_TABLE_NAME: &str = "aggregated_results.csv";

/// Fixed name of the chart output directory.
pub const PLOTS_DIR_NAME: &str = "plots";

/// Fixed name of the paginated report artifact.
pub const REPORT_NAME: &str = "report.pdf";
