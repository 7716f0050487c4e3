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

//! Strongly-typed data model for benchmark trial rows.
//!
//! The benchmark harness measures three sorting algorithms per trial and
//! tracks four metric families for each. Both axes are closed enums so that
//! downstream code (aggregation, charts, the output table) iterates over a
//! fixed schema instead of dynamically-keyed columns.

/// One of the three sorting algorithms measured per trial.
///
/// The variant order is the canonical display order: it fixes the bar order
/// in charts and the column-group order in the aggregate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Selection,
    Merge,
    Heap,
}

impl Algorithm {
    /// All algorithms in canonical display order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Selection, Algorithm::Merge, Algorithm::Heap];

    /// Human-readable label, used for chart bar labels.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Selection => "Selection",
            Algorithm::Merge => "Merge",
            Algorithm::Heap => "Heap",
        }
    }

    /// Column prefix used by the benchmark harness CSV (`sel_comp`, `mer_cpu`, ...).
    pub fn column_prefix(self) -> &'static str {
        match self {
            Algorithm::Selection => "sel",
            Algorithm::Merge => "mer",
            Algorithm::Heap => "heap",
        }
    }
}

/// One of the four tracked metric families.
///
/// The variant order is the order in which charts are rendered and report
/// pages are emitted for each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricFamily {
    Comparisons,
    Copies,
    Swaps,
    Cpu,
}

impl MetricFamily {
    /// All families in chart/page order.
    pub const ALL: [MetricFamily; 4] = [
        MetricFamily::Comparisons,
        MetricFamily::Copies,
        MetricFamily::Swaps,
        MetricFamily::Cpu,
    ];

    /// Stem used in plot filenames (`comparisons_foo.png`).
    pub fn file_stem(self) -> &'static str {
        match self {
            MetricFamily::Comparisons => "comparisons",
            MetricFamily::Copies => "copies",
            MetricFamily::Swaps => "swaps",
            MetricFamily::Cpu => "cpu",
        }
    }

    /// Name used in chart titles.
    pub fn title_name(self) -> &'static str {
        match self {
            MetricFamily::Comparisons => "Comparisons",
            MetricFamily::Copies => "Copies",
            MetricFamily::Swaps => "Swaps",
            MetricFamily::Cpu => "CPU time",
        }
    }

    /// Y-axis description for charts.
    pub fn y_desc(self) -> &'static str {
        match self {
            MetricFamily::Comparisons => "Average Comparisons",
            MetricFamily::Copies => "Average Copies",
            MetricFamily::Swaps => "Average Swaps",
            MetricFamily::Cpu => "Average CPU seconds",
        }
    }

    /// Name used for report page titles: the capitalized file stem, matching
    /// the plot filenames ("Comparisons", "Copies", "Swaps", "Cpu").
    pub fn page_title_name(self) -> &'static str {
        match self {
            MetricFamily::Comparisons => "Comparisons",
            MetricFamily::Copies => "Copies",
            MetricFamily::Swaps => "Swaps",
            MetricFamily::Cpu => "Cpu",
        }
    }

    /// Column suffix used by the benchmark harness CSV (`sel_comp`, `sel_swaps`, ...).
    pub fn column_suffix(self) -> &'static str {
        match self {
            MetricFamily::Comparisons => "comp",
            MetricFamily::Copies => "copies",
            MetricFamily::Swaps => "swaps",
            MetricFamily::Cpu => "cpu",
        }
    }
}

/// Counter and timing measurements for one algorithm within one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlgorithmMetrics {
    /// Comparisons used for ordering decisions.
    pub comparisons: u64,
    /// Element swaps (one swap counts as 1).
    pub swaps: u64,
    /// Assignments/copies (e.g. copies to the merge auxiliary buffer).
    pub copies: u64,
    /// CPU seconds for this algorithm in this trial.
    pub cpu_seconds: f64,
}

impl AlgorithmMetrics {
    /// Value of one metric family as `f64` (counters widened for statistics).
    pub fn value(&self, family: MetricFamily) -> f64 {
        match family {
            MetricFamily::Comparisons => self.comparisons as f64,
            MetricFamily::Copies => self.copies as f64,
            MetricFamily::Swaps => self.swaps as f64,
            MetricFamily::Cpu => self.cpu_seconds,
        }
    }
}

/// One measurement row: a single trial of all three algorithms against one
/// benchmark input file.
///
/// Records are immutable once ingested; they are only constructed by the
/// validated CSV ingestion in [`crate::ingest`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRecord {
    /// Identity of the originating benchmark input (file path or name).
    pub input_id: String,
    /// Problem size for that input.
    pub n: u64,
    /// SelectionSort measurements.
    pub selection: AlgorithmMetrics,
    /// MergeSort measurements.
    pub merge: AlgorithmMetrics,
    /// HeapSort measurements.
    pub heap: AlgorithmMetrics,
}

impl TrialRecord {
    /// Measurements for one algorithm.
    pub fn metrics(&self, algorithm: Algorithm) -> &AlgorithmMetrics {
        match algorithm {
            Algorithm::Selection => &self.selection,
            Algorithm::Merge => &self.merge,
            Algorithm::Heap => &self.heap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_order_is_display_order() {
        let labels: Vec<&str> = Algorithm::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["Selection", "Merge", "Heap"]);
    }

    #[test]
    fn test_column_prefixes() {
        assert_eq!(Algorithm::Selection.column_prefix(), "sel");
        assert_eq!(Algorithm::Merge.column_prefix(), "mer");
        assert_eq!(Algorithm::Heap.column_prefix(), "heap");
    }

    #[test]
    fn test_family_stems_match_harness_columns() {
        assert_eq!(MetricFamily::Comparisons.column_suffix(), "comp");
        assert_eq!(MetricFamily::Cpu.file_stem(), "cpu");
        assert_eq!(MetricFamily::Cpu.title_name(), "CPU time");
        assert_eq!(MetricFamily::Cpu.page_title_name(), "Cpu");
    }

    #[test]
    fn test_metric_value_widens_counters() {
        let m = AlgorithmMetrics {
            comparisons: 10,
            swaps: 3,
            copies: 7,
            cpu_seconds: 0.25,
        };
        assert_eq!(m.value(MetricFamily::Comparisons), 10.0);
        assert_eq!(m.value(MetricFamily::Swaps), 3.0);
        assert_eq!(m.value(MetricFamily::Copies), 7.0);
        assert_eq!(m.value(MetricFamily::Cpu), 0.25);
    }
}
