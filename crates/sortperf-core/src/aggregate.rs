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

//! Reduction of input groups to per-input summary statistics.
//!
//! The aggregate keeps the arithmetic mean of every metric and, for the
//! headline comparisons metric only, the sample standard deviation. A
//! singleton group has no defined deviation; it is surfaced as `NaN` so
//! callers can report "insufficient samples" instead of a fake zero.

use crate::error::{IngestError, Result};
use crate::group::InputGroup;
use crate::record::{Algorithm, MetricFamily};

/// Mean of each metric family for one algorithm across one group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricMeans {
    pub comparisons: f64,
    pub swaps: f64,
    pub copies: f64,
    pub cpu_seconds: f64,
}

impl MetricMeans {
    /// Mean for one metric family.
    pub fn value(&self, family: MetricFamily) -> f64 {
        match family {
            MetricFamily::Comparisons => self.comparisons,
            MetricFamily::Copies => self.copies,
            MetricFamily::Swaps => self.swaps,
            MetricFamily::Cpu => self.cpu_seconds,
        }
    }
}

/// Per-input statistical summary, one per group.
///
/// Consumed by both the aggregate table writer and the chart renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    /// Grouping key (input file identity).
    pub input_id: String,
    /// Problem size shared by the whole group.
    pub n: u64,
    /// Number of trials aggregated.
    pub samples: usize,
    /// Means, indexed in `Algorithm::ALL` order.
    means: [MetricMeans; 3],
    /// Sample standard deviation of comparisons, `Algorithm::ALL` order.
    /// `NaN` when `samples == 1`.
    comparisons_std: [f64; 3],
}

impl AggregateRow {
    /// Metric means for one algorithm.
    pub fn means(&self, algorithm: Algorithm) -> &MetricMeans {
        &self.means[algorithm_index(algorithm)]
    }

    /// Sample standard deviation of the comparisons metric for one
    /// algorithm. `NaN` means the group had a single sample.
    pub fn comparisons_std(&self, algorithm: Algorithm) -> f64 {
        self.comparisons_std[algorithm_index(algorithm)]
    }

    /// Bar values for one metric family, in `Algorithm::ALL` order.
    pub fn series(&self, family: MetricFamily) -> [f64; 3] {
        [
            self.means[0].value(family),
            self.means[1].value(family),
            self.means[2].value(family),
        ]
    }
}

fn algorithm_index(algorithm: Algorithm) -> usize {
    match algorithm {
        Algorithm::Selection => 0,
        Algorithm::Merge => 1,
        Algorithm::Heap => 2,
    }
}

fn mean(values: impl Iterator<Item = f64>, count: usize) -> f64 {
    values.sum::<f64>() / count as f64
}

/// Sample standard deviation (divisor = count − 1).
///
/// Undefined for a single sample; returns `NaN` rather than coercing to
/// zero, so "insufficient samples" stays distinguishable from "no spread".
fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values.iter().copied(), values.len());
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Reduce one group to its [`AggregateRow`].
///
/// Pure: no side effects, deterministic for a given group.
///
/// # Errors
///
/// [`IngestError::EmptyGroup`] if the group has no records. Groups from
/// [`crate::group::group_records`] are never empty; this guards callers that
/// construct groups by hand.
pub fn aggregate(group: &InputGroup) -> Result<AggregateRow> {
    if group.records.is_empty() {
        return Err(IngestError::EmptyGroup {
            input_id: group.input_id.clone(),
        });
    }

    let count = group.records.len();
    let mut means = [MetricMeans {
        comparisons: 0.0,
        swaps: 0.0,
        copies: 0.0,
        cpu_seconds: 0.0,
    }; 3];
    let mut comparisons_std = [f64::NAN; 3];

    for (ai, algorithm) in Algorithm::ALL.iter().enumerate() {
        let metric = |family: MetricFamily| -> Vec<f64> {
            group
                .records
                .iter()
                .map(|r| r.metrics(*algorithm).value(family))
                .collect()
        };

        let comparisons = metric(MetricFamily::Comparisons);
        means[ai] = MetricMeans {
            comparisons: mean(comparisons.iter().copied(), count),
            swaps: mean(metric(MetricFamily::Swaps).into_iter(), count),
            copies: mean(metric(MetricFamily::Copies).into_iter(), count),
            cpu_seconds: mean(metric(MetricFamily::Cpu).into_iter(), count),
        };
        comparisons_std[ai] = sample_std(&comparisons);
    }

    Ok(AggregateRow {
        input_id: group.input_id.clone(),
        n: group.n,
        samples: count,
        means,
        comparisons_std,
    })
}
