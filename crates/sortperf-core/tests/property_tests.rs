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

//! Property-based tests for grouping and aggregation invariants:
//! - the aggregator's mean matches a reference reduction
//! - group order is first-appearance order, however rows interleave
//! - singleton standard deviation is NaN, never zero
//! - aggregation is deterministic

use proptest::prelude::*;
use sortperf_core::{
    aggregate, group_records, Algorithm, AlgorithmMetrics, InputGroup, MetricFamily, TrialRecord,
};

fn metrics() -> impl Strategy<Value = AlgorithmMetrics> {
    (0u64..1_000_000, 0u64..1_000_000, 0u64..1_000_000, 0.0f64..10.0).prop_map(
        |(comparisons, swaps, copies, cpu_seconds)| AlgorithmMetrics {
            comparisons,
            swaps,
            copies,
            cpu_seconds,
        },
    )
}

/// Records drawn from a small pool of input ids so groups actually form.
fn trial_record() -> impl Strategy<Value = TrialRecord> {
    (0usize..5, metrics(), metrics(), metrics()).prop_map(|(id, selection, merge, heap)| {
        TrialRecord {
            input_id: format!("input_{id}.txt"),
            // Derive n from the id so every group is homogeneous.
            n: (id as u64 + 1) * 100,
            selection,
            merge,
            heap,
        }
    })
}

fn record_table() -> impl Strategy<Value = Vec<TrialRecord>> {
    prop::collection::vec(trial_record(), 0..40)
}

proptest! {
    #[test]
    fn prop_mean_matches_reference_reduction(records in record_table()) {
        let groups = group_records(records).unwrap();
        for group in &groups {
            let row = aggregate(group).unwrap();
            for algorithm in Algorithm::ALL {
                for family in MetricFamily::ALL {
                    let reference: f64 = group
                        .records
                        .iter()
                        .map(|r| r.metrics(algorithm).value(family))
                        .sum::<f64>()
                        / group.records.len() as f64;
                    let got = row.means(algorithm).value(family);
                    prop_assert!(
                        (got - reference).abs() <= 1e-9 * reference.abs().max(1.0),
                        "mean mismatch: got {got}, reference {reference}"
                    );
                }
            }
        }
    }

    #[test]
    fn prop_group_order_is_first_appearance(records in record_table()) {
        let mut expected: Vec<String> = Vec::new();
        for record in &records {
            if !expected.contains(&record.input_id) {
                expected.push(record.input_id.clone());
            }
        }

        let groups = group_records(records).unwrap();
        let got: Vec<String> = groups.iter().map(|g| g.input_id.clone()).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_group_sizes_sum_to_input_size(records in record_table()) {
        let total = records.len();
        let groups = group_records(records).unwrap();
        let grouped: usize = groups.iter().map(|g| g.samples()).sum();
        prop_assert_eq!(grouped, total);
    }

    #[test]
    fn prop_singleton_std_is_nan(record in trial_record()) {
        let group = InputGroup {
            input_id: record.input_id.clone(),
            n: record.n,
            records: vec![record],
        };
        let row = aggregate(&group).unwrap();
        for algorithm in Algorithm::ALL {
            prop_assert!(row.comparisons_std(algorithm).is_nan());
        }
    }

    #[test]
    fn prop_aggregation_is_deterministic(records in record_table()) {
        let groups = group_records(records).unwrap();
        for group in &groups {
            let first = aggregate(group).unwrap();
            let second = aggregate(group).unwrap();
            for family in MetricFamily::ALL {
                prop_assert_eq!(first.series(family), second.series(family));
            }
            // NaN std (singleton groups) is still deterministic, but NaN
            // never compares equal; check bit-for-bit instead.
            for algorithm in Algorithm::ALL {
                prop_assert_eq!(
                    first.comparisons_std(algorithm).to_bits(),
                    second.comparisons_std(algorithm).to_bits()
                );
            }
        }
    }
}
