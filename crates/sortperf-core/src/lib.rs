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

//! Core pipeline for sorting-benchmark result aggregation.
//!
//! Ingests the trial table produced by the native benchmark harness, groups
//! rows by originating input file, and reduces each group to one summary
//! row. Rendering lives in `sortperf-report`; this crate is pure data.
//!
//! # Pipeline
//!
//! ```text
//! CSV → ingest::read_trials → group::group_records → aggregate::aggregate
//! ```
//!
//! # Examples
//!
//! ```
//! use sortperf_core::{aggregate, group_records, read_trials};
//!
//! let csv = "\
//! n,sel_comp,sel_swaps,sel_copies,sel_cpu,mer_comp,mer_swaps,mer_copies,mer_cpu,\
//! heap_comp,heap_swaps,heap_copies,heap_cpu,filename
//! 100,4950,99,0,0.001,580,0,1344,0.0005,1081,540,0,0.0006,inputs/a.txt
//! 100,4950,97,0,0.001,575,0,1344,0.0005,1075,538,0,0.0006,inputs/a.txt
//! ";
//!
//! let records = read_trials(csv.as_bytes()).unwrap();
//! let groups = group_records(records).unwrap();
//! assert_eq!(groups.len(), 1);
//!
//! let row = aggregate(&groups[0]).unwrap();
//! assert_eq!(row.samples, 2);
//! assert_eq!(row.n, 100);
//! ```

pub mod aggregate;
pub mod error;
pub mod group;
pub mod ingest;
pub mod record;

pub use aggregate::{aggregate, AggregateRow, MetricMeans};
pub use error::{IngestError, Result};
pub use group::{group_records, InputGroup};
pub use ingest::{read_trials, read_trials_from_path};
pub use record::{Algorithm, AlgorithmMetrics, MetricFamily, TrialRecord};
