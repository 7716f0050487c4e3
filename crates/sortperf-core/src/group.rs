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

//! Partitioning of trial records by input identity.
//!
//! Groups are keyed by exact string equality on `input_id` and reported in
//! first-appearance order of the key in the source table. That order is
//! reused verbatim for the aggregate table rows and the report page order,
//! so it must never be sorted.

use crate::error::{IngestError, Result};
use crate::record::TrialRecord;
use std::collections::HashMap;

/// All trial records sharing one `input_id`.
///
/// Non-empty by construction and homogeneous in `n` (validated by
/// [`group_records`]). Record order within a group is irrelevant; only the
/// aggregate is ever consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct InputGroup {
    /// The shared input identity.
    pub input_id: String,
    /// The shared problem size.
    pub n: u64,
    /// The member records, in source order.
    pub records: Vec<TrialRecord>,
}

impl InputGroup {
    /// Number of trials in this group.
    pub fn samples(&self) -> usize {
        self.records.len()
    }
}

/// Partition records into groups, preserving first-seen key order.
///
/// Validates that every record in a group agrees on the problem size `n`.
/// The benchmark harness writes one `n` per input file, so a mismatch means
/// the results table mixes runs of a regenerated input; that is corrupt data
/// and the run fails loudly instead of trusting an arbitrary member.
///
/// # Errors
///
/// [`IngestError::HeterogeneousGroup`] on an `n` mismatch within a group.
pub fn group_records(records: Vec<TrialRecord>) -> Result<Vec<InputGroup>> {
    let mut groups: Vec<InputGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        match index.get(&record.input_id) {
            Some(&i) => {
                let group = &mut groups[i];
                if group.n != record.n {
                    return Err(IngestError::HeterogeneousGroup {
                        input_id: record.input_id,
                        expected_n: group.n,
                        found_n: record.n,
                    });
                }
                group.records.push(record);
            }
            None => {
                index.insert(record.input_id.clone(), groups.len());
                groups.push(InputGroup {
                    input_id: record.input_id.clone(),
                    n: record.n,
                    records: vec![record],
                });
            }
        }
    }

    Ok(groups)
}
