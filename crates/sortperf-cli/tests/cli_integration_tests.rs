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

//! End-to-end CLI tests against scratch output directories.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HEADER: &str = "n,sel_comp,sel_swaps,sel_copies,sel_cpu,\
mer_comp,mer_swaps,mer_copies,mer_cpu,heap_comp,heap_swaps,heap_copies,heap_cpu,filename";

fn sortperf_cmd() -> Command {
    Command::cargo_bin("sortperf").expect("Failed to find sortperf binary")
}

/// Scratch directory with a results file; outputs land next to it because
/// the command runs with the directory as cwd.
fn workdir_with_input(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = dir.path().join("results.csv");
    fs::write(&input, content).expect("Failed to write input");
    (dir, input)
}

fn two_group_input() -> String {
    format!(
        "{HEADER}\n\
100,10,1,0,0.1,20,0,5,0.2,30,2,0,0.3,a.txt\n\
100,20,1,0,0.1,20,0,5,0.2,30,2,0,0.3,a.txt\n\
100,30,1,0,0.1,20,0,5,0.2,30,2,0,0.3,a.txt\n\
500,100,9,0,0.9,200,0,50,0.8,300,20,0,0.7,b.txt\n\
500,200,9,0,0.9,200,0,50,0.8,300,20,0,0.7,b.txt\n"
    )
}

fn read_table(dir: &Path) -> String {
    fs::read_to_string(dir.join("aggregated_results.csv")).expect("aggregate table missing")
}

// ===== Help and usage =====

#[test]
fn test_help_output() {
    sortperf_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sorting benchmark results"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    sortperf_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sortperf"));
}

#[test]
fn test_missing_argument_prints_usage_to_stdout_and_exits_1() {
    sortperf_cmd()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_nonexistent_input_fails() {
    let dir = TempDir::new().unwrap();
    sortperf_cmd()
        .current_dir(dir.path())
        .arg("/nonexistent/results.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

// ===== Full pipeline =====

#[test]
fn test_full_run_emits_all_artifacts() {
    let (dir, input) = workdir_with_input(&two_group_input());

    sortperf_cmd()
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Aggregated CSV: aggregated_results.csv",
        ))
        .stdout(predicate::str::contains("Plots: directory 'plots/'"))
        .stdout(predicate::str::contains("report.pdf"));

    assert!(dir.path().join("aggregated_results.csv").is_file());
    assert!(dir.path().join("plots").is_dir());
    assert!(dir.path().join("report.pdf").is_file());
}

#[test]
fn test_aggregate_table_rows_and_order() {
    let (dir, input) = workdir_with_input(&two_group_input());
    sortperf_cmd()
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .success();

    let table = read_table(dir.path());
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 3, "header plus two groups");
    assert!(lines[0].starts_with("filename,n,sel_comp_mean,sel_comp_std,"));

    // a.txt first (first appearance), mean of {10,20,30} = 20, std = 10.
    let a: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(a[0], "a.txt");
    assert_eq!(a[1], "100");
    assert_eq!(a[2], "20");
    assert_eq!(a[3], "10");

    // b.txt: std computed from exactly 2 samples = sqrt(5000).
    let b: Vec<&str> = lines[2].split(',').collect();
    assert_eq!(b[0], "b.txt");
    assert_eq!(b[1], "500");
    assert_eq!(b[2], "150");
    let std: f64 = b[3].parse().unwrap();
    assert!((std - 5000.0_f64.sqrt()).abs() < 1e-9);
}

#[test]
fn test_rerun_is_byte_identical() {
    let (dir, input) = workdir_with_input(&two_group_input());

    sortperf_cmd()
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .success();
    let first = fs::read(dir.path().join("aggregated_results.csv")).unwrap();

    sortperf_cmd()
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .success();
    let second = fs::read(dir.path().join("aggregated_results.csv")).unwrap();

    assert_eq!(first, second);
}

// ===== Malformed input =====

#[test]
fn test_missing_column_aborts_before_any_output() {
    let header_without_mer_cpu = "n,sel_comp,sel_swaps,sel_copies,sel_cpu,\
mer_comp,mer_swaps,mer_copies,heap_comp,heap_swaps,heap_copies,heap_cpu,filename";
    let content = format!(
        "{header_without_mer_cpu}\n100,10,1,0,0.1,20,0,5,30,2,0,0.3,a.txt\n"
    );
    let (dir, input) = workdir_with_input(&content);

    sortperf_cmd()
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required column: mer_cpu"));

    assert!(!dir.path().join("aggregated_results.csv").exists());
    assert!(!dir.path().join("report.pdf").exists());
    assert!(!dir.path().join("plots").exists());
}

#[test]
fn test_unparsable_cell_names_column_and_row() {
    let content = format!(
        "{HEADER}\n100,10,1,0,0.1,20,0,5,0.2,30,2,0,0.3,a.txt\n\
100,10,1,0,0.1,20,0,five,0.2,30,2,0,0.3,a.txt\n"
    );
    let (dir, input) = workdir_with_input(&content);

    sortperf_cmd()
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("mer_copies"))
        .stderr(predicate::str::contains("row 2"));

    assert!(!dir.path().join("aggregated_results.csv").exists());
}

#[test]
fn test_heterogeneous_n_within_group_aborts() {
    let content = format!(
        "{HEADER}\n100,10,1,0,0.1,20,0,5,0.2,30,2,0,0.3,a.txt\n\
200,10,1,0,0.1,20,0,5,0.2,30,2,0,0.3,a.txt\n"
    );
    let (dir, input) = workdir_with_input(&content);

    sortperf_cmd()
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Inconsistent problem size"))
        .stderr(predicate::str::contains("a.txt"));
}

// ===== Edge cases =====

#[test]
fn test_header_only_input_still_generates_report() {
    let (dir, input) = workdir_with_input(&format!("{HEADER}\n"));

    sortperf_cmd()
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .success();

    let table = read_table(dir.path());
    assert_eq!(table.lines().count(), 1, "header only");
    // Cover and notes pages still exist even with zero chart pages.
    assert!(dir.path().join("report.pdf").is_file());
    assert!(dir.path().join("plots").is_dir());
}

#[test]
fn test_singleton_group_emits_nan_std_and_succeeds() {
    let content = format!("{HEADER}\n100,10,1,0,0.1,20,0,5,0.2,30,2,0,0.3,only.txt\n");
    let (dir, input) = workdir_with_input(&content);

    sortperf_cmd()
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .success();

    let table = read_table(dir.path());
    let fields: Vec<&str> = table.lines().nth(1).unwrap().split(',').collect();
    assert_eq!(fields[0], "only.txt");
    assert_eq!(fields[3], "NaN");
}

#[test]
fn test_nan_cpu_input_skips_chart_but_completes() {
    // A trial row can legitimately parse "NaN" as a float; the cpu chart is
    // then skipped under the rendering failure policy while the run, the
    // table and the report all still succeed.
    let content = format!("{HEADER}\n100,10,1,0,NaN,20,0,5,0.2,30,2,0,0.3,a.txt\n");
    let (dir, input) = workdir_with_input(&content);

    sortperf_cmd()
        .current_dir(dir.path())
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("skipped"));

    assert!(dir.path().join("report.pdf").is_file());
    assert!(!dir.path().join("plots").join("cpu_a.txt.png").exists());
}
