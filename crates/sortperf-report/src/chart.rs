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

//! Per-group bar chart rendering.
//!
//! Each input group gets one chart per metric family: three bars in fixed
//! algorithm order, rendered to a PNG named from the family stem and the
//! sanitized input identity. Repeated runs overwrite rather than accumulate.
//!
//! Failure policy (documented choice): a chart whose values are non-finite,
//! or whose backend draw fails, is skipped with a reason; the rest of the
//! run continues. The report assembler tolerates the missing image.

use crate::error::Result;
use plotters::prelude::*;
use sortperf_core::{AggregateRow, Algorithm, MetricFamily};
use std::fs;
use std::path::{Path, PathBuf};

const CHART_SIZE: (u32, u32) = (1000, 600);
const TITLE_FONT_SIZE: u32 = 28;
const AXIS_LABEL_FONT_SIZE: u32 = 20;
const TICK_LABEL_FONT_SIZE: u32 = 18;
const BAR_HALF_WIDTH: f64 = 0.3;

/// One color per algorithm, in `Algorithm::ALL` order.
const COLORS: [RGBColor; 3] = [
    RGBColor(66, 133, 244), // Selection - blue
    RGBColor(52, 168, 83),  // Merge - green
    RGBColor(251, 188, 5),  // Heap - yellow
];

/// A chart that was written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub family: MetricFamily,
    pub path: PathBuf,
}

/// A chart that was skipped under the failure policy.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedChart {
    pub family: MetricFamily,
    pub input_id: String,
    pub reason: String,
}

/// Outcome of rendering one group's chart set.
#[derive(Debug, Default)]
pub struct GroupCharts {
    pub rendered: Vec<RenderedChart>,
    pub skipped: Vec<SkippedChart>,
}

/// Basename of an input identity (final path component).
pub fn input_basename(input_id: &str) -> &str {
    input_id
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(input_id)
}

/// Sanitize an input basename for use in a filename.
///
/// Everything outside `[A-Za-z0-9._-]` becomes `_`, so the
/// `{family}_{base}` naming scheme stays unique and deterministic per
/// (family, input identity) pair.
pub fn sanitize_identity(base: &str) -> String {
    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Plot filename for one (family, input identity) pair.
pub fn chart_filename(family: MetricFamily, input_id: &str) -> String {
    format!(
        "{}_{}.png",
        family.file_stem(),
        sanitize_identity(input_basename(input_id))
    )
}

/// Render the four charts for one aggregate row into `plots_dir`.
///
/// Creates `plots_dir` if needed. Individual chart failures are downgraded
/// to [`SkippedChart`] entries per the module failure policy; only directory
/// creation is fatal.
pub fn render_group_charts(row: &AggregateRow, plots_dir: &Path) -> Result<GroupCharts> {
    fs::create_dir_all(plots_dir)?;

    let mut outcome = GroupCharts::default();
    for family in MetricFamily::ALL {
        let path = plots_dir.join(chart_filename(family, &row.input_id));
        match render_one(row, family, &path) {
            Ok(()) => outcome.rendered.push(RenderedChart { family, path }),
            Err(reason) => outcome.skipped.push(SkippedChart {
                family,
                input_id: row.input_id.clone(),
                reason,
            }),
        }
    }
    Ok(outcome)
}

fn render_one(
    row: &AggregateRow,
    family: MetricFamily,
    path: &Path,
) -> std::result::Result<(), String> {
    let series = row.series(family);
    if series.iter().any(|v| !v.is_finite()) {
        return Err(format!(
            "non-finite {} mean, chart skipped",
            family.file_stem()
        ));
    }

    let base = input_basename(&row.input_id);
    let title = format!("{} - {} (n={})", family.title_name(), base, row.n);

    draw_bars(&title, family, &series, path).map_err(|e| e.to_string())
}

fn draw_bars(
    title: &str,
    family: MetricFamily,
    series: &[f64; 3],
    path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let max_value = series.iter().fold(0.0_f64, |a, &b| a.max(b));
    // Zero-height bars still need a drawable y-range.
    let y_max = if max_value > 0.0 { max_value * 1.15 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5..2.5_f64, 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(Algorithm::ALL.len())
        .x_label_formatter(&|x| {
            let idx = x.round() as usize;
            if idx < Algorithm::ALL.len() && (x - idx as f64).abs() < 0.3 {
                Algorithm::ALL[idx].label().to_string()
            } else {
                String::new()
            }
        })
        .y_desc(family.y_desc())
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    for (idx, &value) in series.iter().enumerate() {
        let x_center = idx as f64;
        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (x_center - BAR_HALF_WIDTH, 0.0),
                (x_center + BAR_HALF_WIDTH, value),
            ],
            COLORS[idx].filled(),
        )))?;
    }

    root.present()?;
    Ok(())
}
