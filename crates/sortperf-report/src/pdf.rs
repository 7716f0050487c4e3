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

//! Paginated report assembly.
//!
//! Page order is fixed: cover/summary, then four chart pages per input group
//! (in grouper order), then the closing notes. A chart skipped by the
//! renderer simply produces no page, so the document always assembles once
//! aggregation succeeded. The output file is overwritten on every run.

use crate::chart::{chart_filename, input_basename};
use crate::error::{ReportError, Result};
use printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference,
};
use sortperf_core::{AggregateRow, MetricFamily};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

// US Letter, landscape.
const PAGE_WIDTH_MM: f32 = 279.4;
const PAGE_HEIGHT_MM: f32 = 215.9;

// 1000x600 px charts embedded at 96 dpi come out 264.6 x 158.8 mm.
const CHART_DPI: f32 = 96.0;
const CHART_X_MM: f32 = 7.4;
const CHART_Y_MM: f32 = 15.0;

const TITLE_SIZE: f32 = 18.0;
const PAGE_TITLE_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 12.0;
const NOTES_SIZE: f32 = 11.0;
const LINE_STEP_MM: f32 = 9.0;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn pdf_err<E: std::fmt::Display>(e: E) -> ReportError {
    ReportError::Pdf(e.to_string())
}

fn add_page(doc: &PdfDocumentReference, name: &str) -> PdfLayerReference {
    let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), name);
    doc.get_page(page).get_layer(layer)
}

fn write_lines(layer: &PdfLayerReference, fonts: &Fonts, size: f32, top_mm: f32, lines: &[String]) {
    let mut y = top_mm;
    for line in lines {
        if !line.is_empty() {
            layer.use_text(line.clone(), size, Mm(20.0), Mm(y), &fonts.regular);
        }
        y -= LINE_STEP_MM;
    }
}

fn cover_page(layer: &PdfLayerReference, fonts: &Fonts, source: &str, rows: &[AggregateRow], total_records: usize) {
    layer.use_text(
        "Comparativo de Algoritmos de Ordenação",
        TITLE_SIZE,
        Mm(20.0),
        Mm(190.0),
        &fonts.bold,
    );
    layer.use_text(
        "SelectionSort | MergeSort | HeapSort",
        PAGE_TITLE_SIZE,
        Mm(20.0),
        Mm(180.0),
        &fonts.regular,
    );

    let samples_per_input = if rows.is_empty() {
        0
    } else {
        total_records / rows.len()
    };
    let summary = [
        format!("Arquivo de origem: {source}"),
        format!("Entradas testadas: {}", rows.len()),
        format!("Execuções por entrada (amostras): {samples_per_input}"),
        String::new(),
        "Métricas calculadas (médias): comparisons, swaps, copies, cpu_seconds".to_string(),
        String::new(),
        "Gerado automaticamente por sortperf".to_string(),
    ];
    write_lines(layer, fonts, BODY_SIZE, 160.0, &summary);
}

fn notes_page(layer: &PdfLayerReference, fonts: &Fonts) {
    let notes = [
        "Notas:".to_string(),
        "- 'comparisons' conta todas as comparações usadas para decisão de ordenação.".to_string(),
        "- 'swaps' conta quantas trocas/swaps foram realizadas (um swap é contado como 1).".to_string(),
        "- 'copies' conta atribuições/cópias (ex.: cópias para vetor auxiliar no merge e atribuições para o array)."
            .to_string(),
        "- Ajuste as convenções conforme necessidade (ex.: contar swaps como 3 cópias ou 1).".to_string(),
        String::new(),
        "Para reproduzir: rode run_all.sh após compilar o benchmark e colocar os arquivos em inputs/."
            .to_string(),
    ];
    write_lines(layer, fonts, NOTES_SIZE, 190.0, &notes);
}

fn chart_page(
    doc: &PdfDocumentReference,
    fonts: &Fonts,
    row: &AggregateRow,
    family: MetricFamily,
    plot_path: &Path,
) -> Result<()> {
    let base = input_basename(&row.input_id);
    let title = format!("{} - {}", family.page_title_name(), base);
    let layer = add_page(doc, &title);

    layer.use_text(title.clone(), PAGE_TITLE_SIZE, Mm(20.0), Mm(200.0), &fonts.bold);

    let dynamic = printpdf::image_crate::open(plot_path).map_err(|e| ReportError::Image {
        path: plot_path.to_path_buf(),
        message: e.to_string(),
    })?;
    let image = Image::from_dynamic_image(&dynamic);
    image.add_to_layer(
        layer,
        ImageTransform {
            translate_x: Some(Mm(CHART_X_MM)),
            translate_y: Some(Mm(CHART_Y_MM)),
            dpi: Some(CHART_DPI),
            ..Default::default()
        },
    );
    Ok(())
}

/// Assemble and write the report PDF.
///
/// * `source` - name of the ingested results file, shown on the cover.
/// * `rows` - aggregate rows in grouper order; pages follow this order.
/// * `total_records` - trial count before grouping, for the cover summary.
/// * `plots_dir` - directory holding the renderer's PNGs. Missing images
///   (skipped charts) are tolerated and produce no page.
/// * `out_path` - destination, overwritten if present.
pub fn assemble_report(
    source: &str,
    rows: &[AggregateRow],
    total_records: usize,
    plots_dir: &Path,
    out_path: &Path,
) -> Result<()> {
    let (doc, cover_page_idx, cover_layer_idx) = PdfDocument::new(
        "Comparativo de Algoritmos de Ordenação",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Capa",
    );
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_err)?,
    };

    let cover = doc.get_page(cover_page_idx).get_layer(cover_layer_idx);
    cover_page(&cover, &fonts, source, rows, total_records);

    for row in rows {
        for family in MetricFamily::ALL {
            let plot_path = plots_dir.join(chart_filename(family, &row.input_id));
            if plot_path.exists() {
                chart_page(&doc, &fonts, row, family, &plot_path)?;
            }
        }
    }

    notes_page(&add_page(&doc, "Notas"), &fonts);

    let file = File::create(out_path)?;
    doc.save(&mut BufWriter::new(file)).map_err(pdf_err)?;
    Ok(())
}
