//! Chart export: projected records as CSV, captured chart pixels as PNG
//! or as a single-page PDF.
//!
//! Exports read the current projection and never touch the dataset or the
//! selection.

use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use eframe::egui::ColorImage;
use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{Image, ImageTransform, Mm, PdfDocument};

use crate::data::{LABEL_KEY, ProjectedRecord, SeriesSpec};

/// Write `records` as CSV with header `name,<series..>`.
pub fn write_projection_csv<W: Write>(
    writer: W,
    records: &[ProjectedRecord],
    series: &[SeriesSpec],
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec![LABEL_KEY.to_string()];
    header.extend(series.iter().map(|s| s.display_name.clone()));
    wtr.write_record(&header).context("writing CSV header")?;

    for record in records {
        let mut fields = vec![record.label.clone()];
        for spec in series {
            let value = record
                .value(&spec.column_name)
                .map(|v| v.to_string())
                .unwrap_or_default();
            fields.push(value);
        }
        wtr.write_record(&fields).context("writing CSV record")?;
    }

    wtr.flush().context("flushing CSV output")?;
    Ok(())
}

/// Save the projection to a CSV file.
pub fn save_projection_csv(
    path: &Path,
    records: &[ProjectedRecord],
    series: &[SeriesSpec],
) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_projection_csv(file, records, series)
}

/// Save a captured screen region as PNG.
pub fn save_png(path: &Path, image: &ColorImage) -> Result<()> {
    let [width, height] = image.size;
    if width == 0 || height == 0 {
        bail!("nothing to export: captured region is empty");
    }
    let buffer = image::RgbaImage::from_raw(width as u32, height as u32, image.as_raw().to_vec())
        .context("captured image has an unexpected size")?;
    buffer
        .save(path)
        .with_context(|| format!("writing PNG to {}", path.display()))?;
    Ok(())
}

/// Screen pixels per inch assumed when sizing the PDF page.
const PDF_DPI: f32 = 96.0;
const MM_PER_INCH: f32 = 25.4;

/// Page geometry for a PDF holding one captured image at [`PDF_DPI`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfPageLayout {
    pub width_mm: f32,
    pub height_mm: f32,
    pub landscape: bool,
}

/// The page matches the capture exactly; wider than tall is landscape.
pub fn pdf_page_layout(width_px: usize, height_px: usize) -> PdfPageLayout {
    let to_mm = |px: usize| px as f32 * MM_PER_INCH / PDF_DPI;
    PdfPageLayout {
        width_mm: to_mm(width_px),
        height_mm: to_mm(height_px),
        landscape: width_px > height_px,
    }
}

/// Save a captured screen region as a one-page PDF sized to the capture.
///
/// Transparent pixels are flattened onto white.
pub fn save_pdf(path: &Path, image: &ColorImage, title: &str) -> Result<()> {
    let [width, height] = image.size;
    if width == 0 || height == 0 {
        bail!("nothing to export: captured region is empty");
    }
    let layout = pdf_page_layout(width, height);
    log::debug!(
        "pdf page {:.1}x{:.1}mm ({})",
        layout.width_mm,
        layout.height_mm,
        if layout.landscape { "landscape" } else { "portrait" }
    );

    let png = encode_on_white(image)?;
    let decoder = PngDecoder::new(Cursor::new(png)).context("decoding captured chart")?;
    let chart = Image::try_from(decoder).context("embedding captured chart")?;

    let (doc, page, layer) = PdfDocument::new(
        title,
        Mm(layout.width_mm.into()),
        Mm(layout.height_mm.into()),
        "chart",
    );
    chart.add_to_layer(
        doc.get_page(page).get_layer(layer),
        ImageTransform {
            dpi: Some(PDF_DPI.into()),
            ..Default::default()
        },
    );

    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| anyhow!("writing PDF to {}: {e:?}", path.display()))?;
    Ok(())
}

/// RGB PNG bytes of `image` composited over a white background.
fn encode_on_white(image: &ColorImage) -> Result<Vec<u8>> {
    let [width, height] = image.size;
    // egui pixels are premultiplied, so white shows through as `255 - a`
    let rgb: Vec<u8> = image
        .pixels
        .iter()
        .flat_map(|p| {
            let fill = 255 - p.a();
            [
                p.r().saturating_add(fill),
                p.g().saturating_add(fill),
                p.b().saturating_add(fill),
            ]
        })
        .collect();
    let buffer = image::RgbImage::from_raw(width as u32, height as u32, rgb)
        .context("captured image has an unexpected size")?;

    let mut png = Cursor::new(Vec::new());
    buffer
        .write_to(&mut png, image::ImageFormat::Png)
        .context("encoding captured chart")?;
    Ok(png.into_inner())
}
