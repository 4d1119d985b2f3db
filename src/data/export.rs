use std::io::Write;
use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::ChartError;

use super::selection::Selection;

/// Write the selected records as a pretty-printed JSON array, in click order.
pub fn write_selection_json<W: Write>(mut w: W, selection: &Selection) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut w, selection.items())?;
    writeln!(w)?;
    Ok(())
}

pub fn save_selection_json(path: &Path, selection: &Selection) -> Result<(), ChartError> {
    let export_err = |source| ChartError::Export {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::create(path).map_err(export_err)?;
    let mut w = std::io::BufWriter::new(file);
    write_selection_json(&mut w, selection).map_err(export_err)?;
    w.flush().map_err(export_err)?;
    tracing::info!(path = %path.display(), count = selection.len(), "saved selection");
    Ok(())
}

/// Suggested file name for an export, e.g. `selection_20240131_142501.json`.
pub fn default_file_name(stem: &str, extension: &str) -> String {
    format!(
        "{stem}_{}.{extension}",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// Copy an egui screenshot into an `image` buffer, pixel by pixel.
pub fn color_image_to_rgba(img: &egui::ColorImage) -> RgbaImage {
    let [w, h] = img.size;
    let mut out = RgbaImage::new(w as u32, h as u32);
    for y in 0..h {
        for x in 0..w {
            let p = img.pixels[y * w + x];
            out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
        }
    }
    out
}

/// Save a captured chart image as PNG (format follows the path's extension).
pub fn save_chart_png(path: &Path, img: &egui::ColorImage) -> Result<(), ChartError> {
    color_image_to_rgba(img)
        .save(path)
        .map_err(|source| ChartError::Image {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!(path = %path.display(), width = img.size[0], height = img.size[1], "saved chart image");
    Ok(())
}
