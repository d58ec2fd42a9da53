//! Persistence helpers for rendered output.
//!
//! - `save_ppm`: write a canvas as an ASCII (P3) PPM file.
//! - `save_png`: write a canvas through the `image` crate.
//! - `save_image`: dispatch on the file extension (`.ppm` vs. anything the
//!   `image` crate encodes).
//! - `write_text_file`: persist the fitted equation.

use super::canvas::Canvas;
use image::{Rgb, RgbImage};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Write the canvas as an ASCII PPM (P3) image.
pub fn save_ppm(canvas: &Canvas, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = String::with_capacity(canvas.width() * canvas.height() * 12 + 32);
    out.push_str(&format!("P3\n{} {}\n255\n", canvas.width(), canvas.height()));
    for row in canvas.data().chunks(canvas.width()) {
        for px in row {
            out.push_str(&format!("{} {} {} ", px[0], px[1], px[2]));
        }
        out.push('\n');
    }
    let mut file = fs::File::create(path)
        .map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    file.write_all(out.as_bytes())
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

/// Write the canvas through the `image` crate (PNG by extension).
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(canvas.width() as u32, canvas.height() as u32);
    for (i, px) in canvas.data().iter().enumerate() {
        let x = (i % canvas.width()) as u32;
        let y = (i / canvas.width()) as u32;
        out.put_pixel(x, y, Rgb(*px));
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save the canvas, picking the encoder from the file extension.
pub fn save_image(canvas: &Canvas, path: &Path) -> Result<(), String> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ppm") => save_ppm(canvas, path),
        _ => save_png(canvas, path),
    }
}

/// Write a small text artifact (e.g. the fitted equation) with a trailing
/// newline.
pub fn write_text_file(path: &Path, contents: &str) -> Result<(), String> {
    ensure_parent_dir(path)?;
    fs::write(path, format!("{contents}\n"))
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create directory {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ppm_header_matches_canvas_size() {
        let canvas = Canvas::new(3, 2, [255, 255, 255]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ppm");
        save_ppm(&canvas, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("P3"));
        assert_eq!(lines.next(), Some("3 2"));
        assert_eq!(lines.next(), Some("255"));
        // One line per pixel row, three values per pixel.
        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].split_whitespace().count(), 9);
    }

    #[test]
    fn text_file_gets_a_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/equation.txt");
        write_text_file(&path, "y = 2x - 3").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "y = 2x - 3\n");
    }
}
