//! Textual palette exports.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::models::Palette;
use crate::rendering::swatch::{render_ansi, render_svg};

/// Output format for a generated palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// JavaScript array literal
    #[default]
    Js,
    /// One `#rrggbb` per line
    Hex,
    /// Pretty-printed JSON with the request fields
    Json,
    /// SVG swatch sheet
    Svg,
    /// 24-bit ANSI terminal swatches
    Swatches,
}

/// Options that only some formats use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Swatches per SVG row
    pub svg_columns: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { svg_columns: 6 }
    }
}

/// Render `palette` in `format`.
///
/// The result has no trailing newline.
pub fn render(
    palette: &Palette,
    format: ExportFormat,
    options: RenderOptions,
) -> Result<String, RenderError> {
    match format {
        ExportFormat::Js => Ok(render_js(palette)),
        ExportFormat::Hex => Ok(render_hex(palette)),
        ExportFormat::Json => render_json(palette),
        ExportFormat::Svg => render_svg(&palette.colors, options.svg_columns),
        ExportFormat::Swatches => Ok(render_ansi(&palette.colors)),
    }
}

/// `const palette = [ ... ]` with one single-quoted literal per line
pub fn render_js(palette: &Palette) -> String {
    let lines: Vec<String> = palette
        .colors
        .iter()
        .map(|code| format!("  '{code}',"))
        .collect();
    format!("const palette = [\n{}\n]", lines.join("\n"))
}

pub fn render_hex(palette: &Palette) -> String {
    palette.hex_codes().join("\n")
}

pub fn render_json(palette: &Palette) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(palette)?)
}
