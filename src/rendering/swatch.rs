//! Visual swatches: an SVG sheet and ANSI terminal blocks.

use luma_index::ColorCode;

use crate::error::RenderError;

/// Swatch width in pixels
pub const SWATCH_WIDTH: usize = 120;

/// Swatch height in pixels
pub const SWATCH_HEIGHT: usize = 16;

/// Space between swatches and around the sheet
pub const SWATCH_GAP: usize = 8;

/// Render `colors` as an SVG sheet, `columns` swatches per row.
///
/// Swatches keep palette order, left to right then top to bottom. An empty
/// palette gives an empty sheet of minimal size.
pub fn render_svg(colors: &[ColorCode], columns: usize) -> Result<String, RenderError> {
    if columns == 0 {
        return Err(RenderError::InvalidOption(
            "svg columns must be at least 1".to_string(),
        ));
    }

    let used_columns = columns.min(colors.len());
    let rows = colors.len().div_ceil(columns);
    let width = SWATCH_GAP + used_columns * (SWATCH_WIDTH + SWATCH_GAP);
    let height = SWATCH_GAP + rows * (SWATCH_HEIGHT + SWATCH_GAP);

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
    );
    for (i, code) in colors.iter().enumerate() {
        let x = SWATCH_GAP + (i % columns) * (SWATCH_WIDTH + SWATCH_GAP);
        let y = SWATCH_GAP + (i / columns) * (SWATCH_HEIGHT + SWATCH_GAP);
        svg.push_str(&format!(
            "\n  <rect x=\"{x}\" y=\"{y}\" width=\"{SWATCH_WIDTH}\" height=\"{SWATCH_HEIGHT}\" fill=\"{code}\"/>"
        ));
    }
    svg.push_str("\n</svg>");
    Ok(svg)
}

/// One line per color: a block with a 24-bit background, then the hex code
pub fn render_ansi(colors: &[ColorCode]) -> String {
    colors
        .iter()
        .map(|&code| {
            let (r, g, b) = code.to_rgb();
            format!("\x1b[48;2;{r};{g};{b}m            \x1b[0m {code}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
