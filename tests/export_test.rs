//! Export rendering of real palettes.

mod common;

use common::*;
use luma_palette::models::PaletteRequest;
use luma_palette::rendering::{render, ExportFormat, RenderOptions};
use luma_palette::services::ShuffleMode;
use luma_palette::Palette;
use pretty_assertions::assert_eq;

fn level_zero_palette() -> Palette {
    let request = PaletteRequest::new(0.0, 0.0, 200.0).unwrap();
    shared_selector(ShuffleMode::Uniform)
        .select(&request, &mut seeded_rng(0))
        .unwrap()
}

#[test]
fn test_js_export_of_level_zero() {
    let output = render(
        &level_zero_palette(),
        ExportFormat::Js,
        RenderOptions::default(),
    )
    .unwrap();

    let mut expected = String::from("const palette = [\n");
    let lines: Vec<String> = LEVEL_ZERO_PALETTE
        .iter()
        .map(|hex| format!("  '{hex}',"))
        .collect();
    expected.push_str(&lines.join("\n"));
    expected.push_str("\n]");

    assert_eq!(output, expected);
}

#[test]
fn test_hex_export_of_level_zero() {
    let output = render(
        &level_zero_palette(),
        ExportFormat::Hex,
        RenderOptions::default(),
    )
    .unwrap();
    assert_eq!(output.lines().collect::<Vec<_>>(), LEVEL_ZERO_PALETTE);
}

#[test]
fn test_json_export_carries_request_and_band() {
    let output = render(
        &level_zero_palette(),
        ExportFormat::Json,
        RenderOptions::default(),
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["brightness"], 0);
    assert_eq!(json["tolerance"], 0);
    assert_eq!(json["size"], 200);
    assert_eq!(json["min_level"], 0);
    assert_eq!(json["max_level"], 0);
    assert_eq!(json["candidates"], 13);
    assert_eq!(json["colors"], serde_json::json!(LEVEL_ZERO_PALETTE));
}

#[test]
fn test_svg_export_layout() {
    let output = render(
        &level_zero_palette(),
        ExportFormat::Svg,
        RenderOptions { svg_columns: 4 },
    )
    .unwrap();

    // 12 swatches in 3 rows of 4
    assert!(output.starts_with("<svg"));
    assert!(output.ends_with("</svg>"));
    assert!(output.contains(r#"width="520" height="80""#));
    assert_eq!(output.matches("<rect").count(), 12);
    for hex in LEVEL_ZERO_PALETTE {
        assert!(output.contains(&format!("fill=\"{hex}\"")), "missing {hex}");
    }
}

#[test]
fn test_swatches_export_one_line_per_color() {
    let output = render(
        &level_zero_palette(),
        ExportFormat::Swatches,
        RenderOptions::default(),
    )
    .unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 12);
    assert!(lines[0].starts_with("\x1b[48;2;1;0;0m"));
    for (line, hex) in lines.iter().zip(LEVEL_ZERO_PALETTE) {
        assert!(line.ends_with(hex), "{line:?} should end with {hex}");
    }
}

#[test]
fn test_empty_palette_exports() {
    let request = PaletteRequest::new(255.0, 0.0, 10.0).unwrap();
    let palette = shared_selector(ShuffleMode::Uniform)
        .select(&request, &mut seeded_rng(0))
        .unwrap();
    assert!(palette.is_empty());

    let options = RenderOptions::default();
    assert_eq!(
        render(&palette, ExportFormat::Js, options).unwrap(),
        "const palette = [\n\n]"
    );
    assert_eq!(render(&palette, ExportFormat::Hex, options).unwrap(), "");
    assert_eq!(render(&palette, ExportFormat::Swatches, options).unwrap(), "");
}
