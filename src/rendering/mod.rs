pub mod export;
pub mod swatch;

pub use export::{render, render_hex, render_js, render_json, ExportFormat, RenderOptions};
pub use swatch::{render_ansi, render_svg};
