use luma_index::ColorCode;
use serde::{Serialize, Serializer};

use super::PaletteRequest;

/// An ordered selection of colors at a perceived brightness.
///
/// Colors are sorted by hue, then lightness, then saturation. Exports keep
/// this order verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    /// The request this palette answers
    #[serde(flatten)]
    pub request: PaletteRequest,
    /// Lowest brightness level in the band
    pub min_level: u8,
    /// Highest brightness level in the band
    pub max_level: u8,
    /// Number of colors in the band before sampling
    pub candidates: usize,
    /// Selected colors, serialized as `#rrggbb`
    #[serde(serialize_with = "serialize_hex")]
    pub colors: Vec<ColorCode>,
}

impl Palette {
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors as `#rrggbb` strings
    pub fn hex_codes(&self) -> Vec<String> {
        self.colors.iter().map(ColorCode::to_string).collect()
    }
}

fn serialize_hex<S>(colors: &[ColorCode], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(colors.iter().map(ColorCode::to_string))
}
