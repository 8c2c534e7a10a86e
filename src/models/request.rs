use serde::Serialize;

use crate::error::PaletteError;

/// Default target brightness (initial slider position)
pub const DEFAULT_BRIGHTNESS: u8 = 200;

/// Default tolerance around the target
pub const DEFAULT_TOLERANCE: u32 = 0;

/// Default number of colors sampled before filtering
pub const DEFAULT_SIZE: usize = 200;

/// A validated palette request.
///
/// Built from raw numbers via [`PaletteRequest::new`], which clamps and
/// truncates the target and rejects inputs that would make the selection
/// meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteRequest {
    /// Target brightness level (0-255)
    brightness: u8,
    /// Allowed deviation from the target, in levels
    tolerance: u32,
    /// Maximum number of colors sampled from the band
    size: usize,
}

impl PaletteRequest {
    /// Validate raw inputs.
    ///
    /// - `brightness` is clamped to `0..=255` and truncated.
    /// - `tolerance` must be non-negative; fractions are truncated.
    /// - `size` is truncated and must be at least 1.
    ///
    /// Any non-finite input is rejected.
    pub fn new(brightness: f64, tolerance: f64, size: f64) -> Result<Self, PaletteError> {
        for (name, value) in [
            ("brightness", brightness),
            ("tolerance", tolerance),
            ("size", size),
        ] {
            if !value.is_finite() {
                return Err(PaletteError::InvalidArgument(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        if tolerance < 0.0 {
            return Err(PaletteError::InvalidArgument(format!(
                "tolerance must not be negative, got {tolerance}"
            )));
        }

        let size = size.trunc();
        if size < 1.0 {
            return Err(PaletteError::InvalidArgument(format!(
                "size must be at least 1, got {size}"
            )));
        }

        Ok(Self {
            brightness: brightness.clamp(0.0, 255.0).trunc() as u8,
            // Float-to-int casts saturate
            tolerance: tolerance.trunc() as u32,
            size: size as usize,
        })
    }

    /// Request around `brightness` with the default tolerance and size.
    pub fn for_brightness(brightness: f64) -> Result<Self, PaletteError> {
        Self::new(
            brightness,
            f64::from(DEFAULT_TOLERANCE),
            DEFAULT_SIZE as f64,
        )
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Inclusive level band `(lo, hi)` clamped to `0..=255`.
    pub fn levels(&self) -> (usize, usize) {
        let target = u32::from(self.brightness);
        let lo = target.saturating_sub(self.tolerance);
        let hi = target.saturating_add(self.tolerance).min(255);
        (lo as usize, hi as usize)
    }
}

impl Default for PaletteRequest {
    fn default() -> Self {
        Self {
            brightness: DEFAULT_BRIGHTNESS,
            tolerance: DEFAULT_TOLERANCE,
            size: DEFAULT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = PaletteRequest::default();
        assert_eq!(request.brightness(), 200);
        assert_eq!(request.tolerance(), 0);
        assert_eq!(request.size(), 200);
        assert_eq!(request.levels(), (200, 200));
    }

    #[test]
    fn test_for_brightness_uses_defaults() {
        let request = PaletteRequest::for_brightness(64.5).unwrap();
        assert_eq!(request.brightness(), 64);
        assert_eq!(request.tolerance(), DEFAULT_TOLERANCE);
        assert_eq!(request.size(), DEFAULT_SIZE);
        assert_eq!(request.levels(), (64, 64));

        assert!(matches!(
            PaletteRequest::for_brightness(f64::NAN),
            Err(PaletteError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_brightness_is_clamped_and_truncated() {
        assert_eq!(PaletteRequest::new(300.0, 0.0, 1.0).unwrap().brightness(), 255);
        assert_eq!(PaletteRequest::new(-5.0, 0.0, 1.0).unwrap().brightness(), 0);
        assert_eq!(PaletteRequest::new(127.9, 0.0, 1.0).unwrap().brightness(), 127);
    }

    #[test]
    fn test_tolerance_and_size_are_truncated() {
        let request = PaletteRequest::new(100.0, 2.7, 50.9).unwrap();
        assert_eq!(request.tolerance(), 2);
        assert_eq!(request.size(), 50);
    }

    #[test]
    fn test_levels_clamp_at_both_ends() {
        let high = PaletteRequest::new(255.0, 20.0, 200.0).unwrap();
        assert_eq!(high.levels(), (235, 255));

        let low = PaletteRequest::new(3.0, 10.0, 200.0).unwrap();
        assert_eq!(low.levels(), (0, 13));

        let huge = PaletteRequest::new(128.0, 1e12, 200.0).unwrap();
        assert_eq!(huge.levels(), (0, 255));
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        for (b, t, s) in [
            (f64::NAN, 0.0, 10.0),
            (100.0, f64::INFINITY, 10.0),
            (100.0, 0.0, f64::NEG_INFINITY),
            (f64::INFINITY, 0.0, 10.0),
        ] {
            assert!(
                matches!(
                    PaletteRequest::new(b, t, s),
                    Err(PaletteError::InvalidArgument(_))
                ),
                "({b}, {t}, {s}) should be rejected"
            );
        }
    }

    #[test]
    fn test_size_must_be_positive() {
        for size in [0.0, -3.0, 0.5] {
            let error = PaletteRequest::new(100.0, 0.0, size).unwrap_err();
            assert!(matches!(error, PaletteError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let error = PaletteRequest::new(100.0, -1.0, 10.0).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid argument: tolerance must not be negative, got -1"
        );
    }
}
