use palette::{Hsl, IntoColor, Srgb};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Color scales
// ---------------------------------------------------------------------------

// Control points for the matplotlib-family scales, evenly spaced over [0, 1].
// Piecewise-linear approximations; endpoints are exact.
const VIRIDIS: [[u8; 3]; 5] = [
    [68, 1, 84],
    [59, 82, 139],
    [33, 145, 140],
    [94, 201, 98],
    [253, 231, 37],
];

const PLASMA: [[u8; 3]; 5] = [
    [13, 8, 135],
    [126, 3, 168],
    [204, 71, 120],
    [248, 149, 64],
    [240, 249, 33],
];

const INFERNO: [[u8; 3]; 5] = [
    [0, 0, 4],
    [87, 16, 110],
    [188, 55, 84],
    [249, 140, 10],
    [252, 255, 164],
];

const MAGMA: [[u8; 3]; 5] = [
    [0, 0, 4],
    [81, 18, 124],
    [183, 55, 121],
    [252, 137, 97],
    [252, 253, 191],
];

const CIVIDIS: [[u8; 3]; 5] = [
    [0, 34, 78],
    [61, 78, 108],
    [124, 123, 120],
    [187, 173, 108],
    [253, 234, 69],
];

/// A named scale mapping a normalized scalar in [0, 1] to an RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScale {
    #[default]
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    Grayscale,
    /// Evenly spaced hues from blue to red, built with `palette`.
    Rainbow,
}

impl ColorScale {
    /// Look up a scale by name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "viridis" => Ok(ColorScale::Viridis),
            "plasma" => Ok(ColorScale::Plasma),
            "inferno" => Ok(ColorScale::Inferno),
            "magma" => Ok(ColorScale::Magma),
            "cividis" => Ok(ColorScale::Cividis),
            "gray" | "grayscale" => Ok(ColorScale::Grayscale),
            "rainbow" => Ok(ColorScale::Rainbow),
            _ => Err(Error::UnknownColorScale(name.to_string())),
        }
    }

    /// Display name of the scale.
    pub fn name(&self) -> &'static str {
        match self {
            ColorScale::Viridis => "viridis",
            ColorScale::Plasma => "plasma",
            ColorScale::Inferno => "inferno",
            ColorScale::Magma => "magma",
            ColorScale::Cividis => "cividis",
            ColorScale::Grayscale => "grayscale",
            ColorScale::Rainbow => "rainbow",
        }
    }

    /// Sample the scale at `t`, clamped to [0, 1].
    pub fn sample(&self, t: f64) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            ColorScale::Viridis => sample_stops(&VIRIDIS, t),
            ColorScale::Plasma => sample_stops(&PLASMA, t),
            ColorScale::Inferno => sample_stops(&INFERNO, t),
            ColorScale::Magma => sample_stops(&MAGMA, t),
            ColorScale::Cividis => sample_stops(&CIVIDIS, t),
            ColorScale::Grayscale => {
                let v = (t * 255.0).round() as u8;
                [v, v, v]
            }
            ColorScale::Rainbow => rainbow(t),
        }
    }
}

impl std::str::FromStr for ColorScale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ColorScale::from_name(s)
    }
}

/// Interpolate between evenly spaced control points.
fn sample_stops(stops: &[[u8; 3]], t: f64) -> [u8; 3] {
    let segments = stops.len() - 1;
    let pos = t * segments as f64;
    let idx = (pos.floor() as usize).min(segments - 1);
    let frac = pos - idx as f64;
    let a = stops[idx];
    let b = stops[idx + 1];
    [
        lerp_channel(a[0], b[0], frac),
        lerp_channel(a[1], b[1], frac),
        lerp_channel(a[2], b[2], frac),
    ]
}

fn lerp_channel(a: u8, b: u8, frac: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * frac).round() as u8
}

/// Hue sweep from 240° (blue) down to 0° (red) at fixed saturation/lightness.
fn rainbow(t: f64) -> [u8; 3] {
    let hue = ((1.0 - t) * 240.0) as f32;
    let hsl = Hsl::new(hue, 0.75, 0.55);
    let rgb: Srgb = hsl.into_color();
    [
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    ]
}

// ---------------------------------------------------------------------------
// Scale mode
// ---------------------------------------------------------------------------

/// How values are rescaled to [0, 1] before sampling the color scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMode {
    #[default]
    Linear,
    Log,
}

impl ScaleMode {
    /// Look up a mode by name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "linear" => Ok(ScaleMode::Linear),
            "log" => Ok(ScaleMode::Log),
            _ => Err(Error::UnknownScaleMode(name.to_string())),
        }
    }
}

impl std::str::FromStr for ScaleMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ScaleMode::from_name(s)
    }
}

// ---------------------------------------------------------------------------
// Array → ARGB hex mapping
// ---------------------------------------------------------------------------

/// Map a numeric array onto a color scale, returning one ARGB hex string per
/// value: `"FF"` (opaque alpha) followed by three 2-digit uppercase hex
/// channels, most-significant nibble first (e.g. `"FFA1B2C3"`).
///
/// Bounds default to the array's own minimum/maximum. Under `Linear` the
/// mapping is `(v - vmin) / (vmax - vmin)` clamped to [0, 1]; under `Log` the
/// same mapping is applied to `log10` of the values and bounds. A degenerate
/// range (`vmax <= vmin`) maps everything to mid-scale.
pub fn map_array_to_colors(
    arr: &[f64],
    scale: ColorScale,
    mode: ScaleMode,
    vmin: Option<f64>,
    vmax: Option<f64>,
) -> Result<Vec<String>> {
    if arr.is_empty() {
        return Ok(Vec::new());
    }

    let vmin = vmin.unwrap_or_else(|| arr.iter().cloned().fold(f64::INFINITY, f64::min));
    let vmax = vmax.unwrap_or_else(|| arr.iter().cloned().fold(f64::NEG_INFINITY, f64::max));

    let (lo, hi) = match mode {
        ScaleMode::Linear => (vmin, vmax),
        ScaleMode::Log => {
            for &v in arr.iter().chain([vmin, vmax].iter()) {
                if v <= 0.0 {
                    return Err(Error::NonPositiveInLog(v));
                }
            }
            (vmin.log10(), vmax.log10())
        }
    };
    let range = hi - lo;

    Ok(arr
        .iter()
        .map(|&v| {
            let v = match mode {
                ScaleMode::Linear => v,
                ScaleMode::Log => v.log10(),
            };
            let t = if range > 0.0 {
                ((v - lo) / range).clamp(0.0, 1.0)
            } else {
                0.5
            };
            let [r, g, b] = scale.sample(t);
            format!("FF{r:02X}{g:02X}{b:02X}")
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(rgb: [u8; 3]) -> String {
        format!("FF{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
    }

    #[test]
    fn output_is_argb_hex() {
        let colors = map_array_to_colors(
            &[0.0, 2.5, 7.1, 10.0],
            ColorScale::Viridis,
            ScaleMode::Linear,
            None,
            None,
        )
        .unwrap();
        assert_eq!(colors.len(), 4);
        for c in &colors {
            assert_eq!(c.len(), 8);
            assert!(c.starts_with("FF"));
            assert!(c
                .chars()
                .all(|ch| ch.is_ascii_digit() || ('A'..='F').contains(&ch)));
        }
    }

    #[test]
    fn bounds_map_to_scale_endpoints() {
        for scale in [ColorScale::Viridis, ColorScale::Plasma, ColorScale::Rainbow] {
            let colors =
                map_array_to_colors(&[3.0, 1.0, 2.0], scale, ScaleMode::Linear, None, None)
                    .unwrap();
            assert_eq!(colors[1], hex(scale.sample(0.0)));
            assert_eq!(colors[0], hex(scale.sample(1.0)));
        }
    }

    #[test]
    fn explicit_bounds_clamp() {
        let colors = map_array_to_colors(
            &[0.0, 5.0, 10.0],
            ColorScale::Grayscale,
            ScaleMode::Linear,
            Some(4.0),
            Some(6.0),
        )
        .unwrap();
        // Values outside [vmin, vmax] clamp to the endpoints.
        assert_eq!(colors[0], "FF000000");
        assert_eq!(colors[2], "FFFFFFFF");
        assert_eq!(colors[1], hex(ColorScale::Grayscale.sample(0.5)));
    }

    #[test]
    fn log_mode_spans_decades() {
        let colors = map_array_to_colors(
            &[1.0, 10.0, 100.0],
            ColorScale::Grayscale,
            ScaleMode::Log,
            None,
            None,
        )
        .unwrap();
        // log10 spacing puts 10.0 exactly mid-scale.
        assert_eq!(colors[0], "FF000000");
        assert_eq!(colors[1], hex(ColorScale::Grayscale.sample(0.5)));
        assert_eq!(colors[2], "FFFFFFFF");
    }

    #[test]
    fn log_mode_rejects_non_positive() {
        let err =
            map_array_to_colors(&[0.0, 1.0], ColorScale::Viridis, ScaleMode::Log, None, None)
                .unwrap_err();
        assert!(matches!(err, Error::NonPositiveInLog(_)));
    }

    #[test]
    fn degenerate_range_maps_to_mid_scale() {
        let colors =
            map_array_to_colors(&[5.0, 5.0], ColorScale::Viridis, ScaleMode::Linear, None, None)
                .unwrap();
        assert_eq!(colors[0], hex(ColorScale::Viridis.sample(0.5)));
        assert_eq!(colors[0], colors[1]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let colors =
            map_array_to_colors(&[], ColorScale::Viridis, ScaleMode::Linear, None, None).unwrap();
        assert!(colors.is_empty());
    }

    #[test]
    fn scale_lookup_by_name() {
        assert_eq!(
            ColorScale::from_name("Viridis").unwrap(),
            ColorScale::Viridis
        );
        assert_eq!(ColorScale::from_name("MAGMA").unwrap(), ColorScale::Magma);
        assert!(matches!(
            ColorScale::from_name("jet"),
            Err(Error::UnknownColorScale(_))
        ));
        assert!(matches!(
            ScaleMode::from_name("sqrt"),
            Err(Error::UnknownScaleMode(_))
        ));
    }

    #[test]
    fn sample_endpoints_are_exact() {
        assert_eq!(ColorScale::Viridis.sample(0.0), [68, 1, 84]);
        assert_eq!(ColorScale::Viridis.sample(1.0), [253, 231, 37]);
        // Out-of-range input clamps.
        assert_eq!(ColorScale::Viridis.sample(-1.0), [68, 1, 84]);
        assert_eq!(ColorScale::Viridis.sample(2.0), [253, 231, 37]);
    }
}
