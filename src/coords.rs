use crate::data::model::Table;
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Frames and units
// ---------------------------------------------------------------------------

/// Which spherical naming convention the converted columns use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Frame {
    /// Celestial sphere: columns `RA` / `DEC`.
    #[default]
    Astronomical,
    /// Planetary surface: columns `LON` / `LAT`.
    Geographic,
}

/// Unit of the azimuthal (RA/LON) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LonUnits {
    #[default]
    Degrees,
    /// Hour angle, 24h = 360°. Only honored in the astronomical frame.
    Hours,
}

// ---------------------------------------------------------------------------
// Cartesian → spherical conversion
// ---------------------------------------------------------------------------

/// Convert rectangular coordinates to spherical ones.
///
/// Returns a [`Table`] with columns, in order, `ALT` (radial distance),
/// `RA`/`LON`, and `DEC`/`LAT`:
///
/// ```text
/// ALT = sqrt(x² + y² + z²)
/// RA  = (atan2(y, x) in degrees + 180) · scale     scale = 1 or 24/360
/// DEC = acos(z / ALT) in degrees − 90
/// ```
///
/// The three inputs must be equal length. A zero-length position vector has
/// no defined direction and is rejected as a domain error instead of letting
/// the division produce NaN.
pub fn convert_xyz_to_spherical(
    x: &[f64],
    y: &[f64],
    z: &[f64],
    frame: Frame,
    lon_units: LonUnits,
) -> Result<Table> {
    if y.len() != x.len() {
        return Err(Error::ColumnLength {
            name: "y".to_string(),
            got: y.len(),
            expected: x.len(),
        });
    }
    if z.len() != x.len() {
        return Err(Error::ColumnLength {
            name: "z".to_string(),
            got: z.len(),
            expected: x.len(),
        });
    }

    let scale = match (frame, lon_units) {
        (Frame::Astronomical, LonUnits::Hours) => 24.0 / 360.0,
        _ => 1.0,
    };
    let (lon_name, lat_name) = match frame {
        Frame::Astronomical => ("RA", "DEC"),
        Frame::Geographic => ("LON", "LAT"),
    };

    let n = x.len();
    let mut alt = Vec::with_capacity(n);
    let mut lon = Vec::with_capacity(n);
    let mut lat = Vec::with_capacity(n);

    for i in 0..n {
        let (xi, yi, zi) = (x[i], y[i], z[i]);
        let r = (xi * xi + yi * yi + zi * zi).sqrt();
        if r == 0.0 {
            return Err(Error::ZeroRadius(i));
        }
        alt.push(r);
        lon.push((yi.atan2(xi).to_degrees() + 180.0) * scale);
        lat.push((zi / r).acos().to_degrees() - 90.0);
    }

    let mut table = Table::new();
    table.push_column("ALT", alt)?;
    table.push_column(lon_name, lon)?;
    table.push_column(lat_name, lat)?;
    Ok(table)
}
