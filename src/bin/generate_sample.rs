use std::path::PathBuf;

use anyhow::{Context, Result};

use starprep::{
    convert_xyz_to_spherical, generate_utc_times, map_array_to_colors, write_table_csv,
    ColorScale, Frame, LogProgress, LonUnits, ScaleMode, StepSize, WriteMode,
};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let n_points = 500;
    let mut rng = SimpleRng::new(42);

    // Gaussian cluster of points, offset from the origin so no position
    // vector degenerates to zero length.
    let x: Vec<f64> = (0..n_points).map(|_| rng.gauss(50.0, 10.0)).collect();
    let y: Vec<f64> = (0..n_points).map(|_| rng.gauss(-20.0, 10.0)).collect();
    let z: Vec<f64> = (0..n_points).map(|_| rng.gauss(30.0, 10.0)).collect();

    // Apparent magnitudes, brighter toward the cluster core.
    let mag: Vec<f64> = (0..n_points).map(|_| rng.gauss(8.0, 1.5)).collect();

    let mut table = convert_xyz_to_spherical(&x, &y, &z, Frame::Astronomical, LonUnits::Degrees)?;
    table.push_column("MAG", mag.clone())?;

    let colors = map_array_to_colors(&mag, ColorScale::Viridis, ScaleMode::Linear, None, None)?;
    log::info!(
        "mapped {} magnitudes to colors ({} … {})",
        colors.len(),
        colors.first().unwrap(),
        colors.last().unwrap()
    );

    let times = generate_utc_times(n_points, StepSize::minutes(10), Some("1/1/2024 9:00 PM"))?;
    log::info!(
        "generated {} time steps ({} … {})",
        times.len(),
        times.first().unwrap(),
        times.last().unwrap()
    );

    let out = PathBuf::from("sample_points.csv");
    let mut progress = LogProgress::new("sample_points.csv", 100);
    write_table_csv(&table, &out, WriteMode::New, &mut progress)
        .with_context(|| format!("writing {}", out.display()))?;

    log::info!("wrote {} rows to {}", table.rows(), out.display());
    Ok(())
}
