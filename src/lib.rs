//! Standalone utilities that prepare numeric data for a sky visualizer:
//! mapping arrays to ARGB color strings, generating formatted UTC time-step
//! sequences, converting rectangular coordinates to spherical ones, and
//! reading/writing column tables as delimited text.
//!
//! The four transforms are independent and stateless; a `Table` produced by
//! the coordinate converter can be handed straight to the writer.

pub mod color;
pub mod coords;
pub mod data;
pub mod error;
pub mod progress;
pub mod time;

pub use color::{map_array_to_colors, ColorScale, ScaleMode};
pub use coords::{convert_xyz_to_spherical, Frame, LonUnits};
pub use data::loader::load_table;
pub use data::model::{Column, Table};
pub use data::writer::{write_table_csv, WriteMode};
pub use error::{Error, Result};
pub use progress::{LogProgress, NoProgress, ProgressSink};
pub use time::{generate_utc_times, generate_utc_times_from, StepSize};
