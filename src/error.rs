use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// All failure modes of the preparation utilities.
///
/// Configuration errors (`Unknown*`, `UnsupportedExtension`) and parse errors
/// (`StartTime`) fail before any output is produced. Domain errors
/// (`NonPositiveInLog`, `ZeroRadius`, `ColumnLength`) fail the whole call
/// rather than letting NaN leak into results. Resource errors wrap the
/// underlying I/O failure unchanged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown color scale '{0}'")]
    UnknownColorScale(String),

    #[error("unknown scale mode '{0}' (expected \"linear\" or \"log\")")]
    UnknownScaleMode(String),

    #[error("unknown write mode '{0}' (expected \"new\" or \"append\")")]
    UnknownWriteMode(String),

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("could not parse start time '{0}'")]
    StartTime(String),

    #[error("log scaling requires positive values, got {0}")]
    NonPositiveInLog(f64),

    #[error("zero-length position vector at index {0}")]
    ZeroRadius(usize),

    #[error("column '{name}' has {got} values, expected {expected}")]
    ColumnLength {
        name: String,
        got: usize,
        expected: usize,
    },

    #[error("invalid table data: {0}")]
    TableData(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
