use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Column – one named numeric array
// ---------------------------------------------------------------------------

/// A named column of `f64` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Table – ordered named columns of equal length
// ---------------------------------------------------------------------------

/// A column-oriented numeric table.
///
/// Columns keep their insertion order, which is also the order they are
/// written to file. The equal-length invariant is checked when a column is
/// added, so every constructed `Table` is rectangular.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Table::default()
    }

    /// Build a table from `(name, values)` pairs, preserving their order.
    pub fn from_columns<S, I>(columns: I) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Vec<f64>)>,
    {
        let mut table = Table::new();
        for (name, values) in columns {
            table.push_column(name, values)?;
        }
        Ok(table)
    }

    /// Append a column, enforcing the equal-length invariant.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        let name = name.into();
        if let Some(first) = self.columns.first() {
            if values.len() != first.values.len() {
                return Err(Error::ColumnLength {
                    name,
                    got: values.len(),
                    expected: first.values.len(),
                });
            }
        }
        self.columns.push(Column { name, values });
        Ok(())
    }

    /// Number of rows (samples per column).
    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Whether the table holds no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a column's values by name.
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// All columns in insertion order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }
}
