//! Tabular dataset over a fixed named-column schema.

use faer::{Col, Mat};
use thiserror::Error;

/// Errors that can occur when constructing or querying a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("column count mismatch: {names} names for {columns} value columns")]
    ColumnCountMismatch { names: usize, columns: usize },

    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("column '{name}' has {got} rows but the dataset has {expected}")]
    ColumnLengthMismatch {
        name: String,
        got: usize,
        expected: usize,
    },

    #[error("unknown column: {0}")]
    UnknownColumn(String),
}

/// An ordered table of numeric rows with named columns.
///
/// The schema is fixed at construction: every row has one `f64` value per
/// column, and columns keep their declared order. The table is immutable;
/// resampling reads rows and materializes new datasets, it never writes back.
///
/// # Example
///
/// ```rust,ignore
/// use bootstrap_inference::core::Dataset;
///
/// let data = Dataset::from_columns(&[
///     ("x", vec![1.0, 2.0, 3.0]),
///     ("y", vec![3.0, 5.0, 7.0]),
/// ])?;
///
/// assert_eq!(data.n_rows(), 3);
/// assert_eq!(data.column_names(), &["x", "y"]);
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    names: Vec<String>,
    values: Mat<f64>,
}

impl Dataset {
    /// Create a dataset from a value matrix and one name per matrix column.
    pub fn new(names: Vec<String>, values: Mat<f64>) -> Result<Self, DatasetError> {
        if names.len() != values.ncols() {
            return Err(DatasetError::ColumnCountMismatch {
                names: names.len(),
                columns: values.ncols(),
            });
        }

        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(DatasetError::DuplicateColumn(name.clone()));
            }
        }

        Ok(Self { names, values })
    }

    /// Create a dataset from named columns of equal length.
    ///
    /// Column order in the dataset follows the order of the input slice.
    pub fn from_columns(columns: &[(&str, Vec<f64>)]) -> Result<Self, DatasetError> {
        let n_rows = columns.first().map_or(0, |(_, v)| v.len());

        for (name, column) in columns {
            if column.len() != n_rows {
                return Err(DatasetError::ColumnLengthMismatch {
                    name: (*name).to_string(),
                    got: column.len(),
                    expected: n_rows,
                });
            }
        }

        let names: Vec<String> = columns.iter().map(|(name, _)| (*name).to_string()).collect();
        let values = Mat::from_fn(n_rows, columns.len(), |i, j| columns[j].1[i]);

        Self::new(names, values)
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.values.nrows()
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.values.ncols()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.nrows() == 0
    }

    /// Column names, in schema order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// The underlying value matrix (rows × columns).
    pub fn values(&self) -> &Mat<f64> {
        &self.values
    }

    /// Position of a named column in the schema.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Copy of a named column's values.
    pub fn column(&self, name: &str) -> Result<Col<f64>, DatasetError> {
        let j = self
            .column_index(name)
            .ok_or_else(|| DatasetError::UnknownColumn(name.to_string()))?;

        Ok(Col::from_fn(self.n_rows(), |i| self.values[(i, j)]))
    }

    /// Materialize a new dataset holding the given rows, in the given order.
    ///
    /// Indices may repeat; the source is not modified.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn select_rows(&self, indices: &[usize]) -> Dataset {
        let values = Mat::from_fn(indices.len(), self.n_columns(), |i, j| {
            self.values[(indices[i], j)]
        });

        Dataset {
            names: self.names.clone(),
            values,
        }
    }

    /// Split into a predictor matrix and a target vector.
    ///
    /// The target column is removed; the remaining columns keep their schema
    /// order. Useful for handing a sample to a fitting routine.
    pub fn design(&self, target: &str) -> Result<(Mat<f64>, Col<f64>), DatasetError> {
        let target_idx = self
            .column_index(target)
            .ok_or_else(|| DatasetError::UnknownColumn(target.to_string()))?;

        let n_rows = self.n_rows();
        let n_predictors = self.n_columns() - 1;

        let x = Mat::from_fn(n_rows, n_predictors, |i, j| {
            let col = if j < target_idx { j } else { j + 1 };
            self.values[(i, col)]
        });
        let y = Col::from_fn(n_rows, |i| self.values[(i, target_idx)]);

        Ok((x, y))
    }
}
