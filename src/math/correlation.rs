//! Pearson correlation between the indicators of a table.
//!
//! Columns are the indicators, rows the years. We center each column and form
//! the cross-product matrix `XᵀX`; correlations are then
//!
//! ```text
//! r_ij = c_ij / sqrt(c_ii * c_jj)
//! ```
//!
//! An entry is undefined when either column has zero variance (constant series)
//! or the table holds fewer than two years.

use nalgebra::DMatrix;

use crate::domain::TimeSeriesTable;

/// Variance below this is treated as a constant series.
const VAR_EPS: f64 = 1e-12;

/// Correlation matrix with indicator labels. Undefined entries are stored as NaN.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub indicators: Vec<String>,
    values: DMatrix<f64>,
}

impl CorrelationMatrix {
    /// Correlation between indicators `i` and `j`, `None` when undefined.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        let v = *self.values.get((i, j))?;
        v.is_finite().then_some(v)
    }

    /// Correlation between two named indicators.
    pub fn between(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.indicators.iter().position(|n| n == a)?;
        let j = self.indicators.iter().position(|n| n == b)?;
        self.get(i, j)
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }
}

/// Pearson correlation for every pair of indicators in `table`.
pub fn pearson(table: &TimeSeriesTable) -> CorrelationMatrix {
    let indicators: Vec<String> = table.indicators().map(str::to_string).collect();
    let n = table.years().len();
    let k = indicators.len();

    if n < 2 {
        return CorrelationMatrix {
            indicators,
            values: DMatrix::from_element(k, k, f64::NAN),
        };
    }

    let mut x = DMatrix::<f64>::zeros(n, k);
    for (col, (_, series)) in table.iter().enumerate() {
        for (row, p) in series.points.iter().enumerate() {
            x[(row, col)] = p.value;
        }
    }
    for mut column in x.column_iter_mut() {
        let mean = column.mean();
        column.add_scalar_mut(-mean);
    }

    let cross = x.transpose() * &x;
    let values = DMatrix::from_fn(k, k, |i, j| {
        let (vi, vj) = (cross[(i, i)], cross[(j, j)]);
        if vi < VAR_EPS || vj < VAR_EPS {
            f64::NAN
        } else {
            (cross[(i, j)] / (vi * vj).sqrt()).clamp(-1.0, 1.0)
        }
    });

    CorrelationMatrix { indicators, values }
}
