//! Validated frequency/power response scan.

/// Errors raised when a response grid is constructed from raw samples.
#[derive(thiserror::Error, Debug)]
pub enum GridError {
    #[error("frequency and power axes need at least 2 samples each (got {num_freqs} and {num_powers})")]
    TooFewSamples { num_freqs: usize, num_powers: usize },
    #[error("{axis} axis contains a non-finite sample")]
    NonFiniteAxis { axis: &'static str },
    #[error("{axis} axis must be strictly increasing")]
    AxisNotIncreasing { axis: &'static str },
    #[error("response row {row} has {got} samples, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("response has {got} samples, expected {rows}x{cols}")]
    ShapeMismatch { got: usize, rows: usize, cols: usize },
    #[error("non-finite response value at row {row}, column {col}")]
    NonFiniteValue { row: usize, col: usize },
    #[error("reference power {top_power} must be above the largest sampled power {max_power}")]
    ReferencePowerInRange { top_power: f64, max_power: f64 },
}

/// One 2-D spectroscopy scan of a qubit: response amplitude over a
/// frequency axis (`xs`, columns) and a drive-power axis (`ys`, rows),
/// plus the reference power `top_power` sitting above the sampled range.
///
/// The grid is validated once at construction and never mutated, so every
/// quantity derived from it is a pure function of the grid alone.
#[derive(Clone, Debug)]
pub struct ResponseGrid {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Row-major, `len = ys.len() * xs.len()`.
    zs: Vec<f64>,
    top_power: f64,
}

impl ResponseGrid {
    /// Validate and build a grid from a row-major response buffer.
    pub fn new(
        xs: Vec<f64>,
        ys: Vec<f64>,
        zs: Vec<f64>,
        top_power: f64,
    ) -> Result<Self, GridError> {
        let rows = ys.len();
        let cols = xs.len();

        if zs.len() != rows * cols {
            return Err(GridError::ShapeMismatch {
                got: zs.len(),
                rows,
                cols,
            });
        }
        if let Some(idx) = zs.iter().position(|z| !z.is_finite()) {
            return Err(GridError::NonFiniteValue {
                row: idx / cols.max(1),
                col: idx % cols.max(1),
            });
        }
        if cols < 2 || rows < 2 {
            return Err(GridError::TooFewSamples {
                num_freqs: cols,
                num_powers: rows,
            });
        }
        validate_axis(&xs, "frequency")?;
        validate_axis(&ys, "power")?;

        let max_power = ys[rows - 1];
        if !(top_power > max_power) {
            return Err(GridError::ReferencePowerInRange {
                top_power,
                max_power,
            });
        }

        Ok(Self {
            xs,
            ys,
            zs,
            top_power,
        })
    }

    /// Validate and build a grid from per-row sample vectors.
    pub fn from_rows(
        xs: Vec<f64>,
        ys: Vec<f64>,
        rows: &[Vec<f64>],
        top_power: f64,
    ) -> Result<Self, GridError> {
        let cols = xs.len();
        if rows.len() != ys.len() {
            return Err(GridError::ShapeMismatch {
                got: rows.iter().map(Vec::len).sum(),
                rows: ys.len(),
                cols,
            });
        }
        let mut zs = Vec::with_capacity(rows.len() * cols);
        for (row, samples) in rows.iter().enumerate() {
            if samples.len() != cols {
                return Err(GridError::RaggedRow {
                    row,
                    got: samples.len(),
                    expected: cols,
                });
            }
            zs.extend_from_slice(samples);
        }
        Self::new(xs, ys, zs, top_power)
    }

    /// Number of frequency samples (columns).
    #[inline]
    pub fn num_freqs(&self) -> usize {
        self.xs.len()
    }

    /// Number of power samples (rows).
    #[inline]
    pub fn num_powers(&self) -> usize {
        self.ys.len()
    }

    /// Frequency axis.
    #[inline]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Power axis.
    #[inline]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Row-major response buffer.
    #[inline]
    pub fn zs(&self) -> &[f64] {
        &self.zs
    }

    /// Reference power above the sampled range.
    #[inline]
    pub fn top_power(&self) -> f64 {
        self.top_power
    }

    /// Response amplitude at `(row, col)`.
    #[inline]
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.zs[row * self.xs.len() + col]
    }

    /// One power row of the response.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let cols = self.xs.len();
        &self.zs[row * cols..(row + 1) * cols]
    }

    /// Distance from the reference power down to each power sample.
    pub fn levers(&self) -> Vec<f64> {
        self.ys.iter().map(|y| self.top_power - y).collect()
    }

    /// Physical width owned by each power row: the gap to the next sample,
    /// with the last row closing the interval up to the reference power.
    pub fn row_widths(&self) -> Vec<f64> {
        let n = self.ys.len();
        let mut widths = Vec::with_capacity(n);
        for row in 0..n - 1 {
            widths.push(self.ys[row + 1] - self.ys[row]);
        }
        widths.push(self.top_power - self.ys[n - 1]);
        widths
    }

    /// Lookup table from a pixel-count height to the power-axis distance
    /// between the reference power and the sample that many rows before
    /// the far edge. Entry 0 is 0 ("no signal"); length is `num_powers + 1`.
    pub fn height_scale(&self) -> Vec<f64> {
        let n = self.ys.len();
        let mut scale = Vec::with_capacity(n + 1);
        scale.push(0.0);
        for k in 1..=n {
            scale.push(self.top_power - self.ys[n - k]);
        }
        scale
    }
}

fn validate_axis(axis: &[f64], name: &'static str) -> Result<(), GridError> {
    if axis.iter().any(|v| !v.is_finite()) {
        return Err(GridError::NonFiniteAxis { axis: name });
    }
    if axis.windows(2).any(|w| w[1] <= w[0]) {
        return Err(GridError::AxisNotIncreasing { axis: name });
    }
    Ok(())
}
