use std::error::Error;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A 0/1 matrix stored as bytes.
pub type BinaryMatrix = Array2<u8>;

#[derive(Clone, Debug, PartialEq)]
pub struct Array2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(ShapeError::Length {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from nested rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ShapeError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(nrows * ncols);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(ShapeError::RaggedRow {
                    row: index,
                    expected: ncols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        let start = self.offset(row, 0);
        let cols = self.cols;
        &mut self.data[start..start + cols]
    }

    pub fn column(&self, col: usize) -> Vec<T>
    where
        T: Clone,
    {
        assert!(col < self.cols, "column index out of bounds");
        (0..self.rows).map(|row| self[(row, col)].clone()).collect()
    }

    pub fn to_ndarray(&self) -> ndarray::Array2<T>
    where
        T: Clone,
    {
        ndarray::Array2::from_shape_fn((self.rows, self.cols), |(r, c)| self[(r, c)].clone())
    }
}

impl<T> Array2<T>
where
    T: Default + Clone,
{
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::default(); rows * cols],
            rows,
            cols,
        }
    }
}

impl Array2<u8> {
    pub fn count_ones(&self) -> usize {
        self.data.iter().filter(|&&v| v == 1).count()
    }

    pub fn row_sums(&self) -> Vec<usize> {
        (0..self.rows)
            .map(|r| self.row_slice(r).iter().filter(|&&v| v == 1).count())
            .collect()
    }

    pub fn column_sums(&self) -> Vec<usize> {
        let mut sums = vec![0usize; self.cols];
        for r in 0..self.rows {
            for (c, &v) in self.row_slice(r).iter().enumerate() {
                if v == 1 {
                    sums[c] += 1;
                }
            }
        }
        sums
    }

    /// Fraction of cells equal to zero. An empty matrix reports 0.0.
    pub fn sparsity(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        let zeros = self.data.iter().filter(|&&v| v == 0).count();
        zeros as f64 / self.data.len() as f64
    }

    /// Locate the first cell (row-major) holding something other than 0 or 1.
    pub fn first_non_binary(&self) -> Option<(usize, usize, u8)> {
        self.data
            .iter()
            .position(|&v| v > 1)
            .map(|i| (i / self.cols, i % self.cols, self.data[i]))
    }
}

impl<T: Clone> From<ndarray::Array2<T>> for Array2<T> {
    fn from(array: ndarray::Array2<T>) -> Self {
        let (rows, cols) = array.dim();
        // `iter` walks logical row-major order whatever the memory layout
        let data = array.iter().cloned().collect();
        Self { data, rows, cols }
    }
}

impl<T> Index<(usize, usize)> for Array2<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Array2<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    Length { rows: usize, cols: usize, len: usize },
    RaggedRow { row: usize, expected: usize, found: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Length { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            ShapeError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} columns, expected {}",
                row, found, expected
            ),
        }
    }
}

impl Error for ShapeError {}
