//! A rectangular 2D grid of samples, stored in row-major order.
//!
//! A `Grid` is never empty and never ragged: both conditions are rejected on construction,
//! so everything downstream can rely on `width * height == len`.

use crate::{error::Result, fft_err};

#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Wraps a row-major buffer of `width * height` samples.
    pub fn new(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(fft_err!(
                InvalidInput,
                "grid must not be empty, got {width}x{height}"
            ));
        }
        let expected = width
            .checked_mul(height)
            .ok_or_else(|| fft_err!(InvalidInput, "grid dimensions {width}x{height} overflow"))?;
        if data.len() != expected {
            return Err(fft_err!(
                InvalidInput,
                "a {width}x{height} grid needs {expected} samples, got {}",
                data.len()
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds a grid from a list of rows, all of which must have the same non-zero length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(fft_err!(
                InvalidInput,
                "grid is not rectangular: row {index} has {} samples, row 0 has {width}",
                row.len()
            ));
        }
        Self::new(width, height, rows.into_iter().flatten().collect())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`, the same order `image` uses
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            self.data.get(y * self.width + x)
        } else {
            None
        }
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.width)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<T> {
        self.data
    }

    /// Applies `f` to every sample, keeping the dimensions.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Grid<T> {
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Stage;

    #[test]
    fn from_rows_is_row_major() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.as_slice(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(grid.get(2, 0), Some(&3));
        assert_eq!(grid.get(0, 1), Some(&4));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.to_rows(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn empty_grids_are_rejected() {
        let no_rows: Vec<Vec<u8>> = Vec::new();
        let err = Grid::from_rows(no_rows).unwrap_err();
        assert_eq!(err.stage(), Stage::Transform);

        let empty_rows: Vec<Vec<u8>> = vec![vec![], vec![]];
        assert!(Grid::from_rows(empty_rows).is_err());
        assert!(Grid::<f64>::new(0, 5, vec![]).is_err());
        assert!(Grid::<f64>::new(5, 0, vec![]).is_err());
    }

    #[test]
    fn ragged_grids_are_rejected() {
        let err = Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(err.to_string().contains("row 1 has 1 samples"));
    }

    #[test]
    fn buffer_length_must_match_dimensions() {
        assert!(Grid::new(2, 2, vec![0u8; 3]).is_err());
        assert!(Grid::new(2, 2, vec![0u8; 5]).is_err());
        assert!(Grid::new(usize::MAX, 2, vec![0u8; 1]).is_err());
        assert!(Grid::new(2, 2, vec![0u8; 4]).is_ok());
    }

    #[test]
    fn map_keeps_dimensions() {
        let grid = Grid::new(3, 1, vec![1u8, 2, 3]).unwrap();
        let doubled = grid.map(|&v| f64::from(v) * 2.0);
        assert_eq!(doubled.dimensions(), (3, 1));
        assert_eq!(doubled.into_raw(), vec![2.0, 4.0, 6.0]);
    }
}
