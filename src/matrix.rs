use std::ops::{Index, IndexMut};

/// A dense 2D table of distances, stored as a flat row-major buffer.
///
/// Backs both the memo of subtree distances and the forest-distance working
/// table; a single allocation with row-stride indexing replaces the nested
/// vector-of-vectors a textbook formulation would allocate per node pair.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Matrix {
    cols: usize,
    cells: Box<[usize]>,
}

impl Matrix {
    /// A zero-filled matrix with the given dimensions.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            cols,
            cells: vec![0; rows * cols].into(),
        }
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        match self.cols {
            0 => 0,
            cols => self.cells.len() / cols,
        }
    }

    /// The number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = usize;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(col < self.cols);
        &self.cells[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(col < self.cols);
        &mut self.cells[row * self.cols + col]
    }
}
