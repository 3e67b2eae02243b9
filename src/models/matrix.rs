#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::utils::Float;

/// A square dense matrix with row major storage. All node indexed attributes of the road
/// network (adjacency, distances, scores, pheromone) share this representation.
#[derive(Clone, Debug, Default)]
pub struct DenseMatrix {
    dim: usize,
    data: Vec<Float>,
}

impl DenseMatrix {
    /// Creates a zero filled matrix of the given dimension.
    pub fn new(dim: usize) -> Self {
        Self { dim, data: vec![0.; dim * dim] }
    }

    /// Returns the matrix dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Gets value at given row and column.
    pub fn get(&self, row: usize, col: usize) -> Float {
        self.data[row * self.dim + col]
    }

    /// Sets value at given row and column.
    pub fn set(&mut self, row: usize, col: usize, value: Float) {
        self.data[row * self.dim + col] = value;
    }

    /// Sets value for both orientations of an undirected edge.
    pub fn set_symmetric(&mut self, row: usize, col: usize, value: Float) {
        self.set(row, col, value);
        self.set(col, row, value);
    }

    /// Adds delta to value at given row and column.
    pub fn add(&mut self, row: usize, col: usize, delta: Float) {
        self.data[row * self.dim + col] += delta;
    }

    /// Adds delta to both orientations of an undirected edge.
    pub fn add_symmetric(&mut self, row: usize, col: usize, delta: Float) {
        self.add(row, col, delta);
        if row != col {
            self.add(col, row, delta);
        }
    }

    /// Multiplies every entry by the given factor in place.
    pub fn scale(&mut self, factor: Float) {
        self.data.iter_mut().for_each(|value| *value *= factor);
    }

    /// Returns column indices of nonzero entries in the given row.
    pub fn nonzero_row(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        let start = row * self.dim;
        self.data[start..start + self.dim]
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0.)
            .map(|(index, _)| index)
    }

    /// Re-projects the matrix onto the surviving index subset keeping its order.
    pub fn project(&self, keep: &[usize]) -> Self {
        let mut projected = Self::new(keep.len());
        for (new_row, &old_row) in keep.iter().enumerate() {
            for (new_col, &old_col) in keep.iter().enumerate() {
                projected.set(new_row, new_col, self.get(old_row, old_col));
            }
        }

        projected
    }

    /// Checks whether the matrix is symmetric.
    pub fn is_symmetric(&self) -> bool {
        (0..self.dim).all(|row| (row..self.dim).all(|col| self.get(row, col) == self.get(col, row)))
    }

    /// Returns an iterator over all values.
    pub fn values(&self) -> impl Iterator<Item = Float> + '_ {
        self.data.iter().copied()
    }
}
