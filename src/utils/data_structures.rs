/// this module contains the owning storage used by the graph algorithms

use std::ops::Index;

/// stores a 2d matrix inside a single 1d array
pub struct Matrix<T: Clone + Copy> {
    data: Vec<T>,

    rows: usize,
    cols: usize,
}

impl<T: Clone + Copy> Matrix<T> {
    pub fn new(rows: usize, cols: usize, initial_value: T) -> Self {
        Matrix {
            data: vec![initial_value; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// sets all entries to the given value
    pub fn fill(&mut self, value: T) {
        self.data.iter_mut().for_each(|entry| *entry = value);
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.data[(row * self.cols)..((row + 1) * self.cols)]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.data[(row * self.cols)..((row + 1) * self.cols)]
    }
}

impl<T: Clone + Copy + Ord> Matrix<T> {
    /// returns true in case the value has been reduced, false otherwise
    pub fn reduce_value(&mut self, row: usize, col: usize, value: T) -> bool {
        let index = row * self.cols + col;

        let current_value = &mut self.data[index];

        if value < *current_value {
            *current_value = value;
            return true;
        }

        false
    }
}

impl<T: Clone + Copy> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.cols + col]
    }
}

impl<T: Clone + Copy> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.rows = source.rows;
        self.cols = source.cols;
    }
}

impl<T: Clone + Copy + PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}
