use std::ops::{Index, IndexMut};

use crate::Position;

/// A square `n` x `n` grid stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    n: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    pub fn from_fn(n: usize, mut f: impl FnMut(Position) -> T) -> Self {
        let mut cells = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                cells.push(f(Position { row, col }));
            }
        }
        Self { n, cells }
    }

    /// Lays out `cells` row-major. Returns `None` unless there are exactly `n * n` of them.
    pub fn from_cells(n: usize, cells: Vec<T>) -> Option<Self> {
        (cells.len() == n * n).then_some(Self { n, cells })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        if pos.row < self.n && pos.col < self.n {
            self.cells.get(pos.row * self.n + pos.col)
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() panics on a chunk size of zero, and an empty grid has no rows anyway
        self.cells.chunks(self.n.max(1))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        let n = self.n;
        self.cells.iter().enumerate().map(move |(idx, cell)| {
            (
                Position {
                    row: idx / n,
                    col: idx % n,
                },
                cell,
            )
        })
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        assert!(pos.row < self.n && pos.col < self.n, "{:?} is off the grid", pos);
        &self.cells[pos.row * self.n + pos.col]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        assert!(pos.row < self.n && pos.col < self.n, "{:?} is off the grid", pos);
        &mut self.cells[pos.row * self.n + pos.col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_row_major() {
        let grid = Grid::from_fn(3, |pos| pos.row * 10 + pos.col);
        let rows: Vec<Vec<usize>> = grid.rows().map(|r| r.to_vec()).collect();
        assert_eq!(rows, vec![vec![0, 1, 2], vec![10, 11, 12], vec![20, 21, 22]]);
        assert_eq!(grid[Position::new(2, 1)], 21);
    }

    #[test]
    fn from_cells_checks_length() {
        assert!(Grid::from_cells(2, vec![1, 2, 3]).is_none());
        assert!(Grid::from_cells(2, vec![1, 2, 3, 4]).is_some());
    }

    #[test]
    fn empty_grid_has_no_rows() {
        let grid: Grid<bool> = Grid::from_fn(0, |_| false);
        assert_eq!(grid.rows().count(), 0);
        assert_eq!(grid.get(Position::new(0, 0)), None);
    }

    #[test]
    #[should_panic]
    fn index_off_grid_panics() {
        let grid = Grid::from_fn(2, |_| 0u8);
        let _ = grid[Position::new(0, 2)];
    }
}
