use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Vec2d<T> {
    /// All rows must have the same length - the parser checks that.
    pub(crate) fn new(grid: Vec<Vec<T>>) -> Self {
        assert!(!grid.is_empty() && !grid[0].is_empty());

        let rows = grid.len();
        let cols = grid[0].len();
        let mut data = Vec::with_capacity(rows * cols);
        for row in grid {
            assert_eq!(row.len(), cols);
            data.extend(row);
        }
        Vec2d { data, rows, cols }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        pos.r >= 0 && pos.c >= 0 && (pos.r as usize) < self.rows && (pos.c as usize) < self.cols
    }

    /// Bounds checked lookup, the only kind movement code should use.
    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            Some(&self[pos])
        } else {
            None
        }
    }

    pub(crate) fn positions(&self) -> Positions {
        Positions {
            next: 0,
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub(crate) fn scratchpad_with_default<U: Clone>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn index1d(&self, pos: Pos) -> usize {
        assert!(self.contains(pos), "{} out of bounds", pos);
        pos.r as usize * self.cols + pos.c as usize
    }
}

/// Row-major iterator over all positions of a grid.
#[derive(Debug, Clone)]
pub(crate) struct Positions {
    next: usize,
    rows: usize,
    cols: usize,
}

impl Iterator for Positions {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        if self.next >= self.rows * self.cols {
            return None;
        }
        let pos = Pos::new((self.next / self.cols) as i32, (self.next % self.cols) as i32);
        self.next += 1;
        Some(pos)
    }
}

impl<T: Display> Display for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        &self.data[self.index1d(index)]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = self.index1d(index);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        let grid = Vec2d::new(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(Pos::new(1, 2)), Some(&6));
        assert_eq!(grid.get(Pos::new(2, 0)), None);
        assert_eq!(grid.get(Pos::new(0, -1)), None);
        assert_eq!(grid.get(Pos::new(-3, -3)), None);
    }

    #[test]
    fn row_major_positions() {
        let grid = Vec2d::new(vec![vec![0; 2]; 2]);
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(1, 0),
                Pos::new(1, 1)
            ]
        );
    }

    #[test]
    fn scratchpad() {
        let grid = Vec2d::new(vec![vec!['a'; 3]; 2]);
        let mut scratch = grid.scratchpad_with_default(false);
        scratch[Pos::new(1, 1)] = true;
        assert_eq!(scratch.to_string(), "falsefalsefalse\nfalsetruefalse\n");
    }
}
