use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use crate::data::{Cell, Pos};
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErr {
    Missing(Cell),
    Multiple(Cell),
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigErr::Missing(cell) => write!(f, "No cell marked '{}'", cell),
            ConfigErr::Multiple(cell) => {
                write!(f, "More than one cell marked '{}' - exactly one allowed", cell)
            }
        }
    }
}

impl Error for ConfigErr {}

/// Immutable rectangular grid shared by the whole search tree.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Vec2d<Cell>,
}

impl Board {
    pub(crate) fn new(grid: Vec2d<Cell>) -> Self {
        Board { grid }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.grid.contains(pos)
    }

    /// `None` means out of bounds.
    pub fn cell_at(&self, pos: Pos) -> Option<Cell> {
        self.grid.get(pos).cloned()
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.cell_at(pos) == Some(Cell::Wall)
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        self.grid.positions()
    }

    pub fn find_unique(&self, cell: Cell) -> Result<Pos, ConfigErr> {
        let mut found = self.find_all(cell);
        let pos = found.next().ok_or(ConfigErr::Missing(cell))?;
        if found.next().is_some() {
            return Err(ConfigErr::Multiple(cell));
        }
        Ok(pos)
    }

    /// Row-major order.
    pub fn find_all(&self, cell: Cell) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&pos| self.grid[pos] == cell)
    }

    pub fn format_with_path<'a>(&'a self, path: &'a [Pos]) -> PathFormatter<'a> {
        PathFormatter { board: self, path }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Draws the board with visited empty cells replaced by `*`.
#[derive(Clone, Copy)]
pub struct PathFormatter<'a> {
    board: &'a Board,
    path: &'a [Pos],
}

impl<'a> Display for PathFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visited = self.board.grid.scratchpad_with_default(false);
        for &pos in self.path {
            if self.board.contains(pos) {
                visited[pos] = true;
            }
        }

        for r in 0..self.board.rows() {
            for c in 0..self.board.cols() {
                let pos = Pos::new(r as i32, c as i32);
                let cell = self.board.grid[pos];
                if visited[pos] && cell == Cell::Empty {
                    write!(f, "*")?;
                } else {
                    write!(f, "{}", cell)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> Debug for PathFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
