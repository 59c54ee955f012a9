use std::fmt::{self, Display, Formatter};
use std::ops::Add;

// i32 because sensor zones and movement candidates routinely leave the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { r, c }
    }

    /// Straight line distance, used as the guided search heuristic.
    pub fn euclidean(self, other: Pos) -> f64 {
        let dr = f64::from(self.r - other.r);
        let dc = f64::from(self.c - other.c);
        (dr * dr + dc * dc).sqrt()
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dir {
    pub r: i32,
    pub c: i32,
}

impl Dir {
    pub const fn new(r: i32, c: i32) -> Dir {
        Dir { r, c }
    }

    pub fn scaled(self, dist: i32) -> Dir {
        Dir {
            r: self.r * dist,
            c: self.c * dist,
        }
    }
}

// the order of these tables is the order successors are generated in

/// Single steps: right, left, down, up.
pub(crate) const ORTHOGONAL: [Dir; 4] = [
    Dir::new(0, 1),
    Dir::new(0, -1),
    Dir::new(1, 0),
    Dir::new(-1, 0),
];

/// Diagonal rays of the bishop movement.
pub(crate) const DIAGONALS: [Dir; 4] = [
    Dir::new(1, 1),
    Dir::new(-1, -1),
    Dir::new(-1, 1),
    Dir::new(1, -1),
];

/// All eight single step neighbors.
pub(crate) const NEIGHBORS: [Dir; 8] = [
    Dir::new(0, 1),
    Dir::new(0, -1),
    Dir::new(1, 0),
    Dir::new(-1, 0),
    Dir::new(1, 1),
    Dir::new(-1, -1),
    Dir::new(1, -1),
    Dir::new(-1, 1),
];

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        Pos {
            r: self.r + dir.r,
            c: self.c + dir.c,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Wall,
    Agent,
    Goal,
    Collectible,
    Sensor,
}

impl Cell {
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' => Some(Cell::Empty),
            'w' => Some(Cell::Wall),
            'r' => Some(Cell::Agent),
            'g' => Some(Cell::Goal),
            'b' => Some(Cell::Collectible),
            's' => Some(Cell::Sensor),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Wall => 'w',
            Cell::Agent => 'r',
            Cell::Goal => 'g',
            Cell::Collectible => 'b',
            Cell::Sensor => 's',
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
