use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::board::Board;
use crate::data::Cell;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    LineLength(usize),
    Empty,
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::LineLength(r) => write!(f, "Wrong line length on line {}", r),
            ParserErr::Empty => write!(f, "No cells"),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Board {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// One char per cell, one line per row:
/// `.` empty, `w` wall, `r` agent, `g` goal, `b` collectible, `s` sensor.
pub(crate) fn parse(board: &str) -> Result<Board, ParserErr> {
    // trim so we can specify boards using raw strings more easily
    let board = board.trim_matches('\n').trim_end();
    if board.is_empty() {
        return Err(ParserErr::Empty);
    }

    let mut grid: Vec<Vec<Cell>> = Vec::new();
    for (r, line) in board.lines().enumerate() {
        // tolerate CRLF files
        let line = line.trim_end_matches('\r');

        let mut row = Vec::with_capacity(line.len());
        for (c, symbol) in line.chars().enumerate() {
            row.push(Cell::from_symbol(symbol).ok_or(ParserErr::Pos(r, c))?);
        }

        if let Some(first) = grid.first() {
            if first.len() != row.len() {
                return Err(ParserErr::LineLength(r));
            }
        } else if row.is_empty() {
            return Err(ParserErr::Empty);
        }
        grid.push(row);
    }

    Ok(Board::new(Vec2d::new(grid)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_board() {
        let text = r"
wwwww
wr.bw
w.s.w
wb.gw
wwwww
"
        .trim_start_matches('\n');
        let board: Board = text.parse().unwrap();
        assert_eq!(board.to_string(), text);
        assert_eq!(format!("{:?}", board), text);
    }

    #[test]
    fn invalid_symbol() {
        assert_eq!(parse("r.g\n.#."), Err(ParserErr::Pos(1, 1)));
    }

    #[test]
    fn ragged_rows() {
        assert_eq!(parse("r.g\n..\n..."), Err(ParserErr::LineLength(1)));
    }

    #[test]
    fn empty() {
        assert_eq!(parse(""), Err(ParserErr::Empty));
        assert_eq!(parse("\n\n  \n"), Err(ParserErr::Empty));
    }

    #[test]
    fn crlf() {
        let board = parse("r.\r\n.g\r\n").unwrap();
        assert_eq!(board.to_string(), "r.\n.g\n");
    }
}
