pub mod a_star;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::{debug, info};
use typed_arena::Arena;

use crate::board::{Board, ConfigErr};
use crate::config::Method;
use crate::data::Pos;
use crate::state::{RobotState, SearchState};
use crate::Solve;

use self::a_star::{SearchNode, Stats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    Config(ConfigErr),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::Config(err) => write!(f, "Invalid board: {}", err),
        }
    }
}

impl Error for SolverErr {}

impl From<ConfigErr> for SolverErr {
    fn from(err: ConfigErr) -> Self {
        SolverErr::Config(err)
    }
}

pub struct SolverOk {
    /// Agent positions from the start to the goal, including both.
    pub path: Option<Vec<Pos>>,
    pub stats: Stats,
    pub method: Method,
}

impl SolverOk {
    fn new(path: Option<Vec<Pos>>, stats: Stats, method: Method) -> Self {
        Self {
            path,
            stats,
            method,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path {
            None => writeln!(f, "No solution")?,
            Some(ref path) => writeln!(f, "{}: {}", self.method, path.len() - 1)?,
        }
        write!(f, "{}", self.stats)
    }
}

impl Solve for Board {
    fn solve(&self, method: Method, print_status: bool) -> Result<SolverOk, SolverErr> {
        solve(self, method, print_status)
    }
}

fn solve(board: &Board, method: Method, print_status: bool) -> Result<SolverOk, SolverErr> {
    let arena = Arena::new();
    let root = RobotState::root(board)?;
    Ok(search(&arena, root, method, print_status))
}

/// Best-first search over any state model.
///
/// States are deduplicated by their key when taken off the frontier,
/// the first state with a given key wins.
pub fn search<'a, S: SearchState<'a>>(
    arena: &'a Arena<S>,
    root: S,
    method: Method,
    print_status: bool,
) -> SolverOk {
    debug!("Search called using {}", method);

    let mut stats = Stats::new();
    let mut to_visit = BinaryHeap::new();
    let mut visited = FnvHashSet::default();
    let mut seq = 0;

    let root = &*arena.alloc(root);
    stats.add_created(dist(root));
    to_visit.push(Reverse(SearchNode::new(root, cost(method, root), seq)));

    while let Some(Reverse(cur_node)) = to_visit.pop() {
        let state = cur_node.state;
        if !visited.insert(state.unique_key()) {
            stats.add_reached_duplicate(dist(state));
            continue;
        }
        if stats.add_unique_visited(dist(state)) && print_status {
            println!("Visited new depth: {}", state.node().depth);
            println!("{:?}", stats);
        }

        if state.is_goal_state() {
            info!(
                "Solved at depth {} with cost {}",
                state.node().depth,
                cur_node.cost
            );
            return SolverOk::new(Some(state.path()), stats, method);
        }

        for next_state in state.next_states() {
            // insert and then ignore duplicates
            let next_state = &*arena.alloc(next_state);
            seq += 1;
            stats.add_created(dist(next_state));
            to_visit.push(Reverse(SearchNode::new(
                next_state,
                cost(method, next_state),
                seq,
            )));
        }
    }

    debug!("Frontier exhausted after {} unique states", visited.len());
    SolverOk::new(None, stats, method)
}

fn dist<'a, S: SearchState<'a>>(state: &S) -> usize {
    state.node().depth as usize - 1
}

fn cost<'a, S: SearchState<'a>>(method: Method, state: &S) -> f64 {
    match method {
        Method::BreadthFirst => state.path_cost(),
        Method::Greedy => state.heuristic_cost(),
        Method::AStar => state.path_cost() + state.heuristic_cost(),
    }
}

#[cfg(test)]
mod tests {
    use crate::data::Cell;

    use super::*;

    const EXAMPLE: &str = r"
s...g
.....
..b..
.....
..b.r
";

    fn is_step(from: Pos, to: Pos) -> bool {
        (from.r - to.r).abs() <= 1 && (from.c - to.c).abs() <= 1
    }

    #[test]
    fn shortest_path() {
        let board: Board = EXAMPLE.parse().unwrap();
        let solution = board.solve(Method::BreadthFirst, false).unwrap();
        let path = solution.path.unwrap();
        assert_eq!(path.len(), 7);
        assert_eq!(path[0], Pos::new(4, 4));
        assert_eq!(path[6], Pos::new(0, 4));
        assert!(path.contains(&Pos::new(4, 2)));
        assert!(path.contains(&Pos::new(2, 2)));
        // the item inside the sensor zone has to be second
        let first = path.iter().position(|&pos| pos == Pos::new(4, 2));
        let second = path.iter().position(|&pos| pos == Pos::new(2, 2));
        assert!(first < second);
    }

    #[test]
    fn all_methods_reach_goal() {
        let board: Board = EXAMPLE.parse().unwrap();
        for &method in &Method::ALL {
            let solution = board.solve(method, false).unwrap();
            assert_eq!(solution.method, method);
            let path = solution.path.unwrap();
            assert_eq!(path.first(), Some(&Pos::new(4, 4)));
            assert_eq!(path.last(), Some(&Pos::new(0, 4)));
            assert!(path.len() >= 7);
            for pair in path.windows(2) {
                assert!(is_step(pair[0], pair[1]), "{} -> {}", pair[0], pair[1]);
                assert!(!board.is_wall(pair[1]));
            }

            let stats = &solution.stats;
            assert!(
                stats.total_created()
                    >= stats.total_unique_visited() + stats.total_reached_duplicates()
            );
        }
    }

    #[test]
    fn walled_off_goal() {
        let board: Board = r"
r.b.w..
..b.w..
....w.g
"
        .parse()
        .unwrap();
        let solution = board.solve(Method::AStar, false).unwrap();
        assert_eq!(solution.path, None);
        assert!(solution.stats.total_unique_visited() > 1);
        assert!(format!("{:?}", solution).starts_with("No solution\n"));
    }

    #[test]
    fn single_item_is_not_enough() {
        let board: Board = "r.b.g".parse().unwrap();
        let solution = board.solve(Method::BreadthFirst, false).unwrap();
        assert_eq!(solution.path, None);
    }

    #[test]
    fn waiting_on_exit_zone_is_a_duplicate() {
        // the start is in the sensor zone, the second wait only changes the exit zone
        let board: Board = r"
wwwwwww
wr.b.bg
wwswwww
"
        .parse()
        .unwrap();
        let solution = board.solve(Method::BreadthFirst, false).unwrap();
        assert_eq!(solution.path, None);
        assert_eq!(solution.stats.created_by_depth(), &[1, 1, 1]);
        assert_eq!(solution.stats.visited_by_depth(), &[1, 1]);
        assert_eq!(solution.stats.duplicates_by_depth(), &[0, 0, 1]);
    }

    #[test]
    fn invalid_board() {
        let board: Board = "r.b.b".parse().unwrap();
        assert_eq!(
            board.solve(Method::Greedy, false).unwrap_err(),
            SolverErr::Config(ConfigErr::Missing(Cell::Goal))
        );
    }

    #[test]
    fn generic_search() {
        let board: Board = "rbbg".parse().unwrap();
        let arena = Arena::new();
        let root = RobotState::root(&board).unwrap();
        let solution = search(&arena, root, Method::BreadthFirst, false);
        assert_eq!(
            solution.path,
            Some(vec![
                Pos::new(0, 0),
                Pos::new(0, 1),
                Pos::new(0, 2),
                Pos::new(0, 3)
            ])
        );
        assert_eq!(format!("{:?}", solution).lines().next(), Some("bfs: 3"));
    }
}
