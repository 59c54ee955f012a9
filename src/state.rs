use std::collections::BTreeSet;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

use log::debug;

use crate::board::{Board, ConfigErr};
use crate::data::{Cell, Dir, Pos, DIAGONALS, NEIGHBORS, ORTHOGONAL};

/// How many items must be collected before the goal counts.
pub const ITEMS_TO_COLLECT: u8 = 2;

/// Longest bishop move. Independent of the board size.
pub const MAX_BISHOP_DIST: i32 = 19;

/// Fields every search tree node has regardless of the puzzle.
pub struct Node<'a, S> {
    pub board: &'a Board,
    pub parent: Option<&'a S>,
    pub position: Pos,
    pub goal_position: Pos,
    pub depth: u32,
}

impl<'a, S> Node<'a, S> {
    pub fn root(board: &'a Board, agent: Cell, goal: Cell) -> Result<Self, ConfigErr> {
        Ok(Node {
            board,
            parent: None,
            position: board.find_unique(agent)?,
            goal_position: board.find_unique(goal)?,
            depth: 1,
        })
    }

    pub fn child(board: &'a Board, parent: &'a S, parent_depth: u32, position: Pos, goal: Pos) -> Self {
        Node {
            board,
            parent: Some(parent),
            position,
            goal_position: goal,
            depth: parent_depth + 1,
        }
    }
}

// derive would require S: Clone
impl<'a, S> Clone for Node<'a, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S> Copy for Node<'a, S> {}

// parents and the board would make every node print the whole tree
impl<'a, S> Debug for Node<'a, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("position", &self.position)
            .field("goal_position", &self.goal_position)
            .field("depth", &self.depth)
            .field("root", &self.parent.is_none())
            .finish()
    }
}

/// Result of computing the moves of a node.
///
/// `progress` is the node's puzzle state after the side effects of standing
/// on its cell (pickups, sensor consumption). Children start from a copy of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion<P> {
    pub destinations: Vec<Pos>,
    pub progress: P,
}

pub trait SearchState<'a>: Sized + 'a {
    type Key: Debug + Clone + Eq + Hash;

    /// Per branch puzzle state, cloned into every child.
    type Progress: Debug + Clone;

    fn agent_code() -> Cell;

    fn goal_code() -> Cell;

    fn root(board: &'a Board) -> Result<Self, ConfigErr>;

    fn child(parent: &'a Self, position: Pos, progress: Self::Progress) -> Self;

    fn node(&self) -> &Node<'a, Self>;

    fn expand_basic(&self) -> Expansion<Self::Progress>;

    fn expand_active(&self) -> Expansion<Self::Progress>;

    fn is_goal_state(&self) -> bool;

    fn unique_key(&self) -> Self::Key;

    fn heuristic_cost(&self) -> f64;

    fn path_cost(&self) -> f64;

    fn legal_destinations_basic(&self) -> Vec<Pos> {
        self.expand_basic().destinations
    }

    fn legal_destinations_active(&self) -> Vec<Pos> {
        self.expand_active().destinations
    }

    /// Children in the order their destinations were generated.
    fn next_states(&'a self) -> Vec<Self> {
        let Expansion {
            destinations,
            progress,
        } = self.expand_active();
        destinations
            .into_iter()
            .map(|pos| Self::child(self, pos, progress.clone()))
            .collect()
    }

    /// Positions from the root to this node.
    fn path(&self) -> Vec<Pos> {
        let mut ret = vec![self.node().position];
        let mut cur = self.node().parent;
        while let Some(state) = cur {
            ret.push(state.node().position);
            cur = state.node().parent;
        }
        ret.reverse();
        ret
    }
}

/// Coordinates where standing forces a wait.
pub type SensorZone = BTreeSet<Pos>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub collected: u8,
    /// In pickup order.
    pub picked: Vec<Pos>,
    pub entry_zone: SensorZone,
    pub exit_zone: SensorZone,
}

impl Progress {
    fn new(sensor_zone: SensorZone) -> Self {
        Progress {
            collected: 0,
            picked: Vec::new(),
            entry_zone: sensor_zone.clone(),
            exit_zone: sensor_zone,
        }
    }

    fn collected_all(&self) -> bool {
        self.collected >= ITEMS_TO_COLLECT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RobotKey {
    pub position: Pos,
    pub picked: BTreeSet<Pos>,
    // exit zone is not part of the identity
    pub entry_zone: SensorZone,
}

/// The agent collects two items while sensors make it wait.
#[derive(Debug, Clone)]
pub struct RobotState<'a> {
    node: Node<'a, RobotState<'a>>,
    progress: Progress,
}

impl<'a> RobotState<'a> {
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn position(&self) -> Pos {
        self.node.position
    }

    pub fn depth(&self) -> u32 {
        self.node.depth
    }

    fn board(&self) -> &'a Board {
        self.node.board
    }

    /// Progress after standing on the current cell.
    fn pickup(&self) -> Progress {
        let mut progress = self.progress.clone();
        let pos = self.position();
        if self.board().cell_at(pos) == Some(Cell::Collectible)
            && !progress.picked.contains(&pos)
            && !progress.collected_all()
        {
            progress.collected += 1;
            progress.picked.push(pos);
            debug!(
                "Collected item {}/{} at {}",
                progress.collected, ITEMS_TO_COLLECT, pos
            );
        }
        progress
    }

    fn walkable(&self, pos: Pos) -> bool {
        match self.board().cell_at(pos) {
            None | Some(Cell::Wall) => false,
            Some(_) => true,
        }
    }

    fn steps(&self, dirs: &[Dir], allow_sensors: bool) -> Vec<Pos> {
        let pos = self.position();
        dirs.iter()
            .map(|&dir| pos + dir)
            .filter(|&new_pos| {
                self.walkable(new_pos)
                    && (allow_sensors || self.board().cell_at(new_pos) != Some(Cell::Sensor))
            })
            .collect()
    }

    fn bishop_moves(&self) -> Vec<Pos> {
        let pos = self.position();
        let mut ret = Vec::new();
        for dist in 1..=MAX_BISHOP_DIST {
            for &dir in &DIAGONALS {
                let new_pos = pos + dir.scaled(dist);
                if self.walkable(new_pos) && self.diagonal_clear(new_pos) {
                    ret.push(new_pos);
                }
            }
        }
        ret
    }

    /// No wall strictly between the current position and `dest` on their diagonal.
    fn diagonal_clear(&self, dest: Pos) -> bool {
        let pos = self.position();
        let (dr, dc) = (dest.r - pos.r, dest.c - pos.c);
        if dr.abs() != dc.abs() {
            return true;
        }
        let dir = Dir::new(dr.signum(), dc.signum());
        (1..dr.abs()).all(|i| !self.board().is_wall(pos + dir.scaled(i)))
    }
}

impl<'a> SearchState<'a> for RobotState<'a> {
    type Key = RobotKey;
    type Progress = Progress;

    fn agent_code() -> Cell {
        Cell::Agent
    }

    fn goal_code() -> Cell {
        Cell::Goal
    }

    fn root(board: &'a Board) -> Result<Self, ConfigErr> {
        let node = Node::root(board, Self::agent_code(), Self::goal_code())?;
        let zone = sensor_zone(board);
        debug!(
            "Root at {}, goal at {}, {} sensor zone positions",
            node.position,
            node.goal_position,
            zone.len()
        );
        Ok(RobotState {
            node,
            progress: Progress::new(zone),
        })
    }

    fn child(parent: &'a Self, position: Pos, progress: Progress) -> Self {
        RobotState {
            node: Node::child(
                parent.node.board,
                parent,
                parent.node.depth,
                position,
                parent.node.goal_position,
            ),
            progress,
        }
    }

    fn node(&self) -> &Node<'a, Self> {
        &self.node
    }

    fn expand_basic(&self) -> Expansion<Progress> {
        let progress = self.pickup();
        let destinations = if progress.collected_all() {
            self.steps(&ORTHOGONAL, true)
        } else {
            self.bishop_moves()
        };
        Expansion {
            destinations,
            progress,
        }
    }

    fn expand_active(&self) -> Expansion<Progress> {
        let mut progress = self.pickup();
        let pos = self.position();

        // sensors switch off once everything is collected
        if progress.collected_all() {
            progress.entry_zone.clear();
            progress.exit_zone.clear();
        }

        let destinations = if progress.entry_zone.remove(&pos) || progress.exit_zone.remove(&pos) {
            vec![pos]
        } else {
            self.steps(&NEIGHBORS, false)
        };
        Expansion {
            destinations,
            progress,
        }
    }

    fn is_goal_state(&self) -> bool {
        self.node.position == self.node.goal_position && self.progress.collected_all()
    }

    fn unique_key(&self) -> RobotKey {
        RobotKey {
            position: self.node.position,
            picked: self.progress.picked.iter().cloned().collect(),
            entry_zone: self.progress.entry_zone.clone(),
        }
    }

    fn heuristic_cost(&self) -> f64 {
        self.node.position.euclidean(self.node.goal_position)
    }

    fn path_cost(&self) -> f64 {
        f64::from(self.node.depth)
    }
}

/// The same set is used for both zone copies of the root.
pub fn sensor_zone(board: &Board) -> SensorZone {
    let mut zone = SensorZone::new();
    for sensor in board.find_all(Cell::Sensor) {
        zone.extend(sensor_field(sensor));
    }
    zone
}

fn sensor_field(sensor: Pos) -> Vec<Pos> {
    let Pos { r, c } = sensor;
    let mut field = vec![
        Pos::new(r, c),
        Pos::new(r + 2, c + 2),
        Pos::new(r + 2, c - 2),
        Pos::new(r - 2, c + 2),
        Pos::new(r - 2, c - 2),
    ];
    for i in 1..=3 {
        field.extend_from_slice(&[
            Pos::new(r + i, c),
            Pos::new(r - i, c),
            Pos::new(r, c + i),
            Pos::new(r, c - i),
            Pos::new(r + i, c + 1),
            Pos::new(r + i, c - 1),
            Pos::new(r + 1, c + i),
            Pos::new(r - 1, c + i),
            Pos::new(r - i, c + 1),
            Pos::new(r - i, c - 1),
            Pos::new(r + 1, c - i),
            Pos::new(r - 1, c - i),
        ]);
    }
    field
}
