use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use prettytable::{format, Cell as TableCell, Row, Table};
use separator::Separatable;

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    created_states: Vec<i32>,
    visited_states: Vec<i32>,
    duplicate_states: Vec<i32>,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum::<i32>()
    }

    pub fn total_unique_visited(&self) -> i32 {
        self.visited_states.iter().sum::<i32>()
    }

    pub fn total_reached_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum::<i32>()
    }

    /// Counts indexed by distance from the root (depth - 1).
    pub fn created_by_depth(&self) -> &[i32] {
        &self.created_states
    }

    pub fn visited_by_depth(&self) -> &[i32] {
        &self.visited_states
    }

    pub fn duplicates_by_depth(&self) -> &[i32] {
        &self.duplicate_states
    }

    pub(crate) fn add_created(&mut self, dist: usize) -> bool {
        Self::add(&mut self.created_states, dist)
    }

    pub(crate) fn add_unique_visited(&mut self, dist: usize) -> bool {
        Self::add(&mut self.visited_states, dist)
    }

    pub(crate) fn add_reached_duplicate(&mut self, dist: usize) -> bool {
        Self::add(&mut self.duplicate_states, dist)
    }

    /// Returns true when `dist` is a depth not seen before.
    fn add(counts: &mut Vec<i32>, dist: usize) -> bool {
        let mut ret = false;

        // while because some depths might be skipped
        while dist >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[dist] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "total created / unique visited / reached duplicates:")?;
        writeln!(
            f,
            "{:<15} {:<15} {}",
            self.total_created().separated_string(),
            self.total_unique_visited().separated_string(),
            self.total_reached_duplicates().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_unique_visited();
        let duplicates = self.total_reached_duplicates();
        let left = created - visited - duplicates;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(Row::new(
            ["Depth", "Created", "Unique", "Duplicates", "Unknown (not reached)"]
                .iter()
                .map(|title| TableCell::new(title))
                .collect(),
        ));
        // created_states is always the longest
        for (dist, &created) in self.created_states.iter().enumerate() {
            let visited = self.visited_states.get(dist).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(dist).cloned().unwrap_or(0);
            let left = created - visited - duplicates;
            table.add_row(Row::new(
                [dist as i32 + 1, created, visited, duplicates, left]
                    .iter()
                    .map(|count| TableCell::new(&count.separated_string()))
                    .collect(),
            ));
        }
        write!(f, "{}", table)
    }
}

/// Frontier entry. Lower cost first, then FIFO.
#[derive(Debug)]
pub(crate) struct SearchNode<'a, S> {
    pub(crate) state: &'a S,
    pub(crate) cost: f64,
    seq: u64,
}

impl<'a, S> SearchNode<'a, S> {
    pub(crate) fn new(state: &'a S, cost: f64, seq: u64) -> Self {
        Self { state, cost, seq }
    }
}

impl<'a, S> Ord for SearchNode<'a, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then(self.seq.cmp(&other.seq))
    }
}

impl<'a, S> PartialOrd for SearchNode<'a, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a, S> PartialEq for SearchNode<'a, S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<'a, S> Eq for SearchNode<'a, S> {}
