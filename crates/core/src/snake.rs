//! Snake module - the snake body and its occupancy index
//!
//! The body is an owned deque ordered head (front) to tail (back), mirrored by
//! a set of occupied cell ids for O(1) collision checks. Both structures are
//! only ever changed together inside a single `&mut self` method, so the set
//! always equals the cells of the segments.

use std::collections::{HashSet, VecDeque};

use crate::board::Board;
use crate::geometry::{direction_between, step};
use crate::types::{CellId, Coord, Direction};

/// One unit of snake body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub coord: Coord,
    pub cell: CellId,
}

#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Segment>,
    occupied: HashSet<CellId>,
}

impl Snake {
    /// Single-segment snake at the given position
    pub fn new(coord: Coord, cell: CellId) -> Self {
        let mut body = VecDeque::with_capacity(16);
        body.push_back(Segment { coord, cell });
        let mut occupied = HashSet::with_capacity(16);
        occupied.insert(cell);
        Self { body, occupied }
    }

    /// Build a snake from head-to-tail coordinates
    ///
    /// Returns `None` if the list is empty, leaves the board, repeats a cell,
    /// or has two consecutive coordinates that are not 4-adjacent.
    pub fn from_coords(board: &Board, coords: &[Coord]) -> Option<Self> {
        let mut body = VecDeque::with_capacity(coords.len());
        let mut occupied = HashSet::with_capacity(coords.len());
        for (i, &coord) in coords.iter().enumerate() {
            let cell = board.cell_at(coord).ok()?;
            if i > 0 && direction_between(coords[i - 1], coord).is_none() {
                return None;
            }
            if !occupied.insert(cell) {
                return None;
            }
            body.push_back(Segment { coord, cell });
        }
        if body.is_empty() {
            return None;
        }
        Some(Self { body, occupied })
    }

    pub fn head(&self) -> Segment {
        // The body is never empty: every mutation pushes before it pops.
        self.body[0]
    }

    pub fn tail(&self) -> Segment {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// O(1) membership test
    pub fn contains(&self, cell: CellId) -> bool {
        self.occupied.contains(&cell)
    }

    /// Segments from head to tail
    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.body.iter()
    }

    pub fn occupied(&self) -> &HashSet<CellId> {
        &self.occupied
    }

    /// Move one step: new head in front, old tail dropped
    pub fn advance(&mut self, coord: Coord, cell: CellId) {
        self.body.push_front(Segment { coord, cell });
        if let Some(old_tail) = self.body.pop_back() {
            self.occupied.remove(&old_tail.cell);
        }
        self.occupied.insert(cell);
    }

    /// Add one segment behind the tail, extending away from the body
    ///
    /// The tail's direction of travel is the direction from the tail to its
    /// successor (the next segment toward the head). A single-segment snake
    /// travels in `heading`. The new segment is placed one step opposite to that
    /// direction. Growth is skipped when that cell is off the board or already
    /// part of the body; returns whether a segment was added.
    pub fn grow(&mut self, board: &Board, heading: Direction) -> bool {
        let tail = self.tail();
        let travel = self
            .tail_successor()
            .and_then(|next| direction_between(tail.coord, next.coord))
            .unwrap_or(heading);

        let coord = step(tail.coord, travel.opposite());
        let Ok(cell) = board.cell_at(coord) else {
            return false;
        };
        if self.occupied.contains(&cell) {
            return false;
        }

        self.body.push_back(Segment { coord, cell });
        self.occupied.insert(cell);
        true
    }

    fn tail_successor(&self) -> Option<Segment> {
        let len = self.body.len();
        if len < 2 {
            return None;
        }
        self.body.get(len - 2).copied()
    }

    /// Occupied set equals the set of segment cells, with no duplicates
    pub fn is_consistent(&self) -> bool {
        self.body.len() == self.occupied.len()
            && self.body.iter().all(|s| self.occupied.contains(&s.cell))
    }
}
