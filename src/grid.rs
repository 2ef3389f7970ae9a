use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A grid cell. Used as the key of the scent set.
pub type Coordinate = IVec2;

/// The surface of Mars: a rectangle anchored at `(0, 0)` plus the cells robots
/// have fallen from.
///
/// Scents only accumulate. A scent is a property of the cell, not of the
/// direction the robot was heading, so a scented corner blocks falls in every
/// direction that leaves the grid from it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Grid {
    /// Upper-right x coordinate (inclusive).
    pub x_bound: i32,

    /// Upper-right y coordinate (inclusive).
    pub y_bound: i32,

    scent_set: HashSet<Coordinate>,
}

impl Grid {
    /// Largest bound the parser accepts, whatever the configured limit.
    ///
    /// Leaves room for one step past the edge without leaving the `i32` range.
    pub const MAX_BOUND: i32 = i32::MAX - 1;

    /// Creates a grid spanning `(0, 0)..=(x_bound, y_bound)` with no scents.
    pub fn new(x_bound: i32, y_bound: i32) -> Self {
        Self {
            x_bound,
            y_bound,
            scent_set: HashSet::new(),
        }
    }

    /// Returns `true` if `coord` lies on the grid. Both bounds are inclusive.
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        (0..=self.x_bound).contains(&coord.x) && (0..=self.y_bound).contains(&coord.y)
    }

    /// Returns `true` if a robot has already fallen from `coord`.
    pub fn is_scented(&self, coord: Coordinate) -> bool {
        self.scent_set.contains(&coord)
    }

    /// Marks `coord` as a cell a robot fell from. Idempotent.
    pub fn mark_scented(&mut self, coord: Coordinate) {
        self.scent_set.insert(coord);
    }

    /// Iterates over every scented cell, in no particular order.
    pub fn scents(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.scent_set.iter().copied()
    }

    /// Number of distinct scented cells.
    pub fn scent_count(&self) -> usize {
        self.scent_set.len()
    }
}
