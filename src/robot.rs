//! Robot state and the instruction alphabet.

use crate::error::Error;
use crate::grid::Coordinate;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compass heading of a robot.
///
/// Variants are declared in clockwise order so that turning is index
/// arithmetic modulo 4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    const CLOCKWISE: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// One quarter turn clockwise.
    pub fn clockwise(self) -> Self {
        Self::CLOCKWISE[(self.index() + 1) % 4]
    }

    /// One quarter turn counter-clockwise.
    pub fn counter_clockwise(self) -> Self {
        Self::CLOCKWISE[(self.index() + 3) % 4]
    }

    /// Unit step taken by a forward move with this heading.
    pub fn delta(self) -> IVec2 {
        match self {
            Orientation::North => IVec2::Y,
            Orientation::East => IVec2::X,
            Orientation::South => IVec2::NEG_Y,
            Orientation::West => IVec2::NEG_X,
        }
    }

    /// Single-letter code: `N`, `E`, `S` or `W`.
    pub fn as_char(self) -> char {
        match self {
            Orientation::North => 'N',
            Orientation::East => 'E',
            Orientation::South => 'S',
            Orientation::West => 'W',
        }
    }

    /// Case-insensitive inverse of [`as_char`](Self::as_char).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Orientation::North),
            'E' => Some(Orientation::East),
            'S' => Some(Orientation::South),
            'W' => Some(Orientation::West),
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_char(c).ok_or_else(|| Error::InvalidOrientation(s.to_string()))
            }
            _ => Err(Error::InvalidOrientation(s.to_string())),
        }
    }
}

/// Operations a robot understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RobotOp {
    /// Rotate 90 degrees left (`L`).
    TurnLeft,
    /// Rotate 90 degrees right (`R`).
    TurnRight,
    /// Step one cell along the current heading (`F`).
    Forward,
}

impl RobotOp {
    /// Decodes an instruction character. Only upper-case `L`, `R` and `F` are recognised.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(RobotOp::TurnLeft),
            'R' => Some(RobotOp::TurnRight),
            'F' => Some(RobotOp::Forward),
            _ => None,
        }
    }
}

/// A robot on the grid.
///
/// The robot knows nothing about the grid: [`move_forward`](Self::move_forward)
/// moves unconditionally and the caller is responsible for reverting moves
/// that leave the grid. While `alive`, `position` is the last in-bounds cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    pub position: Coordinate,
    pub orientation: Orientation,
    pub alive: bool,
}

impl Robot {
    /// Creates a live robot at `position` facing `orientation`.
    pub fn new(position: Coordinate, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
            alive: true,
        }
    }

    /// Rotates a quarter turn counter-clockwise (N → W → S → E).
    pub fn turn_left(&mut self) {
        self.orientation = self.orientation.counter_clockwise();
    }

    /// Rotates a quarter turn clockwise (N → E → S → W).
    pub fn turn_right(&mut self) {
        self.orientation = self.orientation.clockwise();
    }

    /// Steps one cell along the current heading, without any bounds check.
    ///
    /// Saturates at the edge of the `i32` range, so a step that cannot be
    /// represented leaves the position unchanged.
    pub fn move_forward(&mut self) {
        self.position = self.position.saturating_add(self.orientation.delta());
    }

    /// Flags the robot as fallen. The position is left at the last valid cell.
    pub fn mark_lost(&mut self) {
        self.alive = false;
    }

    /// Single-letter code for the current heading.
    pub fn describe_orientation(&self) -> char {
        self.orientation.as_char()
    }

    /// Performs one decoded instruction.
    pub fn apply(&mut self, op: RobotOp) {
        match op {
            RobotOp::TurnLeft => self.turn_left(),
            RobotOp::TurnRight => self.turn_right(),
            RobotOp::Forward => self.move_forward(),
        }
    }
}
