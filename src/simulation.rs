//! Engine that runs robots over a shared [`Grid`] and reports where they ended up.
//!
//! The entry point is [`Simulation`]. Build one with [`Simulation::new`] and
//! [`Simulation::add_robot`] (or [`crate::parse_input`]), then call
//! [`Simulation::run`] to consume it and obtain one [`RobotReport`] per robot.

use crate::error::{Error, Result};
use crate::grid::{Coordinate, Grid};
use crate::robot::{Orientation, Robot, RobotOp};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, trace};

/// Limits enforced when building a simulation from text input.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Largest accepted value for either grid bound. Default: 50.
    pub max_bound: i32,
    /// Largest accepted number of non-blank input lines, grid line included. Default: 100.
    pub max_input_lines: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_bound: 50,
            max_input_lines: 100,
        }
    }
}

/// Final state of one robot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotReport {
    pub position: Coordinate,
    pub orientation: Orientation,
    pub lost: bool,
}

impl From<&Robot> for RobotReport {
    fn from(robot: &Robot) -> Self {
        Self {
            position: robot.position,
            orientation: robot.orientation,
            lost: !robot.alive,
        }
    }
}

impl fmt::Display for RobotReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.position.x, self.position.y, self.orientation
        )?;
        if self.lost {
            f.write_str(" LOST")?;
        }
        Ok(())
    }
}

/// Robots, their instruction strings, and the grid they share.
#[derive(Clone, Debug, Default)]
pub struct Simulation {
    grid: Grid,
    robots: Vec<Robot>,
    instructions: Vec<String>,
}

impl Simulation {
    /// Creates an empty simulation over `grid`.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            robots: Vec::new(),
            instructions: Vec::new(),
        }
    }

    /// Queues a robot. Robots run in the order they were added.
    ///
    /// Fails with [`Error::RobotOutOfBounds`] if the robot does not start on the
    /// grid. Instructions are not checked here; an unknown character fails
    /// [`run`](Self::run).
    pub fn add_robot(&mut self, robot: Robot, instructions: impl Into<String>) -> Result<()> {
        if !self.grid.in_bounds(robot.position) {
            return Err(Error::RobotOutOfBounds {
                robot: self.robots.len(),
                x: robot.position.x,
                y: robot.position.y,
            });
        }
        self.robots.push(robot);
        self.instructions.push(instructions.into());
        Ok(())
    }

    /// The shared grid, including any scents marked so far.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Queued robots, in run order.
    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    /// Runs every robot to completion, in order, and reports their final state.
    ///
    /// Robots run one at a time against the same grid, so scents left by
    /// earlier robots protect later ones. The first unknown instruction aborts
    /// the run and no report is produced.
    pub fn run(mut self) -> Result<Vec<RobotReport>> {
        for (id, (robot, instructions)) in self
            .robots
            .iter_mut()
            .zip(&self.instructions)
            .enumerate()
        {
            debug!(
                robot = id,
                x = robot.position.x,
                y = robot.position.y,
                orientation = %robot.orientation,
                "robot starting"
            );
            drive(&mut self.grid, robot, id, instructions)?;
            debug!(
                robot = id,
                x = robot.position.x,
                y = robot.position.y,
                orientation = %robot.orientation,
                lost = !robot.alive,
                "robot finished"
            );
        }

        let report: Vec<RobotReport> = self.robots.iter().map(RobotReport::from).collect();
        info!(
            robots = report.len(),
            lost = report.iter().filter(|r| r.lost).count(),
            scents = self.grid.scent_count(),
            "simulation complete"
        );
        Ok(report)
    }
}

/// Executes `instructions` for a single robot against the shared `grid`.
///
/// A forward move that would leave the grid is reverted. If the cell the robot
/// stands on is unscented the robot is lost, the cell is scented, and the rest
/// of the string is skipped; otherwise the move is ignored and execution
/// continues. Characters after a fall are never inspected.
///
/// `robot_id` only labels log events and errors.
pub fn drive(
    grid: &mut Grid,
    robot: &mut Robot,
    robot_id: usize,
    instructions: &str,
) -> Result<()> {
    for (position, c) in instructions.chars().enumerate() {
        let op = RobotOp::from_char(c).ok_or(Error::InvalidInstruction {
            robot: robot_id,
            position,
            found: c,
        })?;
        trace!(robot = robot_id, ?op, "instruction");

        if op != RobotOp::Forward {
            robot.apply(op);
            continue;
        }

        let last_valid = robot.position;
        robot.move_forward();
        // A step that saturated at the integer limit has left the grid too.
        if robot.position != last_valid && grid.in_bounds(robot.position) {
            continue;
        }

        robot.position = last_valid;
        if grid.is_scented(last_valid) {
            debug!(
                robot = robot_id,
                x = last_valid.x,
                y = last_valid.y,
                "scent blocked a fall"
            );
            continue;
        }

        robot.mark_lost();
        grid.mark_scented(last_valid);
        debug!(
            robot = robot_id,
            x = last_valid.x,
            y = last_valid.y,
            orientation = %robot.orientation,
            "robot lost"
        );
        break;
    }
    Ok(())
}
