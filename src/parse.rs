//! Builds a [`Simulation`] from the text input format.
//!
//! ```text
//! 5 3
//! 1 1 E
//! RFRFRFRF
//! ```
//!
//! The first line holds the upper-right grid corner; the rest alternate between
//! a robot start line `x y O` and that robot's instruction line. Blank lines
//! are ignored.

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::robot::{Orientation, Robot};
use crate::simulation::{Simulation, SimulationConfig};
use glam::IVec2;
use tracing::debug;

/// Parses a complete input document.
pub fn parse_input(input: &str, config: &SimulationConfig) -> Result<Simulation> {
    parse_lines(input.lines(), config)
}

/// Parses input already split into lines.
///
/// The line limit counts every non-blank line, the grid line included.
pub fn parse_lines<'a, I>(lines: I, config: &SimulationConfig) -> Result<Simulation>
where
    I: IntoIterator<Item = &'a str>,
{
    // Keep 1-based source line numbers for error messages.
    let lines: Vec<(usize, &str)> = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    if lines.len() > config.max_input_lines {
        return Err(Error::TooManyLines {
            lines: lines.len(),
            max: config.max_input_lines,
        });
    }

    let mut iter = lines.into_iter();
    let (grid_line, header) = iter.next().ok_or(Error::EmptyInput)?;
    let grid = parse_grid(grid_line, header, config)?;
    debug!(x_bound = grid.x_bound, y_bound = grid.y_bound, "grid parsed");

    let mut simulation = Simulation::new(grid);
    while let Some((robot_line, text)) = iter.next() {
        let robot = parse_robot(robot_line, text)?;
        let (_, instructions) = iter
            .next()
            .ok_or(Error::MissingInstructions { line: robot_line })?;
        simulation.add_robot(robot, instructions)?;
    }

    debug!(robots = simulation.robots().len(), "input parsed");
    Ok(simulation)
}

fn parse_grid(line: usize, text: &str, config: &SimulationConfig) -> Result<Grid> {
    let [x, y] = split_fields::<2>(line, text, "expected grid bounds `X Y`")?;
    let x_bound = parse_int(line, x)?;
    let y_bound = parse_int(line, y)?;

    for value in [x_bound, y_bound] {
        if value < 0 {
            return Err(Error::Malformed {
                line,
                message: format!("grid bound {value} is negative"),
            });
        }
        let max = config.max_bound.min(Grid::MAX_BOUND);
        if value > max {
            return Err(Error::BoundTooLarge { value, max });
        }
    }

    Ok(Grid::new(x_bound, y_bound))
}

fn parse_robot(line: usize, text: &str) -> Result<Robot> {
    let [x, y, o] = split_fields::<3>(line, text, "expected robot position `x y O`")?;
    let position = IVec2::new(parse_int(line, x)?, parse_int(line, y)?);
    let orientation: Orientation = o.parse()?;
    Ok(Robot::new(position, orientation))
}

fn split_fields<'a, const N: usize>(
    line: usize,
    text: &'a str,
    expected: &str,
) -> Result<[&'a str; N]> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    fields.try_into().map_err(|_| Error::Malformed {
        line,
        message: format!("{expected}, found {text:?}"),
    })
}

fn parse_int(line: usize, field: &str) -> Result<i32> {
    field.parse().map_err(|_| Error::Malformed {
        line,
        message: format!("{field:?} is not an integer"),
    })
}
