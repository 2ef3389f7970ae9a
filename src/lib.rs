//! # martian-robots
//!
//! Simulates robots exploring a rectangular patch of Mars.
//!
//! Each robot starts on a grid cell with a compass heading and follows a string
//! of `L`, `R` and `F` instructions. A robot that steps off the grid is lost, and
//! leaves a *scent* on the cell it fell from; later robots ignore any move that
//! would take them off the grid from a scented cell. Robots run one after another,
//! so the order of the input matters.
//!
//! ```
//! use martian_robots::{parse_input, SimulationConfig};
//!
//! let sim = parse_input("5 3\n3 2 N\nFRRFLLFFRRFLL\n", &SimulationConfig::default()).unwrap();
//! let report = sim.run().unwrap();
//! assert_eq!(report[0].to_string(), "3 3 N LOST");
//! ```

pub mod error;
pub mod grid;
pub mod parse;
pub mod robot;
pub mod simulation;

pub use error::{Error, Result};
pub use grid::*;
pub use parse::*;
pub use robot::*;
pub use simulation::*;
