//! workout-report - Workout sensor report
//!
//! Turns raw sensor packages (steps, strokes, pool laps) into distance,
//! average speed and calories for running, walking and swimming.

pub mod error;
pub mod message;
pub mod registry;
pub mod report;
pub mod training;
pub mod tui;

pub use error::{Result, TrainingError};
pub use message::InfoMessage;
pub use registry::read_package;
pub use training::Training;
