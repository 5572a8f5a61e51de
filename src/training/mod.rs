//! Training model - raw sensor inputs and the per-workout capability set
//!
//! Every workout kind implements [`Training`]. Distance and mean speed have
//! shared formulas that a kind may override; calories have none, so a kind
//! without its own calorie formula cannot be built at all.

pub mod running;
pub mod swimming;
pub mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::error::{Result, TrainingError};
use crate::message::InfoMessage;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_HOUR: f64 = 60.0;
/// Distance covered by one step, meters
pub const LEN_STEP_M: f64 = 0.65;

/// Sensor readings shared by every workout kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingData {
    /// Steps or strokes counted by the sensor
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
}

impl TrainingData {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self> {
        if !duration_h.is_finite() || duration_h <= 0.0 {
            return Err(TrainingError::InvalidParameter {
                name: "duration",
                value: duration_h,
                reason: "must be greater than zero",
            });
        }
        if !weight_kg.is_finite() || weight_kg < 0.0 {
            return Err(TrainingError::InvalidParameter {
                name: "weight",
                value: weight_kg,
                reason: "must not be negative",
            });
        }

        Ok(Self { action, duration_h, weight_kg })
    }

    /// Duration in minutes
    pub fn duration_min(&self) -> f64 {
        self.duration_h * MIN_IN_HOUR
    }
}

/// Capability set of a workout kind
pub trait Training: std::fmt::Debug {
    /// Raw sensor readings
    fn data(&self) -> &TrainingData;

    /// Display name used in reports
    fn name(&self) -> &'static str;

    /// Calories burned, kcal
    fn spent_calories(&self) -> f64;

    /// Distance covered by one action, meters
    fn step_len_m(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distance in km
    fn distance_km(&self) -> f64 {
        self.data().action as f64 * self.step_len_m() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.data().duration_h
    }

    /// Snapshot of all reportable metrics
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.name().to_string(),
            duration: self.data().duration_h,
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.spent_calories(),
        }
    }
}

/// Convert a raw sensor number into a whole, non-negative count
pub(crate) fn whole(name: &'static str, value: f64) -> Result<u32> {
    if !value.is_finite() || value < 0.0 {
        return Err(TrainingError::InvalidParameter {
            name,
            value,
            reason: "must be a non-negative number",
        });
    }
    if value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(TrainingError::InvalidParameter {
            name,
            value,
            reason: "must be a whole number",
        });
    }
    Ok(value as u32)
}

#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "Expected {}, got {}",
        expected,
        actual
    );
}
