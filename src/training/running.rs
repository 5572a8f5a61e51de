//! Running

use super::{M_IN_KM, Training, TrainingData};
use crate::error::Result;

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

/// Running workout, distance from step count
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    data: TrainingData,
}

impl Running {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self { data: TrainingData::new(action, duration_h, weight_kg)? })
    }
}

impl Training for Running {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn name(&self) -> &'static str {
        "Running"
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh() - CALORIES_MEAN_SPEED_SHIFT)
            * self.data.weight_kg
            / M_IN_KM
            * self.data.duration_min()
    }
}
