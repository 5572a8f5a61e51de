//! Swimming
//!
//! Speed comes from pool laps, not strokes: the stroke-based distance is
//! still reported but does not feed the speed or calorie numbers.

use super::{M_IN_KM, Training, TrainingData};
use crate::error::Result;

/// Distance covered by one stroke, meters
pub const SWIM_STROKE_LEN_M: f64 = 1.38;

const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    data: TrainingData,
    pool_length_m: u32,
    pool_count: u32,
}

impl Swimming {
    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: u32,
        pool_count: u32,
    ) -> Result<Self> {
        Ok(Self {
            data: TrainingData::new(action, duration_h, weight_kg)?,
            pool_length_m,
            pool_count,
        })
    }

    pub fn pool_length_m(&self) -> u32 {
        self.pool_length_m
    }

    pub fn pool_count(&self) -> u32 {
        self.pool_count
    }
}

impl Training for Swimming {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn name(&self) -> &'static str {
        "Swimming"
    }

    fn step_len_m(&self) -> f64 {
        SWIM_STROKE_LEN_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m as f64 * self.pool_count as f64 / M_IN_KM / self.data.duration_h
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.data.weight_kg
    }
}
