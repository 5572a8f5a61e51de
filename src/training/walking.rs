//! Sports walking

use super::{Training, TrainingData};
use crate::error::{Result, TrainingError};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Sports walking, distance from step count, calories depend on height
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    data: TrainingData,
    height_cm: u32,
}

impl SportsWalking {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64, height_cm: u32) -> Result<Self> {
        if height_cm == 0 {
            return Err(TrainingError::InvalidParameter {
                name: "height",
                value: 0.0,
                reason: "must be greater than zero",
            });
        }

        Ok(Self {
            data: TrainingData::new(action, duration_h, weight_kg)?,
            height_cm,
        })
    }

    pub fn height_cm(&self) -> u32 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn name(&self) -> &'static str {
        "SportsWalking"
    }

    fn spent_calories(&self) -> f64 {
        // Floor division of speed² by height is part of the formula
        let speed = self.mean_speed_kmh();
        let speed_per_height = (speed * speed).div_euclid(self.height_cm as f64);

        (CALORIES_WEIGHT_MULTIPLIER * self.data.weight_kg
            + speed_per_height * CALORIES_SPEED_HEIGHT_MULTIPLIER * self.data.weight_kg)
            * self.data.duration_min()
    }
}
