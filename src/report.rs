//! Report pipeline - sensor packages in, info messages out

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, TrainingError};
use crate::message::InfoMessage;
use crate::registry::read_package;

/// One sensor package: workout code plus positional readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: &str, data: &[f64]) -> Self {
        Self {
            workout_type: workout_type.to_string(),
            data: data.to_vec(),
        }
    }
}

/// What to do when a package fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Stop at the first failed package
    #[default]
    FailFast,
    /// Record the failure and continue with the next package
    KeepGoing,
}

/// Result of processing one package
#[derive(Debug)]
pub enum Outcome {
    Report(InfoMessage),
    Failed {
        workout_type: String,
        error: TrainingError,
    },
}

/// Packages the sensors sent in the demo run
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Load a JSON array of packages
pub fn load_packages(path: impl AsRef<Path>) -> Result<Vec<Package>> {
    let raw = fs::read_to_string(path)?;
    let packages = serde_json::from_str(&raw)?;
    Ok(packages)
}

/// Compute the info message for a single package
pub fn process(package: &Package) -> Result<InfoMessage> {
    let training = read_package(&package.workout_type, &package.data)?;
    let info = training.show_training_info();
    debug!(
        workout = %info.training_type,
        distance = info.distance,
        speed = info.speed,
        calories = info.calories,
        "training processed"
    );
    Ok(info)
}

/// Process packages in input order
pub fn run_batch(packages: &[Package], policy: ErrorPolicy) -> Result<Vec<Outcome>> {
    let mut outcomes = Vec::with_capacity(packages.len());

    for package in packages {
        match process(package) {
            Ok(info) => outcomes.push(Outcome::Report(info)),
            Err(error) if policy == ErrorPolicy::KeepGoing => {
                warn!(workout_type = %package.workout_type, %error, "package skipped");
                outcomes.push(Outcome::Failed {
                    workout_type: package.workout_type.clone(),
                    error,
                });
            }
            Err(error) => return Err(error),
        }
    }

    Ok(outcomes)
}
