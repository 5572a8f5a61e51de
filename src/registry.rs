//! Workout registry - three-letter sensor codes and the package factory

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TrainingError};
use crate::training::{Running, SportsWalking, Swimming, Training, whole};

/// Closed set of supported workout kinds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutKind {
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "Swimming",
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
        }
    }
}

/// Registry entry: sensor code plus positional parameter names
#[derive(Debug, Clone)]
pub struct WorkoutType {
    pub code: &'static str,
    pub kind: WorkoutKind,
    pub params: &'static [&'static str],
}

impl WorkoutType {
    /// Number of positional parameters the sensor sends
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Build the training from positional sensor data
    pub fn build(&self, data: &[f64]) -> Result<Box<dyn Training>> {
        let training: Box<dyn Training> = match (self.kind, data) {
            (WorkoutKind::Swimming, &[action, duration, weight, pool_length, pool_count]) => {
                Box::new(Swimming::new(
                    whole("action", action)?,
                    duration,
                    weight,
                    whole("pool_length", pool_length)?,
                    whole("pool_count", pool_count)?,
                )?)
            }
            (WorkoutKind::Running, &[action, duration, weight]) => {
                Box::new(Running::new(whole("action", action)?, duration, weight)?)
            }
            (WorkoutKind::SportsWalking, &[action, duration, weight, height]) => {
                Box::new(SportsWalking::new(
                    whole("action", action)?,
                    duration,
                    weight,
                    whole("height", height)?,
                )?)
            }
            _ => {
                return Err(TrainingError::InvalidArgumentCount {
                    code: self.code.to_string(),
                    expected: self.arity(),
                    actual: data.len(),
                });
            }
        };

        Ok(training)
    }
}

/// Codes the sensors send
pub const WORKOUT_TYPES: &[WorkoutType] = &[
    WorkoutType {
        code: "SWM",
        kind: WorkoutKind::Swimming,
        params: &["action", "duration", "weight", "pool_length", "pool_count"],
    },
    WorkoutType {
        code: "RUN",
        kind: WorkoutKind::Running,
        params: &["action", "duration", "weight"],
    },
    WorkoutType {
        code: "WLK",
        kind: WorkoutKind::SportsWalking,
        params: &["action", "duration", "weight", "height"],
    },
];

pub fn find_workout_type(code: &str) -> Option<&'static WorkoutType> {
    WORKOUT_TYPES.iter().find(|t| t.code == code)
}

/// Read a sensor package into a training
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Training>> {
    let entry = find_workout_type(workout_type)
        .ok_or_else(|| TrainingError::UnknownWorkoutType(workout_type.to_string()))?;

    if data.len() != entry.arity() {
        return Err(TrainingError::InvalidArgumentCount {
            code: entry.code.to_string(),
            expected: entry.arity(),
            actual: data.len(),
        });
    }

    debug!(code = entry.code, ?data, "reading package");
    entry.build(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_workout_type() {
        assert_eq!(find_workout_type("SWM").unwrap().kind, WorkoutKind::Swimming);
        assert_eq!(find_workout_type("RUN").unwrap().kind, WorkoutKind::Running);
        assert_eq!(find_workout_type("WLK").unwrap().kind, WorkoutKind::SportsWalking);
    }

    #[test]
    fn test_find_workout_type_case_sensitive() {
        assert!(find_workout_type("run").is_none());
        assert!(find_workout_type("").is_none());
    }

    #[test]
    fn test_arity() {
        assert_eq!(find_workout_type("SWM").unwrap().arity(), 5);
        assert_eq!(find_workout_type("RUN").unwrap().arity(), 3);
        assert_eq!(find_workout_type("WLK").unwrap().arity(), 4);
    }

    #[test]
    fn test_every_code_builds_and_summarizes() {
        let samples: &[(&str, &[f64])] = &[
            ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
            ("RUN", &[15000.0, 1.0, 75.0]),
            ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        ];
        for (code, data) in samples {
            let training = read_package(code, data).unwrap();
            let info = training.show_training_info();
            assert_eq!(info.training_type, find_workout_type(code).unwrap().kind.name());
        }
    }

    #[test]
    fn test_unknown_workout_type() {
        let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
        assert!(matches!(err, TrainingError::UnknownWorkoutType(ref code) if code == "XYZ"));
    }

    #[test]
    fn test_unknown_workout_type_ignores_data() {
        assert!(matches!(
            read_package("XYZ", &[]).unwrap_err(),
            TrainingError::UnknownWorkoutType(_)
        ));
    }

    #[test]
    fn test_invalid_argument_count() {
        let err = read_package("RUN", &[15000.0, 1.0]).unwrap_err();
        match err {
            TrainingError::InvalidArgumentCount { code, expected, actual } => {
                assert_eq!(code, "RUN");
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("Unexpected error: {}", other),
        }
    }

    #[test]
    fn test_too_many_arguments() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]).unwrap_err();
        assert!(matches!(err, TrainingError::InvalidArgumentCount { expected: 4, actual: 5, .. }));
    }

    #[test]
    fn test_build_checks_arity_too() {
        let entry = find_workout_type("SWM").unwrap();
        assert!(matches!(
            entry.build(&[1.0]).unwrap_err(),
            TrainingError::InvalidArgumentCount { expected: 5, actual: 1, .. }
        ));
    }

    #[test]
    fn test_fractional_count_rejected() {
        let err = read_package("RUN", &[100.5, 1.0, 75.0]).unwrap_err();
        assert!(matches!(err, TrainingError::InvalidParameter { name: "action", .. }));
    }

    #[test]
    fn test_zero_height_rejected() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0, 0.0]).unwrap_err();
        assert!(matches!(err, TrainingError::InvalidParameter { name: "height", .. }));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = read_package("SWM", &[720.0, 0.0, 80.0, 25.0, 40.0]).unwrap_err();
        assert!(matches!(err, TrainingError::InvalidParameter { name: "duration", .. }));
    }
}
