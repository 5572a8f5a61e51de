//! Info message - the per-workout summary and its text form

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reportable metrics of one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours
    pub duration: f64,
    /// Kilometers
    pub distance: f64,
    /// km/h
    pub speed: f64,
    /// kcal
    pub calories: f64,
}

impl InfoMessage {
    /// Render the one-line report
    pub fn get_message(&self) -> String {
        format!(
            "Workout type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(calories: f64) -> InfoMessage {
        InfoMessage {
            training_type: "Running".to_string(),
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories,
        }
    }

    #[test]
    fn test_get_message_template() {
        assert_eq!(
            message(699.75).get_message(),
            "Workout type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories burned: 699.750."
        );
    }

    #[test]
    fn test_get_message_pads_to_three_decimals() {
        let text = message(722.25).get_message();
        assert!(text.ends_with("Calories burned: 722.250."), "Message: {}", text);
    }

    #[test]
    fn test_get_message_rounds_to_three_decimals() {
        let mut info = message(336.00000000000006);
        info.distance = 0.9936;
        let text = info.get_message();
        assert!(text.contains("Distance: 0.994 km"), "Message: {}", text);
        assert!(text.contains("Calories burned: 336.000."), "Message: {}", text);
    }

    #[test]
    fn test_display_matches_get_message() {
        let info = message(1.0);
        assert_eq!(info.to_string(), info.get_message());
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(message(1.5)).unwrap();
        assert_eq!(json["training_type"], "Running");
        assert_eq!(json["calories"], 1.5);
    }
}
