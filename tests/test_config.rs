//! Tests for configuration parsing
//!
//! This file tests the config module including:
//! - Building layers and schedules from JSON
//! - Rejecting unknown activation and schedule names
//! - Handling invalid JSON and invalid values

use neuron_functions::config::FunctionConfig;
use neuron_functions::FunctionError;

fn config_json(activation: &str, neuron_count: i64, schedule: &str) -> String {
    format!(
        r#"{{
            "activation": "{activation}",
            "neuron_count": {neuron_count},
            "learning_rate": {{
                "schedule": "{schedule}",
                "initial_rate": 0.3,
                "final_rate": 0.05
            }}
        }}"#
    )
}

// ============================================================================
// Valid Config Tests
// ============================================================================

mod valid_config_tests {
    use super::*;

    #[test]
    fn test_build_logarithm_layer() {
        let config = FunctionConfig::from_json(&config_json("logarithm", 8, "linear")).unwrap();
        let layer = config.build_layer().unwrap();

        assert_eq!(layer.neuron_count(), 8);
        assert_eq!(layer.function().name(), "logarithm");
        assert_eq!(layer.initializer().name(), "nguyen_widrow");
    }

    #[test]
    fn test_build_every_schedule() {
        for schedule in ["linear", "exponential", "hyperbolic"] {
            let config = FunctionConfig::from_json(&config_json("sigmoid", 1, schedule)).unwrap();
            let built = config.build_schedule().unwrap();

            assert_eq!(built.name(), schedule);
            assert_eq!(built.initial_rate(), 0.3);
            assert_eq!(built.final_rate(), 0.05);
        }
    }

    #[test]
    fn test_build_every_activation() {
        for activation in ["linear", "logarithm", "sigmoid", "tanh", "sine", "gaussian"] {
            let config = FunctionConfig::from_json(&config_json(activation, 3, "linear")).unwrap();
            assert_eq!(config.build_layer().unwrap().function().name(), activation);
        }
    }
}

// ============================================================================
// Invalid Config Tests
// ============================================================================

mod invalid_config_tests {
    use super::*;

    #[test]
    fn test_unknown_activation() {
        let result = FunctionConfig::from_json(&config_json("relu", 3, "linear"));
        assert!(matches!(result, Err(FunctionError::UnknownActivation(name)) if name == "relu"));
    }

    #[test]
    fn test_unknown_schedule() {
        let result = FunctionConfig::from_json(&config_json("linear", 3, "cosine_annealing"));
        assert!(matches!(result, Err(FunctionError::UnknownSchedule(_))));
    }

    #[test]
    fn test_zero_neurons() {
        let result = FunctionConfig::from_json(&config_json("linear", 0, "linear"));
        assert!(matches!(
            result,
            Err(FunctionError::NotPositive {
                name: "neuron_count",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_neurons() {
        let result = FunctionConfig::from_json(&config_json("linear", -4, "linear"));
        assert!(matches!(result, Err(FunctionError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = FunctionConfig::from_json("{ invalid json }");
        assert!(matches!(result, Err(FunctionError::Config(_))));
    }

    #[test]
    fn test_missing_learning_rate() {
        let result = FunctionConfig::from_json(r#"{"activation": "linear", "neuron_count": 2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_exponential_with_zero_rate_fails_at_build() {
        let json = r#"{"activation": "linear", "neuron_count": 2,
            "learning_rate": {"schedule": "exponential", "initial_rate": 0.0, "final_rate": 0.1}}"#;
        let config = FunctionConfig::from_json(json).unwrap();
        assert!(matches!(
            config.build_schedule(),
            Err(FunctionError::NotPositive {
                name: "initial_rate",
                ..
            })
        ));
    }
}
