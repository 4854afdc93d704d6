//! Configuration options for the Pig solver.
//!
//! This module provides the configuration struct that controls a solve run
//! (goal score, convergence threshold, sweep cap), JSON loading for it,
//! and the statistics reported after a solve.

use serde::{Deserialize, Serialize};

/// Configuration for a Pig solve.
///
/// This struct controls the shape and termination of value iteration:
/// - The goal score, which fixes the size of the state space
/// - The convergence threshold for the sweep loop
/// - An optional sweep cap as a guard against runaway configurations
///
/// # Example
/// ```
/// use pig_solver::solver::SolveConfig;
///
/// let config = SolveConfig::default();
/// assert_eq!(config.goal, 100);
/// assert_eq!(config.epsilon, 1e-9);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveConfig {
    /// Winning score threshold. First player to bank this many points wins.
    ///
    /// The state space grows with the cube of the goal, so the default of
    /// 100 allocates two 1,000,000-entry tables and stores 505,000
    /// reachable states.
    pub goal: usize,

    /// Convergence threshold for value iteration.
    ///
    /// Sweeps repeat while the largest single-entry value change of a
    /// sweep is at least this value. Smaller thresholds give more precise
    /// probabilities at the cost of more sweeps.
    pub epsilon: f64,

    /// Maximum number of sweeps before giving up.
    ///
    /// If the cap is reached while changes still exceed `epsilon`, the
    /// solve fails with a non-convergence error instead of spinning.
    /// Set to `None` for no cap.
    pub max_sweeps: Option<u64>,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            goal: 100,
            epsilon: 1e-9,
            max_sweeps: None,
        }
    }
}

impl SolveConfig {
    /// Create a configuration with an explicit goal and threshold.
    pub fn new(goal: usize, epsilon: f64) -> Self {
        Self {
            goal,
            epsilon,
            max_sweeps: None,
        }
    }

    /// Create a small, loosely converged configuration.
    ///
    /// Solves in well under a millisecond; intended for demos and tests
    /// that only need a plausible policy, not nine-digit probabilities.
    pub fn quick() -> Self {
        Self {
            goal: 25,
            epsilon: 1e-6,
            max_sweeps: None,
        }
    }

    /// Builder method: set the goal score.
    pub fn with_goal(mut self, goal: usize) -> Self {
        self.goal = goal;
        self
    }

    /// Builder method: set the convergence threshold.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Builder method: set the sweep cap.
    pub fn with_max_sweeps(mut self, max_sweeps: u64) -> Self {
        self.max_sweeps = Some(max_sweeps);
        self
    }

    /// Load a configuration from a JSON file.
    ///
    /// The file must contain a JSON object with `goal` and `epsilon`
    /// fields; `max_sweeps` is optional. The loaded configuration is
    /// validated before being returned.
    pub fn from_json_file(path: &str) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.goal == 0 {
            return Err(ConfigError::InvalidGoal(self.goal));
        }

        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }

        if let Some(cap) = self.max_sweeps {
            if cap == 0 {
                return Err(ConfigError::InvalidSweepCap(cap));
            }
        }

        Ok(())
    }
}

/// Errors that can occur when building or loading a solve configuration.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Goal score must be at least 1.
    InvalidGoal(usize),
    /// Convergence threshold must be finite and strictly positive.
    InvalidEpsilon(f64),
    /// Sweep cap must allow at least one sweep.
    InvalidSweepCap(u64),
    /// Reading a config file failed.
    IoError(String),
    /// Parsing config JSON failed.
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidGoal(val) => {
                write!(f, "Goal score {} must be at least 1", val)
            }
            ConfigError::InvalidEpsilon(val) => {
                write!(f, "Epsilon {} must be finite and greater than 0", val)
            }
            ConfigError::InvalidSweepCap(val) => {
                write!(f, "Sweep cap {} must allow at least one sweep", val)
            }
            ConfigError::IoError(msg) => {
                write!(f, "Failed to read config file: {}", msg)
            }
            ConfigError::ParseError(msg) => {
                write!(f, "Failed to parse config JSON: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Statistics from a completed solve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolveStats {
    /// Number of full sweeps run.
    pub sweeps: u64,

    /// Number of stored (reachable, non-terminal) states.
    pub stored_states: usize,

    /// Largest single-entry value change in the final sweep.
    pub final_change: f64,

    /// Total time spent sweeping (in seconds).
    pub elapsed_seconds: f64,

    /// State updates per second.
    pub updates_per_second: f64,
}

impl SolveStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the state-updates-per-second rate from elapsed time.
    pub fn update_rate(&mut self) {
        if self.elapsed_seconds > 0.0 {
            self.updates_per_second =
                (self.sweeps as f64 * self.stored_states as f64) / self.elapsed_seconds;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CONFIG: &str = r#"{
        "goal": 50,
        "epsilon": 1e-7,
        "max_sweeps": 500
    }"#;

    #[test]
    fn test_default_config() {
        let config = SolveConfig::default();
        assert_eq!(config.goal, 100);
        assert_eq!(config.epsilon, 1e-9);
        assert!(config.max_sweeps.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_quick_preset_is_valid() {
        let config = SolveConfig::quick();
        assert!(config.validate().is_ok());
        assert!(config.goal < 100, "quick preset should shrink the cube");
    }

    #[test]
    fn test_builder_methods() {
        let config = SolveConfig::default()
            .with_goal(30)
            .with_epsilon(1e-6)
            .with_max_sweeps(200);
        assert_eq!(config.goal, 30);
        assert_eq!(config.epsilon, 1e-6);
        assert_eq!(config.max_sweeps, Some(200));
    }

    #[test]
    fn test_zero_goal_rejected() {
        let config = SolveConfig::new(0, 1e-9);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidGoal(0))
        ));
    }

    #[test]
    fn test_bad_epsilon_rejected() {
        for epsilon in [0.0, -1e-9, f64::NAN, f64::INFINITY] {
            let config = SolveConfig::new(100, epsilon);
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidEpsilon(_))),
                "epsilon {} should be rejected",
                epsilon
            );
        }
    }

    #[test]
    fn test_zero_sweep_cap_rejected() {
        let config = SolveConfig::default().with_max_sweeps(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSweepCap(0))
        ));
    }

    #[test]
    fn test_from_json_str() {
        let config = SolveConfig::from_json_str(TEST_CONFIG).unwrap();
        assert_eq!(config.goal, 50);
        assert_eq!(config.epsilon, 1e-7);
        assert_eq!(config.max_sweeps, Some(500));
    }

    #[test]
    fn test_from_json_str_missing_cap_defaults_to_none() {
        let config = SolveConfig::from_json_str(r#"{"goal": 20, "epsilon": 1e-6}"#).unwrap();
        assert_eq!(config.goal, 20);
        assert!(config.max_sweeps.is_none());
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        assert!(matches!(
            SolveConfig::from_json_str("not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_from_json_str_validates() {
        let result = SolveConfig::from_json_str(r#"{"goal": 0, "epsilon": 1e-9}"#);
        assert!(matches!(result, Err(ConfigError::InvalidGoal(0))));
    }

    #[test]
    fn test_from_json_file_missing_file() {
        let result = SolveConfig::from_json_file("/nonexistent/pig.json");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_stats_update_rate() {
        let mut stats = SolveStats::new();
        stats.sweeps = 10;
        stats.stored_states = 1000;
        stats.elapsed_seconds = 2.0;
        stats.update_rate();
        assert_eq!(stats.updates_per_second, 5000.0);
    }
}
