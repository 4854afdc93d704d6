//! Value iteration for optimal Pig play.
//!
//! This module implements the solve loop: Gauss-Seidel sweeps over the
//! full state space, replaying the roll/hold recurrence in place until the
//! largest single-entry change falls below the configured threshold.
//!
//! The sweep order is fixed and deterministic (`i` outer, `j` middle, `k`
//! inner, all ascending), so intermediate tables are reproducible run to
//! run, not just the converged fixed point.

use std::time::Instant;

use crate::game::{scoring_faces, Action, FACE_PROBABILITY};
use crate::solver::config::{ConfigError, SolveConfig, SolveStats};
use crate::solver::tables::StateTables;

/// An exact solution of 2-player Pig for one goal score.
///
/// Solving computes, for every reachable non-terminal state `(i, j, k)`,
/// the probability that the player about to act wins under optimal play,
/// along with the optimal action. Construction runs the full solve; the
/// resulting tables are immutable and queried through the accessors.
///
/// # Example
/// ```
/// use pig_solver::solver::{PigSolver, SolveConfig};
///
/// let solver = PigSolver::solve(SolveConfig::quick()).unwrap();
/// assert!(solver.p_win(0, 0, 0) > 0.5);
/// assert!(solver.roll_is_optimal(0, 0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct PigSolver {
    /// Configuration the solve ran with.
    config: SolveConfig,

    /// Converged value and policy tables.
    tables: StateTables,

    /// Statistics from the solve.
    stats: SolveStats,
}

impl PigSolver {
    /// Solve Pig for the given configuration.
    ///
    /// Runs value iteration to convergence. Fails if the configuration is
    /// invalid or if the sweep cap is reached first.
    pub fn solve(config: SolveConfig) -> Result<Self, SolveError> {
        Self::solve_with_progress(config, None::<fn(&SweepProgress)>)
    }

    /// Solve with a callback invoked after every sweep.
    ///
    /// The callback sees the sweep number, the sweep's largest value
    /// change, and the elapsed time. Pass `None` to run silently (or use
    /// [`PigSolver::solve`]).
    ///
    /// # Arguments
    /// * `config` - Solve configuration
    /// * `callback` - Optional per-sweep progress observer
    pub fn solve_with_progress<F>(
        config: SolveConfig,
        mut callback: Option<F>,
    ) -> Result<Self, SolveError>
    where
        F: FnMut(&SweepProgress),
    {
        config.validate()?;

        let mut solver = Self {
            tables: StateTables::new(config.goal),
            stats: SolveStats::new(),
            config,
        };
        solver.stats.stored_states = solver.tables.stored_states();

        let start_time = Instant::now();
        let mut sweeps: u64 = 0;

        // At least one full sweep always runs.
        loop {
            let max_change = solver.sweep();
            sweeps += 1;

            if let Some(ref mut cb) = callback {
                cb(&SweepProgress {
                    sweep: sweeps,
                    max_change,
                    elapsed_seconds: start_time.elapsed().as_secs_f64(),
                });
            }

            if max_change < solver.config.epsilon {
                solver.stats.sweeps = sweeps;
                solver.stats.final_change = max_change;
                solver.stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
                solver.stats.update_rate();
                return Ok(solver);
            }

            if let Some(cap) = solver.config.max_sweeps {
                if sweeps >= cap {
                    return Err(SolveError::NotConverged { sweeps, max_change });
                }
            }
        }
    }

    /// Run one in-place sweep over every stored state.
    ///
    /// States are visited in the fixed order (`i`, then `j`, then `k`, all
    /// ascending); updates made early in the sweep are visible to later
    /// states. Returns the largest absolute value change of the sweep.
    fn sweep(&mut self) -> f64 {
        let goal = self.config.goal;
        let mut max_change: f64 = 0.0;

        for i in 0..goal {
            for j in 0..goal {
                for k in 0..goal - i {
                    let p_roll = self.roll_value(i, j, k);
                    let p_hold = self.hold_value(i, j, k);

                    let old = self.tables.win_probability(i, j, k);
                    let new = p_roll.max(p_hold);
                    self.tables.record(i, j, k, new, p_roll > p_hold);

                    max_change = max_change.max((new - old).abs());
                }
            }
        }

        max_change
    }

    /// Expected win probability of rolling in `(i, j, k)`.
    ///
    /// Pig out hands the opponent the move with the turn total lost; each
    /// scoring face grows the turn total. Faces are accumulated in
    /// ascending order for a deterministic floating-point sum.
    fn roll_value(&self, i: usize, j: usize, k: usize) -> f64 {
        let mut value = FACE_PROBABILITY * (1.0 - self.tables.win_probability(j, i, 0));
        for face in scoring_faces() {
            value += FACE_PROBABILITY * self.tables.win_probability(i, j, k + face);
        }
        value
    }

    /// Expected win probability of holding in `(i, j, k)`.
    ///
    /// The turn total is banked and the opponent moves.
    fn hold_value(&self, i: usize, j: usize, k: usize) -> f64 {
        1.0 - self.tables.win_probability(j, i + k, 0)
    }

    /// Win probability for the player about to act in `(i, j, k)`.
    ///
    /// Total over all `usize` triples; terminal states route to 1.0 or 0.0
    /// without touching the tables.
    pub fn p_win(&self, i: usize, j: usize, k: usize) -> f64 {
        self.tables.win_probability(i, j, k)
    }

    /// Whether rolling is strictly better than holding in `(i, j, k)`.
    ///
    /// Ties prefer holding, and terminal states answer `false`.
    pub fn roll_is_optimal(&self, i: usize, j: usize, k: usize) -> bool {
        self.tables.roll_preferred(i, j, k)
    }

    /// The optimal action in `(i, j, k)`.
    pub fn optimal_action(&self, i: usize, j: usize, k: usize) -> Action {
        if self.roll_is_optimal(i, j, k) {
            Action::Roll
        } else {
            Action::Hold
        }
    }

    /// The smallest turn total at which optimal play banks, for scores
    /// `(i, j)`.
    ///
    /// Scans `k` upward while the policy still prefers rolling. The
    /// solved policy keeps holding for every turn total past that
    /// boundary (each row's roll region is a single prefix; the property
    /// tests check this shape), so the scan summarizes the whole row. A
    /// player who should roll all the way to victory gets `goal - i`;
    /// terminal score pairs get 0.
    pub fn hold_threshold(&self, i: usize, j: usize) -> usize {
        let limit = self.config.goal.saturating_sub(i);
        let mut k = 0;
        while k < limit && self.tables.roll_preferred(i, j, k) {
            k += 1;
        }
        k
    }

    /// The goal score this solution was computed for.
    pub fn goal(&self) -> usize {
        self.config.goal
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &SolveConfig {
        &self.config
    }

    /// Get statistics from the solve.
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Get reference to the underlying tables.
    pub fn tables(&self) -> &StateTables {
        &self.tables
    }
}

/// Errors that can occur during a solve.
#[derive(Debug, Clone)]
pub enum SolveError {
    /// The configuration failed validation or loading.
    Config(ConfigError),
    /// The sweep cap was reached while changes still exceeded epsilon.
    NotConverged {
        /// Sweeps run before giving up.
        sweeps: u64,
        /// Largest value change in the last sweep.
        max_change: f64,
    },
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::Config(err) => write!(f, "Invalid configuration: {}", err),
            SolveError::NotConverged { sweeps, max_change } => {
                write!(
                    f,
                    "Not converged after {} sweeps (last max change {:e})",
                    sweeps, max_change
                )
            }
        }
    }
}

impl std::error::Error for SolveError {}

impl From<ConfigError> for SolveError {
    fn from(err: ConfigError) -> Self {
        SolveError::Config(err)
    }
}

/// Per-sweep progress passed to the solve callback.
#[derive(Debug, Clone)]
pub struct SweepProgress {
    /// Sweep number just completed (1-based).
    pub sweep: u64,
    /// Largest absolute value change in that sweep.
    pub max_change: f64,
    /// Elapsed time since the solve started, in seconds.
    pub elapsed_seconds: f64,
}
