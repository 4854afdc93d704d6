//! Exact solution of 2-player Pig by value iteration.
//!
//! # Overview
//!
//! This module computes optimal Pig play exactly. Every reachable
//! non-terminal state `(i, j, k)` (own banked score, opponent banked
//! score, turn total, always from the perspective of the player about to
//! act) gets the probability of winning under mutual optimal play and the
//! action that achieves it.
//!
//! # Usage
//!
//! ```
//! use pig_solver::solver::{HoldTable, PigSolver, SolveConfig};
//!
//! let config = SolveConfig::new(50, 1e-7);
//! let solver = PigSolver::solve(config).unwrap();
//!
//! // Win probability for the first player before any roll.
//! let p = solver.p_win(0, 0, 0);
//! assert!(p > 0.5);
//!
//! // Condensed policy: bank once the turn total reaches the threshold.
//! let table = HoldTable::from_solver(&solver);
//! assert!(table.threshold(0, 0) > 0);
//! ```
//!
//! # Theory
//!
//! The value of a state is the best of rolling and holding:
//!
//! ```text
//! P(i, j, k) = max(P_roll, P_hold)
//!
//! P_roll = 1/6 * (1 - P(j, i, 0))            pig out, opponent moves
//!        + 1/6 * sum over face in 2..=6 of P(i, j, k + face)
//!
//! P_hold = 1 - P(j, i + k, 0)                bank k, opponent moves
//! ```
//!
//! Opponent moves enter as `1 - P(...)` with the score coordinates
//! swapped: a zero-sum perspective flip. States with `i + k >= goal` are
//! worth 1, states with `j >= goal` are worth 0, and neither is stored.
//!
//! The tables start at zero and are swept in place in a fixed order until
//! the largest single-entry change of a sweep drops below `epsilon`.
//! Every update mixes entries with absolute coefficients summing to 1, so
//! sweeps never expand the error and the absorbing endgame contracts it;
//! iteration terminates for every valid configuration.
//!
//! # References
//!
//! - Neller, T. W. and Presser, C. G. M. "Optimal Play of the Dice Game
//!   Pig", The UMAP Journal 25(1), 2004.
//! - Bellman, R. "Dynamic Programming", 1957. (Value iteration.)

pub mod config;
pub mod output;
pub mod solver;
pub mod tables;

pub use config::{ConfigError, SolveConfig, SolveStats};
pub use output::HoldTable;
pub use solver::{PigSolver, SolveError, SweepProgress};
pub use tables::StateTables;
