//! # Pig Solver
//!
//! An exact optimal-play solver for the 2-player dice game Pig, computing
//! win probabilities and roll/hold decisions for every reachable state by
//! value iteration.
//!
//! ## Features
//!
//! - **Exact solution**: converges the full state space to any threshold
//! - **Dense tables**: flat value and policy storage, no hashing
//! - **Policy export**: hold-threshold grid written as plain text
//! - **Playout validation**: seeded Monte Carlo matches against baselines
//! - **JSON configs**: load solve settings from a file
//!
//! ## Quick Start
//!
//! ```
//! use pig_solver::{PigSolver, SolveConfig};
//!
//! // Solve a short game exactly
//! let solver = PigSolver::solve(SolveConfig::new(25, 1e-6)).unwrap();
//!
//! // Win probability for the player about to act at score 0-0
//! assert!(solver.p_win(0, 0, 0) > 0.5);
//!
//! // Smallest turn total at which optimal play banks
//! assert!(solver.hold_threshold(0, 0) > 0);
//! ```
//!
//! ## Modules
//!
//! - [`solver`]: Value iteration, configuration, and policy export
//! - [`game`]: Pig rules and constants
//! - [`sim`]: Monte Carlo playouts for policy validation
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Value Iteration Solver                      │
//! │  - Gauss-Seidel sweeps        - Convergence tracking            │
//! │  - Win-probability queries    - Hold-threshold export           │
//! └─────────────────────────────────────────────────────────────────┘
//!               │                               │
//!               │ rules and constants           │ solved policy
//!               ▼                               ▼
//!        ┌─────────────┐                ┌──────────────┐
//!        │  Pig rules  │                │ Monte Carlo  │
//!        │   (game)    │                │  playouts    │
//!        └─────────────┘                └──────────────┘
//! ```

#![warn(missing_docs)]

/// Pig rules module.
///
/// Die constants and the roll/hold action type shared by the solver and
/// the playout harness.
pub mod game;

/// Monte Carlo playout module.
///
/// Plays solved or fixed-threshold policies against each other to
/// cross-check solved probabilities.
pub mod sim;

/// Value iteration solver module.
///
/// This is the core module containing the solve loop, configuration, and
/// policy export.
pub mod solver;

// Re-export commonly used types at crate root for convenience
pub use game::Action;
pub use solver::{HoldTable, PigSolver, SolveConfig, SolveError, SolveStats};
