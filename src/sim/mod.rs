//! Monte Carlo playouts of Pig policies.
//!
//! This module plays full games between turn policies so a solved policy
//! can be sanity-checked against observed win rates: optimal against
//! itself should track the solved start-state probability, and optimal
//! against a fixed-threshold baseline should beat that probability.
//!
//! Playouts are seeded for reproducibility and a turn always opens with a
//! roll, since holding an empty turn total is a pass that makes no
//! progress.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{DIE_SIDES, PIG_OUT_FACE};
use crate::solver::PigSolver;

/// A turn policy for playouts.
pub enum Strategy<'a> {
    /// Consult a solved policy table.
    Optimal(&'a PigSolver),
    /// Roll until the turn total reaches a fixed target, then bank.
    HoldAt(usize),
}

impl<'a> Strategy<'a> {
    /// Parse a strategy spec string: `"optimal"` or `"hold:N"`.
    ///
    /// The solver reference backs the `"optimal"` spec; `"hold:N"`
    /// strategies ignore it.
    pub fn from_spec(spec: &str, solver: &'a PigSolver) -> Result<Self, String> {
        if spec == "optimal" {
            return Ok(Strategy::Optimal(solver));
        }
        if let Some(target) = spec.strip_prefix("hold:") {
            let target: usize = target
                .parse()
                .map_err(|_| format!("Invalid hold target '{}'", target))?;
            return Ok(Strategy::HoldAt(target));
        }
        Err(format!(
            "Unknown strategy '{}' (expected 'optimal' or 'hold:N')",
            spec
        ))
    }

    /// Human-readable name for reports.
    pub fn name(&self) -> String {
        match self {
            Strategy::Optimal(_) => "optimal".to_string(),
            Strategy::HoldAt(target) => format!("hold at {}", target),
        }
    }

    /// Whether this strategy keeps rolling in `(i, j, k)`.
    fn wants_roll(&self, i: usize, j: usize, k: usize) -> bool {
        match self {
            Strategy::Optimal(solver) => solver.roll_is_optimal(i, j, k),
            Strategy::HoldAt(target) => k < *target,
        }
    }

    fn matches_goal(&self, goal: usize) -> bool {
        match self {
            Strategy::Optimal(solver) => solver.goal() == goal,
            Strategy::HoldAt(_) => true,
        }
    }
}

/// Outcome counts from a match of playouts.
#[derive(Debug, Clone, Default)]
pub struct MatchStats {
    /// Games played.
    pub games: u64,

    /// Games won by the strategy that moved first.
    pub first_wins: u64,

    /// Total turns taken across all games.
    pub turns: u64,
}

impl MatchStats {
    /// Fraction of games won by the first mover.
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.first_wins as f64 / self.games as f64
        }
    }

    /// Average turns per game.
    pub fn mean_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.turns as f64 / self.games as f64
        }
    }
}

/// Play a match of full games, `first` moving first in every game.
pub fn run_match<R: Rng>(
    first: &Strategy,
    second: &Strategy,
    goal: usize,
    games: u64,
    rng: &mut R,
) -> MatchStats {
    debug_assert!(
        first.matches_goal(goal) && second.matches_goal(goal),
        "strategy solved for a different goal"
    );

    let mut stats = MatchStats::default();
    for _ in 0..games {
        let (winner, turns) = play_game(first, second, goal, rng);
        stats.games += 1;
        stats.turns += turns;
        if winner == 0 {
            stats.first_wins += 1;
        }
    }
    stats
}

/// Play a seeded match.
///
/// A fixed seed reproduces the exact same games; `None` seeds from
/// entropy.
pub fn run_match_seeded(
    first: &Strategy,
    second: &Strategy,
    goal: usize,
    games: u64,
    seed: Option<u64>,
) -> MatchStats {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    run_match(first, second, goal, games, &mut rng)
}

/// Play one game; returns the winner's seat (0 = first mover) and the
/// number of turns taken.
fn play_game<R: Rng>(
    first: &Strategy,
    second: &Strategy,
    goal: usize,
    rng: &mut R,
) -> (usize, u64) {
    let mut scores = [0usize; 2];
    let mut mover = 0;
    let mut turns = 0u64;

    loop {
        let strategy = if mover == 0 { first } else { second };
        let banked = play_turn(strategy, scores[mover], scores[1 - mover], goal, rng);
        scores[mover] += banked;
        turns += 1;

        if scores[mover] >= goal {
            return (mover, turns);
        }
        mover = 1 - mover;
    }
}

/// Play one turn; returns the points banked (0 on a pig out).
fn play_turn<R: Rng>(
    strategy: &Strategy,
    i: usize,
    j: usize,
    goal: usize,
    rng: &mut R,
) -> usize {
    let mut k = 0;
    loop {
        // Every turn opens with a roll.
        let face = rng.gen_range(1..=DIE_SIDES);
        if face == PIG_OUT_FACE {
            return 0;
        }
        k += face;

        // A winning total ends the game; there is nothing left to decide.
        if i + k >= goal {
            return k;
        }
        if !strategy.wants_roll(i, j, k) {
            return k;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolveConfig;

    fn quick_solver() -> PigSolver {
        PigSolver::solve(SolveConfig::quick()).unwrap()
    }

    #[test]
    fn test_from_spec_parsing() {
        let solver = quick_solver();

        assert!(matches!(
            Strategy::from_spec("optimal", &solver),
            Ok(Strategy::Optimal(_))
        ));
        assert!(matches!(
            Strategy::from_spec("hold:20", &solver),
            Ok(Strategy::HoldAt(20))
        ));
        assert!(Strategy::from_spec("hold:twenty", &solver).is_err());
        assert!(Strategy::from_spec("banana", &solver).is_err());
    }

    #[test]
    fn test_strategy_names() {
        let solver = quick_solver();
        assert_eq!(Strategy::Optimal(&solver).name(), "optimal");
        assert_eq!(Strategy::HoldAt(20).name(), "hold at 20");
    }

    #[test]
    fn test_hold_at_banks_at_target() {
        let hold = Strategy::HoldAt(10);
        assert!(hold.wants_roll(0, 0, 9));
        assert!(!hold.wants_roll(0, 0, 10));
        assert!(!hold.wants_roll(0, 0, 15));
    }

    #[test]
    fn test_seeded_match_is_reproducible() {
        let a = run_match_seeded(&Strategy::HoldAt(20), &Strategy::HoldAt(15), 50, 200, Some(7));
        let b = run_match_seeded(&Strategy::HoldAt(20), &Strategy::HoldAt(15), 50, 200, Some(7));
        assert_eq!(a.first_wins, b.first_wins);
        assert_eq!(a.turns, b.turns);
    }

    #[test]
    fn test_hold_at_zero_still_terminates() {
        // Banking after the first scoring roll every turn.
        let stats = run_match_seeded(&Strategy::HoldAt(0), &Strategy::HoldAt(0), 10, 50, Some(1));
        assert_eq!(stats.games, 50);
        assert!(stats.mean_turns() > 0.0);
    }

    #[test]
    fn test_optimal_self_play_tracks_solved_probability() {
        let solver = quick_solver();
        let solved = solver.p_win(0, 0, 0);

        let stats = run_match_seeded(
            &Strategy::Optimal(&solver),
            &Strategy::Optimal(&solver),
            solver.goal(),
            4000,
            Some(42),
        );

        // 4000 games put the binomial noise near 0.008; 0.04 is five
        // standard deviations.
        let rate = stats.win_rate();
        assert!(
            (rate - solved).abs() < 0.04,
            "observed {} vs solved {}",
            rate,
            solved
        );
    }

    #[test]
    fn test_optimal_beats_weak_baseline() {
        let solver = quick_solver();
        let optimal = Strategy::Optimal(&solver);
        let weak = Strategy::HoldAt(2);

        let vs_self = run_match_seeded(&optimal, &optimal, solver.goal(), 4000, Some(9));
        let vs_weak = run_match_seeded(&optimal, &weak, solver.goal(), 4000, Some(9));

        assert!(
            vs_weak.win_rate() > vs_self.win_rate(),
            "optimal should gain against bank-immediately: {} vs {}",
            vs_weak.win_rate(),
            vs_self.win_rate()
        );
        assert!(vs_weak.win_rate() > 0.55);
    }
}
