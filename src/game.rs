//! Rules of 2-player Pig.
//!
//! This module pins down the game constants the solver and the simulator
//! share: the die, the pig-out face, and the two actions a player can take.
//!
//! # Rules
//! On a turn the player repeatedly rolls a standard 6-sided die. Faces 2-6
//! add their pip value to the turn total; face 1 ("pig out") ends the turn
//! with the turn total forfeited. The player may instead hold, banking the
//! turn total into their score. First player to reach the goal score wins.

use std::ops::RangeInclusive;

/// Number of sides on the die.
pub const DIE_SIDES: usize = 6;

/// The face that ends the turn and forfeits the turn total.
pub const PIG_OUT_FACE: usize = 1;

/// Probability of each individual face on a fair die.
pub const FACE_PROBABILITY: f64 = 1.0 / DIE_SIDES as f64;

/// Faces that add their pip value to the turn total.
///
/// Iterated in ascending order wherever face outcomes are summed, so
/// floating-point accumulation is deterministic.
pub fn scoring_faces() -> RangeInclusive<usize> {
    (PIG_OUT_FACE + 1)..=DIE_SIDES
}

/// The two actions available to the player about to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Roll the die again, risking the turn total.
    Roll,
    /// Bank the turn total and pass play to the opponent.
    Hold,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Roll => write!(f, "roll"),
            Action::Hold => write!(f, "hold"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_probabilities_sum_to_one() {
        let total = FACE_PROBABILITY * DIE_SIDES as f64;
        assert!(
            (total - 1.0).abs() < 1e-15,
            "Face probabilities should sum to 1.0, got {}",
            total
        );
    }

    #[test]
    fn test_scoring_faces_exclude_pig_out() {
        let faces: Vec<usize> = scoring_faces().collect();
        assert_eq!(faces, vec![2, 3, 4, 5, 6]);
        assert!(!faces.contains(&PIG_OUT_FACE));
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Roll.to_string(), "roll");
        assert_eq!(Action::Hold.to_string(), "hold");
    }
}
