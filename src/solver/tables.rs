//! Dense storage for win probabilities and the roll/hold policy.
//!
//! This module owns the two tables value iteration fills in: one `f64` win
//! probability and one `bool` roll flag per state `(i, j, k)`. Terminal
//! states are never stored; the lookup routes them to fixed values before
//! touching the tables, so every query over `usize` indices is total.

/// Dense value and policy tables over the Pig state space.
///
/// States are indexed `(i, j, k)` from the perspective of the player about
/// to act: `i` is their banked score, `j` the opponent's banked score, and
/// `k` the current turn total. Both tables are allocated over the full
/// `goal x goal x goal` cube in row-major order; entries with
/// `k >= goal - i` are reachable only as winning terminals and are never
/// read or written.
#[derive(Debug, Clone)]
pub struct StateTables {
    /// Winning score threshold the tables were sized for.
    goal: usize,

    /// Win probability per state, row-major `(i * goal + j) * goal + k`.
    values: Vec<f64>,

    /// True where rolling is strictly better than holding.
    policy: Vec<bool>,
}

impl StateTables {
    /// Allocate zeroed tables for the given goal score.
    ///
    /// Values start at 0.0 and the policy starts at hold everywhere; the
    /// solve loop overwrites both.
    pub fn new(goal: usize) -> Self {
        let slots = goal * goal * goal;
        Self {
            goal,
            values: vec![0.0; slots],
            policy: vec![false; slots],
        }
    }

    /// The goal score this table set was built for.
    pub fn goal(&self) -> usize {
        self.goal
    }

    #[inline]
    fn offset(&self, i: usize, j: usize, k: usize) -> usize {
        (i * self.goal + j) * self.goal + k
    }

    /// Win probability for the player about to act in state `(i, j, k)`.
    ///
    /// Total over all `usize` triples. Terminals resolve before any table
    /// access:
    ///
    /// 1. `i + k >= goal`: the acting player has won, returns 1.0
    /// 2. `j >= goal`: the opponent has won, returns 0.0
    /// 3. otherwise: the stored table entry
    ///
    /// The acting-player check comes first, so a state where both sides
    /// read as winners (possible only through perspective bookkeeping
    /// errors upstream) still answers 1.0 for the player on the move.
    #[inline]
    pub fn win_probability(&self, i: usize, j: usize, k: usize) -> f64 {
        if i.saturating_add(k) >= self.goal {
            1.0
        } else if j >= self.goal {
            0.0
        } else {
            self.values[self.offset(i, j, k)]
        }
    }

    /// Whether rolling is strictly better than holding in `(i, j, k)`.
    ///
    /// Terminal states have no decision; they answer `false`.
    #[inline]
    pub fn roll_preferred(&self, i: usize, j: usize, k: usize) -> bool {
        if i.saturating_add(k) >= self.goal || j >= self.goal {
            false
        } else {
            self.policy[self.offset(i, j, k)]
        }
    }

    /// Overwrite the value and policy entry for a stored state.
    pub(crate) fn record(&mut self, i: usize, j: usize, k: usize, value: f64, roll: bool) {
        debug_assert!(i + k < self.goal, "terminal state ({}, {}, {})", i, j, k);
        debug_assert!(j < self.goal, "terminal state ({}, {}, {})", i, j, k);
        let offset = self.offset(i, j, k);
        self.values[offset] = value;
        self.policy[offset] = roll;
    }

    /// Number of stored (reachable, non-terminal) states.
    ///
    /// Per `i` there are `goal` opponent scores and `goal - i` legal turn
    /// totals, so the count is `goal^2 * (goal + 1) / 2`.
    pub fn stored_states(&self) -> usize {
        self.goal * self.goal * (self.goal + 1) / 2
    }

    /// Total allocated entries per table (the full cube).
    pub fn allocated_entries(&self) -> usize {
        self.values.len()
    }
}
