//! Hold-threshold table export.
//!
//! `HoldTable` condenses a solved policy into one integer per score pair:
//! the smallest turn total at which the player should bank. The table
//! writes as plain text, one row per own-score `i`, opponent scores
//! space-separated across the row.

use std::io::{self, Write};

use crate::solver::solver::PigSolver;

/// The full `goal x goal` grid of hold thresholds for a solved game.
///
/// # Example
/// ```
/// use pig_solver::solver::{HoldTable, PigSolver, SolveConfig};
///
/// let solver = PigSolver::solve(SolveConfig::quick()).unwrap();
/// let table = HoldTable::from_solver(&solver);
/// assert_eq!(table.threshold(0, 0), solver.hold_threshold(0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct HoldTable {
    /// Goal score the policy was solved for.
    goal: usize,

    /// Thresholds in row-major order, `i * goal + j`.
    thresholds: Vec<usize>,
}

impl HoldTable {
    /// Materialize the threshold grid from a solved game.
    pub fn from_solver(solver: &PigSolver) -> Self {
        let goal = solver.goal();
        let mut thresholds = Vec::with_capacity(goal * goal);

        for i in 0..goal {
            for j in 0..goal {
                thresholds.push(solver.hold_threshold(i, j));
            }
        }

        Self { goal, thresholds }
    }

    /// Goal score the table was built for.
    pub fn goal(&self) -> usize {
        self.goal
    }

    /// Hold threshold for scores `(i, j)`.
    ///
    /// Terminal score pairs answer 0, matching the solver's queries.
    pub fn threshold(&self, i: usize, j: usize) -> usize {
        if i >= self.goal || j >= self.goal {
            0
        } else {
            self.thresholds[i * self.goal + j]
        }
    }

    /// Largest threshold anywhere in the grid.
    pub fn max_threshold(&self) -> usize {
        self.thresholds.iter().copied().max().unwrap_or(0)
    }

    /// Write the grid as text.
    ///
    /// One row per own score `i` (ascending), rows newline-separated; each
    /// row holds the thresholds for `j = 0..goal`, space-separated.
    pub fn write_text<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for i in 0..self.goal {
            for j in 0..self.goal {
                if j > 0 {
                    write!(writer, " ")?;
                }
                write!(writer, "{}", self.thresholds[i * self.goal + j])?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    /// Write the grid as text to a file.
    pub fn save_text(&self, path: &str) -> io::Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = io::BufWriter::new(file);
        self.write_text(&mut writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::config::SolveConfig;

    #[test]
    fn test_goal_two_table_text() {
        // Goal 2 rolls everywhere, so thresholds are goal - i per row.
        let solver = PigSolver::solve(SolveConfig::new(2, 1e-12)).unwrap();
        let table = HoldTable::from_solver(&solver);

        let mut buf = Vec::new();
        table.write_text(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "2 2\n1 1\n");
    }

    #[test]
    fn test_table_matches_solver_queries() {
        let solver = PigSolver::solve(SolveConfig::quick()).unwrap();
        let table = HoldTable::from_solver(&solver);
        let goal = solver.goal();

        assert_eq!(table.goal(), goal);
        for i in (0..goal).step_by(5) {
            for j in (0..goal).step_by(5) {
                assert_eq!(table.threshold(i, j), solver.hold_threshold(i, j));
            }
        }
    }

    #[test]
    fn test_out_of_range_threshold_is_zero() {
        let solver = PigSolver::solve(SolveConfig::new(5, 1e-9)).unwrap();
        let table = HoldTable::from_solver(&solver);
        assert_eq!(table.threshold(5, 0), 0);
        assert_eq!(table.threshold(0, 99), 0);
    }

    #[test]
    fn test_text_shape() {
        let solver = PigSolver::solve(SolveConfig::new(8, 1e-9)).unwrap();
        let table = HoldTable::from_solver(&solver);

        let mut buf = Vec::new();
        table.write_text(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 8);
        for row in &rows {
            assert_eq!(row.split(' ').count(), 8);
        }

        // First row parses back to the solver's thresholds for i = 0.
        let first: Vec<usize> = rows[0]
            .split(' ')
            .map(|v| v.parse().unwrap())
            .collect();
        for (j, &t) in first.iter().enumerate() {
            assert_eq!(t, table.threshold(0, j));
        }
    }

    #[test]
    fn test_max_threshold_bounded_by_goal() {
        let solver = PigSolver::solve(SolveConfig::quick()).unwrap();
        let table = HoldTable::from_solver(&solver);
        let max = table.max_threshold();
        assert!(max > 0);
        assert!(max <= table.goal());
    }
}
