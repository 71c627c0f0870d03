//! Point tallies shared by the table-driven quizzes.

use std::collections::HashMap;

use super::quiz::QuizOutcome;

/// Points per option id, as authored in each quiz's scoring table.
pub type ScoreTable<O> = &'static [(&'static str, &'static [(O, u32)])];

/// Accumulates points per outcome.
#[derive(Debug, Clone)]
pub struct Tally<O: QuizOutcome> {
    points: HashMap<O, u32>,
}

impl<O: QuizOutcome> Default for Tally<O> {
    fn default() -> Self {
        Self {
            points: HashMap::new(),
        }
    }
}

impl<O: QuizOutcome> Tally<O> {
    /// Starts an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds points to one outcome.
    pub fn add(&mut self, outcome: O, points: u32) {
        *self.points.entry(outcome).or_insert(0) += points;
    }

    /// Adds the points `table` assigns to `option_id`. Unknown ids score
    /// nothing.
    pub fn add_option(&mut self, table: ScoreTable<O>, option_id: &str) {
        if let Some((_, weights)) = table.iter().find(|(id, _)| *id == option_id) {
            for &(outcome, points) in *weights {
                self.add(outcome, points);
            }
        }
    }

    /// Current points of one outcome.
    #[must_use]
    pub fn points(&self, outcome: O) -> u32 {
        self.points.get(&outcome).copied().unwrap_or(0)
    }

    /// Highest-scoring outcome. Ties go to the outcome listed first in
    /// `O::ALL`, so an empty tally yields `O::ALL[0]`.
    ///
    /// # Panics
    ///
    /// Panics if `O::ALL` is empty, which no quiz declares.
    #[must_use]
    pub fn winner(&self) -> O {
        let mut best = O::ALL[0];
        for &candidate in &O::ALL[1..] {
            if self.points(candidate) > self.points(best) {
                best = candidate;
            }
        }
        best
    }
}
