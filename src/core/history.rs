//! Convergence history recorded during an optimization run.
//!
//! One entry is appended per generation. The sequences are parallel: index
//! `g` of each describes generation `g`.

use super::Individual;

/// Statistics for one generation, returned by
/// [`GeneticAlgorithm::step`](crate::GeneticAlgorithm::step).
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    /// Zero-based generation counter.
    pub generation: usize,
    /// Lowest objective value in the generation.
    pub best_objective: f64,
    /// Mean objective value over the whole population.
    pub average_objective: f64,
}

/// Time-series metrics captured during an optimization run.
///
/// # Examples
/// ```
/// use simple_ga::History;
/// let history = History::new();
/// assert_eq!(history.generations(), 0);
/// assert!(history.improvements().is_empty());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct History {
    best_objective: Vec<f64>,
    average_objective: Vec<f64>,
    best_individual: Vec<Individual>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of generations recorded.
    #[must_use]
    pub fn generations(&self) -> usize {
        self.best_objective.len()
    }

    /// Best objective value per generation.
    #[must_use]
    pub fn best_objective(&self) -> &[f64] {
        &self.best_objective
    }

    /// Average objective value per generation.
    #[must_use]
    pub fn average_objective(&self) -> &[f64] {
        &self.average_objective
    }

    /// Deep copies of the best individual of every generation.
    #[must_use]
    pub fn best_individual(&self) -> &[Individual] {
        &self.best_individual
    }

    /// Per-generation improvement of the best objective.
    ///
    /// Entry `i - 1` holds `best[i - 1] - best[i]` when generation `i`
    /// improved on its predecessor and `0.0` otherwise, so the result has one
    /// entry fewer than there are generations.
    ///
    /// # Examples
    /// ```
    /// use simple_ga::{History, Individual};
    /// let mut history = History::new();
    /// history.record(4.0, 9.0, Individual::new(vec![2.0]));
    /// history.record(1.0, 5.0, Individual::new(vec![1.0]));
    /// history.record(1.0, 3.0, Individual::new(vec![1.0]));
    /// assert_eq!(history.improvements(), vec![3.0, 0.0]);
    /// ```
    #[must_use]
    pub fn improvements(&self) -> Vec<f64> {
        self.best_objective
            .windows(2)
            .map(|pair| {
                if pair[1] < pair[0] {
                    pair[0] - pair[1]
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// Appends one generation.
    pub fn record(&mut self, best_objective: f64, average_objective: f64, best: Individual) {
        self.best_objective.push(best_objective);
        self.average_objective.push(average_objective);
        self.best_individual.push(best);
    }

    pub(crate) fn clear(&mut self) {
        self.best_objective.clear();
        self.average_objective.clear();
        self.best_individual.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_sequences_parallel() {
        let mut history = History::new();
        history.record(2.0, 3.0, Individual::new(vec![1.0, 1.0]));
        history.record(1.5, 2.5, Individual::new(vec![1.0, 0.5]));
        assert_eq!(history.generations(), 2);
        assert_eq!(history.best_objective(), &[2.0, 1.5]);
        assert_eq!(history.average_objective(), &[3.0, 2.5]);
        assert_eq!(history.best_individual()[1].genes(), &[1.0, 0.5]);
    }

    #[test]
    fn clear_empties_everything() {
        let mut history = History::new();
        history.record(1.0, 1.0, Individual::new(vec![1.0]));
        history.clear();
        assert_eq!(history, History::new());
    }
}
