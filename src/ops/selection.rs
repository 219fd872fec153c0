//! Parent selection.

use crate::core::{Individual, Population};
use rand::seq::index;
use rand::RngCore;
use std::sync::Arc;

/// Number of contestants drawn per tournament unless configured otherwise.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 3;

/// Picks parents according to their fitness (higher is better).
///
/// # Examples
/// ```
/// use simple_ga::core::Population;
/// use simple_ga::ops::SelectionOperator;
/// use simple_ga::Individual;
/// use rand::SeedableRng;
///
/// struct Last;
///
/// impl SelectionOperator for Last {
///     fn select_index(&self, fitness: &[f64], _rng: &mut dyn rand::RngCore) -> Option<usize> {
///         fitness.len().checked_sub(1)
///     }
/// }
///
/// let population = Population::from(vec![
///     Individual::new(vec![0.0]),
///     Individual::new(vec![1.0]),
/// ]);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let parent = Last.select(&population, &[0.0, -1.0], &mut rng).unwrap();
/// assert_eq!(parent.genes(), &[1.0]);
/// ```
pub trait SelectionOperator: Send + Sync {
    /// Returns the index of the selected parent, or `None` when there is
    /// nothing to select from.
    fn select_index(&self, fitness: &[f64], rng: &mut dyn RngCore) -> Option<usize>;

    /// Returns an owned copy of the selected parent.
    ///
    /// Returns `None` when the population is empty or its length differs from
    /// `fitness`.
    fn select(
        &self,
        population: &Population,
        fitness: &[f64],
        rng: &mut dyn RngCore,
    ) -> Option<Individual> {
        if population.len() != fitness.len() {
            return None;
        }
        let idx = self.select_index(fitness, rng)?;
        population.get(idx).cloned()
    }
}

impl<T: SelectionOperator + ?Sized> SelectionOperator for &T {
    fn select_index(&self, fitness: &[f64], rng: &mut dyn RngCore) -> Option<usize> {
        (**self).select_index(fitness, rng)
    }
}

impl<T: SelectionOperator + ?Sized> SelectionOperator for Box<T> {
    fn select_index(&self, fitness: &[f64], rng: &mut dyn RngCore) -> Option<usize> {
        (**self).select_index(fitness, rng)
    }
}

impl<T: SelectionOperator + ?Sized> SelectionOperator for Arc<T> {
    fn select_index(&self, fitness: &[f64], rng: &mut dyn RngCore) -> Option<usize> {
        (**self).select_index(fitness, rng)
    }
}

/// Tournament selection that maximizes the provided fitness scores.
///
/// Contestants are drawn without replacement. Among contestants with equal
/// fitness the one drawn first wins.
///
/// # Examples
/// ```
/// use simple_ga::ops::{SelectionOperator, TournamentSelection};
/// use rand::SeedableRng;
///
/// let selection = TournamentSelection::new(3);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// // A tournament over the whole population always finds the fittest.
/// let winner = selection.select_index(&[-4.0, -1.0, -9.0], &mut rng);
/// assert_eq!(winner, Some(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TournamentSelection {
    size: usize,
}

impl TournamentSelection {
    /// Creates a tournament selector. Sizes larger than the population are
    /// reduced to the population size when selecting.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Configured tournament size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }
}

impl SelectionOperator for TournamentSelection {
    fn select_index(&self, fitness: &[f64], rng: &mut dyn RngCore) -> Option<usize> {
        if fitness.is_empty() || self.size == 0 {
            return None;
        }
        let contestants = self.size.min(fitness.len());
        let mut best_idx: Option<usize> = None;
        for idx in index::sample(rng, fitness.len(), contestants).iter() {
            best_idx = match best_idx {
                Some(current) if fitness[idx] <= fitness[current] => Some(current),
                _ => Some(idx),
            };
        }
        best_idx
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self::new(DEFAULT_TOURNAMENT_SIZE)
    }
}
