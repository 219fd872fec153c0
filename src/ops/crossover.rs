//! Recombination of two parents.

use crate::core::Individual;
use rand::{Rng, RngCore};
use std::sync::Arc;

/// Produces two owned children from two parents.
///
/// # Examples
/// ```
/// use simple_ga::ops::CrossoverOperator;
/// use simple_ga::Individual;
/// use rand::SeedableRng;
///
/// struct Swap;
///
/// impl CrossoverOperator for Swap {
///     fn crossover(
///         &self,
///         parent_a: &Individual,
///         parent_b: &Individual,
///         _rng: &mut dyn rand::RngCore,
///     ) -> (Individual, Individual) {
///         (parent_b.clone(), parent_a.clone())
///     }
/// }
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let (child_a, _) = Swap.crossover(
///     &Individual::new(vec![0.0]),
///     &Individual::new(vec![1.0]),
///     &mut rng,
/// );
/// assert_eq!(child_a.genes(), &[1.0]);
/// ```
pub trait CrossoverOperator: Send + Sync {
    /// Recombines `parent_a` and `parent_b`; neither parent is modified.
    fn crossover(
        &self,
        parent_a: &Individual,
        parent_b: &Individual,
        rng: &mut dyn RngCore,
    ) -> (Individual, Individual);
}

impl<T: CrossoverOperator + ?Sized> CrossoverOperator for &T {
    fn crossover(
        &self,
        parent_a: &Individual,
        parent_b: &Individual,
        rng: &mut dyn RngCore,
    ) -> (Individual, Individual) {
        (**self).crossover(parent_a, parent_b, rng)
    }
}

impl<T: CrossoverOperator + ?Sized> CrossoverOperator for Box<T> {
    fn crossover(
        &self,
        parent_a: &Individual,
        parent_b: &Individual,
        rng: &mut dyn RngCore,
    ) -> (Individual, Individual) {
        (**self).crossover(parent_a, parent_b, rng)
    }
}

impl<T: CrossoverOperator + ?Sized> CrossoverOperator for Arc<T> {
    fn crossover(
        &self,
        parent_a: &Individual,
        parent_b: &Individual,
        rng: &mut dyn RngCore,
    ) -> (Individual, Individual) {
        (**self).crossover(parent_a, parent_b, rng)
    }
}

/// Single-point crossover applied with a fixed probability.
///
/// When applied, a cut index `c` is drawn uniformly from `1..=len - 1` and the
/// parents exchange their suffixes starting at `c`. Otherwise both children are
/// plain copies of their parents.
///
/// # Examples
/// ```
/// use simple_ga::ops::SinglePointCrossover;
/// use simple_ga::Individual;
///
/// let parent_a = Individual::new(vec![0.0, 0.0, 0.0]);
/// let parent_b = Individual::new(vec![1.0, 1.0, 1.0]);
/// let (child_a, child_b) = SinglePointCrossover::splice(&parent_a, &parent_b, 1);
/// assert_eq!(child_a.genes(), &[0.0, 1.0, 1.0]);
/// assert_eq!(child_b.genes(), &[1.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinglePointCrossover {
    rate: f64,
}

impl SinglePointCrossover {
    /// Creates the operator. `rate` is expected to lie in `[0, 1]`; the
    /// optimizer validates it before constructing the operator.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Probability that crossover is applied to a pair of parents.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Rolls whether crossover happens and, if so, draws the cut index.
    ///
    /// Returns `None` when crossover is skipped. Individuals with fewer than
    /// two genes have no valid cut, so the roll is consumed and `None` is
    /// returned.
    pub fn sample_cut(&self, len: usize, rng: &mut dyn RngCore) -> Option<usize> {
        if rng.gen::<f64>() >= self.rate || len < 2 {
            return None;
        }
        Some(rng.gen_range(1..len))
    }

    /// Exchanges the suffixes of two parents at `cut`.
    #[must_use]
    pub fn splice(
        parent_a: &Individual,
        parent_b: &Individual,
        cut: usize,
    ) -> (Individual, Individual) {
        let (head_a, tail_a) = parent_a.genes().split_at(cut);
        let (head_b, tail_b) = parent_b.genes().split_at(cut);
        let child_a = head_a.iter().chain(tail_b).copied().collect();
        let child_b = head_b.iter().chain(tail_a).copied().collect();
        (Individual::new(child_a), Individual::new(child_b))
    }
}

impl CrossoverOperator for SinglePointCrossover {
    fn crossover(
        &self,
        parent_a: &Individual,
        parent_b: &Individual,
        rng: &mut dyn RngCore,
    ) -> (Individual, Individual) {
        match self.sample_cut(parent_a.len().min(parent_b.len()), rng) {
            Some(cut) => Self::splice(parent_a, parent_b, cut),
            None => (parent_a.clone(), parent_b.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn parents() -> (Individual, Individual) {
        (
            Individual::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]),
            Individual::new(vec![-1.0, -2.0, -3.0, -4.0, -5.0]),
        )
    }

    #[test]
    fn cut_is_strictly_inside() {
        let operator = SinglePointCrossover::new(1.0);
        let mut rng = StdRng::seed_from_u64(21);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let cut = operator.sample_cut(5, &mut rng).unwrap();
            assert!((1..5).contains(&cut));
            seen[cut] = true;
        }
        assert!(seen[1..].iter().all(|hit| *hit));
    }

    #[test]
    fn zero_rate_clones_parents() {
        let operator = SinglePointCrossover::new(0.0);
        let (parent_a, parent_b) = parents();
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..100 {
            let (child_a, child_b) = operator.crossover(&parent_a, &parent_b, &mut rng);
            assert_eq!(child_a, parent_a);
            assert_eq!(child_b, parent_b);
        }
    }

    #[test]
    fn full_rate_swaps_suffixes() {
        let operator = SinglePointCrossover::new(1.0);
        let (parent_a, parent_b) = parents();
        let mut rng = StdRng::seed_from_u64(8);
        let (child_a, child_b) = operator.crossover(&parent_a, &parent_b, &mut rng);
        let cut = child_a
            .iter()
            .position(|gene| *gene < 0.0)
            .expect("a suffix was exchanged");
        assert!((1..5).contains(&cut));
        assert_eq!(&child_a.genes()[..cut], &parent_a.genes()[..cut]);
        assert_eq!(&child_a.genes()[cut..], &parent_b.genes()[cut..]);
        assert_eq!(&child_b.genes()[..cut], &parent_b.genes()[..cut]);
        assert_eq!(&child_b.genes()[cut..], &parent_a.genes()[cut..]);
    }

    #[test]
    fn single_gene_parents_are_cloned() {
        let operator = SinglePointCrossover::new(1.0);
        let parent_a = Individual::new(vec![1.0]);
        let parent_b = Individual::new(vec![2.0]);
        let mut rng = StdRng::seed_from_u64(4);
        let (child_a, child_b) = operator.crossover(&parent_a, &parent_b, &mut rng);
        assert_eq!(child_a, parent_a);
        assert_eq!(child_b, parent_b);
    }
}
