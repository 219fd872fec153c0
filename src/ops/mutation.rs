//! Mutation operators.

use crate::core::{Bounds, Individual};
use crate::simple_ga::ConfigError;
use rand::{Rng, RngCore};
use rand_distr::{Distribution, Normal};
use std::sync::Arc;

/// Standard deviation of the mutation noise unless configured otherwise.
pub const DEFAULT_MUTATION_SIGMA: f64 = 0.5;

/// Perturbs a single individual.
///
/// The optimizer clamps every child into its bounds after mutation, so
/// implementations may step outside them.
///
/// # Examples
/// ```
/// use simple_ga::ops::MutationOperator;
/// use simple_ga::Individual;
/// use rand::SeedableRng;
///
/// struct AddOne;
///
/// impl MutationOperator for AddOne {
///     fn mutate(&self, parent: &Individual, _rng: &mut dyn rand::RngCore) -> Individual {
///         parent.iter().map(|gene| gene + 1.0).collect::<Vec<_>>().into()
///     }
/// }
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let child = AddOne.mutate(&Individual::new(vec![0.5, 1.0]), &mut rng);
/// assert_eq!(child.genes(), &[1.5, 2.0]);
/// ```
pub trait MutationOperator: Send + Sync {
    /// Returns a mutated copy of `parent`; `parent` itself is never modified.
    fn mutate(&self, parent: &Individual, rng: &mut dyn RngCore) -> Individual;
}

impl<T: MutationOperator + ?Sized> MutationOperator for &T {
    fn mutate(&self, parent: &Individual, rng: &mut dyn RngCore) -> Individual {
        (**self).mutate(parent, rng)
    }
}

impl<T: MutationOperator + ?Sized> MutationOperator for Box<T> {
    fn mutate(&self, parent: &Individual, rng: &mut dyn RngCore) -> Individual {
        (**self).mutate(parent, rng)
    }
}

impl<T: MutationOperator + ?Sized> MutationOperator for Arc<T> {
    fn mutate(&self, parent: &Individual, rng: &mut dyn RngCore) -> Individual {
        (**self).mutate(parent, rng)
    }
}

/// Per-gene Gaussian mutation.
///
/// Each gene is perturbed with probability `rate` by adding `N(0, sigma)`
/// noise, then clamped into the bounds. Unselected genes are left untouched.
#[derive(Debug, Clone, Copy)]
pub struct GaussianMutation {
    rate: f64,
    noise: Normal<f64>,
    bounds: Bounds,
}

impl GaussianMutation {
    /// Creates the operator.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidMutationSigma`] when `sigma` is not a
    /// positive finite number.
    pub fn new(rate: f64, sigma: f64, bounds: Bounds) -> Result<Self, ConfigError> {
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(ConfigError::InvalidMutationSigma(sigma));
        }
        let noise =
            Normal::new(0.0, sigma).map_err(|_| ConfigError::InvalidMutationSigma(sigma))?;
        Ok(Self {
            rate,
            noise,
            bounds,
        })
    }

    /// Probability that an individual gene is perturbed.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Standard deviation of the perturbation.
    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.noise.std_dev()
    }
}

impl MutationOperator for GaussianMutation {
    fn mutate(&self, parent: &Individual, rng: &mut dyn RngCore) -> Individual {
        let mut child = parent.clone();
        for gene in child.iter_mut() {
            if rng.gen::<f64>() >= self.rate {
                continue;
            }
            *gene = self.bounds.clamp(*gene + self.noise.sample(rng));
        }
        child
    }
}
