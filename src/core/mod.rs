//! Core genetic algorithm primitives.
//!
//! Individuals are owned gene vectors: every operator in [`crate::ops`]
//! returns a freshly allocated [`Individual`], so no two population slots ever
//! share storage.

pub mod history;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use thiserror::Error;

pub use history::{GenerationSummary, History};

/// Scalar type used to represent a single gene value.
///
/// # Examples
/// ```
/// use simple_ga::Gene;
/// let gene: Gene = 1.0;
/// assert_eq!(gene, 1.0);
/// ```
pub type Gene = f64;

/// Candidate solution: an ordered, fixed-length vector of genes.
///
/// # Examples
/// ```
/// use simple_ga::Individual;
/// let individual = Individual::new(vec![3.0, 4.0]);
/// assert_eq!(individual.len(), 2);
/// assert_eq!(individual.distance_from_origin(), 5.0);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genes: Vec<Gene>,
}

impl Individual {
    /// Creates an individual from raw genes.
    #[must_use]
    pub fn new(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    /// Draws every gene independently and uniformly from `bounds`.
    ///
    /// # Examples
    /// ```
    /// use simple_ga::{Bounds, Individual};
    /// use rand::SeedableRng;
    ///
    /// let bounds = Bounds::new(-1.0, 1.0).unwrap();
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    /// let individual = Individual::random(4, &bounds, &mut rng);
    /// assert!(individual.iter().all(|gene| bounds.contains(*gene)));
    /// ```
    pub fn random<R: Rng + ?Sized>(dimensions: usize, bounds: &Bounds, rng: &mut R) -> Self {
        let sampler = bounds.sampler();
        let genes = (0..dimensions).map(|_| sampler.sample(rng)).collect();
        Self { genes }
    }

    /// Returns the number of genes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Indicates whether the individual has zero genes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Returns a shared slice with all genes.
    #[must_use]
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// Returns an iterator over the genes.
    pub fn iter(&self) -> impl Iterator<Item = &Gene> {
        self.genes.iter()
    }

    /// Returns a mutable iterator over the genes.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Gene> {
        self.genes.iter_mut()
    }

    /// Consumes the individual and returns its genes.
    #[must_use]
    pub fn into_genes(self) -> Vec<Gene> {
        self.genes
    }

    /// Euclidean norm of the gene vector.
    #[must_use]
    pub fn distance_from_origin(&self) -> f64 {
        self.genes.iter().map(|gene| gene * gene).sum::<f64>().sqrt()
    }
}

impl From<Vec<Gene>> for Individual {
    fn from(genes: Vec<Gene>) -> Self {
        Self::new(genes)
    }
}

impl AsRef<[Gene]> for Individual {
    fn as_ref(&self) -> &[Gene] {
        &self.genes
    }
}

/// Error returned when invalid bounds are provided.
///
/// # Examples
/// ```
/// use simple_ga::Bounds;
/// let err = Bounds::new(1.0, -1.0).unwrap_err();
/// assert!(err.to_string().contains("lower bound"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoundsError {
    /// One of the limits is `NaN` or infinite.
    #[error("bounds must be finite (lower: {lower}, upper: {upper})")]
    NonFinite {
        /// Provided lower limit.
        lower: Gene,
        /// Provided upper limit.
        upper: Gene,
    },
    /// The lower limit is not strictly below the upper limit.
    #[error("lower bound {lower} must be strictly below upper bound {upper}")]
    Reversed {
        /// Provided lower limit.
        lower: Gene,
        /// Provided upper limit.
        upper: Gene,
    },
    /// The width `upper - lower` is not representable as a finite number.
    #[error("bounds width overflows (lower: {lower}, upper: {upper})")]
    RangeOverflow {
        /// Provided lower limit.
        lower: Gene,
        /// Provided upper limit.
        upper: Gene,
    },
}

/// Closed interval `[lower, upper]` applied to every coordinate.
///
/// With the `serde` feature the pair (de)serializes as `[lower, upper]` and
/// goes through [`Bounds::new`] when deserialized.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(Gene, Gene)", into = "(Gene, Gene)")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    lower: Gene,
    upper: Gene,
}

impl Bounds {
    /// Creates a bounds pair.
    ///
    /// # Errors
    /// Returns [`BoundsError`] when either limit is not finite, when
    /// `lower >= upper`, or when the width of the interval overflows.
    pub fn new(lower: Gene, upper: Gene) -> Result<Self, BoundsError> {
        if !(lower.is_finite() && upper.is_finite()) {
            return Err(BoundsError::NonFinite { lower, upper });
        }
        if lower >= upper {
            return Err(BoundsError::Reversed { lower, upper });
        }
        if !(upper - lower).is_finite() {
            return Err(BoundsError::RangeOverflow { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Lower limit.
    #[must_use]
    pub fn lower(&self) -> Gene {
        self.lower
    }

    /// Upper limit.
    #[must_use]
    pub fn upper(&self) -> Gene {
        self.upper
    }

    /// Clamps a value into the interval.
    #[must_use]
    pub fn clamp(&self, value: Gene) -> Gene {
        value.clamp(self.lower, self.upper)
    }

    /// Whether `value` lies inside the closed interval.
    #[must_use]
    pub fn contains(&self, value: Gene) -> bool {
        (self.lower..=self.upper).contains(&value)
    }

    fn sampler(&self) -> Uniform<Gene> {
        Uniform::new_inclusive(self.lower, self.upper)
    }
}

impl TryFrom<(Gene, Gene)> for Bounds {
    type Error = BoundsError;

    fn try_from((lower, upper): (Gene, Gene)) -> Result<Self, Self::Error> {
        Self::new(lower, upper)
    }
}

impl From<Bounds> for (Gene, Gene) {
    fn from(bounds: Bounds) -> Self {
        (bounds.lower, bounds.upper)
    }
}

/// Ordered collection of individuals making up one generation.
///
/// Order carries no meaning beyond indexing into the parallel fitness vector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates `size` random individuals inside `bounds`.
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        dimensions: usize,
        bounds: &Bounds,
        rng: &mut R,
    ) -> Self {
        let individuals = (0..size)
            .map(|_| Individual::random(dimensions, bounds, rng))
            .collect();
        Self { individuals }
    }

    /// Creates an empty population with room for `capacity` individuals.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
        }
    }

    /// Number of individuals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Indicates whether the population is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Adds an individual.
    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Drops every individual past `len`.
    pub fn truncate(&mut self, len: usize) {
        self.individuals.truncate(len);
    }

    /// Returns the underlying individuals.
    #[must_use]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Returns the individual at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }
}

impl From<Vec<Individual>> for Population {
    fn from(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }
}

/// Index of the first maximal fitness value, or `None` when empty.
///
/// Ties resolve to the lowest index.
///
/// # Examples
/// ```
/// use simple_ga::core::fittest_index;
/// assert_eq!(fittest_index(&[-3.0, -1.0, -1.0]), Some(1));
/// ```
#[must_use]
pub fn fittest_index(fitness: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, value) in fitness.iter().enumerate() {
        match best {
            Some(current) if *value <= fitness[current] => {}
            _ => best = Some(idx),
        }
    }
    best
}

/// Arithmetic mean, `0.0` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let len = values.len() as f64;
    values.iter().sum::<f64>() / len
}
