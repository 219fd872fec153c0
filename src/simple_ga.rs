//! Generational genetic algorithm engine.
//!
//! [`GeneticAlgorithm`] minimizes an objective over `[lower, upper]^n`. Each
//! generation keeps the fittest individual unchanged in slot 0 and fills the
//! remaining slots with tournament-selected parents recombined by
//! single-point crossover and perturbed by Gaussian mutation.
//!
//! Fitness is the negated objective, so "fittest" always means "lowest
//! objective". The random source is owned by the engine; two engines built
//! with the same seed and settings follow identical trajectories.

use crate::core::{
    fittest_index, mean, Bounds, BoundsError, GenerationSummary, History, Individual, Population,
};
use crate::objective::{ObjectiveError, ObjectiveResult};
use crate::ops::{
    CrossoverOperator, GaussianMutation, MutationOperator, SelectionOperator,
    SinglePointCrossover, TournamentSelection, DEFAULT_MUTATION_SIGMA, DEFAULT_TOURNAMENT_SIZE,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

const PROGRESS_INTERVAL: usize = 10;

/// Invalid settings detected while constructing the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The search space has no dimensions.
    #[error("dimensionality must be at least one (received {0})")]
    InvalidDimensions(usize),
    /// The bounds pair is invalid; see [`BoundsError`].
    #[error(transparent)]
    Bounds(#[from] BoundsError),
    /// The configured population size was zero.
    #[error("population size must be greater than zero (received {0})")]
    InvalidPopulationSize(usize),
    /// A probability was outside `[0, 1]`.
    #[error("{name} must be within [0, 1] (received {value})")]
    InvalidRate {
        /// Name of the offending setting.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// Tournament selection needs at least one contestant.
    #[error("tournament size must be at least one (received {0})")]
    InvalidTournamentSize(usize),
    /// The mutation noise must have a positive, finite standard deviation.
    #[error("mutation standard deviation must be positive and finite (received {0})")]
    InvalidMutationSigma(f64),
}

/// Errors produced while running the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaError {
    /// The objective failed for one of the individuals.
    #[error(transparent)]
    Objective(#[from] ObjectiveError),
    /// [`GeneticAlgorithm::step`] was called before a population existed.
    #[error("population has not been initialized")]
    Uninitialized,
    /// Tournament selection did not return a parent.
    #[error("selection operator failed to provide a parent")]
    SelectionFailed,
}

/// Settings for a single optimization run.
///
/// All fields are public; start from [`Settings::default`] and reassign what
/// you need:
/// ```
/// let mut settings = simple_ga::Settings::default();
/// settings.dimensions = 5;
/// settings.mutation_rate = 0.15;
/// assert!(settings.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Number of genes per individual.
    pub dimensions: usize,
    /// Lower limit shared by every gene.
    pub lower_bound: f64,
    /// Upper limit shared by every gene.
    pub upper_bound: f64,
    /// Number of individuals per generation.
    pub population_size: usize,
    /// Probability that a single gene is perturbed.
    pub mutation_rate: f64,
    /// Probability that a pair of parents is recombined instead of copied.
    pub crossover_rate: f64,
    /// Contestants per tournament.
    pub tournament_size: usize,
    /// Standard deviation of the Gaussian mutation noise.
    pub mutation_sigma: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dimensions: 2,
            lower_bound: -5.0,
            upper_bound: 5.0,
            population_size: 50,
            mutation_rate: 0.1,
            crossover_rate: 0.8,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
            mutation_sigma: DEFAULT_MUTATION_SIGMA,
        }
    }
}

impl Settings {
    /// Checks every setting.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimensions == 0 {
            return Err(ConfigError::InvalidDimensions(self.dimensions));
        }
        self.bounds()?;
        if self.population_size == 0 {
            return Err(ConfigError::InvalidPopulationSize(self.population_size));
        }
        check_rate("mutation rate", self.mutation_rate)?;
        check_rate("crossover rate", self.crossover_rate)?;
        if self.tournament_size == 0 {
            return Err(ConfigError::InvalidTournamentSize(self.tournament_size));
        }
        if !(self.mutation_sigma.is_finite() && self.mutation_sigma > 0.0) {
            return Err(ConfigError::InvalidMutationSigma(self.mutation_sigma));
        }
        Ok(())
    }

    /// The bounds pair as a validated [`Bounds`].
    ///
    /// # Errors
    /// Returns [`BoundsError`] when the limits are reversed, not finite, or
    /// too far apart for their width to be finite.
    pub fn bounds(&self) -> Result<Bounds, BoundsError> {
        Bounds::new(self.lower_bound, self.upper_bound)
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(value.is_finite() && (0.0..=1.0).contains(&value)) {
        return Err(ConfigError::InvalidRate { name, value });
    }
    Ok(())
}

/// Outcome of [`GeneticAlgorithm::evolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionReport {
    /// Fittest individual of the final population.
    pub best_solution: Individual,
    /// Objective value of [`Self::best_solution`].
    pub best_objective: f64,
    /// Number of generations actually executed.
    pub generations: usize,
}

impl EvolutionReport {
    /// Splits the report into `(best_solution, best_objective)`.
    #[must_use]
    pub fn into_parts(self) -> (Individual, f64) {
        (self.best_solution, self.best_objective)
    }
}

/// Builder returned by [`GeneticAlgorithm::builder`].
pub struct GeneticAlgorithmBuilder<F> {
    objective: F,
    settings: Settings,
    seed: Option<u64>,
    selection: Option<Box<dyn SelectionOperator>>,
    crossover: Option<Box<dyn CrossoverOperator>>,
    mutation: Option<Box<dyn MutationOperator>>,
}

impl<F> GeneticAlgorithmBuilder<F>
where
    F: FnMut(&[f64]) -> ObjectiveResult<f64>,
{
    /// Replaces all settings at once.
    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Number of genes per individual.
    #[must_use]
    pub fn dimensions(mut self, dimensions: usize) -> Self {
        self.settings.dimensions = dimensions;
        self
    }

    /// Bounds shared by every gene.
    #[must_use]
    pub fn bounds(mut self, lower: f64, upper: f64) -> Self {
        self.settings.lower_bound = lower;
        self.settings.upper_bound = upper;
        self
    }

    /// Number of individuals per generation.
    #[must_use]
    pub fn population_size(mut self, size: usize) -> Self {
        self.settings.population_size = size;
        self
    }

    /// Per-gene mutation probability.
    #[must_use]
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.settings.mutation_rate = rate;
        self
    }

    /// Probability of recombining a pair of parents.
    #[must_use]
    pub fn crossover_rate(mut self, rate: f64) -> Self {
        self.settings.crossover_rate = rate;
        self
    }

    /// Contestants per tournament.
    #[must_use]
    pub fn tournament_size(mut self, size: usize) -> Self {
        self.settings.tournament_size = size;
        self
    }

    /// Standard deviation of the mutation noise.
    #[must_use]
    pub fn mutation_sigma(mut self, sigma: f64) -> Self {
        self.settings.mutation_sigma = sigma;
        self
    }

    /// Replaces the tournament selection built from the settings.
    #[must_use]
    pub fn selection(mut self, operator: impl SelectionOperator + 'static) -> Self {
        self.selection = Some(Box::new(operator));
        self
    }

    /// Replaces the single-point crossover built from the settings.
    #[must_use]
    pub fn crossover(mut self, operator: impl CrossoverOperator + 'static) -> Self {
        self.crossover = Some(Box::new(operator));
        self
    }

    /// Replaces the Gaussian mutation built from the settings. Children are
    /// still clamped into the bounds afterwards.
    #[must_use]
    pub fn mutation(mut self, operator: impl MutationOperator + 'static) -> Self {
        self.mutation = Some(Box::new(operator));
        self
    }

    /// Seeds the engine's [`StdRng`] for reproducible runs.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Finalizes the builder with a [`StdRng`], seeded when [`Self::seed`]
    /// was called and from system entropy otherwise.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when any setting is invalid.
    pub fn build(self) -> Result<GeneticAlgorithm<F, StdRng>, ConfigError> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.finish(rng)
    }

    /// Finalizes the builder with a caller-provided random source. Any seed
    /// set through [`Self::seed`] is ignored.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when any setting is invalid.
    pub fn build_with_rng<R: Rng>(self, rng: R) -> Result<GeneticAlgorithm<F, R>, ConfigError> {
        self.finish(rng)
    }

    fn finish<R: Rng>(self, rng: R) -> Result<GeneticAlgorithm<F, R>, ConfigError> {
        let mut ga = GeneticAlgorithm::new(self.objective, self.settings, rng)?;
        if let Some(operator) = self.selection {
            ga.selection = operator;
        }
        if let Some(operator) = self.crossover {
            ga.crossover = operator;
        }
        if let Some(operator) = self.mutation {
            ga.mutation = operator;
        }
        Ok(ga)
    }
}

/// Generational genetic algorithm over a box-bounded real vector space.
///
/// # Examples
/// ```
/// use simple_ga::{functions, objective::infallible, GeneticAlgorithm};
///
/// let mut ga = GeneticAlgorithm::builder(infallible(functions::sphere))
///     .dimensions(5)
///     .bounds(-5.0, 5.0)
///     .population_size(50)
///     .mutation_rate(0.15)
///     .crossover_rate(0.8)
///     .seed(42)
///     .build()
///     .unwrap();
/// let report = ga.evolve(40, false).unwrap();
/// assert_eq!(report.best_solution.len(), 5);
/// assert_eq!(ga.best_objective_history().len(), 40);
/// ```
pub struct GeneticAlgorithm<F, R = StdRng> {
    objective: F,
    settings: Settings,
    bounds: Bounds,
    selection: Box<dyn SelectionOperator>,
    crossover: Box<dyn CrossoverOperator>,
    mutation: Box<dyn MutationOperator>,
    rng: R,
    population: Population,
    generation: usize,
    history: History,
}

impl<F> GeneticAlgorithm<F, StdRng>
where
    F: FnMut(&[f64]) -> ObjectiveResult<f64>,
{
    /// Creates a builder starting from [`Settings::default`].
    #[must_use]
    pub fn builder(objective: F) -> GeneticAlgorithmBuilder<F> {
        GeneticAlgorithmBuilder {
            objective,
            settings: Settings::default(),
            seed: None,
            selection: None,
            crossover: None,
            mutation: None,
        }
    }
}

impl<F, R> GeneticAlgorithm<F, R>
where
    F: FnMut(&[f64]) -> ObjectiveResult<f64>,
    R: Rng,
{
    /// Creates an engine from an objective, validated settings and a random
    /// source, using the built-in operators configured by `settings`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when any setting is invalid.
    pub fn new(objective: F, settings: Settings, rng: R) -> Result<Self, ConfigError> {
        settings.validate()?;
        let bounds = settings.bounds()?;
        let mutation =
            GaussianMutation::new(settings.mutation_rate, settings.mutation_sigma, bounds)?;
        Ok(Self {
            objective,
            selection: Box::new(TournamentSelection::new(settings.tournament_size)),
            crossover: Box::new(SinglePointCrossover::new(settings.crossover_rate)),
            mutation: Box::new(mutation),
            bounds,
            settings,
            rng,
            population: Population::default(),
            generation: 0,
            history: History::new(),
        })
    }

    /// Runs `generations` generations from a fresh random population and
    /// returns the fittest individual of the final population.
    ///
    /// With `verbose` set, progress is emitted as `info` events every tenth
    /// generation and on the last one.
    ///
    /// # Errors
    /// Returns [`GaError::Objective`] as soon as the objective fails.
    pub fn evolve(&mut self, generations: usize, verbose: bool) -> Result<EvolutionReport, GaError> {
        self.run(generations, verbose, None)
    }

    /// Like [`Self::evolve`], but stops at the next generation boundary once
    /// `cancel` is set. The report then describes the population reached so
    /// far.
    ///
    /// # Errors
    /// Returns [`GaError::Objective`] as soon as the objective fails.
    pub fn evolve_with_cancel(
        &mut self,
        generations: usize,
        verbose: bool,
        cancel: &AtomicBool,
    ) -> Result<EvolutionReport, GaError> {
        self.run(generations, verbose, Some(cancel))
    }

    #[tracing::instrument(
        level = "debug",
        skip(self, cancel),
        fields(population_size = self.settings.population_size, dimensions = self.settings.dimensions)
    )]
    fn run(
        &mut self,
        generations: usize,
        verbose: bool,
        cancel: Option<&AtomicBool>,
    ) -> Result<EvolutionReport, GaError> {
        self.initialize_population();
        if verbose {
            tracing::info!(
                population_size = self.settings.population_size,
                mutation_rate = self.settings.mutation_rate,
                crossover_rate = self.settings.crossover_rate,
                generations,
                "starting evolution"
            );
        }
        for generation in 0..generations {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                tracing::warn!(generation, "evolution cancelled");
                break;
            }
            let summary = self.step()?;
            if verbose && (generation % PROGRESS_INTERVAL == 0 || generation + 1 == generations) {
                tracing::info!(
                    generation,
                    best = summary.best_objective,
                    average = summary.average_objective,
                    "progress"
                );
            }
        }
        self.current_best()
    }

    /// Replaces the population with `population_size` uniform random
    /// individuals and starts a new history.
    pub fn initialize_population(&mut self) {
        self.population = Population::random(
            self.settings.population_size,
            self.settings.dimensions,
            &self.bounds,
            &mut self.rng,
        );
        self.generation = 0;
        self.history.clear();
    }

    /// Fitness of a single individual: the negated objective value.
    ///
    /// # Errors
    /// Propagates any [`ObjectiveError`] returned by the objective and
    /// returns [`ObjectiveError::NotANumber`] when it yields `NaN`.
    pub fn evaluate_fitness(&mut self, individual: &Individual) -> ObjectiveResult<f64> {
        fitness_of(&mut self.objective, individual)
    }

    /// Runs one generation: evaluates the current population, records its
    /// statistics and replaces it with the next generation.
    ///
    /// # Errors
    /// Returns [`GaError::Uninitialized`] before
    /// [`Self::initialize_population`] and [`GaError::Objective`] when the
    /// objective fails. A failed step leaves the population untouched.
    pub fn step(&mut self) -> Result<GenerationSummary, GaError> {
        if self.population.is_empty() {
            return Err(GaError::Uninitialized);
        }
        let fitness = self.evaluate_population()?;
        let elite_idx = fittest_index(&fitness).ok_or(GaError::Uninitialized)?;
        let elite = self.population.individuals()[elite_idx].clone();
        let best_objective = -fitness[elite_idx];
        let average_objective = -mean(&fitness);
        self.history
            .record(best_objective, average_objective, elite.clone());
        tracing::debug!(
            generation = self.generation,
            best_objective,
            average_objective,
            "generation evaluated"
        );

        let size = self.settings.population_size;
        let mut next = Population::with_capacity(size + 1);
        next.push(elite);
        while next.len() < size {
            let parent_a = self
                .selection
                .select(&self.population, &fitness, &mut self.rng)
                .ok_or(GaError::SelectionFailed)?;
            let parent_b = self
                .selection
                .select(&self.population, &fitness, &mut self.rng)
                .ok_or(GaError::SelectionFailed)?;
            let (child_a, child_b) = self.crossover.crossover(&parent_a, &parent_b, &mut self.rng);
            for child in [child_a, child_b] {
                let mut child = self.mutation.mutate(&child, &mut self.rng);
                child
                    .iter_mut()
                    .for_each(|gene| *gene = self.bounds.clamp(*gene));
                next.push(child);
            }
        }
        next.truncate(size);
        self.population = next;

        let summary = GenerationSummary {
            generation: self.generation,
            best_objective,
            average_objective,
        };
        self.generation += 1;
        Ok(summary)
    }

    /// Evaluates the current population and reports its fittest individual.
    ///
    /// # Errors
    /// Returns [`GaError::Uninitialized`] when there is no population and
    /// [`GaError::Objective`] when the objective fails.
    pub fn current_best(&mut self) -> Result<EvolutionReport, GaError> {
        let fitness = self.evaluate_population()?;
        let idx = fittest_index(&fitness).ok_or(GaError::Uninitialized)?;
        Ok(EvolutionReport {
            best_solution: self.population.individuals()[idx].clone(),
            best_objective: -fitness[idx],
            generations: self.generation,
        })
    }

    fn evaluate_population(&mut self) -> Result<Vec<f64>, GaError> {
        let mut fitness = Vec::with_capacity(self.population.len());
        for individual in self.population.individuals() {
            fitness.push(fitness_of(&mut self.objective, individual)?);
        }
        Ok(fitness)
    }
}

fn fitness_of<F>(objective: &mut F, individual: &Individual) -> ObjectiveResult<f64>
where
    F: FnMut(&[f64]) -> ObjectiveResult<f64>,
{
    let value = objective(individual.genes())?;
    if value.is_nan() {
        return Err(ObjectiveError::NotANumber {
            genes: individual.genes().to_vec(),
        });
    }
    Ok(-value)
}

impl<F, R> GeneticAlgorithm<F, R> {
    /// Settings the engine was built with.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Validated bounds shared by every gene.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Current population; empty until a run starts.
    #[must_use]
    pub fn population(&self) -> &[Individual] {
        self.population.individuals()
    }

    /// Number of generations completed in the current run.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Full convergence history of the current run.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Best objective value per generation.
    #[must_use]
    pub fn best_objective_history(&self) -> &[f64] {
        self.history.best_objective()
    }

    /// Average objective value per generation.
    #[must_use]
    pub fn average_objective_history(&self) -> &[f64] {
        self.history.average_objective()
    }

    /// Best individual per generation.
    #[must_use]
    pub fn best_individual_history(&self) -> &[Individual] {
        self.history.best_individual()
    }
}
