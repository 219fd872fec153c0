#![warn(missing_docs)]

/*! A small, seedable genetic algorithm for minimizing real-valued functions over a box-bounded
vector space.

The engine keeps the fittest individual of every generation (elitism), picks parents by
tournament, recombines them with single-point crossover and perturbs the offspring with
clamped Gaussian mutation. Every run records its convergence history so callers can plot or
report it. The operators live in [`ops`] and any of them can be replaced through the builder.

```
use simple_ga::{functions, objective::infallible, GeneticAlgorithm};

let mut ga = GeneticAlgorithm::builder(infallible(functions::sphere))
    .dimensions(5)
    .bounds(-5.0, 5.0)
    .mutation_rate(0.15)
    .seed(42)
    .build()
    .unwrap();
let (best, value) = ga.evolve(20, false).unwrap().into_parts();
assert_eq!(best.len(), 5);
assert!(value >= 0.0);
```
!*/

pub mod core;
pub mod functions;
pub mod objective;
pub mod ops;
mod simple_ga;

pub use crate::core::{Bounds, BoundsError, Gene, GenerationSummary, History, Individual};
pub use objective::{ObjectiveError, ObjectiveResult};
pub use simple_ga::{
    ConfigError, EvolutionReport, GaError, GeneticAlgorithm, GeneticAlgorithmBuilder, Settings,
};
