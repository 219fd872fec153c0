//! Genetic operators.
//!
//! Selection, crossover and mutation are traits over `&mut dyn RngCore`, so
//! the optimizer can hold any implementation behind a `Box<dyn ...>`. The
//! built-in operators are small value types holding their parameters, and
//! every operator returns freshly owned individuals.

pub mod crossover;
pub mod mutation;
pub mod selection;

pub use crossover::{CrossoverOperator, SinglePointCrossover};
pub use mutation::{GaussianMutation, MutationOperator, DEFAULT_MUTATION_SIGMA};
pub use selection::{SelectionOperator, TournamentSelection, DEFAULT_TOURNAMENT_SIZE};
