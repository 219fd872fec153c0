//! Minimizes the 5-dimensional Sphere function and prints a convergence
//! report.

use simple_ga::functions::sphere;
use simple_ga::objective::infallible;
use simple_ga::{GeneticAlgorithm, Settings};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("Sphere function: f(x) = sum(xi^2), global minimum f(0, ..., 0) = 0");
    for point in [
        [0.0, 0.0, 0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0, 1.0, 1.0],
        [-2.0, 3.0, -1.0, 4.0, -5.0],
    ] {
        println!("  f({point:?}) = {:.4}", sphere(&point));
    }

    let settings = Settings {
        dimensions: 5,
        lower_bound: -5.0,
        upper_bound: 5.0,
        population_size: 50,
        mutation_rate: 0.15,
        crossover_rate: 0.8,
        ..Settings::default()
    };
    let mut ga = GeneticAlgorithm::builder(infallible(sphere))
        .settings(settings)
        .seed(42)
        .build()?;
    let report = ga.evolve(40, true)?;

    let solution: Vec<String> = report
        .best_solution
        .iter()
        .map(|gene| format!("{gene:.6}"))
        .collect();
    println!("best solution: [{}]", solution.join(", "));
    println!("best value: {:.10}", report.best_objective);
    println!("error from global optimum: {:.10}", report.best_objective.abs());
    println!(
        "distance from origin: {:.8}",
        report.best_solution.distance_from_origin()
    );

    println!("generation  best            average         improvement");
    let history = ga.history();
    let improvements = history.improvements();
    for (generation, (best, average)) in history
        .best_objective()
        .iter()
        .zip(history.average_objective())
        .enumerate()
    {
        let improvement = match generation {
            0 => 0.0,
            g => improvements[g - 1],
        };
        println!("{generation:>10}  {best:<14.8}  {average:<14.8}  {improvement:.8}");
    }
    Ok(())
}
