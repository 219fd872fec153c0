use rand::rngs::StdRng;
use rand::SeedableRng;
use simple_ga::functions::sphere;
use simple_ga::objective::{check_dimensions, infallible};
use simple_ga::{
    BoundsError, ConfigError, GaError, GeneticAlgorithm, ObjectiveError, ObjectiveResult,
    Settings,
};

fn sphere_settings() -> Settings {
    Settings {
        dimensions: 5,
        lower_bound: -5.0,
        upper_bound: 5.0,
        population_size: 50,
        mutation_rate: 0.15,
        crossover_rate: 0.8,
        ..Settings::default()
    }
}

fn sphere_ga(
    settings: Settings,
    seed: u64,
) -> GeneticAlgorithm<impl FnMut(&[f64]) -> ObjectiveResult<f64>> {
    GeneticAlgorithm::builder(infallible(sphere))
        .settings(settings)
        .seed(seed)
        .build()
        .expect("valid GA configuration")
}

#[test]
fn sphere_converges_toward_origin() {
    let mut ga = sphere_ga(sphere_settings(), 42);
    let report = ga.evolve(40, true).unwrap();

    assert_eq!(report.generations, 40);
    assert_eq!(report.best_solution.len(), 5);
    assert!(report.best_objective >= 0.0);
    assert!(report.best_objective < ga.average_objective_history()[0]);
    assert!(
        report.best_objective < 1.0,
        "best objective {} did not approach the optimum",
        report.best_objective
    );
    assert!((sphere(report.best_solution.genes()) - report.best_objective).abs() < 1e-12);
}

#[test]
fn best_objective_never_gets_worse() {
    for seed in [1, 7, 99] {
        let mut ga = sphere_ga(sphere_settings(), seed);
        let report = ga.evolve(30, false).unwrap();
        let best = ga.best_objective_history();
        assert_eq!(best.len(), 30);
        for pair in best.windows(2) {
            assert!(pair[1] <= pair[0], "elitism violated: {pair:?}");
        }
        assert!(report.best_objective <= best[best.len() - 1]);
        assert!(ga.history().improvements().iter().all(|delta| *delta >= 0.0));
    }
}

#[test]
fn every_generation_respects_bounds_and_size() {
    for population_size in [1, 2, 7, 50] {
        let settings = Settings {
            population_size,
            mutation_rate: 0.9,
            mutation_sigma: 4.0,
            ..sphere_settings()
        };
        let mut ga = sphere_ga(settings, 3);
        ga.initialize_population();
        for _ in 0..25 {
            assert_eq!(ga.population().len(), population_size);
            for individual in ga.population() {
                assert_eq!(individual.len(), 5);
                assert!(individual.iter().all(|gene| (-5.0..=5.0).contains(gene)));
            }
            ga.step().unwrap();
        }
        assert_eq!(ga.population().len(), population_size);
    }
}

#[test]
fn identical_seeds_reproduce_runs() {
    let mut first = sphere_ga(sphere_settings(), 2024);
    let mut second = sphere_ga(sphere_settings(), 2024);
    let a = first.evolve(20, false).unwrap();
    let b = second.evolve(20, false).unwrap();
    assert_eq!(a, b);
    assert_eq!(first.history(), second.history());
    assert_eq!(first.population(), second.population());

    let mut other = sphere_ga(sphere_settings(), 2025);
    other.evolve(20, false).unwrap();
    assert_ne!(first.history(), other.history());
}

#[test]
fn caller_provided_rng_is_deterministic() {
    let build = || {
        GeneticAlgorithm::builder(infallible(sphere))
            .settings(sphere_settings())
            .build_with_rng(StdRng::seed_from_u64(5))
            .unwrap()
    };
    let mut a = build();
    let mut b = build();
    assert_eq!(a.evolve(10, false).unwrap(), b.evolve(10, false).unwrap());
}

#[test]
fn no_variation_keeps_only_initial_genes() {
    // Without crossover and mutation, offspring are copies of tournament winners.
    let settings = Settings {
        mutation_rate: 0.0,
        crossover_rate: 0.0,
        ..sphere_settings()
    };
    let mut ga = sphere_ga(settings, 77);
    ga.initialize_population();
    let initial = ga.population().to_vec();
    for _ in 0..10 {
        ga.step().unwrap();
        for individual in ga.population() {
            assert!(initial.contains(individual));
        }
    }
}

#[test]
fn history_tracks_every_generation() {
    let mut ga = sphere_ga(sphere_settings(), 11);
    ga.evolve(12, false).unwrap();
    let history = ga.history();
    assert_eq!(history.generations(), 12);
    assert_eq!(ga.average_objective_history().len(), 12);
    assert_eq!(ga.best_individual_history().len(), 12);
    assert_eq!(history.improvements().len(), 11);
    for ((best, average), individual) in ga
        .best_objective_history()
        .iter()
        .zip(ga.average_objective_history())
        .zip(ga.best_individual_history())
    {
        assert!(best <= average);
        assert_eq!(sphere(individual.genes()), *best);
    }
}

#[test]
fn rerunning_starts_a_fresh_history() {
    let mut ga = sphere_ga(sphere_settings(), 13);
    ga.evolve(8, false).unwrap();
    ga.evolve(5, false).unwrap();
    assert_eq!(ga.history().generations(), 5);
}

#[test]
fn objective_failure_is_propagated() {
    let mut calls = 0_usize;
    let objective = |genes: &[f64]| -> ObjectiveResult<f64> {
        calls += 1;
        if calls > 60 {
            return Err(ObjectiveError::failed("solver diverged"));
        }
        Ok(sphere(genes))
    };
    let mut ga = GeneticAlgorithm::builder(objective)
        .settings(sphere_settings())
        .seed(4)
        .build()
        .unwrap();
    let err = ga.evolve(10, false).unwrap_err();
    assert_eq!(
        err,
        GaError::Objective(ObjectiveError::Failed("solver diverged".into()))
    );
    assert_eq!(ga.history().generations(), 1);
}

#[test]
fn dimension_checks_surface_through_evolve() {
    let objective = |genes: &[f64]| -> ObjectiveResult<f64> {
        check_dimensions(genes, 3)?;
        Ok(sphere(genes))
    };
    let mut ga = GeneticAlgorithm::builder(objective)
        .dimensions(4)
        .seed(1)
        .build()
        .unwrap();
    assert!(matches!(
        ga.evolve(1, false),
        Err(GaError::Objective(ObjectiveError::DimensionMismatch {
            expected: 3,
            found: 4
        }))
    ));
}

#[test]
fn builder_rejects_invalid_configuration() {
    let result = GeneticAlgorithm::builder(infallible(sphere))
        .bounds(1.0, -1.0)
        .build();
    assert!(matches!(result, Err(ConfigError::Bounds(_))));

    let result = GeneticAlgorithm::builder(infallible(sphere))
        .bounds(-1e308, 1e308)
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::Bounds(BoundsError::RangeOverflow { .. }))
    ));

    let result = GeneticAlgorithm::builder(infallible(sphere))
        .mutation_rate(f64::NAN)
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidRate { .. })));

    let result = GeneticAlgorithm::builder(infallible(sphere))
        .population_size(0)
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidPopulationSize(0))));
}

#[test]
fn sphere_reference_points() {
    assert_eq!(sphere(&[0.0, 0.0, 0.0, 0.0, 0.0]), 0.0);
    assert_eq!(sphere(&[1.0, 1.0, 1.0, 1.0, 1.0]), 5.0);
    assert_eq!(sphere(&[-2.0, 3.0, -1.0, 4.0, -5.0]), 55.0);
}

#[cfg(feature = "serde")]
#[test]
fn history_serializes_to_json() {
    let mut ga = sphere_ga(sphere_settings(), 6);
    ga.evolve(3, false).unwrap();
    let json = serde_json::to_string(ga.history()).unwrap();
    let restored: simple_ga::History = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.generations(), 3);
    assert_eq!(restored.best_individual().len(), 3);
    for (restored, original) in restored
        .best_objective()
        .iter()
        .zip(ga.best_objective_history())
    {
        assert!((restored - original).abs() <= 1e-12 * original.abs().max(1.0));
    }
}

#[cfg(feature = "serde")]
#[test]
fn deserialized_settings_are_validated_on_build() {
    let mut value = serde_json::to_value(sphere_settings()).unwrap();
    value["lower_bound"] = serde_json::json!(5.0);
    value["upper_bound"] = serde_json::json!(-5.0);
    let settings: Settings = serde_json::from_value(value).unwrap();
    let result = GeneticAlgorithm::builder(infallible(sphere))
        .settings(settings)
        .build();
    assert!(matches!(
        result,
        Err(ConfigError::Bounds(BoundsError::Reversed { .. }))
    ));
}
