//! Benchmark objectives commonly used to exercise the optimizer.
//!
//! All of them are minimized and plug into the optimizer through
//! [`infallible`](crate::objective::infallible):
//! ```
//! use simple_ga::{functions, objective::infallible, GeneticAlgorithm};
//! let ga = GeneticAlgorithm::builder(infallible(functions::sphere))
//!     .dimensions(3)
//!     .seed(1)
//!     .build()
//!     .unwrap();
//! assert_eq!(ga.settings().dimensions, 3);
//! ```

use std::f64::consts::PI;

/// Sum of the elements.
#[must_use]
pub fn summation(x: &[f64]) -> f64 {
    x.iter().sum()
}

/// Sum of squares, `f(x) = Σ xᵢ²`. Global minimum `0` at the origin.
///
/// # Examples
/// ```
/// use simple_ga::functions::sphere;
/// assert_eq!(sphere(&[0.0; 5]), 0.0);
/// assert_eq!(sphere(&[-2.0, 3.0, -1.0, 4.0, -5.0]), 55.0);
/// ```
#[must_use]
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// Rastrigin function, `10n + Σ (xᵢ² − 10 cos 2πxᵢ)`. Global minimum `0` at
/// the origin.
#[must_use]
pub fn rastrigin(x: &[f64]) -> f64 {
    let a = 10.0;
    #[allow(clippy::cast_precision_loss)]
    let n = x.len() as f64;
    a * n
        + x.iter()
            .map(|xi| xi * xi - a * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_known_points() {
        assert_eq!(sphere(&[0.0, 0.0, 0.0, 0.0, 0.0]), 0.0);
        assert_eq!(sphere(&[1.0, 1.0, 1.0, 1.0, 1.0]), 5.0);
        assert_eq!(sphere(&[-2.0, 3.0, -1.0, 4.0, -5.0]), 55.0);
    }

    #[test]
    fn summation_adds_elements() {
        assert_eq!(summation(&[1.0, -2.0, 4.0]), 3.0);
    }

    #[test]
    fn rastrigin_minimum_at_origin() {
        assert!(rastrigin(&[0.0, 0.0, 0.0]).abs() < 1e-12);
        assert!(rastrigin(&[1.0, 1.0]) > 0.0);
    }
}
