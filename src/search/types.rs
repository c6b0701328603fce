//! Core trait for random-restart search.

use rand::Rng;

/// Defines a problem for independent-trial random search.
///
/// The user implements candidate sampling and scoring. The search
/// framework handles the trial budget, best-so-far tracking, and
/// optional parallel fan-out.
///
/// # Maximization
///
/// Unlike the trajectory methods, random search here **maximizes** the
/// score: higher is strictly better. Scores are only compared against
/// each other and need not be bounded or normalized.
///
/// # Examples
///
/// ```ignore
/// struct PickLargest { values: Vec<f64> }
///
/// impl SearchProblem for PickLargest {
///     type Solution = Option<usize>;
///
///     fn empty_solution(&self) -> Option<usize> { None }
///
///     fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
///         (!self.values.is_empty()).then(|| rng.random_range(0..self.values.len()))
///     }
///
///     fn score(&self, pick: &Option<usize>) -> f64 {
///         pick.map_or(0.0, |i| self.values[i])
///     }
/// }
/// ```
pub trait SearchProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// The solution returned when no trial has been run.
    fn empty_solution(&self) -> Self::Solution;

    /// Draws one independent random candidate.
    ///
    /// Every call must produce a feasible solution on its own; trials do
    /// not build on each other.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Solution;

    /// Scores a solution. Higher is better. Must be pure.
    fn score(&self, solution: &Self::Solution) -> f64;
}
