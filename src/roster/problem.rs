//! The roster problem and the engine entry point.

use super::fitness::FitnessWeights;
use super::generator::{generate_trial, CandidateFilter};
use super::person::{Person, PersonId};
use super::requirements::RoleRequirements;
use super::trial::{Assignment, Trial};
use crate::search::{SearchConfig, SearchProblem, SearchResult, SearchRunner};
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// One scheduling run: who can be drawn, what must be filled, how trials
/// are scored.
///
/// Borrows every input; nothing passed in is mutated.
#[derive(Debug, Clone)]
pub struct RosterProblem<'a> {
    pool: &'a [Person],
    requirements: &'a RoleRequirements,
    unavailable: &'a HashSet<PersonId>,
    required_group: Option<&'a str>,
    weights: FitnessWeights,
}

impl<'a> RosterProblem<'a> {
    pub fn new(
        pool: &'a [Person],
        requirements: &'a RoleRequirements,
        unavailable: &'a HashSet<PersonId>,
    ) -> Self {
        Self {
            pool,
            requirements,
            unavailable,
            required_group: None,
            weights: FitnessWeights::default(),
        }
    }

    /// Restricts candidates to members of `group`.
    pub fn with_group(mut self, group: Option<&'a str>) -> Self {
        self.required_group = group;
        self
    }

    /// Sets the fitness weights trials are scored with.
    pub fn with_weights(mut self, weights: FitnessWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> &FitnessWeights {
        &self.weights
    }

    pub fn requirements(&self) -> &RoleRequirements {
        self.requirements
    }

    fn filter(&self) -> CandidateFilter<'a> {
        CandidateFilter {
            unavailable: self.unavailable,
            required_group: self.required_group,
        }
    }

    /// Runs the search and returns the best trial with its statistics.
    ///
    /// # Panics
    /// Panics if the weights or the configuration are invalid.
    pub fn solve(&self, config: &SearchConfig) -> SearchResult<Trial<'a>> {
        self.weights.validate().expect("invalid FitnessWeights");

        let result = SearchRunner::run(self, config);
        debug!(
            pool = self.pool.len(),
            requested = self.requirements.total_slots(),
            filled = result.best.len(),
            best_score = result.best_score,
            "roster search finished"
        );
        result
    }
}

impl<'a> SearchProblem for RosterProblem<'a> {
    type Solution = Trial<'a>;

    fn empty_solution(&self) -> Trial<'a> {
        Trial::new()
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Trial<'a> {
        generate_trial(self.pool, self.requirements, &self.filter(), rng)
    }

    fn score(&self, trial: &Trial<'a>) -> f64 {
        self.weights.evaluate(trial)
    }
}

/// Produces the best assignment found within the default trial budget.
///
/// Never fails: infeasible requirements come back under-filled, and an
/// empty or fully excluded pool comes back empty. Callers detect missing
/// slots by comparing counts against `requirements`. Results differ
/// between calls; use [`generate_assignment_with`] and a seed to replay.
pub fn generate_assignment(
    pool: &[Person],
    requirements: &RoleRequirements,
    unavailable: &HashSet<PersonId>,
    required_group: Option<&str>,
) -> Vec<Assignment> {
    generate_assignment_with(
        pool,
        requirements,
        unavailable,
        required_group,
        &SearchConfig::default(),
    )
}

/// [`generate_assignment`] with an explicit search configuration.
pub fn generate_assignment_with(
    pool: &[Person],
    requirements: &RoleRequirements,
    unavailable: &HashSet<PersonId>,
    required_group: Option<&str>,
    config: &SearchConfig,
) -> Vec<Assignment> {
    RosterProblem::new(pool, requirements, unavailable)
        .with_group(required_group)
        .solve(config)
        .best
        .to_assignments()
}
