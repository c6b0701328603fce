//! Automatic roster generation.
//!
//! Given a pool of volunteers, the number of open slots per capability,
//! the people who opted out of the date, and optionally a cohort to draw
//! from, the engine searches for an assignment that favors rested people,
//! people in their primary role, and couples scheduled together.
//!
//! # Pieces
//!
//! - [`generate_trial`]: draws one random feasible assignment. Each
//!   capability, in requirement order, takes a uniformly random subset of
//!   the people who qualify and are still free.
//! - [`FitnessWeights::evaluate`]: scores a trial.
//! - [`RosterProblem`]: binds the two to the generic
//!   [`SearchRunner`](crate::search::SearchRunner).
//! - [`generate_assignment`]: the one-call entry point.
//!
//! # Failure model
//!
//! There is none. A capability without enough eligible people is left
//! under-filled and the result simply has fewer entries for it. Checking
//! that every slot was filled is up to the caller, see
//! [`Schedule::missing`](crate::schedule::Schedule::missing).

mod fitness;
mod generator;
mod person;
mod problem;
mod requirements;
mod trial;

pub use fitness::FitnessWeights;
pub use generator::{generate_trial, CandidateFilter};
pub use person::{Capability, GroupTag, Person, PersonId, DEFAULT_FAIRNESS};
pub use problem::{generate_assignment, generate_assignment_with, RosterProblem};
pub use requirements::RoleRequirements;
pub use trial::{Assignment, Trial, TrialEntry};
