//! Fairness bookkeeping across service dates.
//!
//! Fairness is a rest credit: serving on a date costs a step, sitting a
//! date out earns one, and the score stays within the policy bounds. The
//! ledger remembers which dates have been settled so that saving a date
//! again does not charge anyone twice, and so that deleting a settled
//! date can hand the points back.

use crate::error::{Result, RosterError};
use crate::roster::{Person, PersonId};
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashSet};
use tracing::info;

/// How much one date moves fairness, and the bounds it moves within.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FairnessPolicy {
    pub step: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for FairnessPolicy {
    fn default() -> Self {
        Self {
            step: 5.0,
            min: 0.0,
            max: 100.0,
        }
    }
}

impl FairnessPolicy {
    /// Sets the amount a score moves per settled date.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the range scores are clamped to.
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Validates the policy.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.step.is_finite() || self.step < 0.0 {
            return Err(format!("step must be finite and non-negative, got {}", self.step));
        }
        if !(self.min.is_finite() && self.max.is_finite()) || self.min >= self.max {
            return Err(format!(
                "bounds must be finite with min < max, got [{}, {}]",
                self.min, self.max
            ));
        }
        Ok(())
    }

    fn clamp(&self, score: f64) -> f64 {
        score.clamp(self.min, self.max)
    }
}

/// Result of [`FairnessLedger::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// Scores were updated for the first save of the date.
    Applied { workers: usize, rested: usize },
    /// The date had been settled before; no score changed.
    AlreadyProcessed,
}

/// Result of [`FairnessLedger::revert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevertOutcome {
    /// Workers given their step back.
    pub restored: usize,
    /// Rested people whose rest credit was taken back.
    pub charged: usize,
    /// Rested people already at the maximum, left alone.
    pub untouched: usize,
}

/// Tracks settled service dates and applies fairness changes to a pool.
#[derive(Debug, Clone, Default)]
pub struct FairnessLedger {
    policy: FairnessPolicy,
    processed: BTreeSet<NaiveDate>,
}

impl FairnessLedger {
    /// # Panics
    /// Panics if the policy is invalid.
    pub fn new(policy: FairnessPolicy) -> Self {
        policy.validate().expect("invalid FairnessPolicy");
        Self {
            policy,
            processed: BTreeSet::new(),
        }
    }

    /// Restores a ledger from previously settled dates.
    pub fn with_processed(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.processed.extend(dates);
        self
    }

    pub fn policy(&self) -> &FairnessPolicy {
        &self.policy
    }

    pub fn is_processed(&self, date: NaiveDate) -> bool {
        self.processed.contains(&date)
    }

    /// Settled dates, newest first.
    pub fn processed_dates(&self) -> Vec<NaiveDate> {
        self.processed.iter().rev().copied().collect()
    }

    /// Charges `workers` one step and credits everyone else one step.
    ///
    /// Only the first settle of a date changes scores. Every worker must be
    /// in `pool`; otherwise nothing is changed.
    pub fn settle(
        &mut self,
        date: NaiveDate,
        pool: &mut [Person],
        workers: &HashSet<PersonId>,
    ) -> Result<SettleOutcome> {
        if self.is_processed(date) {
            return Ok(SettleOutcome::AlreadyProcessed);
        }
        check_workers(pool, workers)?;

        let mut served = 0usize;
        for person in pool.iter_mut() {
            let delta = if workers.contains(&person.id) {
                served += 1;
                -self.policy.step
            } else {
                self.policy.step
            };
            person.fairness_score = self.policy.clamp(person.fairness_score + delta);
        }
        self.processed.insert(date);

        let outcome = SettleOutcome::Applied {
            workers: served,
            rested: pool.len() - served,
        };
        info!(%date, workers = served, rested = pool.len() - served, "settled service date");
        Ok(outcome)
    }

    /// Undoes a settled date: workers get their step back and rested
    /// people lose theirs, except those already at the maximum.
    pub fn revert(
        &mut self,
        date: NaiveDate,
        pool: &mut [Person],
        workers: &HashSet<PersonId>,
    ) -> Result<RevertOutcome> {
        if !self.is_processed(date) {
            return Err(RosterError::DateNotProcessed(date));
        }
        check_workers(pool, workers)?;

        let mut outcome = RevertOutcome::default();
        for person in pool.iter_mut() {
            if workers.contains(&person.id) {
                person.fairness_score = self.policy.clamp(person.fairness_score + self.policy.step);
                outcome.restored += 1;
            } else if person.fairness_score >= self.policy.max {
                outcome.untouched += 1;
            } else {
                person.fairness_score = self.policy.clamp(person.fairness_score - self.policy.step);
                outcome.charged += 1;
            }
        }
        self.processed.remove(&date);

        info!(
            %date,
            restored = outcome.restored,
            charged = outcome.charged,
            untouched = outcome.untouched,
            "reverted service date"
        );
        Ok(outcome)
    }
}

fn check_workers(pool: &[Person], workers: &HashSet<PersonId>) -> Result<()> {
    let known: HashSet<&str> = pool.iter().map(|p| p.id.as_str()).collect();
    // Sorted so the reported id does not depend on hash order.
    let mut unknown: Vec<&PersonId> = workers
        .iter()
        .filter(|w| !known.contains(w.as_str()))
        .collect();
    unknown.sort();
    match unknown.first() {
        Some(id) => Err(RosterError::UnknownPerson((*id).clone())),
        None => Ok(()),
    }
}
