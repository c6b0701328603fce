//! Trial scoring.

use super::trial::Trial;
use std::collections::HashSet;

/// Weights of the trial scoring formula.
///
/// Per filled entry a trial earns `base`, plus `fairness_multiplier` times
/// the person's fairness score, plus `primary_bonus` when the entry is the
/// person's primary qualification. A person with a partner earns
/// `partner_together_bonus` if the partner is in the same trial and
/// `partner_separated_penalty` (a negative number) otherwise.
///
/// With the defaults, a secondary-qualified person must have more than 15
/// fairness points over a primary-qualified one to be preferred, and
/// splitting a couple costs far more than keeping it together earns.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessWeights {
    pub base: f64,
    pub fairness_multiplier: f64,
    pub primary_bonus: f64,
    pub partner_together_bonus: f64,
    pub partner_separated_penalty: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            base: 100.0,
            fairness_multiplier: 1.0,
            primary_bonus: 15.0,
            partner_together_bonus: 50.0,
            partner_separated_penalty: -200.0,
        }
    }
}

impl FitnessWeights {
    /// Sets the score every placed person contributes.
    pub fn with_base(mut self, w: f64) -> Self {
        self.base = w;
        self
    }

    /// Sets the factor applied to each placed person's fairness score.
    pub fn with_fairness_multiplier(mut self, w: f64) -> Self {
        self.fairness_multiplier = w;
        self
    }

    /// Sets the bonus for serving in one's primary capability.
    pub fn with_primary_bonus(mut self, w: f64) -> Self {
        self.primary_bonus = w;
        self
    }

    /// Sets the bonus for a placed person whose partner is also placed.
    pub fn with_partner_together_bonus(mut self, w: f64) -> Self {
        self.partner_together_bonus = w;
        self
    }

    /// Sets the amount (negative) added for a placed person whose partner is not.
    pub fn with_partner_separated_penalty(mut self, w: f64) -> Self {
        self.partner_separated_penalty = w;
        self
    }

    /// Validates the weights.
    pub fn validate(&self) -> Result<(), String> {
        let all = [
            ("base", self.base),
            ("fairness_multiplier", self.fairness_multiplier),
            ("primary_bonus", self.primary_bonus),
            ("partner_together_bonus", self.partner_together_bonus),
            ("partner_separated_penalty", self.partner_separated_penalty),
        ];
        for (name, w) in all {
            if !w.is_finite() {
                return Err(format!("{name} must be finite, got {w}"));
            }
        }
        Ok(())
    }

    /// Scores a trial. Higher is better; pure.
    ///
    /// The partner term is applied once per entry, so a couple split by a
    /// trial is penalized only through whichever of the two was placed,
    /// and a couple placed together earns the bonus twice. A `partner_id`
    /// naming nobody in the trial (or nobody at all) takes the penalty.
    pub fn evaluate(&self, trial: &Trial<'_>) -> f64 {
        let placed: HashSet<&str> = trial.iter().map(|e| e.person_id()).collect();

        trial
            .iter()
            .map(|entry| {
                let person = entry.person;
                let mut score = self.base + self.fairness_multiplier * person.fairness_score;

                if entry.is_primary {
                    score += self.primary_bonus;
                }

                if let Some(partner) = person.partner_id.as_deref() {
                    score += if placed.contains(partner) {
                        self.partner_together_bonus
                    } else {
                        self.partner_separated_penalty
                    };
                }

                score
            })
            .sum()
    }
}
