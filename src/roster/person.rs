//! Volunteers and their qualifications.

use std::collections::BTreeSet;

/// Opaque unique identifier of a person.
pub type PersonId = String;

/// A skill tag a slot requires and a person may hold ("voice", "bass").
pub type Capability = String;

/// A cohort tag ("band", "youth") used to restrict a run to one group.
pub type GroupTag = String;

/// Fairness score given to people who have no history yet.
pub const DEFAULT_FAIRNESS: f64 = 100.0;

/// A volunteer in the candidate pool.
///
/// The engine only reads people. Fairness is changed by the
/// [`FairnessLedger`](crate::fairness::FairnessLedger) when a service date is
/// settled.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub id: PersonId,

    /// Capabilities the person can cover in a secondary capacity.
    pub qualifications: BTreeSet<Capability>,

    /// The person's titular role, preferred by scoring.
    pub primary_qualification: Option<Capability>,

    /// Rest credit in `[0, 100]`. Higher means served less recently.
    pub fairness_score: f64,

    /// Person this one should be scheduled together with.
    ///
    /// Not required to point back, nor to name anyone in the pool.
    pub partner_id: Option<PersonId>,

    pub groups: BTreeSet<GroupTag>,
}

impl Person {
    /// Creates a person with no qualifications, no groups and full fairness.
    pub fn new(id: impl Into<PersonId>) -> Self {
        Self {
            id: id.into(),
            qualifications: BTreeSet::new(),
            primary_qualification: None,
            fairness_score: DEFAULT_FAIRNESS,
            partner_id: None,
            groups: BTreeSet::new(),
        }
    }

    /// Sets the primary capability.
    pub fn with_primary(mut self, capability: impl Into<Capability>) -> Self {
        self.primary_qualification = Some(capability.into());
        self
    }

    /// Adds a secondary capability.
    pub fn with_qualification(mut self, capability: impl Into<Capability>) -> Self {
        self.qualifications.insert(capability.into());
        self
    }

    /// Sets the fairness score.
    pub fn with_fairness(mut self, score: f64) -> Self {
        self.fairness_score = score;
        self
    }

    /// Sets the partner who prefers to serve on the same date.
    pub fn with_partner(mut self, partner: impl Into<PersonId>) -> Self {
        self.partner_id = Some(partner.into());
        self
    }

    /// Adds a cohort tag.
    pub fn with_group(mut self, group: impl Into<GroupTag>) -> Self {
        self.groups.insert(group.into());
        self
    }

    /// Whether the person can fill `capability`, as primary or secondary.
    pub fn qualifies_for(&self, capability: &str) -> bool {
        self.is_primary_for(capability) || self.qualifications.contains(capability)
    }

    pub fn is_primary_for(&self, capability: &str) -> bool {
        self.primary_qualification.as_deref() == Some(capability)
    }

    pub fn in_group(&self, group: &str) -> bool {
        self.groups.contains(group)
    }
}
