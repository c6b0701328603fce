//! Trial assignments and the engine's output type.

use super::person::{Capability, Person, PersonId};

/// One person placed on one capability within a trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialEntry<'a> {
    pub person: &'a Person,
    pub capability: &'a str,
    /// Whether `capability` is the person's primary qualification.
    pub is_primary: bool,
}

impl TrialEntry<'_> {
    pub fn person_id(&self) -> &str {
        &self.person.id
    }
}

/// A complete candidate assignment produced by one generator run.
///
/// No person appears more than once. Entries are grouped by capability in
/// requirement order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trial<'a> {
    pub entries: Vec<TrialEntry<'a>>,
}

impl<'a> Trial<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrialEntry<'a>> {
        self.entries.iter()
    }

    pub fn contains(&self, person_id: &str) -> bool {
        self.entries.iter().any(|e| e.person.id == person_id)
    }

    /// Number of entries filling `capability`.
    pub fn count_for(&self, capability: &str) -> usize {
        self.entries
            .iter()
            .filter(|e| e.capability == capability)
            .count()
    }

    /// Drops the borrowed person references, keeping `(person, capability)`.
    pub fn to_assignments(&self) -> Vec<Assignment> {
        self.entries
            .iter()
            .map(|e| Assignment {
                person_id: e.person.id.clone(),
                capability: e.capability.to_string(),
            })
            .collect()
    }
}

/// A person chosen for a capability, as handed back to the caller.
///
/// The caller maps each pair onto one concrete open slot of that
/// capability, see [`Schedule::apply`](crate::schedule::Schedule::apply).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub person_id: PersonId,
    pub capability: Capability,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_helpers() {
        let ana = Person::new("ana").with_primary("voice");
        let bo = Person::new("bo").with_qualification("voice");
        let trial = Trial {
            entries: vec![
                TrialEntry { person: &ana, capability: "voice", is_primary: true },
                TrialEntry { person: &bo, capability: "voice", is_primary: false },
            ],
        };

        assert_eq!(trial.len(), 2);
        assert!(trial.contains("bo"));
        assert!(!trial.contains("cy"));
        assert_eq!(trial.count_for("voice"), 2);
        assert_eq!(trial.count_for("bass"), 0);
        assert_eq!(
            trial.to_assignments()[0],
            Assignment { person_id: "ana".into(), capability: "voice".into() }
        );
    }
}
