//! Random trial generation.

use super::person::{Person, PersonId};
use super::requirements::RoleRequirements;
use super::trial::{Trial, TrialEntry};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Who may be drawn for a run: availability and cohort restrictions.
#[derive(Debug, Clone, Copy)]
pub struct CandidateFilter<'a> {
    pub unavailable: &'a HashSet<PersonId>,
    pub required_group: Option<&'a str>,
}

impl CandidateFilter<'_> {
    /// Whether `person` passes the date and group restrictions.
    ///
    /// Qualification and reuse within a trial are checked separately.
    pub fn admits(&self, person: &Person) -> bool {
        !self.unavailable.contains(&person.id)
            && self.required_group.map_or(true, |g| person.in_group(g))
    }
}

/// Draws one random assignment.
///
/// For each `(capability, count)` in requirement order, the people who
/// qualify, pass `filter`, and are not yet placed in this trial are
/// shuffled and the first `count` are taken. Fewer eligible people than
/// `count` is not an error: everyone eligible is taken and the capability
/// is left under-filled.
pub fn generate_trial<'a, R: Rng + ?Sized>(
    pool: &'a [Person],
    requirements: &'a RoleRequirements,
    filter: &CandidateFilter<'_>,
    rng: &mut R,
) -> Trial<'a> {
    let mut trial = Trial::new();
    let mut used: HashSet<&str> = HashSet::new();

    for (capability, count) in requirements.iter() {
        if count == 0 {
            continue;
        }

        let mut eligible: Vec<&'a Person> = pool
            .iter()
            .filter(|p| {
                p.qualifies_for(capability) && filter.admits(p) && !used.contains(p.id.as_str())
            })
            .collect();

        eligible.shuffle(rng);
        eligible.truncate(count);

        for person in eligible {
            used.insert(&person.id);
            trial.entries.push(TrialEntry {
                person,
                capability,
                is_primary: person.is_primary_for(capability),
            });
        }
    }

    trial
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn band() -> Vec<Person> {
        vec![
            Person::new("ana").with_primary("voice").with_group("band"),
            Person::new("bo").with_qualification("voice").with_qualification("guitar").with_group("band"),
            Person::new("cy").with_primary("guitar").with_group("youth"),
            Person::new("di").with_primary("bass").with_group("band"),
            Person::new("ed").with_qualification("voice").with_group("youth"),
        ]
    }

    #[test]
    fn test_fills_when_enough_candidates() {
        let pool = band();
        let req = RoleRequirements::new().with("voice", 2).with("bass", 1);
        let none = HashSet::new();
        let filter = CandidateFilter { unavailable: &none, required_group: None };
        let mut rng = create_rng(42);

        for _ in 0..50 {
            let trial = generate_trial(&pool, &req, &filter, &mut rng);
            assert_eq!(trial.count_for("voice"), 2);
            assert_eq!(trial.count_for("bass"), 1);
        }
    }

    #[test]
    fn test_under_fill_is_silent() {
        let pool = band();
        let req = RoleRequirements::new().with("bass", 3).with("drums", 1);
        let none = HashSet::new();
        let filter = CandidateFilter { unavailable: &none, required_group: None };
        let mut rng = create_rng(1);

        let trial = generate_trial(&pool, &req, &filter, &mut rng);

        assert_eq!(trial.count_for("bass"), 1);
        assert_eq!(trial.count_for("drums"), 0);
    }

    #[test]
    fn test_zero_count_skipped() {
        let pool = band();
        let req = RoleRequirements::new().with("voice", 0);
        let none = HashSet::new();
        let filter = CandidateFilter { unavailable: &none, required_group: None };
        let mut rng = create_rng(1);

        assert!(generate_trial(&pool, &req, &filter, &mut rng).is_empty());
    }

    #[test]
    fn test_unavailable_and_group_excluded() {
        let pool = band();
        let req = RoleRequirements::new().with("voice", 5).with("guitar", 5);
        let unavailable: HashSet<PersonId> = ["ana".to_string()].into();
        let filter = CandidateFilter { unavailable: &unavailable, required_group: Some("band") };
        let mut rng = create_rng(5);

        for _ in 0..50 {
            let trial = generate_trial(&pool, &req, &filter, &mut rng);
            for entry in trial.iter() {
                assert_ne!(entry.person_id(), "ana");
                assert!(entry.person.in_group("band"));
            }
            // Only bo remains for voice or guitar in the band.
            assert_eq!(trial.len(), 1);
        }
    }

    #[test]
    fn test_earlier_capability_gets_first_pick() {
        // bo is the only candidate for both; voice comes first.
        let pool = vec![Person::new("bo").with_qualification("voice").with_qualification("guitar")];
        let req = RoleRequirements::new().with("voice", 1).with("guitar", 1);
        let none = HashSet::new();
        let filter = CandidateFilter { unavailable: &none, required_group: None };
        let mut rng = create_rng(3);

        let trial = generate_trial(&pool, &req, &filter, &mut rng);

        assert_eq!(trial.len(), 1);
        assert_eq!(trial.entries[0].capability, "voice");
        assert!(!trial.entries[0].is_primary);
    }

    #[test]
    fn test_primary_flag_recorded() {
        let pool = band();
        let req = RoleRequirements::new().with("bass", 1);
        let none = HashSet::new();
        let filter = CandidateFilter { unavailable: &none, required_group: None };
        let mut rng = create_rng(8);

        let trial = generate_trial(&pool, &req, &filter, &mut rng);
        assert_eq!(trial.entries[0].person_id(), "di");
        assert!(trial.entries[0].is_primary);
    }

    #[test]
    fn test_shuffle_reaches_every_candidate() {
        let pool = band();
        let req = RoleRequirements::new().with("voice", 1);
        let none = HashSet::new();
        let filter = CandidateFilter { unavailable: &none, required_group: None };
        let mut rng = create_rng(11);

        let seen: HashSet<String> = (0..200)
            .map(|_| generate_trial(&pool, &req, &filter, &mut rng).entries[0].person.id.clone())
            .collect();
        assert_eq!(seen.len(), 3);
    }
}
