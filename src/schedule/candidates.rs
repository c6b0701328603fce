//! Candidate listing for filling a slot by hand.

use super::board::Schedule;
use super::slot::Turn;
use crate::error::Result;
use crate::roster::Person;

/// Fairness below which a candidate is flagged as recently overworked.
pub const LOW_FAIRNESS_THRESHOLD: f64 = 20.0;

pub fn is_low_fairness(person: &Person) -> bool {
    person.fairness_score < LOW_FAIRNESS_THRESHOLD
}

/// People who can fill `capability`, most rested first.
///
/// `group` restricts the list to one cohort. Equal scores keep pool order.
pub fn qualified_candidates<'a>(
    pool: &'a [Person],
    capability: &str,
    group: Option<&str>,
) -> Vec<&'a Person> {
    let mut candidates: Vec<&Person> = pool
        .iter()
        .filter(|p| p.qualifies_for(capability))
        .filter(|p| group.map_or(true, |g| p.in_group(g)))
        .collect();
    candidates.sort_by(|a, b| b.fairness_score.total_cmp(&a.fairness_score));
    candidates
}

/// One row of a slot's picker.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateOption<'a> {
    pub person: &'a Person,
    /// Already holds another slot in the same turn.
    pub occupied: bool,
    pub low_fairness: bool,
}

impl Schedule {
    /// Picker rows for a slot: qualified members of the slot's cohort,
    /// most rested first, flagged when busy elsewhere in the turn.
    ///
    /// The slot's current holder is not flagged as occupied, and neither
    /// is anyone whose only other slot is on the other side of the
    /// youth/main split.
    pub fn candidates_for<'a>(
        &self,
        slot_id: &str,
        turn: Turn,
        pool: &'a [Person],
    ) -> Result<Vec<CandidateOption<'a>>> {
        let slot = self.slot(slot_id)?;
        let holder = self.holder(slot_id, turn);
        let busy = self.occupied(turn, slot.group.as_deref());

        Ok(
            qualified_candidates(pool, &slot.capability, slot.group.as_deref())
                .into_iter()
                .map(|person| CandidateOption {
                    person,
                    occupied: busy.contains(&person.id) && holder != Some(person.id.as_str()),
                    low_fairness: is_low_fairness(person),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::slot::{ServiceLayout, BAND, YOUTH};
    use chrono::NaiveDate;

    fn pool() -> Vec<Person> {
        vec![
            Person::new("ana").with_primary("voice").with_fairness(40.0).with_group(BAND),
            Person::new("bo").with_qualification("voice").with_fairness(90.0).with_group(BAND),
            Person::new("cy").with_qualification("voice").with_fairness(10.0).with_group(BAND),
            Person::new("di").with_qualification("voice").with_fairness(95.0),
            Person::new("ed").with_primary("drums").with_fairness(100.0).with_group(BAND),
        ]
    }

    #[test]
    fn test_sorted_by_fairness_desc() {
        let pool = pool();
        let ids: Vec<&str> = qualified_candidates(&pool, "voice", None)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["di", "bo", "ana", "cy"]);

        let band: Vec<&str> = qualified_candidates(&pool, "voice", Some(BAND))
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(band, vec!["bo", "ana", "cy"]);
    }

    #[test]
    fn test_picker_flags() {
        let pool = pool();
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let mut s = Schedule::new(date, ServiceLayout::standard());
        s.assign("voice1", Turn::Both, "bo").unwrap();
        s.assign("voice2", Turn::Both, "ana").unwrap();

        let rows = s.candidates_for("voice1", Turn::Both, &pool).unwrap();

        let row = |id: &str| rows.iter().find(|r| r.person.id == id).unwrap().clone();
        assert!(!row("bo").occupied);
        assert!(row("ana").occupied);
        assert!(row("cy").low_fairness);
        assert!(!rows.iter().any(|r| r.person.id == "di"));
    }

    #[test]
    fn test_youth_and_main_slots_do_not_conflict() {
        let pool = vec![
            Person::new("ana").with_primary("voice").with_group(BAND).with_group(YOUTH),
            Person::new("bo").with_qualification("voice").with_group(BAND).with_group(YOUTH),
        ];
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let mut s = Schedule::new(date, ServiceLayout::standard());
        s.assign("voice1", Turn::Both, "ana").unwrap();
        s.assign("youthVoice1", Turn::Both, "bo").unwrap();

        fn row(rows: &[CandidateOption<'_>], id: &str) -> bool {
            rows.iter().find(|r| r.person.id == id).unwrap().occupied
        }

        let youth = s.candidates_for("youthLeader", Turn::Both, &pool).unwrap();
        assert!(!row(&youth, "ana"));
        assert!(row(&youth, "bo"));

        let main = s.candidates_for("worshipLeader", Turn::Both, &pool).unwrap();
        assert!(row(&main, "ana"));
        assert!(!row(&main, "bo"));
    }
}
