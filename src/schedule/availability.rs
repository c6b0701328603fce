//! Per-date opt-outs.

use crate::roster::PersonId;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Dates on which people have said they cannot serve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvailabilityCalendar {
    by_date: BTreeMap<NaiveDate, BTreeSet<PersonId>>,
}

impl AvailabilityCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an opt-out. Returns `false` if it was already recorded.
    pub fn mark_unavailable(&mut self, person: &str, date: NaiveDate) -> bool {
        self.by_date
            .entry(date)
            .or_default()
            .insert(person.to_string())
    }

    /// Removes an opt-out. Returns `false` if there was none.
    pub fn mark_available(&mut self, person: &str, date: NaiveDate) -> bool {
        let Some(people) = self.by_date.get_mut(&date) else {
            return false;
        };
        let removed = people.remove(person);
        if people.is_empty() {
            self.by_date.remove(&date);
        }
        removed
    }

    /// Replaces a person's opt-outs with `dates`.
    ///
    /// Returns `(added, removed)` counts.
    pub fn set_dates(
        &mut self,
        person: &str,
        dates: impl IntoIterator<Item = NaiveDate>,
    ) -> (usize, usize) {
        let wanted: BTreeSet<NaiveDate> = dates.into_iter().collect();
        let current: BTreeSet<NaiveDate> = self.dates_for(person).into_iter().collect();

        let to_remove: Vec<NaiveDate> = current.difference(&wanted).copied().collect();
        let to_add: Vec<NaiveDate> = wanted.difference(&current).copied().collect();

        for date in &to_remove {
            self.mark_available(person, *date);
        }
        for date in &to_add {
            self.mark_unavailable(person, *date);
        }
        (to_add.len(), to_remove.len())
    }

    /// A person's opt-out dates, oldest first.
    pub fn dates_for(&self, person: &str) -> Vec<NaiveDate> {
        self.by_date
            .iter()
            .filter(|(_, people)| people.contains(person))
            .map(|(date, _)| *date)
            .collect()
    }

    /// Everyone who opted out of `date`.
    pub fn unavailable_on(&self, date: NaiveDate) -> HashSet<PersonId> {
        self.by_date
            .get(&date)
            .map(|people| people.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_available(&self, person: &str, date: NaiveDate) -> bool {
        self.by_date
            .get(&date)
            .map_or(true, |people| !people.contains(person))
    }
}
