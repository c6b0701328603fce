//! The mutable roster of one service date.

use super::availability::AvailabilityCalendar;
use super::slot::{ServiceLayout, ServiceSlot, SlotId, Turn, YOUTH};
use crate::error::{Result, RosterError};
use crate::roster::{
    generate_assignment_with, Assignment, Person, PersonId, RoleRequirements,
};
use crate::search::SearchConfig;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::debug;

/// An enabled slot that has no holder for a required turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissingSlot {
    pub slot_id: SlotId,
    pub label: String,
    pub turn: Turn,
}

/// A filled slot, as it would be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotAssignment {
    pub slot_id: SlotId,
    pub turn: Turn,
    pub person_id: PersonId,
}

/// What [`Schedule::apply`] did with a batch of engine results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Slots that received a holder, in placement order.
    pub placed: Vec<SlotAssignment>,
    /// Results with no open slot of their capability left.
    pub unplaced: Vec<Assignment>,
}

/// Summary of one [`Schedule::auto_fill`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoFillReport {
    pub requested: usize,
    pub filled: usize,
    /// Slots of the filled group still open for the turn.
    pub unfilled: Vec<MissingSlot>,
}

impl AutoFillReport {
    pub fn is_complete(&self) -> bool {
        self.unfilled.is_empty()
    }
}

/// The roster being edited for one service date.
///
/// Owned by the caller and passed explicitly to everything that changes
/// it. Slots can be switched off for a date, in which case they are
/// neither requested from the engine nor required for completeness.
#[derive(Debug, Clone)]
pub struct Schedule {
    date: NaiveDate,
    split_service: bool,
    layout: ServiceLayout,
    disabled: BTreeSet<SlotId>,
    holders: BTreeMap<(SlotId, Turn), PersonId>,
}

impl Schedule {
    pub fn new(date: NaiveDate, layout: ServiceLayout) -> Self {
        Self {
            date,
            split_service: false,
            layout,
            disabled: BTreeSet::new(),
            holders: BTreeMap::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn layout(&self) -> &ServiceLayout {
        &self.layout
    }

    pub fn is_split_service(&self) -> bool {
        self.split_service
    }

    /// Switches between one combined turn and separate morning/evening
    /// turns. Holders of turns no longer in use are kept but ignored.
    pub fn set_split_service(&mut self, split: bool) {
        self.split_service = split;
    }

    /// Turns every enabled slot must be staffed for.
    pub fn turns(&self) -> &'static [Turn] {
        Turn::for_service(self.split_service)
    }

    pub fn is_enabled(&self, slot_id: &str) -> bool {
        !self.disabled.contains(slot_id)
    }

    /// Flips a slot on or off. Returns whether it is now enabled.
    pub fn toggle_slot(&mut self, slot_id: &str) -> Result<bool> {
        self.slot(slot_id)?;
        if self.disabled.remove(slot_id) {
            Ok(true)
        } else {
            self.disabled.insert(slot_id.to_string());
            Ok(false)
        }
    }

    /// Puts `person` on a slot, replacing and returning any previous holder.
    pub fn assign(&mut self, slot_id: &str, turn: Turn, person: &str) -> Result<Option<PersonId>> {
        self.check_turn(turn)?;
        self.slot(slot_id)?;
        if !self.is_enabled(slot_id) {
            return Err(RosterError::SlotDisabled(slot_id.to_string()));
        }
        Ok(self
            .holders
            .insert((slot_id.to_string(), turn), person.to_string()))
    }

    /// Clears a slot, returning the previous holder.
    pub fn unassign(&mut self, slot_id: &str, turn: Turn) -> Option<PersonId> {
        self.holders.remove(&(slot_id.to_string(), turn))
    }

    pub fn holder(&self, slot_id: &str, turn: Turn) -> Option<&str> {
        self.holders
            .get(&(slot_id.to_string(), turn))
            .map(String::as_str)
    }

    /// People already holding an enabled slot in `turn` that conflicts with
    /// a slot of `group`.
    ///
    /// Youth slots and the rest of the service are staffed independently:
    /// holding a youth slot never blocks a main-service slot, and the
    /// other way round.
    pub fn occupied(&self, turn: Turn, group: Option<&str>) -> HashSet<PersonId> {
        let filling_youth = group == Some(YOUTH);
        self.holders
            .iter()
            .filter(|((slot_id, t), _)| {
                *t == turn
                    && self.is_enabled(slot_id)
                    && self
                        .layout
                        .get(slot_id)
                        .is_some_and(|slot| slot.is_youth() == filling_youth)
            })
            .map(|(_, person)| person.clone())
            .collect()
    }

    /// Enabled slots of `group` with no holder in `turn`, in layout order.
    ///
    /// `group` selects slots by their cohort; `None` selects the slots open
    /// to everyone.
    pub fn open_slots(&self, turn: Turn, group: Option<&str>) -> Vec<&ServiceSlot> {
        self.layout
            .slots()
            .iter()
            .filter(|s| s.group.as_deref() == group)
            .filter(|s| self.is_enabled(&s.id) && self.holder(&s.id, turn).is_none())
            .collect()
    }

    /// Open slot counts per capability for the engine.
    pub fn requirements(&self, turn: Turn, group: Option<&str>) -> RoleRequirements {
        self.open_slots(turn, group)
            .into_iter()
            .map(|s| (s.capability.as_str(), 1))
            .collect()
    }

    /// Places engine results into open slots of `group` for `turn`.
    ///
    /// Each result takes the first open slot with its capability in layout
    /// order. When several slots share a capability the choice between
    /// them is arbitrary as far as the engine is concerned.
    pub fn apply(
        &mut self,
        turn: Turn,
        group: Option<&str>,
        assignments: &[Assignment],
    ) -> Result<ApplyOutcome> {
        self.check_turn(turn)?;

        let mut open: Vec<(SlotId, String)> = self
            .open_slots(turn, group)
            .into_iter()
            .map(|s| (s.id.clone(), s.capability.clone()))
            .collect();
        let mut outcome = ApplyOutcome::default();

        for assignment in assignments {
            match open.iter().position(|(_, c)| *c == assignment.capability) {
                Some(i) => {
                    let (slot_id, _) = open.remove(i);
                    self.holders
                        .insert((slot_id.clone(), turn), assignment.person_id.clone());
                    outcome.placed.push(SlotAssignment {
                        slot_id,
                        turn,
                        person_id: assignment.person_id.clone(),
                    });
                }
                None => outcome.unplaced.push(assignment.clone()),
            }
        }

        debug!(
            turn = %turn,
            placed = outcome.placed.len(),
            unplaced = outcome.unplaced.len(),
            "applied roster results"
        );
        Ok(outcome)
    }

    /// Fills the open slots of one cohort for one turn automatically.
    ///
    /// People who opted out of the date, or who already hold a slot on the
    /// same side of the youth/main split in the turn, are left out. Slots of a cohort only draw from members
    /// of that cohort.
    pub fn auto_fill(
        &mut self,
        turn: Turn,
        group: Option<&str>,
        pool: &[Person],
        calendar: &AvailabilityCalendar,
        config: &SearchConfig,
    ) -> Result<AutoFillReport> {
        self.check_turn(turn)?;

        let requirements = self.requirements(turn, group);
        let mut unavailable = calendar.unavailable_on(self.date);
        unavailable.extend(self.occupied(turn, group));

        let assignments =
            generate_assignment_with(pool, &requirements, &unavailable, group, config);
        let outcome = self.apply(turn, group, &assignments)?;

        let unfilled: Vec<MissingSlot> = self
            .open_slots(turn, group)
            .into_iter()
            .map(|s| MissingSlot {
                slot_id: s.id.clone(),
                label: s.label.clone(),
                turn,
            })
            .collect();
        if !unfilled.is_empty() {
            debug!(
                turn = %turn,
                group = group.unwrap_or("-"),
                unfilled = unfilled.len(),
                "slots left open after auto fill"
            );
        }

        Ok(AutoFillReport {
            requested: requirements.total_slots(),
            filled: outcome.placed.len(),
            unfilled,
        })
    }

    /// Runs [`auto_fill`](Self::auto_fill) for every cohort and every turn
    /// of the service, in layout order.
    pub fn auto_fill_all(
        &mut self,
        pool: &[Person],
        calendar: &AvailabilityCalendar,
        config: &SearchConfig,
    ) -> Result<Vec<AutoFillReport>> {
        let groups: Vec<Option<String>> = self
            .layout
            .groups()
            .into_iter()
            .map(|g| g.map(str::to_string))
            .collect();

        let mut reports = Vec::new();
        for &turn in self.turns() {
            for group in &groups {
                reports.push(self.auto_fill(turn, group.as_deref(), pool, calendar, config)?);
            }
        }
        Ok(reports)
    }

    /// Enabled slots lacking a holder for some required turn.
    pub fn missing(&self) -> Vec<MissingSlot> {
        let mut missing = Vec::new();
        for slot in self.layout.slots() {
            if !self.is_enabled(&slot.id) {
                continue;
            }
            for &turn in self.turns() {
                if self.holder(&slot.id, turn).is_none() {
                    missing.push(MissingSlot {
                        slot_id: slot.id.clone(),
                        label: slot.label.clone(),
                        turn,
                    });
                }
            }
        }
        missing
    }

    /// Fails with every missing slot unless the roster is complete.
    pub fn validate_complete(&self) -> Result<()> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(RosterError::Incomplete { missing })
        }
    }

    /// Holders of enabled slots for the turns in use.
    pub fn committed(&self) -> Vec<SlotAssignment> {
        let turns = self.turns();
        self.holders
            .iter()
            .filter(|((slot, turn), _)| self.is_enabled(slot) && turns.contains(turn))
            .map(|((slot, turn), person)| SlotAssignment {
                slot_id: slot.clone(),
                turn: *turn,
                person_id: person.clone(),
            })
            .collect()
    }

    /// Everyone serving on this date.
    pub fn workers(&self) -> HashSet<PersonId> {
        self.committed().into_iter().map(|a| a.person_id).collect()
    }

    pub fn slot(&self, slot_id: &str) -> Result<&ServiceSlot> {
        self.layout
            .get(slot_id)
            .ok_or_else(|| RosterError::UnknownSlot(slot_id.to_string()))
    }

    fn check_turn(&self, turn: Turn) -> Result<()> {
        if self.turns().contains(&turn) {
            Ok(())
        } else {
            Err(RosterError::TurnNotInService { turn })
        }
    }
}
