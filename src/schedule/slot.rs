//! Service slots, layouts and turns.

use crate::roster::{Capability, GroupTag};
use std::fmt;

/// Identifier of a slot in a service layout ("voice1", "sound").
pub type SlotId = String;

/// Cohort tag of the main band.
pub const BAND: &str = "band";

/// Cohort tag of the youth band.
pub const YOUTH: &str = "youth";

/// Part of the day a slot is staffed for.
///
/// A split service staffs every slot twice, once per `Morning` and
/// `Evening`; otherwise each slot is staffed once for `Both`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    Morning,
    Evening,
    Both,
}

impl Turn {
    /// Turns every enabled slot must be staffed for.
    pub fn for_service(split: bool) -> &'static [Turn] {
        if split {
            &[Turn::Morning, Turn::Evening]
        } else {
            &[Turn::Both]
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::Morning => write!(f, "AM"),
            Turn::Evening => write!(f, "PM"),
            Turn::Both => write!(f, "AM+PM"),
        }
    }
}

/// One position of a service that one person fills.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceSlot {
    pub id: SlotId,
    pub label: String,
    pub section: String,
    /// Capability the holder must have.
    pub capability: Capability,
    /// Cohort the holder must belong to. `None` is open to everyone.
    pub group: Option<GroupTag>,
}

impl ServiceSlot {
    pub fn new(
        id: impl Into<SlotId>,
        label: impl Into<String>,
        section: impl Into<String>,
        capability: impl Into<Capability>,
        group: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            section: section.into(),
            capability: capability.into(),
            group: group.map(str::to_string),
        }
    }

    /// Whether the slot belongs to the youth service.
    pub fn is_youth(&self) -> bool {
        self.group.as_deref() == Some(YOUTH)
    }
}

/// The ordered set of slots making up a service.
///
/// Order matters: it is the order requirements are derived in, and the
/// order engine results are placed into open slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceLayout {
    slots: Vec<ServiceSlot>,
}

impl ServiceLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot. A slot whose id is already present replaces it.
    pub fn with_slot(mut self, slot: ServiceSlot) -> Self {
        match self.slots.iter_mut().find(|s| s.id == slot.id) {
            Some(existing) => *existing = slot,
            None => self.slots.push(slot),
        }
        self
    }

    /// The weekly worship service: band, sound desk, streaming and the
    /// Saturday youth band.
    pub fn standard() -> Self {
        let band = [
            ("worshipLeader", "Leader", "voice"),
            ("voice1", "Voice 1", "voice"),
            ("voice2", "Voice 2", "voice"),
            ("voice3", "Voice 3", "voice"),
            ("voice4", "Voice 4", "voice"),
            ("piano", "Piano", "piano"),
            ("acousticGuitar", "Acoustic", "guitar"),
            ("bass", "Bass", "bass"),
            ("drums", "Drums", "drums"),
            ("electricGuitar", "Electric", "guitar"),
        ];
        let youth = [
            ("youthLeader", "Leader", "voice"),
            ("youthVoice1", "Voice 1", "voice"),
            ("youthVoice2", "Voice 2", "voice"),
            ("youthGuitar", "Guitar", "guitar"),
            ("youthBass", "Bass", "bass"),
            ("youthDrums", "Drums", "drums"),
        ];

        let mut layout = Self::new();
        for (id, label, capability) in band {
            layout = layout.with_slot(ServiceSlot::new(id, label, "Band", capability, Some(BAND)));
        }
        layout = layout
            .with_slot(ServiceSlot::new("sound", "Room", "Sound", "media", None))
            .with_slot(ServiceSlot::new("streaming", "Streaming", "Streaming", "media", None));
        for (id, label, capability) in youth {
            layout = layout.with_slot(ServiceSlot::new(id, label, "Youth", capability, Some(YOUTH)));
        }
        layout
    }

    pub fn slots(&self) -> &[ServiceSlot] {
        &self.slots
    }

    pub fn get(&self, id: &str) -> Option<&ServiceSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Distinct slot cohorts in first-appearance order.
    pub fn groups(&self) -> Vec<Option<&str>> {
        let mut groups: Vec<Option<&str>> = Vec::new();
        for slot in &self.slots {
            let group = slot.group.as_deref();
            if !groups.contains(&group) {
                groups.push(group);
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_for_service() {
        assert_eq!(Turn::for_service(false), &[Turn::Both]);
        assert_eq!(Turn::for_service(true), &[Turn::Morning, Turn::Evening]);
    }

    #[test]
    fn test_standard_layout() {
        let layout = ServiceLayout::standard();

        assert_eq!(layout.len(), 18);
        assert_eq!(layout.slots()[0].id, "worshipLeader");
        assert_eq!(layout.get("streaming").map(|s| s.capability.as_str()), Some("media"));
        assert_eq!(layout.get("youthBass").and_then(|s| s.group.as_deref()), Some(YOUTH));
        assert_eq!(layout.groups(), vec![Some(BAND), None, Some(YOUTH)]);
    }

    #[test]
    fn test_with_slot_replaces_same_id() {
        let layout = ServiceLayout::new()
            .with_slot(ServiceSlot::new("a", "A", "S", "voice", None))
            .with_slot(ServiceSlot::new("a", "A", "S", "piano", None));

        assert_eq!(layout.len(), 1);
        assert_eq!(layout.slots()[0].capability, "piano");
    }
}
