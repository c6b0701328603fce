//! Service schedules: the caller side of the roster engine.
//!
//! A [`Schedule`] is the editable roster of one date. It turns its open
//! slots into [`RoleRequirements`](crate::roster::RoleRequirements), places
//! engine results back into slots, and reports what is still missing.
//! The engine never touches a schedule directly.

mod availability;
mod board;
mod candidates;
mod slot;

pub use availability::AvailabilityCalendar;
pub use board::{ApplyOutcome, AutoFillReport, MissingSlot, Schedule, SlotAssignment};
pub use candidates::{is_low_fairness, qualified_candidates, CandidateOption, LOW_FAIRNESS_THRESHOLD};
pub use slot::{ServiceLayout, ServiceSlot, SlotId, Turn, BAND, YOUTH};
