//! Errors raised by the schedule and fairness bookkeeping.
//!
//! The roster engine itself has no error path.

use crate::roster::PersonId;
use crate::schedule::{MissingSlot, SlotId, Turn};
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    #[error("unknown slot `{0}`")]
    UnknownSlot(SlotId),

    #[error("slot `{0}` is disabled")]
    SlotDisabled(SlotId),

    #[error("turn {turn} is not used by this service")]
    TurnNotInService { turn: Turn },

    #[error("unknown person `{0}`")]
    UnknownPerson(PersonId),

    #[error("{} slot(s) left without a volunteer", .missing.len())]
    Incomplete { missing: Vec<MissingSlot> },

    #[error("service date {0} has not been settled")]
    DateNotProcessed(NaiveDate),
}

pub type Result<T> = std::result::Result<T, RosterError>;
