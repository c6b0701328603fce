//! Randomized roster generation for volunteer service rotas.
//!
//! Assigns people to the open slots of a recurring service (vocalists,
//! instrumentalists, sound desk) so that everyone placed is qualified and
//! available, nobody fills two slots, rested people are favored over
//! recently busy ones, and couples are kept together.
//!
//! - **Search**: generic random-restart search. Draws a fixed budget of
//!   independent candidates and keeps the best.
//! - **Roster**: the roster engine. A random feasible assignment
//!   generator, a weighted fitness function, and the
//!   [`generate_assignment`](roster::generate_assignment) entry point.
//! - **Schedule**: the editable roster of one date. Derives open slot
//!   counts, places engine results, lists candidates, checks completeness.
//! - **Fairness**: rest-credit bookkeeping as dates are settled or
//!   deleted.
//!
//! # Architecture
//!
//! The engine (`search` + `roster`) is a pure function of its inputs and
//! performs no I/O. Persistence, authentication and presentation belong
//! to the caller; `schedule` and `fairness` are in-memory helpers for
//! that caller.
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use u_roster::roster::{generate_assignment_with, Person, RoleRequirements};
//! use u_roster::search::SearchConfig;
//!
//! let pool = vec![
//!     Person::new("ana").with_primary("voice").with_fairness(80.0),
//!     Person::new("bo").with_qualification("voice").with_fairness(100.0),
//! ];
//! let requirements = RoleRequirements::new().with("voice", 1);
//! let config = SearchConfig::default().with_seed(42);
//!
//! let picked = generate_assignment_with(&pool, &requirements, &HashSet::new(), None, &config);
//! assert_eq!(picked[0].person_id, "bo");
//! ```

pub mod error;
pub mod fairness;
pub mod random;
pub mod roster;
pub mod schedule;
pub mod search;

pub use error::RosterError;
