//! Random-restart search.
//!
//! The simplest stochastic search: draw a fixed budget of independent
//! candidates and keep the best one. There is no neighborhood, no
//! acceptance criterion and no early exit; quality comes purely from the
//! number of trials. Suitable when a single candidate is cheap to sample
//! and the search space is too irregular for local moves to pay off.
//!
//! Ties are resolved in favor of the first candidate seen, because the
//! best-so-far is only replaced on a strictly greater score.

mod config;
mod runner;
mod types;

pub use config::SearchConfig;
pub use runner::{SearchResult, SearchRunner};
pub use types::SearchProblem;
