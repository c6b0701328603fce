//! Random search execution loop.

use super::config::SearchConfig;
use super::types::SearchProblem;
use crate::random::rng_from;
use rand::Rng;
use tracing::{debug, trace};

/// Result of a random search run.
#[derive(Debug, Clone)]
pub struct SearchResult<S: Clone> {
    /// The best solution found (the empty solution if no trial ran).
    pub best: S,

    /// Score of the best solution. `f64::NEG_INFINITY` if no trial ran.
    pub best_score: f64,

    /// Total number of trials sampled and scored.
    pub trials: usize,

    /// Number of trials that replaced the best-so-far.
    ///
    /// In parallel runs this is summed across workers.
    pub improving_trials: usize,

    /// Best score sampled at regular intervals. Non-decreasing.
    pub score_history: Vec<f64>,
}

/// Executes random-restart search.
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search with an RNG built from `config.seed`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`SearchConfig::validate`] first to get a descriptive error).
    pub fn run<P: SearchProblem>(problem: &P, config: &SearchConfig) -> SearchResult<P::Solution> {
        let mut rng = rng_from(config.seed);

        #[cfg(feature = "parallel")]
        {
            if config.parallel {
                config.validate().expect("invalid SearchConfig");
                return run_parallel(problem, config, &mut rng);
            }
        }

        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the search drawing every trial from the supplied RNG.
    ///
    /// `config.seed` and `config.parallel` are ignored. Trials are drawn in
    /// order, so replaying the same RNG state replays the same run.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn run_with_rng<P: SearchProblem, R: Rng + ?Sized>(
        problem: &P,
        config: &SearchConfig,
        rng: &mut R,
    ) -> SearchResult<P::Solution> {
        config.validate().expect("invalid SearchConfig");

        let result = search_chunk(problem, config.trials, config.history_interval, rng);
        debug!(
            trials = result.trials,
            improving = result.improving_trials,
            best_score = result.best_score,
            "random search finished"
        );
        result
    }
}

/// Runs `trials` independent samples and keeps the strictly best one.
fn search_chunk<P: SearchProblem, R: Rng + ?Sized>(
    problem: &P,
    trials: usize,
    history_interval: usize,
    rng: &mut R,
) -> SearchResult<P::Solution> {
    let mut best = problem.empty_solution();
    let mut best_score = f64::NEG_INFINITY;
    let mut improving_trials = 0usize;
    let mut score_history = Vec::with_capacity(trials / history_interval + 1);

    for trial in 0..trials {
        let candidate = problem.sample(rng);
        let score = problem.score(&candidate);

        // Strict comparison: the first of equally scored trials is kept.
        if score > best_score {
            trace!(trial, score, "new best trial");
            best = candidate;
            best_score = score;
            improving_trials += 1;
        }

        if (trial + 1) % history_interval == 0 {
            score_history.push(best_score);
        }
    }

    if trials > 0
        && score_history
            .last()
            .map_or(true, |&last| (last - best_score).abs() > 1e-15)
    {
        score_history.push(best_score);
    }

    SearchResult {
        best,
        best_score,
        trials,
        improving_trials,
        score_history,
    }
}

/// Splits the budget across rayon workers and merges their winners.
///
/// Each worker gets its own RNG seeded from `rng`, so a seeded run stays
/// reproducible for a fixed thread count. Winners are merged in worker
/// order with the same strict comparison as the sequential loop.
#[cfg(feature = "parallel")]
fn run_parallel<P: SearchProblem, R: Rng + ?Sized>(
    problem: &P,
    config: &SearchConfig,
    rng: &mut R,
) -> SearchResult<P::Solution> {
    use crate::random::create_rng;
    use rayon::prelude::*;

    let workers = rayon::current_num_threads().clamp(1, config.trials.max(1));
    let base = config.trials / workers;
    let extra = config.trials % workers;
    let chunks: Vec<(usize, u64)> = (0..workers)
        .map(|w| (base + usize::from(w < extra), rng.random()))
        .collect();

    let outcomes: Vec<SearchResult<P::Solution>> = chunks
        .par_iter()
        .map(|&(trials, seed)| {
            let mut chunk_rng = create_rng(seed);
            search_chunk(problem, trials, config.history_interval, &mut chunk_rng)
        })
        .collect();

    let mut merged = SearchResult {
        best: problem.empty_solution(),
        best_score: f64::NEG_INFINITY,
        trials: 0,
        improving_trials: 0,
        score_history: Vec::new(),
    };

    for outcome in outcomes {
        merged.trials += outcome.trials;
        merged.improving_trials += outcome.improving_trials;
        for score in outcome.score_history {
            merged.score_history.push(score.max(merged.best_score));
        }
        if outcome.best_score > merged.best_score {
            merged.best = outcome.best;
            merged.best_score = outcome.best_score;
        }
    }

    debug!(
        workers,
        trials = merged.trials,
        best_score = merged.best_score,
        "parallel random search finished"
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    // ---- Pick the largest value by random index ----

    struct PickLargest {
        values: Vec<f64>,
    }

    impl SearchProblem for PickLargest {
        type Solution = Option<usize>;

        fn empty_solution(&self) -> Option<usize> {
            None
        }

        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
            if self.values.is_empty() {
                None
            } else {
                Some(rng.random_range(0..self.values.len()))
            }
        }

        fn score(&self, pick: &Option<usize>) -> f64 {
            pick.map_or(0.0, |i| self.values[i])
        }
    }

    #[test]
    fn test_finds_maximum() {
        let problem = PickLargest {
            values: vec![3.0, 9.0, 1.0, 4.0, 7.0],
        };
        let config = SearchConfig::default().with_trials(200).with_seed(42);

        let result = SearchRunner::run(&problem, &config);

        assert_eq!(result.best, Some(1));
        assert!((result.best_score - 9.0).abs() < 1e-12);
        assert_eq!(result.trials, 200);
        assert!(result.improving_trials >= 1);
    }

    #[test]
    fn test_zero_trials_returns_empty() {
        let problem = PickLargest {
            values: vec![1.0, 2.0],
        };
        let config = SearchConfig::default().with_trials(0).with_seed(1);

        let result = SearchRunner::run(&problem, &config);

        assert_eq!(result.best, None);
        assert_eq!(result.best_score, f64::NEG_INFINITY);
        assert_eq!(result.trials, 0);
        assert!(result.score_history.is_empty());
    }

    #[test]
    fn test_first_seen_wins_ties() {
        // Every sample scores the same; the first one must survive.
        struct Constant;

        impl SearchProblem for Constant {
            type Solution = u32;

            fn empty_solution(&self) -> u32 {
                0
            }

            fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
                rng.random_range(1..1000)
            }

            fn score(&self, _: &u32) -> f64 {
                1.0
            }
        }

        let config = SearchConfig::default().with_trials(50);
        let mut rng = create_rng(9);
        let result = SearchRunner::run_with_rng(&Constant, &config, &mut rng);

        let mut replay = create_rng(9);
        let first = Constant.sample(&mut replay);
        assert_eq!(result.best, first);
        assert_eq!(result.improving_trials, 1);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let problem = PickLargest {
            values: (0..100).map(|i| ((i * 37) % 101) as f64).collect(),
        };
        let config = SearchConfig::default().with_trials(30).with_seed(7);

        let a = SearchRunner::run(&problem, &config);
        let b = SearchRunner::run(&problem, &config);

        assert_eq!(a.best, b.best);
        assert_eq!(a.score_history, b.score_history);
    }

    #[test]
    fn test_score_history_non_decreasing() {
        let problem = PickLargest {
            values: (0..500).map(|i| ((i * 7919) % 503) as f64).collect(),
        };
        let config = SearchConfig::default()
            .with_trials(1000)
            .with_history_interval(10)
            .with_seed(3);

        let result = SearchRunner::run(&problem, &config);

        assert!(result.score_history.len() >= 100);
        for window in result.score_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best score history should be non-decreasing: {} < {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(result.score_history.last(), Some(&result.best_score));
    }

    #[test]
    #[should_panic(expected = "invalid SearchConfig")]
    fn test_invalid_config_panics() {
        let problem = PickLargest { values: vec![1.0] };
        let config = SearchConfig::default().with_history_interval(0);
        SearchRunner::run(&problem, &config);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_runs_full_budget() {
        let problem = PickLargest {
            values: vec![2.0, 8.0, 5.0],
        };
        let config = SearchConfig::default()
            .with_trials(301)
            .with_parallel(true)
            .with_seed(11);

        let result = SearchRunner::run(&problem, &config);

        assert_eq!(result.trials, 301);
        assert_eq!(result.best, Some(1));
    }
}
