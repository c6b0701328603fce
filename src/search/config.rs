//! Random search configuration.

/// Default number of independent trials per run.
pub const DEFAULT_TRIALS: usize = 2000;

/// Configuration for [`SearchRunner`](super::SearchRunner).
///
/// # Examples
///
/// ```
/// use u_roster::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_trials(500)
///     .with_seed(42);
/// assert_eq!(config.trials, 500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Number of independent trials. Always runs to completion.
    ///
    /// Zero is allowed and yields the empty solution.
    pub trials: usize,

    /// Random seed for reproducibility. `None` draws fresh entropy.
    pub seed: Option<u64>,

    /// Split the budget across rayon workers.
    ///
    /// Only honored when the crate is built with the `parallel` feature.
    pub parallel: bool,

    /// Record the best score every this many trials.
    pub history_interval: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            parallel: false,
            history_interval: 100,
        }
    }
}

impl SearchConfig {
    /// Sets the number of trials to sample.
    pub fn with_trials(mut self, n: usize) -> Self {
        self.trials = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables rayon fan-out (requires the `parallel` feature).
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets how many trials pass between score history samples.
    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.history_interval == 0 {
            return Err("history_interval must be positive".into());
        }
        Ok(())
    }
}
