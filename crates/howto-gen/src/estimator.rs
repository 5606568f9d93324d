use howto_core::Difficulty;
use rand::seq::IndexedRandom;

/// Duration labels a tutorial can be tagged with.
const TIME_ESTIMATES: [&str; 4] = [
    "5-10 minutes",
    "10-15 minutes",
    "15-30 minutes",
    "20-45 minutes",
];

/// Time and difficulty attached to a generated tutorial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Estimate {
    pub time: String,
    pub difficulty: Difficulty,
}

/// Strategy for tagging a tutorial with a time estimate and difficulty.
pub trait Estimator: Send + Sync {
    fn estimate(&self, query: &str) -> Estimate;
}

/// Draws uniformly from the fixed pools. The tags are display dressing,
/// not derived from the query, and vary between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformEstimator;

impl Estimator for UniformEstimator {
    fn estimate(&self, _query: &str) -> Estimate {
        let mut rng = rand::rng();
        let time = TIME_ESTIMATES
            .choose(&mut rng)
            .copied()
            .unwrap_or("10-15 minutes");
        let difficulty = Difficulty::ALL
            .choose(&mut rng)
            .copied()
            .unwrap_or(Difficulty::Beginner);
        Estimate {
            time: time.to_string(),
            difficulty,
        }
    }
}

/// Returns the same estimate every time, for deterministic output.
#[derive(Debug, Clone)]
pub struct FixedEstimator {
    time: String,
    difficulty: Difficulty,
}

impl FixedEstimator {
    pub fn new(time: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            time: time.into(),
            difficulty,
        }
    }
}

impl Estimator for FixedEstimator {
    fn estimate(&self, _query: &str) -> Estimate {
        Estimate {
            time: self.time.clone(),
            difficulty: self.difficulty,
        }
    }
}
