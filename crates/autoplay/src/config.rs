use crate::ObjectiveWeights;

#[derive(Debug, Clone)]
pub struct AutoplayConfig {
    pub seed: u64,
    pub players: usize,
    pub max_steps: u32,
    pub action_retry_limit: u32,
    pub max_fix_candidates: usize,
    /// Chance of playing a random legal action instead of the best scored one.
    pub explore: f64,
    pub weights: ObjectiveWeights,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 0xC0FFEE,
            players: 3,
            max_steps: 4000,
            action_retry_limit: 6,
            max_fix_candidates: 8,
            explore: 0.1,
            weights: ObjectiveWeights::default(),
        }
    }
}
