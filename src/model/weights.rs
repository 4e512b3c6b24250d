use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub gini: f64,
    pub recall_at_10pct: f64,
    pub lift_at_10pct: f64,
}

impl ScoreWeights {
    pub const DEFAULT: Self = Self {
        gini: 0.4,
        recall_at_10pct: 0.3,
        lift_at_10pct: 0.3,
    };

    pub fn total(&self) -> f64 {
        self.gini + self.recall_at_10pct + self.lift_at_10pct
    }

    /// Weighted sum of the three baseline ratios.
    pub fn combine(&self, gini_ratio: f64, recall_ratio: f64, lift_ratio: f64) -> f64 {
        gini_ratio * self.gini + recall_ratio * self.recall_at_10pct + lift_ratio * self.lift_at_10pct
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}
