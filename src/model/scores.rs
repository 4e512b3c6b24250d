use serde::{Deserialize, Serialize};

use crate::model::baseline::BaselineScores;
use crate::model::weights::ScoreWeights;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingMetrics {
    pub roc_auc: f64,
    pub gini: f64,
    pub recall_at_10pct: f64,
    pub lift_at_10pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineRatios {
    pub gini: f64,
    pub recall_at_10pct: f64,
    pub lift_at_10pct: f64,
}

/// Every term that goes into a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeBreakdown {
    pub model: RankingMetrics,
    pub baseline: BaselineScores,
    pub weights: ScoreWeights,
    pub ratios: BaselineRatios,
    pub final_score: f64,
}
