use serde::{Deserialize, Serialize};

use crate::metrics::auc::convert_auc_to_gini;
use crate::model::scores::RankingMetrics;

/// Reference model performance that the composite score is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineScores {
    pub roc_auc: f64,
    pub recall_at_10pct: f64,
    pub lift_at_10pct: f64,
}

impl BaselineScores {
    pub const REFERENCE: Self = Self {
        roc_auc: 0.6925726757936908,
        recall_at_10pct: 0.18469015795868773,
        lift_at_10pct: 1.847159286784029,
    };

    /// Gini of the stored AUC, derived on every call.
    pub fn gini(&self) -> f64 {
        convert_auc_to_gini(self.roc_auc)
    }

    pub fn from_metrics(metrics: &RankingMetrics) -> Self {
        Self {
            roc_auc: metrics.roc_auc,
            recall_at_10pct: metrics.recall_at_10pct,
            lift_at_10pct: metrics.lift_at_10pct,
        }
    }

    pub fn as_metrics(&self) -> RankingMetrics {
        RankingMetrics {
            roc_auc: self.roc_auc,
            gini: self.gini(),
            recall_at_10pct: self.recall_at_10pct,
            lift_at_10pct: self.lift_at_10pct,
        }
    }
}

impl Default for BaselineScores {
    fn default() -> Self {
        Self::REFERENCE
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/baseline.rs"]
mod tests;
