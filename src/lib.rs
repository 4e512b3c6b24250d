//! Top-k ranking metrics for binary classifiers and a composite score
//! measured against a fixed baseline model.

pub mod error;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod report;

pub use error::{MetricsError, Result};
pub use metrics::auc::{convert_auc_to_gini, roc_auc};
pub use metrics::composite::{
    breakdown_from_metrics, composite_breakdown, composite_breakdown_with, composite_score,
    composite_score_with, ranking_metrics,
};
pub use metrics::topk::{DEFAULT_TOP_FRACTION, TopK, lift_at_k, recall_at_k, top_k};
pub use model::baseline::BaselineScores;
pub use model::scores::{BaselineRatios, CompositeBreakdown, RankingMetrics};
pub use model::weights::ScoreWeights;
