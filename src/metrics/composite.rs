use tracing::debug;

use crate::error::Result;
use crate::metrics::auc::{convert_auc_to_gini, roc_auc};
use crate::metrics::topk::{DEFAULT_TOP_FRACTION, top_k};
use crate::model::baseline::BaselineScores;
use crate::model::scores::{BaselineRatios, CompositeBreakdown, RankingMetrics};
use crate::model::weights::ScoreWeights;

/// AUC, Gini, recall@10% and lift@10% for one model.
pub fn ranking_metrics(labels: &[u8], scores: &[f64]) -> Result<RankingMetrics> {
    let roc_auc = roc_auc(labels, scores)?;
    let selection = top_k(labels, scores, DEFAULT_TOP_FRACTION)?;
    Ok(RankingMetrics {
        roc_auc,
        gini: convert_auc_to_gini(roc_auc),
        recall_at_10pct: selection.recall(),
        lift_at_10pct: selection.lift(),
    })
}

/// Ratios against `baseline`, weighted into one score. Ratios are not
/// clamped, so a baseline Gini near zero can dominate.
pub fn breakdown_from_metrics(
    model: &RankingMetrics,
    baseline: &BaselineScores,
    weights: &ScoreWeights,
) -> CompositeBreakdown {
    let ratios = BaselineRatios {
        gini: model.gini / baseline.gini(),
        recall_at_10pct: model.recall_at_10pct / baseline.recall_at_10pct,
        lift_at_10pct: model.lift_at_10pct / baseline.lift_at_10pct,
    };
    let final_score = weights.combine(ratios.gini, ratios.recall_at_10pct, ratios.lift_at_10pct);
    debug!(
        gini_ratio = ratios.gini,
        recall_ratio = ratios.recall_at_10pct,
        lift_ratio = ratios.lift_at_10pct,
        final_score,
        "composite score"
    );

    CompositeBreakdown {
        model: *model,
        baseline: *baseline,
        weights: *weights,
        ratios,
        final_score,
    }
}

pub fn composite_breakdown_with(
    labels: &[u8],
    scores: &[f64],
    baseline: &BaselineScores,
    weights: &ScoreWeights,
) -> Result<CompositeBreakdown> {
    let model = ranking_metrics(labels, scores)?;
    Ok(breakdown_from_metrics(&model, baseline, weights))
}

pub fn composite_breakdown(labels: &[u8], scores: &[f64]) -> Result<CompositeBreakdown> {
    composite_breakdown_with(
        labels,
        scores,
        &BaselineScores::REFERENCE,
        &ScoreWeights::DEFAULT,
    )
}

pub fn composite_score_with(
    labels: &[u8],
    scores: &[f64],
    baseline: &BaselineScores,
    weights: &ScoreWeights,
) -> Result<f64> {
    Ok(composite_breakdown_with(labels, scores, baseline, weights)?.final_score)
}

/// Weighted Gini, recall@10% and lift@10% ratios against the reference
/// baseline (0.4 / 0.3 / 0.3).
pub fn composite_score(labels: &[u8], scores: &[f64]) -> Result<f64> {
    Ok(composite_breakdown(labels, scores)?.final_score)
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/composite.rs"]
mod tests;
