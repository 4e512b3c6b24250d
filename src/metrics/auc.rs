use tracing::trace;

use crate::error::{MetricsError, Result};
use crate::metrics::topk::rank_descending;
use crate::metrics::{check_aligned, count_positives};

pub const fn convert_auc_to_gini(auc: f64) -> f64 {
    2.0 * auc - 1.0
}

/// Area under the ROC curve.
///
/// Equal scores form a single ROC point and the curve is integrated with the
/// trapezoid rule, so tied positive/negative pairs count one half.
///
/// # Errors
///
/// Fails on empty or misaligned input, non-binary labels, non-finite scores,
/// and when `labels` holds only one class.
pub fn roc_auc(labels: &[u8], scores: &[f64]) -> Result<f64> {
    check_aligned(labels, scores)?;
    if labels.is_empty() {
        return Err(MetricsError::EmptyInput);
    }
    if let Some(index) = scores.iter().position(|s| !s.is_finite()) {
        return Err(MetricsError::NonFiniteScore { index });
    }

    let positives = count_positives(labels);
    let negatives = labels.len() as u64 - positives;
    if positives == 0 || negatives == 0 {
        return Err(MetricsError::UndefinedAuc);
    }

    let order = rank_descending(scores);

    // Twice the trapezoid area in count units, kept exact until the end.
    let mut area2: u128 = 0;
    let (mut tp, mut fp) = (0u64, 0u64);
    let mut i = 0;
    while i < order.len() {
        let (prev_tp, prev_fp) = (tp, fp);
        let current = scores[order[i]];
        while i < order.len() && scores[order[i]] == current {
            if labels[order[i]] == 1 {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        area2 += (fp - prev_fp) as u128 * (tp + prev_tp) as u128;
    }

    let auc = area2 as f64 / (2 * positives as u128 * negatives as u128) as f64;
    trace!(positives, negatives, auc, "roc auc");
    Ok(auc)
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/auc.rs"]
mod tests;
