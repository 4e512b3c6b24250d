use std::cmp::Ordering;

use tracing::trace;

use crate::error::Result;
use crate::metrics::{check_aligned, count_positives};

/// Fraction of the ranking flagged positive by the composite score.
pub const DEFAULT_TOP_FRACTION: f64 = 0.1;

/// The items flagged positive when only the top `k` fraction is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopK {
    pub n: usize,
    /// Cutoff count. Always >= 1 and not clamped to `n`.
    pub m: usize,
    /// Selected indices, best score first.
    pub indices: Vec<usize>,
    pub tp_at_k: u64,
    pub positives: u64,
}

impl TopK {
    pub fn recall(&self) -> f64 {
        if self.positives > 0 {
            self.tp_at_k as f64 / self.positives as f64
        } else {
            0.0
        }
    }

    pub fn precision(&self) -> f64 {
        self.tp_at_k as f64 / self.m as f64
    }

    pub fn prevalence(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        self.positives as f64 / self.n as f64
    }

    pub fn lift(&self) -> f64 {
        let prevalence = self.prevalence();
        if prevalence > 0.0 {
            self.precision() / prevalence
        } else {
            0.0
        }
    }
}

/// `max(1, round(k * n))` with ties rounded to even.
pub fn cutoff_count(n: usize, k: f64) -> usize {
    let raw = (k * n as f64).round_ties_even();
    if raw >= 1.0 { raw as usize } else { 1 }
}

/// Indices ordered by score, highest first. Equal scores keep input order;
/// NaN sorts last.
pub fn rank_descending(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| compare_desc(scores[a], scores[b]));
    order
}

fn compare_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

pub fn top_k(labels: &[u8], scores: &[f64], k: f64) -> Result<TopK> {
    check_aligned(labels, scores)?;
    let n = labels.len();
    let m = cutoff_count(n, k);

    let mut indices = rank_descending(scores);
    indices.truncate(m);

    let tp_at_k: u64 = indices.iter().map(|&i| labels[i] as u64).sum();
    let positives = count_positives(labels);
    trace!(n, m, tp_at_k, positives, "top-k selection");

    Ok(TopK {
        n,
        m,
        indices,
        tp_at_k,
        positives,
    })
}

/// Share of all positives that land in the top `k` fraction.
pub fn recall_at_k(labels: &[u8], scores: &[f64], k: f64) -> Result<f64> {
    Ok(top_k(labels, scores, k)?.recall())
}

/// Precision in the top `k` fraction divided by overall prevalence.
pub fn lift_at_k(labels: &[u8], scores: &[f64], k: f64) -> Result<f64> {
    Ok(top_k(labels, scores, k)?.lift())
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/topk.rs"]
mod tests;
