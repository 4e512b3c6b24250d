pub mod auc;
pub mod composite;
pub mod topk;

use crate::error::{MetricsError, Result};

pub(crate) fn check_aligned(labels: &[u8], scores: &[f64]) -> Result<()> {
    if labels.len() != scores.len() {
        return Err(MetricsError::LengthMismatch {
            labels: labels.len(),
            scores: scores.len(),
        });
    }
    if let Some((index, &value)) = labels.iter().enumerate().find(|(_, v)| **v > 1) {
        return Err(MetricsError::NonBinaryLabel { index, value });
    }
    Ok(())
}

pub(crate) fn count_positives(labels: &[u8]) -> u64 {
    labels.iter().map(|&l| l as u64).sum()
}
