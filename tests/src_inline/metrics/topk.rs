use super::*;
use crate::error::MetricsError;

fn scenario() -> (Vec<u8>, Vec<f64>) {
    (
        vec![1, 0, 1, 0, 1, 0, 1, 0, 1, 0],
        vec![0.9, 0.1, 0.8, 0.2, 0.7, 0.3, 0.6, 0.4, 0.5, 0.05],
    )
}

#[test]
fn test_scenario_recall_and_lift_at_10pct() {
    let (labels, scores) = scenario();
    let sel = top_k(&labels, &scores, 0.1).unwrap();
    assert_eq!(sel.m, 1);
    assert_eq!(sel.indices, vec![0]);
    assert_eq!(sel.tp_at_k, 1);
    assert_eq!(sel.positives, 5);

    let recall = recall_at_k(&labels, &scores, 0.1).unwrap();
    let lift = lift_at_k(&labels, &scores, 0.1).unwrap();
    assert!((recall - 0.2).abs() < 1e-12);
    assert!((lift - 2.0).abs() < 1e-12);
}

#[test]
fn test_full_fraction_captures_all_positives() {
    let (labels, scores) = scenario();
    assert_eq!(recall_at_k(&labels, &scores, 1.0).unwrap(), 1.0);

    let labels = vec![0, 0, 1, 0, 1, 1, 0];
    let scores = vec![0.3, 0.9, 0.1, 0.2, 0.5, 0.05, 0.7];
    assert_eq!(recall_at_k(&labels, &scores, 1.0).unwrap(), 1.0);
    assert!((lift_at_k(&labels, &scores, 1.0).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn test_no_positives_return_zero() {
    let labels = vec![0u8; 6];
    let scores = vec![0.9, 0.8, 0.7, 0.6, 0.5, 0.4];
    let recall = recall_at_k(&labels, &scores, 0.1).unwrap();
    let lift = lift_at_k(&labels, &scores, 0.1).unwrap();
    assert_eq!(recall.to_bits(), 0.0f64.to_bits());
    assert_eq!(lift.to_bits(), 0.0f64.to_bits());
}

#[test]
fn test_empty_input_returns_zero() {
    assert_eq!(recall_at_k(&[], &[], 0.1).unwrap(), 0.0);
    assert_eq!(lift_at_k(&[], &[], 0.1).unwrap(), 0.0);
}

#[test]
fn test_cutoff_is_at_least_one() {
    assert_eq!(cutoff_count(3, 0.1), 1);
    assert_eq!(cutoff_count(0, 0.1), 1);
    assert_eq!(cutoff_count(10, 0.0), 1);
    assert_eq!(cutoff_count(10, -0.5), 1);
    assert_eq!(cutoff_count(100, 0.1), 10);
}

#[test]
fn test_cutoff_rounds_half_to_even() {
    assert_eq!(cutoff_count(5, 0.5), 2);
    assert_eq!(cutoff_count(7, 0.5), 4);
    assert_eq!(cutoff_count(9, 0.5), 4);
}

#[test]
fn test_ties_keep_input_order() {
    let labels = vec![0, 1, 1, 0];
    let scores = vec![0.5; 4];
    let sel = top_k(&labels, &scores, 0.5).unwrap();
    assert_eq!(sel.indices, vec![0, 1]);
    assert_eq!(sel.tp_at_k, 1);
    assert!((recall_at_k(&labels, &scores, 0.5).unwrap() - 0.5).abs() < 1e-12);
}

#[test]
fn test_nan_scores_rank_last() {
    let order = rank_descending(&[f64::NAN, 0.1, 0.2, f64::NAN]);
    assert_eq!(order, vec![2, 1, 0, 3]);
}

#[test]
fn test_recall_and_lift_share_selection() {
    let labels = vec![1, 0, 0, 1, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0];
    let scores = vec![
        0.2, 0.9, 0.4, 0.4, 0.1, 0.8, 0.4, 0.3, 0.6, 0.7, 0.05, 0.4, 0.55, 0.2, 0.3, 0.1, 0.0,
        0.95, 0.4, 0.4,
    ];
    for k in [0.1, 0.25, 0.3, 0.5] {
        let sel = top_k(&labels, &scores, k).unwrap();
        let recall = recall_at_k(&labels, &scores, k).unwrap();
        let lift = lift_at_k(&labels, &scores, k).unwrap();

        let tp_from_recall = recall * sel.positives as f64;
        let tp_from_lift = lift * sel.prevalence() * sel.m as f64;
        assert!((tp_from_recall - sel.tp_at_k as f64).abs() < 1e-9);
        assert!((tp_from_lift - sel.tp_at_k as f64).abs() < 1e-9);
    }
}

#[test]
fn test_fraction_above_one_keeps_unclamped_cutoff() {
    let labels = vec![1, 0, 1, 0];
    let scores = vec![0.4, 0.3, 0.2, 0.1];
    let sel = top_k(&labels, &scores, 2.0).unwrap();
    assert_eq!(sel.m, 8);
    assert_eq!(sel.indices.len(), 4);
    assert_eq!(sel.tp_at_k, 2);
    assert_eq!(sel.recall(), 1.0);
    assert!((sel.lift() - 0.5).abs() < 1e-12);
}

#[test]
fn test_length_mismatch_is_an_error() {
    let err = recall_at_k(&[0, 1], &[0.1, 0.2, 0.3], 0.1).unwrap_err();
    assert!(matches!(
        err,
        MetricsError::LengthMismatch {
            labels: 2,
            scores: 3
        }
    ));
}

#[test]
fn test_non_binary_label_is_an_error() {
    let err = lift_at_k(&[0, 2, 1], &[0.1, 0.2, 0.3], 0.1).unwrap_err();
    assert!(matches!(
        err,
        MetricsError::NonBinaryLabel { index: 1, value: 2 }
    ));
}

#[test]
fn test_topk_determinism_bits() {
    let (labels, scores) = scenario();
    for k in [0.1, 0.3, 0.7] {
        let a = lift_at_k(&labels, &scores, k).unwrap();
        let b = lift_at_k(&labels, &scores, k).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
        let a = recall_at_k(&labels, &scores, k).unwrap();
        let b = recall_at_k(&labels, &scores, k).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
