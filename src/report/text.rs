use crate::model::scores::CompositeBreakdown;
use crate::report::format_f64_6;

pub fn render_breakdown_text(b: &CompositeBreakdown) -> String {
    let mut out = String::new();

    out.push_str("Composite Ranking Score\n");
    out.push_str("=======================\n\n");

    out.push_str("metric            model        baseline     ratio        weight\n");
    push_row(
        &mut out,
        "gini",
        b.model.gini,
        b.baseline.gini(),
        b.ratios.gini,
        b.weights.gini,
    );
    push_row(
        &mut out,
        "recall@10%",
        b.model.recall_at_10pct,
        b.baseline.recall_at_10pct,
        b.ratios.recall_at_10pct,
        b.weights.recall_at_10pct,
    );
    push_row(
        &mut out,
        "lift@10%",
        b.model.lift_at_10pct,
        b.baseline.lift_at_10pct,
        b.ratios.lift_at_10pct,
        b.weights.lift_at_10pct,
    );
    out.push('\n');
    out.push_str(&format!("ROC AUC: {}\n", format_f64_6(b.model.roc_auc)));
    out.push_str(&format!("Final score: {}\n", format_f64_6(b.final_score)));
    out
}

fn push_row(out: &mut String, name: &str, model: f64, baseline: f64, ratio: f64, weight: f64) {
    out.push_str(&format!(
        "{:<17} {:<12} {:<12} {:<12} {}\n",
        name,
        format_f64_6(model),
        format_f64_6(baseline),
        format_f64_6(ratio),
        format_f64_6(weight)
    ));
}
