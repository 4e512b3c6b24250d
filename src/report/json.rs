use crate::error::Result;
use crate::model::scores::CompositeBreakdown;

pub fn render_breakdown_json(breakdown: &CompositeBreakdown) -> Result<String> {
    Ok(serde_json::to_string_pretty(breakdown)?)
}
