pub mod json;
pub mod text;

pub use json::render_breakdown_json;
pub use text::render_breakdown_text;

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
