use maud::{html, Markup};

/// A labeled value with its distance from the full-dataset mean.
pub fn metric_card(label: &str, value: &str, delta: f64, delta_suffix: &str) -> Markup {
    let delta_class = if delta < 0.0 {
        "delta negative"
    } else {
        "delta"
    };
    html! {
        div class="metric" {
            span class="metric-label" { (label) }
            span class="metric-value" { (value) }
            span class=(delta_class) { (format!("{delta:+.1}")) " " (delta_suffix) }
        }
    }
}
