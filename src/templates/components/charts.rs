use maud::{html, Markup};

/// A small SVG bar chart, one bar per labeled value.
pub fn bar_chart(title: &str, bars: &[(String, f64)]) -> Markup {
    const WIDTH: f64 = 320.0;
    const HEIGHT: f64 = 200.0;
    const BASELINE: f64 = 160.0;

    let tallest = bars.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let slot = WIDTH / bars.len().max(1) as f64;

    html! {
        figure class="chart" {
            figcaption { (title) }
            @if bars.is_empty() {
                p class="muted" { "No data for the current filters." }
            } @else {
                svg viewBox=(format!("0 0 {WIDTH} {HEIGHT}")) role="img" {
                    @for (i, (label, value)) in bars.iter().enumerate() {
                        @let height = if tallest > 0.0 { value / tallest * 130.0 } else { 0.0 };
                        @let x = i as f64 * slot + slot * 0.2;
                        rect class="bar" x=(x) y=(BASELINE - height) width=(slot * 0.6) height=(height) {}
                        text class="bar-value" x=(x + slot * 0.3) y=(BASELINE - height - 6.0) text-anchor="middle" {
                            (format!("{value:.0}$"))
                        }
                        text class="bar-label" x=(x + slot * 0.3) y=(BASELINE + 18.0) text-anchor="middle" {
                            (label)
                        }
                    }
                }
            }
        }
    }
}

/// Actual price against predicted price, with the identity line as a
/// reference, like the accuracy plot of the original dashboard.
pub fn accuracy_scatter(points: &[(f64, f64)]) -> Markup {
    const SIZE: f64 = 360.0;
    const PAD: f64 = 24.0;

    let highest = points
        .iter()
        .map(|(actual, predicted)| actual.max(*predicted))
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let scale = |v: f64| PAD + v / highest * (SIZE - 2.0 * PAD);

    html! {
        figure class="chart" {
            figcaption { "Actual vs predicted price" }
            @if points.is_empty() {
                p class="muted" { "No data for the current filters." }
            } @else {
                svg viewBox=(format!("0 0 {SIZE} {SIZE}")) role="img" {
                    line class="trendline"
                        x1=(scale(0.0)) y1=(SIZE - scale(0.0))
                        x2=(scale(highest)) y2=(SIZE - scale(highest)) {}
                    @for (actual, predicted) in points {
                        circle class="dot" cx=(scale(*actual)) cy=(SIZE - scale(*predicted)) r="3" {}
                    }
                }
                p class="muted" { "Dots above the line are predicted higher than listed." }
            }
        }
    }
}
