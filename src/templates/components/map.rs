use maud::{html, Markup};

/// The filtered listings plotted by coordinate. Not a real map, but enough
/// to see where in the city the current selection sits.
pub fn listings_map(points: &[(f64, f64)]) -> Markup {
    const WIDTH: f64 = 420.0;
    const HEIGHT: f64 = 420.0;
    const PAD: f64 = 16.0;

    if points.is_empty() {
        return html! {
            div class="map empty" {
                p class="muted" { "No listings match your filters." }
            }
        };
    }

    let mut lat_min = f64::INFINITY;
    let mut lat_max = f64::NEG_INFINITY;
    let mut lon_min = f64::INFINITY;
    let mut lon_max = f64::NEG_INFINITY;
    for (lat, lon) in points {
        lat_min = lat_min.min(*lat);
        lat_max = lat_max.max(*lat);
        lon_min = lon_min.min(*lon);
        lon_max = lon_max.max(*lon);
    }
    // A single listing still needs a non-zero span to project into.
    let lat_span = (lat_max - lat_min).max(0.0001);
    let lon_span = (lon_max - lon_min).max(0.0001);

    let x = |lon: f64| PAD + (lon - lon_min) / lon_span * (WIDTH - 2.0 * PAD);
    // Latitude grows northwards, SVG y grows downwards.
    let y = |lat: f64| HEIGHT - PAD - (lat - lat_min) / lat_span * (HEIGHT - 2.0 * PAD);

    html! {
        div class="map" {
            svg viewBox=(format!("0 0 {WIDTH} {HEIGHT}")) role="img" {
                @for (lat, lon) in points {
                    circle class="pin" cx=(x(*lon)) cy=(y(*lat)) r="4" {}
                }
            }
        }
    }
}
