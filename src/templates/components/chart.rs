// Inline SVG charts for the dashboard.

use maud::{html, Markup};

const WIDTH: f64 = 640.0;
const LABEL_WIDTH: f64 = 180.0;
const ROW_HEIGHT: f64 = 26.0;
const PLOT_HEIGHT: f64 = 320.0;
const MARGIN: f64 = 40.0;

pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Horizontal bar chart, one row per bar, scaled to the largest value.
pub fn bar_chart(caption: &str, bars: &[Bar], unit: &str) -> Markup {
    let max = bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
    let bar_space = WIDTH - LABEL_WIDTH - 80.0;
    let height = ROW_HEIGHT * bars.len() as f64 + 10.0;

    html! {
        figure class="chart" {
            svg
                xmlns="http://www.w3.org/2000/svg"
                viewBox=(format!("0 0 {WIDTH} {height}"))
                role="img"
                aria-label=(caption)
            {
                @for (i, bar) in bars.iter().enumerate() {
                    @let y = ROW_HEIGHT * i as f64 + 5.0;
                    @let w = if max > 0.0 { bar.value / max * bar_space } else { 0.0 };
                    text x=(LABEL_WIDTH - 8.0) y=(y + 15.0) text-anchor="end" class="chart-label" {
                        (bar.label)
                    }
                    rect x=(LABEL_WIDTH) y=(y) width=(format!("{w:.1}")) height=(ROW_HEIGHT - 6.0) class="chart-bar" {}
                    text x=(format!("{:.1}", LABEL_WIDTH + w + 6.0)) y=(y + 15.0) class="chart-value" {
                        (format!("{:.1}", bar.value)) " " (unit)
                    }
                }
            }
            figcaption { (caption) }
        }
    }
}

/// Scatter plot of `(x, y)` points with min/max tick labels on both axes.
pub fn scatter_chart(caption: &str, points: &[(f64, f64)], x_label: &str, y_label: &str) -> Markup {
    let (x_min, x_max) = bounds(points.iter().map(|p| p.0));
    let (y_min, y_max) = bounds(points.iter().map(|p| p.1));
    let plot_w = WIDTH - 2.0 * MARGIN;

    let sx = |x: f64| MARGIN + (x - x_min) / span(x_min, x_max) * plot_w;
    let sy = |y: f64| MARGIN / 2.0 + PLOT_HEIGHT - (y - y_min) / span(y_min, y_max) * PLOT_HEIGHT;
    let bottom = MARGIN / 2.0 + PLOT_HEIGHT;

    html! {
        figure class="chart" {
            svg
                xmlns="http://www.w3.org/2000/svg"
                viewBox=(format!("0 0 {WIDTH} {}", PLOT_HEIGHT + 2.0 * MARGIN))
                role="img"
                aria-label=(caption)
            {
                line x1=(MARGIN) y1=(bottom) x2=(WIDTH - MARGIN) y2=(bottom) class="chart-axis" {}
                line x1=(MARGIN) y1=(MARGIN / 2.0) x2=(MARGIN) y2=(bottom) class="chart-axis" {}

                @for (x, y) in points {
                    circle cx=(format!("{:.1}", sx(*x))) cy=(format!("{:.1}", sy(*y))) r="2.5" class="chart-point" {}
                }

                text x=(MARGIN) y=(bottom + 16.0) class="chart-label" { (format!("{x_min:.0}")) }
                text x=(WIDTH - MARGIN) y=(bottom + 16.0) text-anchor="end" class="chart-label" { (format!("{x_max:.0}")) }
                text x=(WIDTH / 2.0) y=(bottom + 32.0) text-anchor="middle" class="chart-label" { (x_label) }
                text x=(MARGIN - 4.0) y=(bottom) text-anchor="end" class="chart-label" { (format!("{y_min:.0}")) }
                text x=(MARGIN - 4.0) y=(MARGIN / 2.0 + 10.0) text-anchor="end" class="chart-label" { (format!("{y_max:.0}")) }
                text x="4" y="12" class="chart-label" { (y_label) }
            }
            figcaption { (caption) }
        }
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if lo.is_finite() {
        (lo, hi)
    } else {
        (0.0, 1.0)
    }
}

fn span(lo: f64, hi: f64) -> f64 {
    if hi > lo {
        hi - lo
    } else {
        1.0
    }
}
