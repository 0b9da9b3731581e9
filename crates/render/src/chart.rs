//! Win/loss pie chart rendered as inline SVG

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use report_types::OutcomeStats;

const WIN_FILL: &str = "#2ecc71";
const WIN_STROKE: &str = "#27ae60";
const LOSS_FILL: &str = "#e74c3c";
const LOSS_STROKE: &str = "#c0392b";
const EMPTY_FILL: &str = "#ecf0f1";
const EMPTY_STROKE: &str = "#bdc3c7";

const WIDTH: f64 = 220.0;
const HEIGHT: f64 = 250.0;
const CX: f64 = 110.0;
const CY: f64 = 140.0;
const RADIUS: f64 = 100.0;

/// Render a two-slice pie chart with the legend on top.
///
/// Zero wins and zero losses draw an empty placeholder circle; a single
/// non-zero count draws a full circle in that slice's colour.
pub fn render_pie_chart(stats: OutcomeStats) -> String {
    let slices = match (stats.wins, stats.losses) {
        (0, 0) => full_circle(EMPTY_FILL, EMPTY_STROKE),
        (_, 0) => full_circle(WIN_FILL, WIN_STROKE),
        (0, _) => full_circle(LOSS_FILL, LOSS_STROKE),
        (wins, _) => {
            let fraction = wins as f64 / stats.total() as f64;
            let split = -FRAC_PI_2 + TAU * fraction;
            format!(
                "{}\n{}",
                slice(-FRAC_PI_2, split, WIN_FILL, WIN_STROKE),
                slice(split, -FRAC_PI_2 + TAU, LOSS_FILL, LOSS_STROKE)
            )
        }
    };

    format!(
        r#"<svg class="pie-chart" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" width="{WIDTH}" height="{HEIGHT}" role="img">
{legend}
{slices}
</svg>"#,
        legend = legend(stats),
    )
}

fn legend(stats: OutcomeStats) -> String {
    format!(
        r#"<g class="legend" font-size="12">
<rect x="30" y="6" width="12" height="12" fill="{WIN_FILL}" stroke="{WIN_STROKE}"/><text x="46" y="16">Wins ({wins})</text>
<rect x="120" y="6" width="12" height="12" fill="{LOSS_FILL}" stroke="{LOSS_STROKE}"/><text x="136" y="16">Losses ({losses})</text>
</g>"#,
        wins = stats.wins,
        losses = stats.losses,
    )
}

fn full_circle(fill: &str, stroke: &str) -> String {
    format!(
        r#"<circle cx="{CX}" cy="{CY}" r="{RADIUS}" fill="{fill}" stroke="{stroke}" stroke-width="1"/>"#
    )
}

fn slice(from: f64, to: f64, fill: &str, stroke: &str) -> String {
    let (x0, y0) = point(from);
    let (x1, y1) = point(to);
    let large_arc = u8::from(to - from > PI);
    format!(
        r#"<path d="M {CX} {CY} L {x0:.3} {y0:.3} A {RADIUS} {RADIUS} 0 {large_arc} 1 {x1:.3} {y1:.3} Z" fill="{fill}" stroke="{stroke}" stroke-width="1"/>"#
    )
}

fn point(angle: f64) -> (f64, f64) {
    (RADIUS.mul_add(angle.cos(), CX), RADIUS.mul_add(angle.sin(), CY))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_slices() {
        let svg = render_pie_chart(OutcomeStats { wins: 1, losses: 1 });
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains(WIN_FILL));
        assert!(svg.contains(LOSS_FILL));
        assert!(svg.contains("Wins (1)"));
        assert!(svg.contains("Losses (1)"));
        // Half/half: the win slice runs from the top to the bottom of the circle.
        assert!(svg.contains("M 110 140 L 110.000 40.000 A 100 100 0 0 1 110.000 240.000 Z"));
    }

    #[test]
    fn test_large_arc_flag_for_majority_slice() {
        let svg = render_pie_chart(OutcomeStats { wins: 3, losses: 1 });
        assert!(svg.contains(&format!(r#"A 100 100 0 1 1 10.000 140.000 Z" fill="{WIN_FILL}""#)));
        assert!(svg.contains(&format!(r#"A 100 100 0 0 1 110.000 40.000 Z" fill="{LOSS_FILL}""#)));
    }

    #[test]
    fn test_single_outcome_draws_full_circle() {
        let svg = render_pie_chart(OutcomeStats { wins: 4, losses: 0 });
        assert!(!svg.contains("<path"));
        assert!(svg.contains(&format!(r#"fill="{WIN_FILL}" stroke="{WIN_STROKE}" stroke-width"#)));

        let svg = render_pie_chart(OutcomeStats { wins: 0, losses: 2 });
        assert!(svg.contains(&format!(r#"r="100" fill="{LOSS_FILL}""#)));
    }

    #[test]
    fn test_no_outcomes_draws_placeholder() {
        let svg = render_pie_chart(OutcomeStats::default());
        assert!(svg.contains(EMPTY_FILL));
        assert!(svg.contains("Wins (0)"));
    }
}
