//! Text Bar Chart
//!
//! Block-glyph rendering of aggregated proceeds, grouped by strategy with
//! one bar per risk level. Denser glyphs mark riskier bands.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::{format_usd, AggregateRow};
use crate::model::RiskLevel;

const MAX_BAR_WIDTH: usize = 40;

/// Render aggregated rows as a grouped bar chart
///
/// Rows are drawn in the order given; consecutive rows sharing a strategy
/// form one group. Bars are scaled to the largest row.
pub fn render_bar_chart(rows: &[AggregateRow]) -> String {
    let max = rows
        .iter()
        .map(|r| r.proceeds)
        .max()
        .unwrap_or(Decimal::ZERO);
    if max <= Decimal::ZERO {
        return String::new();
    }

    let mut out = String::new();
    let mut current: Option<&str> = None;
    for row in rows {
        if current != Some(row.strategy.as_str()) {
            if current.is_some() {
                out.push('\n');
            }
            out.push_str(&row.strategy);
            out.push('\n');
            current = Some(row.strategy.as_str());
        }

        let ratio = (row.proceeds / max).to_f64().unwrap_or(0.0);
        let len = ((ratio * MAX_BAR_WIDTH as f64).round() as usize).clamp(1, MAX_BAR_WIDTH);
        let bar: String = std::iter::repeat(glyph_for(row.risk)).take(len).collect();
        out.push_str(&format!(
            "  risk {}  {:<MAX_BAR_WIDTH$}  {}\n",
            row.risk,
            bar,
            format_usd(row.proceeds)
        ));
    }
    out
}

/// Denser glyph = riskier band
fn glyph_for(level: RiskLevel) -> char {
    match level.get() {
        0..=4 => '░',
        5..=6 => '▒',
        7..=8 => '▓',
        _ => '█',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn agg(strategy: &str, risk: u8, proceeds: Decimal) -> AggregateRow {
        AggregateRow {
            strategy: strategy.into(),
            risk: RiskLevel::new(risk).unwrap(),
            proceeds,
        }
    }

    #[test]
    fn groups_consecutive_rows_by_strategy() {
        let rows = vec![
            agg("Conservative", 5, dec!(100)),
            agg("Conservative", 6, dec!(200)),
            agg("YOLO", 8, dec!(400)),
        ];

        let chart = render_bar_chart(&rows);
        let headers: Vec<&str> = chart
            .lines()
            .filter(|l| !l.starts_with("  ") && !l.is_empty())
            .collect();
        assert_eq!(headers, vec!["Conservative", "YOLO"]);
    }

    #[test]
    fn bars_scale_to_largest_row() {
        let rows = vec![agg("s", 8, dec!(100)), agg("s", 9, dec!(400))];

        let chart = render_bar_chart(&rows);
        let bar_len = |line: &str| line.chars().filter(|c| "░▒▓█".contains(*c)).count();
        let lines: Vec<&str> = chart.lines().filter(|l| l.starts_with("  risk")).collect();
        assert_eq!(bar_len(lines[0]), MAX_BAR_WIDTH / 4);
        assert_eq!(bar_len(lines[1]), MAX_BAR_WIDTH);
    }

    #[test]
    fn empty_and_zero_rows_render_nothing() {
        assert_eq!(render_bar_chart(&[]), "");
        assert_eq!(render_bar_chart(&[agg("s", 5, dec!(0))]), "");
    }

    #[test]
    fn riskier_bands_use_denser_glyphs() {
        let rows = vec![agg("s", 5, dec!(100)), agg("s", 9, dec!(100))];
        let chart = render_bar_chart(&rows);
        assert!(chart.contains('▒'));
        assert!(chart.contains('█'));
    }
}
