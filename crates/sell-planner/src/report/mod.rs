//! Report Building
//!
//! Aggregation, sorting, and text rendering of engine output rows. Kept
//! separate from the strategies: they only produce ordered `ProceedsRow`s.

mod chart;

pub use chart::render_bar_chart;

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{ProceedsRow, RiskLevel};

/// Proceeds summed across assets for one (strategy, risk) pair
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregateRow {
    pub strategy: String,
    pub risk: RiskLevel,
    pub proceeds: Decimal,
}

/// Total proceeds over a set of rows
pub fn strategy_total(rows: &[ProceedsRow]) -> Decimal {
    rows.iter().map(|r| r.proceeds).sum()
}

/// Sum proceeds across assets per (strategy, risk)
///
/// First-seen order is preserved; sums are rounded to cents.
pub fn aggregate_by_risk(rows: &[ProceedsRow]) -> Vec<AggregateRow> {
    let mut out: Vec<AggregateRow> = Vec::new();
    for row in rows {
        match out
            .iter_mut()
            .find(|a| a.strategy == row.strategy && a.risk == row.risk)
        {
            Some(agg) => agg.proceeds += row.proceeds,
            None => out.push(AggregateRow {
                strategy: row.strategy.clone(),
                risk: row.risk,
                proceeds: row.proceeds,
            }),
        }
    }
    for agg in &mut out {
        agg.proceeds = agg.proceeds.round_dp(2);
    }
    out
}

/// Stable sort by (strategy total ascending, risk ascending)
///
/// Puts the least lucrative strategy first so the chart reads low to high.
pub fn sort_by_strategy_total(rows: &mut [AggregateRow]) {
    let mut totals: HashMap<String, Decimal> = HashMap::new();
    for row in rows.iter() {
        *totals.entry(row.strategy.clone()).or_default() += row.proceeds;
    }
    rows.sort_by(|a, b| {
        totals[&a.strategy]
            .cmp(&totals[&b.strategy])
            .then(a.risk.cmp(&b.risk))
    });
}

/// Whole-dollar formatting with thousands separators, e.g. `$1,235`
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp(0);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let body: String = grouped.chars().rev().collect();

    if negative {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}

/// Aligned text table of raw engine rows
pub fn render_proceeds_table(rows: &[ProceedsRow]) -> String {
    let amounts: Vec<String> = rows.iter().map(|r| format_usd(r.proceeds)).collect();
    let strategy_w = column_width("strategy", rows.iter().map(|r| r.strategy.len()));
    let symbol_w = column_width("asset", rows.iter().map(|r| r.symbol.len()));
    let amount_w = column_width("proceeds", amounts.iter().map(String::len));

    let mut out = format!(
        "{:<strategy_w$}  risk  {:<symbol_w$}  {:>amount_w$}\n",
        "strategy", "asset", "proceeds"
    );
    for (row, amount) in rows.iter().zip(&amounts) {
        out.push_str(&format!(
            "{:<strategy_w$}  {:>4}  {:<symbol_w$}  {:>amount_w$}\n",
            row.strategy,
            row.risk.to_string(),
            row.symbol,
            amount
        ));
    }
    out
}

/// Aligned text table of aggregated rows
pub fn render_aggregate_table(rows: &[AggregateRow]) -> String {
    let amounts: Vec<String> = rows.iter().map(|r| format_usd(r.proceeds)).collect();
    let strategy_w = column_width("strategy", rows.iter().map(|r| r.strategy.len()));
    let amount_w = column_width("proceeds", amounts.iter().map(String::len));

    let mut out = format!(
        "{:<strategy_w$}  risk  {:>amount_w$}\n",
        "strategy", "proceeds"
    );
    for (row, amount) in rows.iter().zip(&amounts) {
        out.push_str(&format!(
            "{:<strategy_w$}  {:>4}  {:>amount_w$}\n",
            row.strategy,
            row.risk.to_string(),
            amount
        ));
    }
    out
}

fn column_width(header: &str, values: impl Iterator<Item = usize>) -> usize {
    values.fold(header.len(), usize::max)
}
