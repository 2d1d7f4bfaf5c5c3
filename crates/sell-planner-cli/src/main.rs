//! Sell Planner CLI
//!
//! Evaluates the built-in configuration presets and prints strategy
//! summaries, proceeds tables, aggregated views, and a text bar chart.

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sell_planner::{presets, report, PlannerPreset};

#[derive(Parser)]
#[command(name = "sell-planner", version, about = "Plan sells across risk bands")]
struct Args {
    /// Configuration preset to evaluate
    #[arg(long, value_enum, default_value = "all")]
    preset: PresetArg,

    /// Emit aggregated rows as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Skip the bar chart
    #[arg(long)]
    no_chart: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PresetArg {
    SellLadder,
    DynamicDca,
    All,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let selected: Vec<PlannerPreset> = match args.preset {
        PresetArg::SellLadder => vec![presets::sell_ladder()?],
        PresetArg::DynamicDca => vec![presets::dynamic_dca()?],
        PresetArg::All => presets::all()?,
    };
    tracing::debug!(presets = selected.len(), "evaluating presets");

    for preset in &selected {
        render_preset(preset, &args)?;
    }

    Ok(())
}

fn render_preset(preset: &PlannerPreset, args: &Args) -> Result<()> {
    if !args.json {
        println!("{}", "═".repeat(50));
        println!(
            "Preset: {}  (generated {})",
            preset.name,
            Utc::now().format("%Y-%m-%d %H:%M UTC")
        );
        println!("{}", "═".repeat(50));
        println!();
        println!("Summary:");
        println!();
    }

    let mut all_rows = Vec::new();
    for strategy in &preset.strategies {
        let rows = strategy.run(&preset.holdings, &preset.prices, &preset.multipliers)?;
        if !args.json {
            println!("{strategy}");
            print!("{}", report::render_proceeds_table(&rows));
            println!();
            println!(
                " Total: {}",
                report::format_usd(report::strategy_total(&rows))
            );
            println!();
        }
        all_rows.extend(rows);
    }

    let mut aggregated = report::aggregate_by_risk(&all_rows);

    if args.json {
        let doc = serde_json::json!({
            "preset": preset.name,
            "rows": aggregated,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("Aggregated by strategy and risk:");
    print!("{}", report::render_aggregate_table(&aggregated));
    println!();

    report::sort_by_strategy_total(&mut aggregated);
    println!("Sorted by total proceeds:");
    print!("{}", report::render_aggregate_table(&aggregated));
    println!();

    if !args.no_chart {
        println!("Visualizing sell strategies:");
        println!();
        print!("{}", report::render_bar_chart(&aggregated));
        println!();
    }

    Ok(())
}
