//! CLI tool for rolling monthly statistics
//! Usage: roll_stats <months> < input.json > output.json
//!
//! Input: {"date": [...], "return": [...]} — integer day counts (days since
//! 1970-01-01, strictly increasing) aligned with daily returns.
//! Output: JSON array of monthly snapshot rows with ISO interval dates.

use roll_stats::roll_statistics_monthly;
use serde::{Deserialize, Serialize};
use std::io::{self, Read, Write};

#[derive(Deserialize)]
struct DailyPerformance {
    date: Vec<i32>,
    #[serde(rename = "return")]
    returns: Vec<f64>,
}

#[derive(Serialize)]
struct SnapshotRow {
    interval_date: String,
    pnl: f64,
    days_tested: u32,
    r_squared: f64,
    sharpe: f64,
    max_dd: f64,
    drawdown: f64,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: roll_stats <months>");
        eprintln!("Input: {{\"date\": [...], \"return\": [...]}} on stdin");
        eprintln!("Output: JSON array of monthly snapshot rows on stdout");
        std::process::exit(1);
    }

    let n: usize = match args[1].parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Invalid window length in months: {}", args[1]);
            std::process::exit(1);
        }
    };

    let mut input = String::new();
    io::stdin().read_to_string(&mut input).expect("Failed to read stdin");

    let daily: DailyPerformance = match serde_json::from_str(&input) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Invalid input JSON: {}", e);
            std::process::exit(1);
        }
    };

    if daily.date.len() != daily.returns.len() {
        eprintln!(
            "date and return columns must have equal length ({} vs {})",
            daily.date.len(),
            daily.returns.len()
        );
        std::process::exit(1);
    }

    if daily.date.windows(2).any(|pair| pair[1] <= pair[0]) {
        eprintln!("dates must be strictly increasing");
        std::process::exit(1);
    }

    let snapshots = roll_statistics_monthly(&daily.date, &daily.returns, n);

    let rows: Vec<SnapshotRow> = snapshots
        .iter()
        .map(|s| SnapshotRow {
            interval_date: s
                .interval_naive_date()
                .map(|d| d.to_string())
                .unwrap_or_default(),
            pnl: s.pnl,
            days_tested: s.days_tested,
            r_squared: s.r_squared,
            sharpe: s.sharpe,
            max_dd: s.max_dd,
            drawdown: s.drawdown,
        })
        .collect();

    // Output as JSON (non-finite statistics serialize as null)
    let output = serde_json::to_string(&rows).expect("Failed to serialize");
    io::stdout().write_all(output.as_bytes()).expect("Failed to write stdout");
}
