//! DataFrame adapter for the monthly statistics engine
//!
//! Marshals a two-column daily performance table in and a seven-column
//! snapshot table out. Shape validation (aligned columns, strictly
//! increasing dates, no nulls) lives here, never in the engine, which
//! assumes well-formed input.

use polars::prelude::*;

use crate::engine::{roll_statistics_monthly, MonthlySnapshot};

/// Run the engine over a `date`/`return` DataFrame.
///
/// `date` must be castable to `Int32` day counts (a `Date` column works
/// as-is), strictly increasing, with no nulls; `return` must be `Float64`
/// daily returns. Returns the snapshot table — empty, with the full schema,
/// when no snapshot qualifies.
pub fn roll_statistics_monthly_df(daily_performance: &DataFrame, n: usize) -> PolarsResult<DataFrame> {
    let date_col = daily_performance.column("date")?.cast(&DataType::Int32)?;
    let return_col = daily_performance.column("return")?;

    let date_ca = date_col.i32()?;
    let return_ca = return_col.f64()?;

    if date_ca.null_count() > 0 || return_ca.null_count() > 0 {
        return Err(PolarsError::ComputeError(
            "date and return columns must not contain nulls".into(),
        ));
    }

    let dates: Vec<i32> = date_ca.into_no_null_iter().collect();
    let returns: Vec<f64> = return_ca.into_no_null_iter().collect();

    if let Some(pair) = dates.windows(2).find(|pair| pair[1] <= pair[0]) {
        return Err(PolarsError::ComputeError(
            format!(
                "dates must be strictly increasing (found {} after {})",
                pair[1], pair[0]
            )
            .into(),
        ));
    }

    let snapshots = roll_statistics_monthly(&dates, &returns, n);
    snapshots_to_df(&snapshots)
}

/// Marshal emitted snapshots into the seven-column output table.
pub fn snapshots_to_df(snapshots: &[MonthlySnapshot]) -> PolarsResult<DataFrame> {
    let interval_date: Vec<i32> = snapshots.iter().map(|s| s.interval_date).collect();
    let pnl: Vec<f64> = snapshots.iter().map(|s| s.pnl).collect();
    let days_tested: Vec<u32> = snapshots.iter().map(|s| s.days_tested).collect();
    let r_squared: Vec<f64> = snapshots.iter().map(|s| s.r_squared).collect();
    let sharpe: Vec<f64> = snapshots.iter().map(|s| s.sharpe).collect();
    let max_dd: Vec<f64> = snapshots.iter().map(|s| s.max_dd).collect();
    let drawdown: Vec<f64> = snapshots.iter().map(|s| s.drawdown).collect();

    DataFrame::new(vec![
        Column::new("interval_date".into(), interval_date).cast(&DataType::Date)?,
        Column::new("pnl".into(), pnl),
        Column::new("days_tested".into(), days_tested),
        Column::new("r_squared".into(), r_squared),
        Column::new("sharpe".into(), sharpe),
        Column::new("max_dd".into(), max_dd),
        Column::new("drawdown".into(), drawdown),
    ])
}
