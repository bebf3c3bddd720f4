//! Single-pass rolling monthly statistics engine
//!
//! Walks a complete daily return series once, in arrival order. Each day is
//! classified by month, the trailing window is evicted and extended, and on
//! the last trading day before a month rollover (or the last input day) a
//! snapshot of the window's statistics is emitted.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{civil_from_days, first_day_of_month_following, month_index};
use crate::window::{DailyObservation, MonthWindow};

/// Full recomputation of the running sums every this many emissions, to
/// bound drift from repeated incremental add/subtract.
const REBUILD_INTERVAL: usize = 32;

/// One emitted monthly summary record.
///
/// `r_squared` and `sharpe` are non-finite when the window held fewer than
/// two days at emission time; that reads as "undefined for insufficient
/// history," not as a fault.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlySnapshot {
    /// Day count of the 1st of the month following the window's last day.
    pub interval_date: i32,
    /// Window total of daily returns.
    pub pnl: f64,
    /// Number of days resident in the window.
    pub days_tested: u32,
    /// Regression fit of the equity curve against sequence position.
    pub r_squared: f64,
    /// Annualized mean-over-deviation of daily returns.
    pub sharpe: f64,
    /// Most negative peak-to-trough PnL within the window.
    pub max_dd: f64,
    /// Drawdown at the window's final day.
    pub drawdown: f64,
}

impl MonthlySnapshot {
    /// The interval date as a civil date.
    pub fn interval_naive_date(&self) -> Option<NaiveDate> {
        let (year, month, day) = civil_from_days(self.interval_date);
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// Compute rolling month-anchored statistics over a daily return series.
///
/// `dates` are integer day counts (days since 1970-01-01), strictly
/// increasing and aligned with `returns`; `n` is the trailing window length
/// in calendar months. Input validation is the caller's job — this function
/// assumes well-formed, chronologically ordered input.
///
/// Returns one [`MonthlySnapshot`] per qualifying day, in input order. A day
/// qualifies when it is the last input day or the last day before a month
/// rollover (the next day's month index is exactly this month's index plus
/// one). Empty input yields an empty vector.
///
/// # Example
/// ```
/// use roll_stats::{days_from_civil, roll_statistics_monthly};
///
/// let dates: Vec<i32> = (0..40).map(|i| days_from_civil(1990, 1, 2) + i).collect();
/// let returns = vec![0.01; 40];
///
/// let snapshots = roll_statistics_monthly(&dates, &returns, 2);
/// assert_eq!(snapshots.len(), 2); // Jan 31 rollover + last input day
/// ```
pub fn roll_statistics_monthly(dates: &[i32], returns: &[f64], n: usize) -> Vec<MonthlySnapshot> {
    debug_assert_eq!(dates.len(), returns.len());
    let n_rows = dates.len().min(returns.len());

    let mut window = MonthWindow::new();
    let mut snapshots = Vec::new();
    let mut cumulative_value = 0.0;

    for i in 0..n_rows {
        let today = dates[i];
        let current_month = month_index(today);
        let next_month = current_month + 1;

        // evict before admitting, using the incoming day's threshold
        window.evict_stale(next_month, n);

        cumulative_value += returns[i];
        window.admit(DailyObservation {
            date: today,
            month_index: current_month,
            cumulative_value,
            daily_return: returns[i],
            sequence_id: i,
        });

        let last_day = i + 1 == n_rows;
        let month_rollover = !last_day && month_index(dates[i + 1]) == next_month;

        if last_day || month_rollover {
            if !snapshots.is_empty() && snapshots.len() % REBUILD_INTERVAL == 0 {
                window.rebuild_stats();
            }

            let (max_dd, drawdown) = window.drawdown_walk();
            let stats = window.stats();
            snapshots.push(MonthlySnapshot {
                interval_date: first_day_of_month_following(today),
                pnl: stats.pnl(),
                days_tested: stats.count(),
                r_squared: stats.r_squared(),
                sharpe: stats.sharpe(),
                max_dd,
                drawdown,
            });
        }
    }

    snapshots
}
