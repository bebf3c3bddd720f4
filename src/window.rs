//! Month-bounded sliding window of daily observations
//!
//! The window is a FIFO of daily records bounded by calendar months rather
//! than a fixed count: a record stays resident while
//! `next_month_index(today) − record.month_index ≤ n`. Eviction is always
//! from the front and runs before the new day is admitted, using the new
//! day's next-month index as the threshold.

use std::collections::VecDeque;

use crate::stats::RunningStats;

/// One input day as it sits in the window. Immutable while resident.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyObservation {
    /// Integer day count (days since 1970-01-01).
    pub date: i32,
    /// Month index of `date`, cached at insertion.
    pub month_index: i32,
    /// Equity-curve level: running sum of all daily returns up to this day.
    pub cumulative_value: f64,
    /// The day's raw return, kept for eviction and the drawdown walk.
    pub daily_return: f64,
    /// 0-based position in the overall input; the regression's time axis.
    pub sequence_id: usize,
}

/// The trailing window plus the running sums derived from it.
#[derive(Debug, Clone, Default)]
pub struct MonthWindow {
    days: VecDeque<DailyObservation>,
    stats: RunningStats,
}

impl MonthWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a day at the back and fold it into the running sums.
    pub fn admit(&mut self, obs: DailyObservation) {
        self.stats
            .add(obs.cumulative_value, obs.daily_return, obs.sequence_id as f64);
        self.days.push_back(obs);
    }

    /// Pop stale days from the front until the membership invariant holds.
    ///
    /// A front day is stale when `next_month_index − day.month_index > n`.
    /// Must run before [`admit`](Self::admit) of the incoming day, with that
    /// day's next-month index as the threshold.
    pub fn evict_stale(&mut self, next_month_index: i32, n: usize) {
        while self
            .days
            .front()
            .is_some_and(|front| (next_month_index - front.month_index) as i64 > n as i64)
        {
            if let Some(front) = self.days.pop_front() {
                self.stats.remove(
                    front.cumulative_value,
                    front.daily_return,
                    front.sequence_id as f64,
                );
            }
        }
    }

    /// Walk the window front to back and return `(max_drawdown, drawdown)`:
    /// the most negative peak-to-trough seen and the final value.
    ///
    /// Cumulative PnL is rebuilt from raw returns during the walk, so the
    /// peak is relative to the window's own start, not the whole series.
    pub fn drawdown_walk(&self) -> (f64, f64) {
        let mut cur_pnl = 0.0;
        let mut cum_max_pnl = 0.0;
        let mut drawdown = 0.0;
        let mut max_drawdown = 0.0;

        for day in &self.days {
            cur_pnl += day.daily_return;
            if cur_pnl > cum_max_pnl {
                cum_max_pnl = cur_pnl;
            }
            drawdown = cur_pnl - cum_max_pnl;
            if drawdown < max_drawdown {
                max_drawdown = drawdown;
            }
        }

        (max_drawdown, drawdown)
    }

    /// Recompute the running sums from the resident days.
    ///
    /// Incremental add/remove accumulates floating-point drift over long
    /// series; the engine calls this periodically to reset it.
    pub fn rebuild_stats(&mut self) {
        let mut stats = RunningStats::new();
        for day in &self.days {
            stats.add(day.cumulative_value, day.daily_return, day.sequence_id as f64);
        }
        self.stats = stats;
    }

    pub fn stats(&self) -> &RunningStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn front(&self) -> Option<&DailyObservation> {
        self.days.front()
    }

    pub fn back(&self) -> Option<&DailyObservation> {
        self.days.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DailyObservation> {
        self.days.iter()
    }
}
