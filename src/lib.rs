//! # Roll Stats
//!
//! Rolling, month-anchored performance statistics over daily return series,
//! as used in financial backtesting.
//!
//! ## Features
//! - Trailing windows bounded in calendar months, not a fixed day count
//! - O(1) incremental R² and Sharpe via running sums under eviction
//! - Month-end snapshots with window drawdown metrics
//! - Compiles to native and WASM
//!
//! ## Example
//! ```
//! use roll_stats::{days_from_civil, roll_statistics_monthly};
//!
//! let dates: Vec<i32> = (0..31).map(|i| days_from_civil(1990, 1, 1) + i).collect();
//! let returns = vec![0.01; 31];
//!
//! // one snapshot: the series ends on the last day of January
//! let snapshots = roll_statistics_monthly(&dates, &returns, 2);
//! assert_eq!(snapshots.len(), 1);
//! assert_eq!(snapshots[0].days_tested, 31);
//! ```

pub mod calendar;
pub mod engine;
pub mod frame;
pub mod stats;
pub mod window;

// Re-export commonly used items at crate root
pub use calendar::{
    civil_from_days, days_from_civil, days_in_month, first_day_of_month_following, month_index,
    next_month_index,
};
pub use engine::{roll_statistics_monthly, MonthlySnapshot};
pub use frame::{roll_statistics_monthly_df, snapshots_to_df};
pub use stats::{RunningStats, TRADING_DAYS_PER_YEAR};
pub use window::{DailyObservation, MonthWindow};

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// WASM bindings for browser/Node.js use
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct RollStats;

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl RollStats {
    /// Monthly snapshots as a JSON array of row objects.
    #[wasm_bindgen]
    pub fn roll_statistics_monthly_json(dates: &[i32], returns: &[f64], n: usize) -> String {
        let snapshots = engine::roll_statistics_monthly(dates, returns, n);
        serde_json::to_string(&snapshots).unwrap_or_else(|_| "[]".to_string())
    }

    /// Month index of an integer day count.
    #[wasm_bindgen]
    pub fn month_index(date: i32) -> i32 {
        calendar::month_index(date)
    }
}
