//! Running aggregates for O(1) regression and Sharpe recomputation
//!
//! Six scalar sums plus a count, updated symmetrically as days enter and
//! leave the window, from which R² and the Sharpe ratio fall out
//! algebraically without rescanning the window.

/// Trading days per year used to annualize the Sharpe ratio.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Incrementally maintained sums over the days currently in the window.
///
/// `v` is the cumulative equity value, `r` the raw daily return, and `n` the
/// 0-based sequence id used as the regression's time axis. Invariant: each
/// sum equals the corresponding sum over exactly the resident days, enforced
/// by calling [`add`](Self::add) and [`remove`](Self::remove) symmetrically.
///
/// Degenerate windows (`count < 2`) make the variance and time-axis
/// denominators zero; the derived statistics propagate the resulting
/// non-finite values instead of guarding them, so a too-short history reads
/// as "undefined" downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningStats {
    count: u32,
    sum_v: f64,
    sum_vv: f64,
    sum_nv: f64,
    sum_n: f64,
    sum_r: f64,
    sum_rr: f64,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one day into the sums.
    pub fn add(&mut self, value: f64, daily_return: f64, sequence_id: f64) {
        self.count += 1;
        self.sum_v += value;
        self.sum_vv += value * value;
        self.sum_nv += value * sequence_id;
        self.sum_n += sequence_id;
        self.sum_r += daily_return;
        self.sum_rr += daily_return * daily_return;
    }

    /// Exact inverse of [`add`](Self::add), applied when a day is evicted.
    pub fn remove(&mut self, value: f64, daily_return: f64, sequence_id: f64) {
        self.count -= 1;
        self.sum_v -= value;
        self.sum_vv -= value * value;
        self.sum_nv -= value * sequence_id;
        self.sum_n -= sequence_id;
        self.sum_r -= daily_return;
        self.sum_rr -= daily_return * daily_return;
    }

    /// Number of days currently folded in.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Window total of daily returns.
    pub fn pnl(&self) -> f64 {
        self.sum_r
    }

    /// Squared correlation between sequence position and cumulative value.
    ///
    /// The time-axis deviation uses the closed form for a contiguous 0-based
    /// run, `count · sqrt((count² − 1) / 12)`; sequence ids inside the window
    /// are always contiguous (front eviction only), and the form is shift
    /// invariant, so no rescan is needed. Non-finite for `count ≤ 1`.
    pub fn r_squared(&self) -> f64 {
        let n = self.count as f64;
        let covariance_term = n * self.sum_nv - self.sum_v * self.sum_n;
        let sd_time = n * ((n * n - 1.0) / 12.0).sqrt();
        let sd_value = (n * self.sum_vv - self.sum_v * self.sum_v).sqrt();
        let r = covariance_term / sd_time / sd_value;
        r * r
    }

    /// Mean daily return over its standard deviation, annualized by √252.
    ///
    /// Non-finite for `count < 2` (sample-variance denominator is zero).
    pub fn sharpe(&self) -> f64 {
        let n = self.count as f64;
        let avg_return = self.sum_r / n;
        let var_return = (n * self.sum_rr - self.sum_r * self.sum_r) / n / (n - 1.0);
        avg_return / var_return.sqrt() * TRADING_DAYS_PER_YEAR.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn test_add_remove_symmetry() {
        let mut stats = RunningStats::new();
        stats.add(0.5, 0.01, 0.0);
        stats.add(0.8, 0.03, 1.0);
        stats.add(0.7, -0.01, 2.0);
        stats.remove(0.5, 0.01, 0.0);

        let mut direct = RunningStats::new();
        direct.add(0.8, 0.03, 1.0);
        direct.add(0.7, -0.01, 2.0);

        assert_eq!(stats.count(), direct.count());
        assert!(approx_eq(stats.pnl(), direct.pnl(), 1e-12));
        assert!(approx_eq(stats.sharpe(), direct.sharpe(), 1e-12));
    }

    #[test]
    fn test_r_squared_perfect_trend() {
        // equity rising by a constant step is a perfect linear fit
        let mut stats = RunningStats::new();
        for i in 0..20 {
            let value = 0.01 * (i + 1) as f64;
            stats.add(value, 0.01, i as f64);
        }
        assert!(approx_eq(stats.r_squared(), 1.0, 1e-9));
    }

    #[test]
    fn test_r_squared_shift_invariant() {
        // same window contents at two different sequence offsets
        let returns = [0.02, -0.01, 0.03, 0.0, -0.02, 0.01];
        let mut base = RunningStats::new();
        let mut shifted = RunningStats::new();
        let mut value = 0.0;
        for (i, r) in returns.iter().enumerate() {
            value += r;
            base.add(value, *r, i as f64);
            shifted.add(value, *r, (i + 1000) as f64);
        }
        assert!(approx_eq(base.r_squared(), shifted.r_squared(), 1e-9));
    }

    #[test]
    fn test_sharpe_constant_returns() {
        // zero variance: division by zero propagates as non-finite
        let mut stats = RunningStats::new();
        for i in 0..10 {
            stats.add(0.01 * (i + 1) as f64, 0.01, i as f64);
        }
        assert!(!stats.sharpe().is_finite());
    }

    #[test]
    fn test_sharpe_known_value() {
        let returns = [0.02, -0.01, 0.02, -0.01];
        let mut stats = RunningStats::new();
        let mut value = 0.0;
        for (i, r) in returns.iter().enumerate() {
            value += r;
            stats.add(value, *r, i as f64);
        }
        // mean 0.005, sample sd sqrt(3e-4)
        let expected = 0.005 / (3.0e-4_f64).sqrt() * 252.0_f64.sqrt();
        assert!(approx_eq(stats.sharpe(), expected, 1e-9));
    }

    #[test]
    fn test_degenerate_counts_propagate() {
        let mut stats = RunningStats::new();
        stats.add(0.01, 0.01, 0.0);
        assert!(!stats.r_squared().is_finite());
        assert!(!stats.sharpe().is_finite());
    }
}
