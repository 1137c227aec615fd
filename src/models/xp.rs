use serde::Serialize;

use crate::models::assumptions::Assumptions;

/// Maximum XP a non-premium user can earn in one day.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct DailyXp {
    pub voluntary_xp: i64,
    pub forced_bonus: i64,
}

impl DailyXp {
    pub fn estimate(assumptions: &Assumptions) -> Self {
        let voluntary_xp: i64 = (1..=assumptions.xp_per_ad)
            .map(|n| xp_for_ad(assumptions.xp_per_ad, n))
            .sum();
        let forced_bonus = assumptions.forced_ads_per_day * assumptions.xp_per_ad;
        log::debug!(
            "[DailyXp::estimate] voluntary: {}, forced bonus: {}",
            voluntary_xp,
            forced_bonus
        );
        Self {
            voluntary_xp,
            forced_bonus,
        }
    }

    pub fn total(&self) -> i64 {
        self.forced_bonus + self.voluntary_xp
    }
}

/// XP granted for the `n`-th voluntary ad watched in a day.
///
/// The reward decays as `xp_per_ad / n` and each term is truncated on its own
/// before being summed, so the daily total is lower than truncating the sum.
/// The division goes through `f64` (`xp_per_ad * (1 / n)`), which matters for
/// terms that land just below an integer.
pub fn xp_for_ad(xp_per_ad: i64, n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }
    (xp_per_ad as f64 * (1.0 / n as f64)) as i64
}
