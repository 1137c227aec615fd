use serde::Serialize;

/// Every input of the revenue model.
///
/// CPM values are stored per impression (`3.0 / 1000.0`), not per thousand.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Assumptions {
    pub xp_per_ad: i64,
    pub forced_ads_per_day: i64,
    pub voluntary_ads_per_day: i64,

    pub monthly_active_users: f64,
    pub premium_fraction: f64,

    pub forced_cpm: f64,
    pub voluntary_cpm: f64,
    pub forced_fill_rate: f64,
    pub voluntary_fill_rate: f64,
    pub days_per_month: f64,

    pub premium_price: f64,
    pub platform_fee: f64,
}

impl Assumptions {
    pub const BASELINE: Assumptions = Assumptions {
        // Also the daily cap on voluntary ads.
        xp_per_ad: 35,
        forced_ads_per_day: 3,
        voluntary_ads_per_day: 5,
        monthly_active_users: 250e6,
        premium_fraction: 0.03,
        forced_cpm: 3.0 / 1000.0,
        voluntary_cpm: 1.5 / 1000.0,
        forced_fill_rate: 0.25,
        voluntary_fill_rate: 0.9,
        days_per_month: 30.0,
        premium_price: 9.99,
        platform_fee: 0.0295,
    };

    #[cfg(test)]
    pub fn with_monthly_active_users(&self, monthly_active_users: f64) -> Self {
        Self {
            monthly_active_users,
            ..*self
        }
    }

    pub fn premium_users(&self) -> f64 {
        self.monthly_active_users * self.premium_fraction
    }

    pub fn non_premium_users(&self) -> f64 {
        self.monthly_active_users * (1.0 - self.premium_fraction)
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::BASELINE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_split() {
        let assumptions = Assumptions::BASELINE;
        assert_eq!(assumptions.premium_users(), 250e6 * 0.03);
        assert_eq!(assumptions.non_premium_users(), 250e6 * (1.0 - 0.03));
    }

    #[test]
    fn test_with_monthly_active_users() {
        let assumptions = Assumptions::BASELINE.with_monthly_active_users(1e6);
        assert_eq!(assumptions.monthly_active_users, 1e6);
        assert_eq!(assumptions.premium_price, Assumptions::BASELINE.premium_price);
        assert_eq!(Assumptions::default(), Assumptions::BASELINE);
    }
}
