use serde::Serialize;

use crate::models::assumptions::Assumptions;

/// Subscription income after the platform fee.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct PremiumRevenue {
    pub premium_users: f64,
    pub revenue: f64,
}

impl PremiumRevenue {
    pub fn estimate(assumptions: &Assumptions) -> Self {
        let premium_users = assumptions.premium_users();
        let revenue =
            assumptions.premium_price * premium_users * (1.0 - assumptions.platform_fee);
        log::debug!(
            "[PremiumRevenue::estimate] {} premium users, revenue {}",
            premium_users,
            revenue
        );
        Self {
            premium_users,
            revenue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_premium_revenue() {
        let premium = PremiumRevenue::estimate(&Assumptions::BASELINE);
        let expected = 9.99 * (250e6 * 0.03) * 0.9705;
        assert_eq!(premium.premium_users, 7.5e6);
        assert!((premium.revenue - expected).abs() <= expected * 1e-12);
        assert_eq!(premium.revenue, 72714712.5);
    }
}
