use serde::Serialize;

use crate::models::assumptions::Assumptions;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum AdCategory {
    Forced,
    Voluntary,
}

impl AdCategory {
    pub fn ads_per_day(&self, assumptions: &Assumptions) -> i64 {
        match self {
            AdCategory::Forced => assumptions.forced_ads_per_day,
            AdCategory::Voluntary => assumptions.voluntary_ads_per_day,
        }
    }

    pub fn cpm(&self, assumptions: &Assumptions) -> f64 {
        match self {
            AdCategory::Forced => assumptions.forced_cpm,
            AdCategory::Voluntary => assumptions.voluntary_cpm,
        }
    }

    pub fn fill_rate(&self, assumptions: &Assumptions) -> f64 {
        match self {
            AdCategory::Forced => assumptions.forced_fill_rate,
            AdCategory::Voluntary => assumptions.voluntary_fill_rate,
        }
    }
}

/// Impressions and revenue for one ad category across all non-premium users.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct AdStream {
    pub category: AdCategory,
    pub impressions_per_day: f64,
    pub impressions_per_month: f64,
    pub revenue: f64,
}

impl AdStream {
    pub fn estimate(category: AdCategory, assumptions: &Assumptions) -> Self {
        let impressions_per_day =
            category.ads_per_day(assumptions) as f64 * assumptions.non_premium_users();
        let impressions_per_month = impressions_per_day * assumptions.days_per_month;
        let revenue =
            category.cpm(assumptions) * impressions_per_month * category.fill_rate(assumptions);
        log::debug!(
            "[AdStream::estimate] {:?}: {} impressions/month, revenue {}",
            category,
            impressions_per_month,
            revenue
        );
        Self {
            category,
            impressions_per_day,
            impressions_per_month,
            revenue,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct AdRevenue {
    pub voluntary: AdStream,
    pub forced: AdStream,
}

impl AdRevenue {
    pub fn estimate(assumptions: &Assumptions) -> Self {
        Self {
            voluntary: AdStream::estimate(AdCategory::Voluntary, assumptions),
            forced: AdStream::estimate(AdCategory::Forced, assumptions),
        }
    }

    pub fn total(&self) -> f64 {
        self.voluntary.revenue + self.forced.revenue
    }
}
