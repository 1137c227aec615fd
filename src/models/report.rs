use std::io::{self, Write};

use serde::Serialize;

use crate::{
    models::{
        ad_revenue::AdRevenue, assumptions::Assumptions, premium::PremiumRevenue, xp::DailyXp,
    },
    utils::numbers::format_decimal,
};

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct RevenueReport {
    pub daily_xp: DailyXp,
    pub ads: AdRevenue,
    pub premium: PremiumRevenue,
}

impl RevenueReport {
    pub fn estimate(assumptions: &Assumptions) -> Self {
        let report = Self {
            daily_xp: DailyXp::estimate(assumptions),
            ads: AdRevenue::estimate(assumptions),
            premium: PremiumRevenue::estimate(assumptions),
        };
        if log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string(&report) {
                Ok(json) => log::debug!("[RevenueReport::estimate] {}", json),
                Err(e) => log::warn!("[RevenueReport::estimate] Failed to serialize: {:?}", e),
            }
        }
        report
    }

    pub fn total(&self) -> f64 {
        self.premium.revenue + self.ads.total()
    }

    /// Label/value pairs in print order. Labels keep their trailing spaces.
    pub fn lines(&self) -> [(&'static str, String); 6] {
        [
            ("xp maxima diaria:", self.daily_xp.total().to_string()),
            ("revenue: ", format_decimal(self.ads.total())),
            ("voluntarios:", format_decimal(self.ads.voluntary.revenue)),
            ("forzados:", format_decimal(self.ads.forced.revenue)),
            ("premium_ revenue", format_decimal(self.premium.revenue)),
            ("revenue_total: ", format_decimal(self.total())),
        ]
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (label, value) in self.lines() {
            writeln!(out, "{} {}", label, value)?;
        }
        out.flush()
    }
}
