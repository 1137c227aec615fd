pub mod ad_revenue;
pub mod assumptions;
pub mod premium;
pub mod report;
pub mod xp;
