use std::io;

use anyhow::Context;

use crate::models::{assumptions::Assumptions, report::RevenueReport};

mod models;
mod utils;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let assumptions = Assumptions::default();
    log::debug!("[main] Estimating with {:?}", assumptions);
    let report = RevenueReport::estimate(&assumptions);

    let stdout = io::stdout();
    report
        .write_to(&mut stdout.lock())
        .context("Failed to write revenue report")?;
    Ok(())
}
