use crate::di::UseCases;
use sensor_stats_domain::StatsQueryParams;
use serde::Serialize;
use std::io::Write;
use tracing::info;

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub async fn stats(use_cases: &UseCases, params: StatsQueryParams) -> anyhow::Result<()> {
    let outcome = use_cases.get_stats.execute(&params).await?;
    info!(
        cache_hit = outcome.cache_hit,
        types = outcome.payload.stats.len(),
        "Stats computed"
    );
    print_json(&*outcome.payload)
}

pub async fn types(use_cases: &UseCases) -> anyhow::Result<()> {
    let types = use_cases.get_types.execute().await?;
    print_json(&types)
}

pub async fn last(use_cases: &UseCases, measurement_type: Option<&str>) -> anyhow::Result<()> {
    match use_cases.get_last.execute(measurement_type).await? {
        Some(measurement) => print_json(&measurement),
        None => anyhow::bail!("no measurement recorded"),
    }
}
