use std::io::Write;

use anyhow::Result;
use common::{ChartDataset, ChartPlan, stat_cards};
use tracing::{info, trace};

use crate::cli::Context;

pub async fn dashboard(ctx: &Context, out: &mut impl Write) -> Result<()> {
    trace!("Entering dashboard command");

    let data = ctx.client.fetch_dashboard(ctx.session.token()).await?;
    info!("Rendering dashboard");

    for card in stat_cards(&data.stats) {
        writeln!(out, "{:<20}{}", card.title, card.value)?;
    }

    for dataset in ChartDataset::all(&data) {
        writeln!(out)?;
        write_plan(&dataset.plan(), out)?;
    }
    Ok(())
}

fn write_plan(plan: &ChartPlan, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", plan.title)?;
    if plan.is_empty() {
        writeln!(out, "  No data available.")?;
        return Ok(());
    }

    let width = plan
        .entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);
    for entry in &plan.entries {
        match &entry.text {
            Some(text) => writeln!(out, "  {:<width$}  {:>10.2}  {}", entry.label, entry.value, text)?,
            None => writeln!(out, "  {:<width$}  {:>10.2}", entry.label, entry.value)?,
        }
    }
    Ok(())
}
