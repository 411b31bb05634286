use std::io::Write;

use anyhow::Result;
use common::GradeBand;
use tracing::trace;

use crate::cli::Context;

pub async fn predict(ctx: &Context, student_id: &str, out: &mut impl Write) -> Result<()> {
    trace!("Entering predict command");

    let result = ctx
        .client
        .predict_performance(ctx.session.token(), student_id)
        .await?;

    writeln!(out, "Student ID: {}", result.student_id)?;
    writeln!(
        out,
        "Predicted Average Grade: {}% ({})",
        result.predicted_grade,
        GradeBand::of(result.predicted_grade).label()
    )?;
    Ok(())
}
