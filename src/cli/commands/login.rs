use std::io::Write;

use anyhow::Result;
use tracing::{info, trace};

use crate::cli::Context;

pub async fn login(ctx: &mut Context, username: &str, password: &str, out: &mut impl Write) -> Result<()> {
    trace!("Entering login command");

    let session = ctx.session.login(&ctx.client, username, password).await?;
    let user = session.user().map(|u| (u.username.clone(), u.role.clone()));

    if let Some((username, role)) = user {
        info!("Session saved to {}", ctx.session.storage().path().display());
        writeln!(out, "Logged in as {} ({})", username, role)?;
    }
    Ok(())
}
