use std::io::Write;

use anyhow::Result;

use crate::cli::Context;

pub fn logout(ctx: &mut Context, out: &mut impl Write) -> Result<()> {
    ctx.session.logout();
    writeln!(out, "Logged out")?;
    Ok(())
}
