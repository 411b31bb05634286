use std::io::Write;

use anyhow::Result;

use crate::cli::Context;

pub fn whoami(ctx: &Context, out: &mut impl Write) -> Result<()> {
    match ctx.session.session().user() {
        Some(user) => writeln!(out, "{} ({})", user.username, user.role)?,
        None => writeln!(out, "Not logged in")?,
    }
    Ok(())
}
