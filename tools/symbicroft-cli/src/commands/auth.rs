//! Admin token commands.

use anyhow::{bail, Context as _, Result};
use serde_json::json;

use super::{AuthArgs, AuthCommand};
use crate::context::Context;

/// Run the auth command.
pub fn run(args: AuthArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(AuthCommand::Status) | None => status(ctx),
        Some(AuthCommand::Token { token }) => store_token(&token, ctx),
        Some(AuthCommand::Logout) => logout(ctx),
    }
}

fn status(ctx: &Context) -> Result<()> {
    let signed_in = ctx.auth().is_authenticated();
    if ctx.output.is_json() {
        ctx.output.json(&json!({ "authenticated": signed_in }));
    } else if signed_in {
        ctx.output.success("Signed in");
    } else {
        ctx.output.info("Signed out");
    }
    Ok(())
}

fn store_token(token: &str, ctx: &Context) -> Result<()> {
    let token = token.trim();
    if token.is_empty() {
        bail!("Token is empty");
    }
    let path = ctx.storage_path();
    ctx.auth()
        .set_token(token)
        .with_context(|| format!("Could not save the token to {}", path.display()))?;
    ctx.output.success("Token stored");
    Ok(())
}

fn logout(ctx: &Context) -> Result<()> {
    let path = ctx.storage_path();
    ctx.auth()
        .logout()
        .with_context(|| format!("Could not update {}", path.display()))?;
    ctx.output.success("Signed out");
    Ok(())
}
