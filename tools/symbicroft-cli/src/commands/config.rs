//! Configuration management commands.

use std::path::Path;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::CliConfig;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Path => path(ctx),
        ConfigCommand::Init { force } => init(force, ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
    } else {
        println!("{}", toml::to_string_pretty(&ctx.config)?);
    }
    Ok(())
}

fn path(ctx: &Context) -> Result<()> {
    let config = ctx
        .config_path
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(defaults)".to_string());
    let storage = ctx.storage_path().display().to_string();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "config": config, "storage": storage }));
    } else {
        ctx.output.kv("Config", &config);
        ctx.output.kv("Storage", &storage);
    }
    Ok(())
}

fn init(force: bool, ctx: &Context) -> Result<()> {
    let target = ctx.cwd.join("symbicroft.toml");
    if target.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", target.display());
    }

    write_default(&target)?;
    ctx.output.success(&format!("Created {}", target.display()));
    Ok(())
}

fn write_default(target: &Path) -> Result<()> {
    let Some(path) = target.to_str() else {
        bail!("Config path is not valid UTF-8: {}", target.display());
    };
    CliConfig::default().save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_written_default_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("symbicroft.toml");
        write_default(&target).unwrap();
        let loaded = CliConfig::load(target.to_str().unwrap()).unwrap();
        assert_eq!(loaded, CliConfig::default());
    }
}
