//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use symbicroft_commerce::auth::AuthSession;
use symbicroft_commerce::cart::{CartStore, EventBus};
use symbicroft_store::FileStorage;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Config file the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Storage file override from the command line.
    storage_override: Option<String>,
}

impl Context {
    /// Load context from config file.
    pub fn load(
        config_path: Option<&str>,
        storage_override: Option<&str>,
        output: Output,
    ) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        let mut ctx = Self::in_dir(config, &cwd, storage_override, output);
        ctx.config_path = config_path;
        Ok(ctx)
    }

    /// Build a context rooted at `cwd` without searching for a config file.
    pub fn in_dir(
        config: CliConfig,
        cwd: &Path,
        storage_override: Option<&str>,
        output: Output,
    ) -> Self {
        Self {
            config,
            config_path: None,
            output,
            cwd: cwd.to_path_buf(),
            storage_override: storage_override.map(str::to_string),
        }
    }

    /// Resolved storage file location.
    pub fn storage_path(&self) -> PathBuf {
        let path = self
            .storage_override
            .as_deref()
            .unwrap_or(&self.config.storage.path);
        self.resolve_path(path)
    }

    /// Open the admin session over the configured storage file.
    pub fn auth(&self) -> AuthSession<FileStorage> {
        AuthSession::new(FileStorage::open(self.storage_path()))
    }

    /// Open the cart over the configured storage file.
    ///
    /// In human mode every broadcast is echoed so mutations show their effect.
    pub fn cart(&self) -> CartStore<FileStorage> {
        let storage = FileStorage::open(self.storage_path());
        let cart = CartStore::with_config(storage, EventBus::new(), self.config.cart());

        let output = self.output;
        cart.subscribe(move |event| {
            output.debug(&format!(
                "{}: {} line(s), {} unit(s), total {:.2}",
                event.name(),
                event.items.len(),
                event.item_count(),
                event.total
            ));
        });
        cart
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                    return Some((config, config_path));
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}
