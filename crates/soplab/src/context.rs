//! Global context for CLI commands

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use soplab_core::catalog::Catalog;
use soplab_core::config::Config;
use soplab_core::store::TemplateStore;

/// Global context containing config, catalog, and template store
pub struct Context {
    pub root: PathBuf,
    pub config: Config,
    pub catalog: Catalog,
    pub store: TemplateStore,
    pub verbose: bool,
}

impl Context {
    /// Create a new context by locating soplab.toml upward from the
    /// current directory
    ///
    /// # Errors
    ///
    /// Returns an error if no soplab.toml is found or it cannot be parsed.
    pub fn new(verbose: bool) -> Result<Self> {
        let current_dir = env::current_dir()?;
        let (root, config) = Config::discover(&current_dir)?;

        let catalog = Catalog::new(root.join(&config.paths.data_dir));
        let store = TemplateStore::new(root.join(&config.paths.templates_dir));

        Ok(Self {
            root,
            config,
            catalog,
            store,
            verbose,
        })
    }
}
