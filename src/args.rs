use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Terminal blogging client.
#[derive(Debug, Parser)]
#[command(name = "quill", version, about)]
pub struct Args {
    /// Path to a config file (defaults to the platform config dir).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the authentication service.
    #[arg(long)]
    pub auth_url: Option<String>,

    /// Directory for local post/session storage.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

impl Args {
    /// Fold CLI flags over the loaded config. Flags win.
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.auth_url {
            config.auth.base_url = url.clone();
        }
        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = Some(dir.clone());
        }
    }
}
