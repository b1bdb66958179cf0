//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Resolve the project root into [`ProjectPaths`].
//!
//! Non-responsibilities:
//! - Does not run the generator (see `generate` module).

use clap::Parser;
use hkube_config::ProjectPaths;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hkube-generate")]
#[command(
    about = "Generate the Ansible inventory from config/config.yaml and config/secrets.env",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  hkube-generate\n  hkube-generate --project-root ~/src/h-kube\n\nSet RUST_LOG=debug for per-node diagnostics on stderr.\n"
)]
pub struct Cli {
    /// Project root containing `config/` (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub project_root: Option<PathBuf>,
}

impl Cli {
    /// Resolve input and output locations for this run.
    pub fn project_paths(&self) -> std::io::Result<ProjectPaths> {
        match &self.project_root {
            Some(root) => Ok(ProjectPaths::new(root.clone())),
            None => ProjectPaths::from_current_dir(),
        }
    }
}
