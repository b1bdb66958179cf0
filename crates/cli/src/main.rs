//! hkube-generate - Ansible inventory generator for the h-kube cluster.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Initialize logging on stderr so stdout carries only progress lines.
//! - Run the generator pipeline and map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Config parsing or inventory rules (see `crates/config` and `crates/inventory`).

mod args;
mod error;
mod generate;

use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match cli
        .project_paths()
        .map_err(anyhow::Error::from)
        .and_then(|paths| generate::run(&paths))
    {
        Ok(_) => {
            println!("\nDone!");
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
