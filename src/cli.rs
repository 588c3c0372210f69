use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate Spring Boot project skeletons from UML class diagrams
#[derive(Debug, Parser)]
#[command(name = "uml-codegen", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a project from the configured UML schema
    Generate {
        /// Path to the configuration file
        #[arg(short, long, default_value = "uml-codegen.toml")]
        config: PathBuf,

        /// Print progress information
        #[arg(short, long)]
        verbose: bool,
    },
    /// Write a default configuration file
    Init {
        /// Where to write the configuration
        #[arg(short, long, default_value = "uml-codegen.toml")]
        output: PathBuf,

        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
