use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "PATH")]
    pub conf: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate a subleq program to x86-64 assembly
    Emit {
        /// Path to the program
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Write the listing here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Target OS (defaults to host OS)
        #[arg(long)]
        target_os: Option<String>,
        /// Level of verbosity
        #[arg(short, long, default_value_t = false)]
        verbose: bool,
    },
    /// Translate, assemble and link a subleq program
    Build {
        /// Path to the program
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Name of the binary
        #[arg(long)]
        bin: Option<String>,
        /// Build Directory
        #[arg(short = 'b', long)]
        build_dir: Option<PathBuf>,
        /// C compiler driver used to assemble and link
        #[arg(long)]
        cc: Option<String>,
        /// Target OS (defaults to host OS)
        #[arg(long)]
        target_os: Option<String>,
        /// Target architecture (defaults to host architecture)
        #[arg(long)]
        target_arch: Option<String>,
        /// Skip dumping assembly and only link existing files
        #[arg(long, default_value_t = false)]
        link_existing: bool,
        /// Run the program after building
        #[arg(short = 'x', long, default_value_t = false)]
        execute: bool,
        /// Level of verbosity
        #[arg(short, long, default_value_t = false)]
        verbose: bool,
    },
    /// Run a subleq program with the reference interpreter
    Interp {
        /// Path to the program
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Stop after this many steps
        #[arg(long)]
        fuel: Option<u64>,
        /// Level of verbosity
        #[arg(short, long, default_value_t = false)]
        verbose: bool,
    },
}

impl Commands {
    pub fn verbose(&self) -> bool {
        match self {
            | Commands::Emit { verbose, .. }
            | Commands::Build { verbose, .. }
            | Commands::Interp { verbose, .. } => *verbose,
        }
    }
}
