//! CLI type definitions.

use std::path::PathBuf;

use clap::Parser;

use gba_romname_lib::DEFAULT_JOBS;

#[derive(Parser)]
#[command(name = "gba-romname")]
#[command(about = "Generate a ROM name list from Game Boy Advance ROM headers", long_about = None)]
#[command(override_usage = "gba-romname [OPTIONS] <GBA_ROMS_PATH>")]
pub(crate) struct Cli {
    /// Directory containing .gba files (searched recursively)
    #[arg(value_name = "GBA_ROMS_PATH")]
    pub roms_path: Vec<PathBuf>,

    /// Maximum number of ROM files read at the same time
    #[arg(short, long, default_value_t = DEFAULT_JOBS)]
    pub jobs: usize,

    /// Only show errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Options for a bare `gba-romname <path>` invocation.
    pub(crate) fn with_path(roms_path: PathBuf) -> Self {
        Self {
            roms_path: vec![roms_path],
            jobs: DEFAULT_JOBS,
            quiet: false,
            verbose: false,
        }
    }
}
