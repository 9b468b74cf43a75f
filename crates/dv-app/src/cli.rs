//! Command line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "datavis",
    version,
    about = "Author and manage stored chart visualizations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (default: datavis.json).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding stored visualizations (overrides the config file).
    #[arg(long = "store-dir", value_name = "DIR", global = true)]
    pub store_dir: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check whether a visualization file has a renderable layout.
    Validate {
        /// Visualization JSON document.
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Load a stored visualization and print its state.
    Open {
        id: String,
    },

    /// Change the name and description of a stored visualization.
    Rename {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Store a copy of a visualization under a new id.
    SaveAs {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a stored visualization.
    Delete {
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "datavis", "rename", "abc", "--name", "Renamed", "--store-dir", "/tmp/vis", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.store_dir, Some(PathBuf::from("/tmp/vis")));
        match cli.command {
            Command::Rename { id, name, description } => {
                assert_eq!(id, "abc");
                assert_eq!(name.as_deref(), Some("Renamed"));
                assert_eq!(description, None);
            }
            _ => panic!("expected rename"),
        }
    }
}
