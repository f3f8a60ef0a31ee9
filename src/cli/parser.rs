use clap::{Parser, Subcommand};

/// Command-line interface definition for gapfill
/// CLI application to preview and fill scheduling gaps in a Clockify workspace
#[derive(Parser)]
#[command(
    name = "gapfill",
    version = env!("CARGO_PKG_VERSION"),
    about = "Preview and fill scheduling gaps in your Clockify week",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or multiple profiles)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration for missing or invalid fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the user identified by the configured API key
    Whoami,

    /// Preview the gap report for the week containing DATE (read-only)
    Preview {
        /// Any date within the week to preview (YYYY-MM-DD, default: today)
        date: Option<String>,
    },

    /// Create filler entries for the gaps of the week containing DATE
    Fill {
        /// Any date within the week to fill (YYYY-MM-DD, default: today)
        date: Option<String>,

        /// Skip the interactive confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },
}
