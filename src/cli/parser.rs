use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for fpkiosk
/// CLI bridge between the fingerprint kiosk board and the attendance ledgers
#[derive(Parser)]
#[command(
    name = "fpkiosk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fingerprint attendance kiosk: serial enrollment/attendance sessions, CSV ledgers, threshold mail alerts",
    long_about = None
)]
pub struct Cli {
    /// Override master ledger path (useful for tests or custom setups)
    #[arg(global = true, long = "master")]
    pub master: Option<String>,

    /// Override attendance ledger path
    #[arg(global = true, long = "ledger")]
    pub ledger: Option<String>,

    /// Override serial port (skips auto-discovery)
    #[arg(global = true, long = "port")]
    pub port: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and both ledger files
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// List detected serial ports
    Ports,

    /// Enroll a fingerprint and record the person in the master ledger
    Enroll {
        /// Identity token to assign; prompted for when omitted
        #[arg(long = "token")]
        token: Option<u32>,

        /// Read device lines from a capture file instead of the serial port
        #[arg(long = "replay", value_name = "FILE")]
        replay: Option<String>,
    },

    /// Run the attendance session until interrupted
    Attend {
        /// Read device lines from a capture file instead of the serial port
        #[arg(long = "replay", value_name = "FILE")]
        replay: Option<String>,
    },

    /// List attendance ledger rows
    List {
        #[arg(long, short, help = "Filter by year, month or day (YYYY[-MM[-DD]])")]
        period: Option<String>,
    },

    /// Export attendance ledger data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Filter by year, month or day (YYYY[-MM[-DD]])")]
        period: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
