use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small attendance tracker: check in, check out, and watch elapsed and remaining shift time",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple profiles)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Override display locale (ko, en)
    #[arg(global = true, long = "locale")]
    pub locale: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing or invalid fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start the live tracker: [i] check in, [o] check out, [q] quit
    Start {
        #[arg(long = "target", help = "Target shift length (8h, 7h30m, 450m)")]
        target: Option<String>,

        #[arg(long = "ticks", help = "Exit after this many clock ticks")]
        ticks: Option<u64>,

        #[arg(long = "plain", help = "No colors and no screen clearing")]
        plain: bool,
    },

    /// Compute worked, remaining and projected times for a check-in
    Calc {
        /// Check-in time (HH:MM or HH:MM:SS)
        #[arg(long = "in", help = "Check-in time (HH:MM[:SS])")]
        check_in: String,

        /// Check-out time; omit for a session still in progress
        #[arg(long = "out", help = "Check-out time (HH:MM[:SS])")]
        check_out: Option<String>,

        /// Evaluation time; defaults to the current time
        #[arg(long = "now", help = "Evaluate as of this time (HH:MM[:SS])")]
        now: Option<String>,

        #[arg(long = "date", help = "Day of the session (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long = "target", help = "Target shift length (8h, 7h30m, 450m)")]
        target: Option<String>,

        #[arg(long = "json", help = "Print the result as JSON")]
        json: bool,
    },

    /// Print the formatted date and clock
    Clock {
        #[arg(long = "date", help = "Date to format (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long = "time", help = "Time to format (HH:MM[:SS]), default now")]
        time: Option<String>,
    },

    /// Look up the current location label once
    Where,
}
