use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance tracker: sign volunteers in and out and keep the task log",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Manage roster members
    Member {
        #[command(subcommand)]
        action: MemberAction,
    },

    /// Replace or reset the whole roster (clears sessions and the log)
    Roster {
        #[command(subcommand)]
        action: RosterAction,
    },

    /// Sign a member in
    In {
        /// Member name (case-insensitive)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Sign a member out
    Out {
        /// Member name (case-insensitive)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Show the attendance of the current task
    List {
        #[arg(long = "present", help = "Show only members currently signed in")]
        present: bool,
    },

    /// Start a new task or show the current one
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Clear open sessions and the attendance log
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export the attendance log
    Export {
        #[arg(long, value_enum, default_value = "text")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: task_<n>_log_<date>.<ext> in export_dir)"
        )]
        file: Option<String>,

        #[arg(long, conflicts_with = "file", help = "Write to standard output")]
        stdout: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Print the internal operations journal
    Log {
        #[arg(long = "print", help = "Print rows from the operations journal")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum MemberAction {
    /// Add a member to the roster
    Add { name: String },

    /// Rename a member (sessions and log entries follow)
    Rename { old: String, new: String },

    /// Delete a member with all of their sessions and log entries
    Del {
        name: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List roster members
    List {
        #[arg(long = "available", help = "Only members who are not signed in")]
        available: bool,
    },
}

#[derive(Subcommand)]
pub enum RosterAction {
    /// Replace the roster with the names in FILE (one per line)
    Replace {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Restore the built-in roster
    Reset {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Start a new task (clears sessions and the log)
    New {
        number: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show the current task number
    Show,
}

/// Join a multi-word name given as separate arguments.
pub fn join_name(parts: &[String]) -> String {
    parts.join(" ")
}
