use crate::export::{ExportFormat, PrintFormat};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for fleetsheet
/// CLI application to track driver hours, distance tiers and pay with SQLite
#[derive(Parser)]
#[command(
    name = "fleetsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "A fleet timesheet CLI: record hours, distance and day offs, compute pay and per-driver summaries",
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
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Manage the employee directory
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Manage work / day-off entries
    Entry {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// Show the entry table, totals and per-driver summary
    List {
        #[arg(
            long,
            short,
            help = "Only show these tokens (comma or space separated)"
        )]
        search: Option<String>,
    },

    /// Show the per-driver summary only
    Summary {
        #[arg(long, short, help = "Only show these tokens (comma or space separated)")]
        search: Option<String>,
    },

    /// Write the printable view (filtered table + driver summary)
    Print {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "html")]
        format: PrintFormat,

        #[arg(long, short)]
        search: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the filtered entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short)]
        search: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Replace both stores with JSON lists (e.g. a browser localStorage dump)
    Import {
        #[arg(long, value_name = "FILE", help = "JSON array of employees")]
        employees: String,

        #[arg(long, value_name = "FILE", help = "JSON array of entries")]
        entries: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Database maintenance
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add an employee (token must be unique)
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        token: String,

        #[arg(long = "rate", help = "Hourly rate")]
        rate: f64,
    },

    /// List employees with their positions
    List,

    /// Edit the employee at POSITION in place
    Edit {
        /// Position as shown by `employee list`
        position: usize,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        token: Option<String>,

        #[arg(long = "rate")]
        rate: Option<f64>,
    },

    /// Delete the employee at POSITION
    Del {
        position: usize,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

/// Fields of the entry form.
#[derive(Args, Clone)]
pub struct EntryArgs {
    /// One or two tokens, comma separated ("12" or "12,34")
    #[arg(long)]
    pub tokens: String,

    /// Date of the entry (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub date: Option<String>,

    /// Mark the day as a day off (hours, minutes and distance are ignored)
    #[arg(long = "day-off")]
    pub day_off: bool,

    #[arg(long)]
    pub hours: Option<u32>,

    #[arg(long)]
    pub minutes: Option<u32>,

    /// Total distance driven, in km
    #[arg(long)]
    pub distance: Option<f64>,
}

/// Fields of `entry edit`: anything left out keeps the stored value.
#[derive(Args, Clone)]
pub struct EntryEditArgs {
    /// New token(s); default: the entry's token
    #[arg(long)]
    pub tokens: Option<String>,

    /// New date (YYYY-MM-DD); default: the entry's date
    #[arg(long)]
    pub date: Option<String>,

    /// Turn the entry into a day off
    #[arg(long = "day-off", conflicts_with = "work_day")]
    pub day_off: bool,

    /// Turn a day off back into a work entry
    #[arg(long = "work-day")]
    pub work_day: bool,

    #[arg(long)]
    pub hours: Option<u32>,

    #[arg(long)]
    pub minutes: Option<u32>,

    /// Total distance driven, in km
    #[arg(long)]
    pub distance: Option<f64>,
}

#[derive(Subcommand)]
pub enum EntryAction {
    /// Record work (or a day off) for one or two tokens
    Add(EntryArgs),

    /// Replace the entry at POSITION
    Edit {
        /// Position as shown by `list`
        position: usize,

        #[command(flatten)]
        fields: EntryEditArgs,
    },

    /// Delete the entry at POSITION
    Del {
        position: usize,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
