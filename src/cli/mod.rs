pub mod add;
pub mod backup;
pub mod init;
pub mod load;
pub mod lookup;
pub mod results;
pub mod shell;
pub mod status;
pub mod transcript;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cgpa", about = "Semester GPA and cumulative CGPA records.")]
pub struct Cli {
    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Run without a subcommand for the interactive menu.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose a data directory for the results file.
    Init {
        /// Path for results data (default: ~/Documents/cgpa)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Switch to an existing data directory.
    Load {
        /// Path to a data directory containing a results file
        path: String,
    },
    /// Show the current results file and summary statistics.
    Status,
    /// List stored result rows.
    Results {
        /// Only show rows for this matric number
        #[arg(long)]
        matric: Option<String>,
    },
    /// Look up a student's cumulative GPA.
    Lookup {
        /// Matric number
        matric: String,
    },
    /// Per-semester GPA breakdown and CGPA for a student.
    Transcript {
        /// Matric number
        matric: String,
    },
    /// Copy the results file to a timestamped backup.
    Backup {
        /// Output path (default: <data_dir>/backups/results-YYYYMMDD-HHMMSS.csv)
        #[arg(long)]
        output: Option<String>,
    },
}

/// Matric numbers are compared exactly, so normalise them once at input.
pub(crate) fn normalize_matric(raw: &str) -> String {
    raw.trim().to_uppercase()
}
