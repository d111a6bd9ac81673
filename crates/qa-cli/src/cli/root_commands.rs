use clap::Subcommand;

/// Top-level `qalog` commands. Each one performs a single store operation.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Submit a new question.
    Ask {
        /// Question text; must not be blank.
        question: String,
    },
    /// Set or replace the answer of a question.
    Answer {
        /// Question id as shown by `list`.
        id: i64,
        /// Answer text; must not be blank.
        answer: String,
    },
    /// List every question, newest first.
    List,
    /// Show a single question.
    Get { id: i64 },
    /// Permanently delete a question and its answer.
    Delete { id: i64 },
    /// Write the full log as CSV.
    Export {
        /// Destination file (defaults to a timestamped file in the export dir).
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show totals and the time of the latest question.
    Stats,
}
