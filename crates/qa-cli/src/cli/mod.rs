use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `qalog` binary.
#[derive(Debug, Parser)]
#[command(name = "qalog", version, about = "qalog - question and answer log")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database file (overrides `database.path` from config)
    #[arg(long, global = true)]
    pub db: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            db: self.db.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["qalog", "--format", "json", "--verbose", "list"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["qalog", "stats", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn format_defaults_to_table() {
        let cli = Cli::try_parse_from(["qalog", "list"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["qalog", "--format", "xml", "list"]).is_err());
    }

    #[test]
    fn ask_takes_question_text() {
        let cli = Cli::try_parse_from(["qalog", "ask", "What is 2+2?"]).expect("cli should parse");
        match cli.command {
            Commands::Ask { question } => assert_eq!(question, "What is 2+2?"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn answer_takes_numeric_id_and_text() {
        let cli = Cli::try_parse_from(["qalog", "answer", "3", "four"]).expect("cli should parse");
        match cli.command {
            Commands::Answer { id, answer } => {
                assert_eq!(id, 3);
                assert_eq!(answer, "four");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert!(Cli::try_parse_from(["qalog", "delete", "abc"]).is_err());
    }

    #[test]
    fn export_output_and_db_override() {
        let cli = Cli::try_parse_from([
            "qalog", "--db", "/tmp/qa.db", "export", "--output", "out.csv",
        ])
        .expect("cli should parse");

        assert_eq!(cli.global_flags().db.as_deref(), Some("/tmp/qa.db"));
        match cli.command {
            Commands::Export { output } => assert_eq!(output.as_deref(), Some("out.csv")),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
