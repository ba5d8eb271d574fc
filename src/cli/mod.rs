//! CLI module for K.A.R.A
//!
//! Provides command-line parsing for the kara-server binary. Uses clap for
//! argument parsing and owo-colors for colored terminal output.

pub mod chat;
pub mod output;

use clap::{Parser, Subcommand};

/// K.A.R.A - Knowledge-Augmented Retrieval Assistant
///
/// A Gujarati tax-law question-answering assistant: questions are matched
/// against a vector index of tax-law passages and answered in Gujarati by a
/// hosted language model.
#[derive(Parser, Debug)]
#[command(
    name = "kara-server",
    version,
    about = "K.A.R.A - Knowledge-Augmented Retrieval Assistant",
    long_about = "A Gujarati tax-law question-answering assistant.\n\
                  Questions (English or Gujarati) are embedded, matched against a vector\n\
                  index of Gujarat tax-law passages, and answered in Gujarati by a hosted\n\
                  chat model.",
    after_help = "EXAMPLES:\n    \
                  kara-server                   # Interactive chat in the terminal\n    \
                  kara-server chat              # Same, explicitly\n    \
                  kara-server serve             # Start the HTTP API\n    \
                  kara-server serve --port 8080 # Serve on a custom port\n\n\
                  CREDENTIALS:\n    \
                  OPENAI_API_KEY, PINECONE_API_KEY and PINECONE_INDEX_HOST must be set\n    \
                  (directly or via a .env file)."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute (defaults to interactive chat)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chat interactively in the terminal
    Chat,

    /// Start the HTTP API server
    Serve {
        /// Host address to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_defaults_to_chat() {
        let cli = Cli::try_parse_from(["kara-server"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn serve_accepts_host_and_port_overrides() {
        let cli =
            Cli::try_parse_from(["kara-server", "serve", "--host", "0.0.0.0", "--port", "8080"])
                .unwrap();
        match cli.command {
            Some(Commands::Serve { host, port }) => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
            }
            other => panic!("expected serve subcommand, got {:?}", other),
        }
    }
}
