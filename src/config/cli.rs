use crate::domain::model::TimeOfDay;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "plantao-farma")]
#[command(about = "Find which pharmacies are open right now")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override directory.base_url from the configuration
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the directory and list open and closed pharmacies (default)
    List(ListArgs),
    /// Show the static list of pharmacy phone numbers
    Contacts,
    /// Ask for permission to use the device location
    Permission {
        /// Grant without prompting
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Default, Args)]
pub struct ListArgs {
    /// Classify at this time of day (HH:MM) instead of now
    #[arg(long)]
    pub at: Option<TimeOfDay>,

    /// Expand every card to show address, phone and links
    #[arg(long)]
    pub expand: bool,

    /// Print the classification as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// The requested subcommand, `list` when none was given.
    pub fn take_command(&mut self) -> Command {
        self.command
            .take()
            .unwrap_or_else(|| Command::List(ListArgs::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_is_default() {
        let mut cli = Cli::parse_from(["plantao-farma"]);
        assert!(matches!(cli.take_command(), Command::List(ListArgs { at: None, .. })));
    }

    #[test]
    fn test_parse_list_at() {
        let mut cli = Cli::parse_from(["plantao-farma", "list", "--at", "22:00", "--expand"]);
        match cli.take_command() {
            Command::List(args) => {
                assert_eq!(args.at.unwrap().to_string(), "22:00");
                assert!(args.expand);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_at() {
        assert!(Cli::try_parse_from(["plantao-farma", "list", "--at", "abc:00"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let mut cli = Cli::parse_from([
            "plantao-farma",
            "contacts",
            "--base-url",
            "http://10.0.2.2:3000",
        ]);
        assert_eq!(cli.base_url.as_deref(), Some("http://10.0.2.2:3000"));
        assert!(matches!(cli.take_command(), Command::Contacts));
    }
}
