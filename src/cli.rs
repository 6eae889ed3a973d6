use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
pub struct PostboardArgs {
    /// Load configuration from a custom location. Defaults to: $XDG_CONFIG/postboard/config.yml
    #[arg(short, long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Print a config template
    ConfigTemplate,
    /// Create a config file. Defaults to: $XDG_CONFIG/postboard/config.yml
    ConfigInit {
        /// Create configuration at a custom location.
        #[arg(short, long = "config", value_name = "FILE")]
        config_path: Option<PathBuf>,
    },
}

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Lists and creates posts against a remote posts API")]
#[command(subcommand_negates_reqs(true))]
#[command(args_conflicts_with_subcommands(true))]
pub struct Cli {
    #[command(flatten)]
    pub args: PostboardArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_config_flag() {
        let cli = Cli::parse_from(["postboard", "--config", "/tmp/board.yml"]);

        assert_eq!(cli.args.config_path, Some(PathBuf::from("/tmp/board.yml")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::parse_from(["postboard", "config-template"]);
        assert!(matches!(cli.command, Some(Command::ConfigTemplate)));

        let cli = Cli::parse_from(["postboard", "config-init", "-c", "out.yml"]);
        assert!(matches!(
            cli.command,
            Some(Command::ConfigInit { config_path: Some(_) })
        ));
    }
}
