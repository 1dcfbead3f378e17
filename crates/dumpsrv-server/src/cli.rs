//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "simple-dump-server",
    version,
    about = "A http server that dumps all information of requests it gets"
)]
pub struct Cli {
    /// Optional YAML config file. Built-in defaults are used when omitted.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_defaults() {
        let cli = Cli::try_parse_from(["simple-dump-server"]).unwrap();
        assert!(cli.config.is_none());
    }

    #[test]
    fn config_flag_is_parsed() {
        let cli = Cli::try_parse_from(["simple-dump-server", "--config", "dump.yaml"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("dump.yaml")));
    }

    #[test]
    fn unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["simple-dump-server", "--port", "9000"]).is_err());
    }
}
