//! Tests for command-line parsing.

#[cfg(test)]
mod tests {
    use crate::{Cli, Commands};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn serve_requires_a_port() {
        assert!(Cli::try_parse_from(["server", "serve"]).is_err());
    }

    #[test]
    fn serve_parses_port_and_config() {
        let cli = Cli::try_parse_from(["server", "serve", "--port", "9000", "--config", "tripper.yaml"])
            .unwrap();
        let Commands::Serve { port, config } = cli.command;
        assert_eq!(port, 9000);
        assert_eq!(config, Some(PathBuf::from("tripper.yaml")));
    }

    #[test]
    fn short_flags_are_accepted() {
        let cli = Cli::try_parse_from(["server", "serve", "-p", "8081"]).unwrap();
        let Commands::Serve { port, config } = cli.command;
        assert_eq!(port, 8081);
        assert!(config.is_none());
    }
}
