//! CLI argument definitions.

use clap::Parser;

use crate::commands::ReportCmd;

/// Takes no options of its own; clap supplies `--help` and `--version`.
#[derive(Parser)]
#[command(name = "top-crates")]
#[command(about = "List the crates.io crates with the most recent downloads")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub report: ReportCmd,
}

impl Cli {
    pub async fn execute(&self) -> anyhow::Result<()> {
        self.report.run().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        assert!(Cli::try_parse_from(["top-crates"]).is_ok());
    }

    #[test]
    fn test_rejects_unknown_args() {
        assert!(Cli::try_parse_from(["top-crates", "--page", "2"]).is_err());
        assert!(Cli::try_parse_from(["top-crates", "serde"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
