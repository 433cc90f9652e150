use crate::report::{run_catalog, run_report, CatalogArgs, ReportArgs};
use crate::server;
use brainly::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Brainly Assessment",
    about = "Score cognitive assessment answers and serve the quiz API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an answer sheet CSV and print the wellness report
    Report(ReportArgs),
    /// List the questionnaire grouped by category
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Report(args) => run_report(args),
        Command::Catalog(args) => run_catalog(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn report_command_parses_paths_and_flags() {
        let cli = Cli::try_parse_from([
            "brainly-api",
            "report",
            "--answers",
            "answers.csv",
            "--catalog",
            "catalog.json",
            "--json",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Report(args)) => {
                assert_eq!(args.answers, PathBuf::from("answers.csv"));
                assert_eq!(args.catalog, Some(PathBuf::from("catalog.json")));
                assert!(args.json);
            }
            other => panic!("expected report command, got {other:?}"),
        }
    }

    #[test]
    fn missing_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["brainly-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn serve_accepts_host_and_port_overrides() {
        let cli = Cli::try_parse_from(["brainly-api", "serve", "--host", "0.0.0.0", "--port", "8080"])
            .expect("arguments parse");

        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
                assert_eq!(args.port, Some(8080));
            }
            other => panic!("expected serve command, got {other:?}"),
        }
    }
}
