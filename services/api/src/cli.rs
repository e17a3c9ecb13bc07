use crate::demo::{run_catalog, run_demo, run_quiz, run_score, CatalogArgs, DemoArgs, QuizArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use footprint_quiz::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Ecological Footprint Quiz",
    about = "Score the ecological footprint questionnaire from the command line or over HTTP",
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
    /// List the questions and their answer weights
    Catalog(CatalogArgs),
    /// Score a set of answers given as flags or a JSON file
    Score(ScoreArgs),
    /// Answer the questionnaire interactively on stdin
    Quiz(QuizArgs),
    /// Print a sample printable report for a student
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// CSV catalog to serve instead of the built-in questions
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog(args) => run_catalog(args),
        Command::Score(args) => run_score(args),
        Command::Quiz(args) => run_quiz(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["footprint-quiz-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_collects_repeated_answers() {
        let cli = Cli::try_parse_from([
            "footprint-quiz-api",
            "score",
            "--answer",
            "transport_mode=1.2",
            "--answer",
            "food_meat=0.9",
            "--year",
            "2025",
            "--json",
        ])
        .expect("parses");

        let Some(Command::Score(args)) = cli.command else {
            panic!("expected score command");
        };
        assert_eq!(args.answer.len(), 2);
        assert_eq!(args.answer[0], ("transport_mode".to_string(), 1.2));
        assert_eq!(args.year, Some(2025));
        assert!(args.json);
    }

    #[test]
    fn score_rejects_malformed_answer() {
        let result = Cli::try_parse_from(["footprint-quiz-api", "score", "--answer", "oops"]);
        assert!(result.is_err());
    }
}
