mod cli;

use anyhow::anyhow;
use cli::{Args, Command};
use pharma_search::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
use pharma_search::adapters::outbound::network::HttpSearchClient;
use pharma_search::application::dto::SessionInput;
use pharma_search::application::factories::FormatterFactory;
use pharma_search::application::read_models::SearchViewModelBuilder;
use pharma_search::application::use_cases::SearchSession;
use pharma_search::config::Settings;
use pharma_search::ports::outbound::{OutputPresenter, ProgressReporter, ViewFormatter};
use pharma_search::search::state::SearchViewState;
use pharma_search::shared::error::ExitCode;
use pharma_search::shared::Result;
use std::io::IsTerminal;
use std::process;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    match run().await {
        Ok(ExitCode::Success) => {}
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    // Parse command-line arguments (clap exits with code 2 on bad input)
    let args = Args::parse_args();

    let working_dir = std::env::current_dir()?;
    let settings = Settings::resolve(&working_dir, args.overrides())?;

    // Create adapters (Dependency Injection)
    let repository = HttpSearchClient::with_endpoint(
        settings.base_url.clone(),
        settings.pharmacy_ids.clone(),
        settings.timeout,
    )?;
    let progress_reporter = StderrProgressReporter::new();
    for warning in &settings.warnings {
        progress_reporter.report(warning);
    }
    let formatter = FormatterFactory::create(settings.format, std::io::stdout().is_terminal());
    let presenter = StdoutPresenter::new();

    let mut session = SearchSession::new(repository, progress_reporter, settings.debounce);

    match args.command {
        Command::Search { ref query, .. } => {
            session.search_now(query).await;
            for action in args.command.selections() {
                session.apply(action);
            }

            render(session.state(), formatter.as_ref(), &presenter)?;

            if session.state().error().is_some() {
                Ok(ExitCode::ApplicationError)
            } else {
                Ok(ExitCode::Success)
            }
        }
        Command::Interactive => {
            let lines = BufReader::new(tokio::io::stdin()).lines();
            let inputs = futures::stream::unfold(Some(lines), |lines| async move {
                let mut lines = lines?;
                match lines.next_line().await {
                    Ok(Some(line)) => Some((Ok(SessionInput::parse(&line)), Some(lines))),
                    Ok(None) => None,
                    // End the stream after the first read error
                    Err(e) => Some((Err(anyhow!(e).context("Failed to read from stdin")), None)),
                }
            });

            session
                .run(Box::pin(inputs), |state| {
                    render(state, formatter.as_ref(), &presenter)
                })
                .await?;

            Ok(ExitCode::Success)
        }
    }
}

fn render(
    state: &SearchViewState,
    formatter: &dyn ViewFormatter,
    presenter: &dyn OutputPresenter,
) -> Result<()> {
    let view = SearchViewModelBuilder::build(state);
    presenter.present(&formatter.format(&view)?)
}
