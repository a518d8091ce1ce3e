use clap::Parser;
use proxy_search::cli::Cli;
use proxy_search::config::Config;
use proxy_search::output::{self, FetchSpinner};
use proxy_search::search::{self, QueryFetcher};
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let (config, problems) = Config::from_env();
    output::init(config.verbose);
    for problem in &problems {
        output::warn(&format!("{}, using defaults", problem));
    }
    output::status(&format!(
        "Engine: {} (max {} chars)",
        config.engine, config.search.max_chars
    ));

    let query = {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        let mut stdout = io::stdout();
        match cli.resolve_query(config.engine.prompt(), &mut reader, &mut stdout) {
            Ok(query) => query,
            Err(e) => {
                output::error(&e.to_string());
                return ExitCode::FAILURE;
            }
        }
    };

    let fetcher = QueryFetcher::new(config.search);
    if let Ok(url) = fetcher.build_url(&query) {
        output::status(&format!("GET {}", url));
    }

    let spinner = FetchSpinner::start("Searching");
    let result = fetcher.fetch(&query).await;
    spinner.stop();

    match &result {
        Ok(fetched) => {
            if fetched.truncated {
                output::status("Response truncated");
            }
            output::success("Search complete");
        }
        Err(e) if e.is_transport() => output::status("Search failed in transport"),
        Err(_) => output::status("Search failed"),
    }
    let text = search::render(result);

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
        output::error(&format!("failed to write result: {}", e));
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
