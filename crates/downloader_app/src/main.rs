mod console;
mod logging;

use std::io::{self, BufRead};
use std::sync::Arc;

use anyhow::Context;
use downloader_core::{default_urls, read_selection};
use downloader_engine::{FetchAggregator, FetchSettings, ReqwestPageFetcher};
use engine_logging::engine_info;

use console::ConsoleSink;
use logging::LogDestination;

fn main() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let strategy = read_selection(io::stdin().lock(), io::stdout())
        .context("failed to read download style")?;
    engine_info!("selected strategy {}", strategy);

    // Built before the runtime: the blocking client must not live inside one.
    let fetcher = ReqwestPageFetcher::new(FetchSettings::default())
        .context("failed to build http client")?;
    let aggregator = FetchAggregator::new(Arc::new(fetcher))
        .with_sink(Arc::new(ConsoleSink::new(io::stdout())));
    let runtime = tokio::runtime::Runtime::new().context("failed to start worker runtime")?;

    let urls = default_urls();
    println!("\nStart Download: {}", strategy.label());
    let report = aggregator.run(runtime.handle(), strategy, &urls)?;
    println!("Total Elapsed Time: {}", report.elapsed_millis());

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
