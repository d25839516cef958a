//! Fan-out of page fetches over a url list.
//!
//! Every strategy returns results in input order and fails as a unit: the
//! first failing fetch (by input position) is returned and nothing else. The
//! sink receives `BatchFailed` from the strategy itself, so direct callers of
//! a strategy see it too.

use std::sync::Arc;
use std::time::Instant;

use downloader_core::{FetchResult, RunReport, Strategy};
use engine_logging::{engine_debug, engine_error, engine_info};
use futures_util::future::join_all;
use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinHandle};

use crate::{FailureKind, FetchError, FetchEvent, NullSink, PageFetcher, ProgressSink};

pub struct FetchAggregator {
    fetcher: Arc<dyn PageFetcher>,
    sink: Arc<dyn ProgressSink>,
}

impl FetchAggregator {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            sink: Arc::new(NullSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Run `strategy` over `urls` and time it.
    ///
    /// Async strategies are driven through `runtime.block_on`, so this must not
    /// be called from inside an async task.
    pub fn run(
        &self,
        runtime: &Handle,
        strategy: Strategy,
        urls: &[String],
    ) -> Result<RunReport, FetchError> {
        engine_info!("starting {} download of {} urls", strategy, urls.len());
        self.sink.emit(FetchEvent::BatchStarted {
            strategy,
            url_count: urls.len(),
        });

        let started = Instant::now();
        let outcome = match strategy {
            Strategy::Sequential => self.run_sequential(urls),
            Strategy::SequentialOffThread => runtime.block_on(self.run_sequential_off_thread(urls)),
            Strategy::Concurrent => runtime.block_on(self.run_concurrent(urls)),
        };
        let elapsed = started.elapsed();

        match outcome {
            Ok(results) => {
                engine_info!(
                    "{} download finished: {} results in {} ms",
                    strategy,
                    results.len(),
                    elapsed.as_millis()
                );
                Ok(RunReport::new(strategy, results, elapsed))
            }
            Err(error) => {
                engine_error!("{} download aborted: {}", strategy, error);
                Err(error)
            }
        }
    }

    /// Fetch each url in turn on the calling thread.
    pub fn run_sequential(&self, urls: &[String]) -> Result<Vec<FetchResult>, FetchError> {
        let mut results = Vec::with_capacity(urls.len());
        for (index, url) in urls.iter().enumerate() {
            let result =
                fetch_one(self.fetcher.as_ref(), url).map_err(|error| self.failed(error))?;
            self.report(index, &result);
            results.push(result);
        }
        Ok(results)
    }

    /// Fetch each url in turn, handing every fetch to a blocking worker and
    /// waiting for it before starting the next one.
    pub async fn run_sequential_off_thread(
        &self,
        urls: &[String],
    ) -> Result<Vec<FetchResult>, FetchError> {
        let mut results = Vec::with_capacity(urls.len());
        for (index, url) in urls.iter().enumerate() {
            let joined = self.spawn_fetch(url.clone()).await;
            let result = settle(url, joined).map_err(|error| self.failed(error))?;
            self.report(index, &result);
            results.push(result);
        }
        Ok(results)
    }

    /// Dispatch every fetch at once, wait for all of them, then collate by
    /// input position.
    pub async fn run_concurrent(&self, urls: &[String]) -> Result<Vec<FetchResult>, FetchError> {
        if urls.is_empty() {
            return Ok(Vec::new());
        }

        let handles: Vec<_> = urls
            .iter()
            .enumerate()
            .map(|(index, url)| (index, self.spawn_fetch(url.clone())))
            .collect();
        engine_debug!("dispatched {} fetches", handles.len());

        let completed = join_all(
            handles
                .into_iter()
                .map(|(index, handle)| async move { (index, handle.await) }),
        )
        .await;

        let mut slots: Vec<Option<FetchResult>> = vec![None; urls.len()];
        let mut first_error: Option<(usize, FetchError)> = None;
        for (index, joined) in completed {
            match settle(&urls[index], joined) {
                Ok(result) => slots[index] = Some(result),
                Err(error) => {
                    if first_error.as_ref().map_or(true, |(seen, _)| index < *seen) {
                        first_error = Some((index, error));
                    }
                }
            }
        }
        if let Some((_, error)) = first_error {
            return Err(self.failed(error));
        }

        let results: Vec<FetchResult> = slots.into_iter().flatten().collect();
        for (index, result) in results.iter().enumerate() {
            self.report(index, result);
        }
        Ok(results)
    }

    fn spawn_fetch(&self, url: String) -> JoinHandle<Result<FetchResult, FetchError>> {
        let fetcher = Arc::clone(&self.fetcher);
        tokio::task::spawn_blocking(move || fetch_one(fetcher.as_ref(), &url))
    }

    fn failed(&self, error: FetchError) -> FetchError {
        self.sink.emit(FetchEvent::BatchFailed {
            error: error.clone(),
        });
        error
    }

    fn report(&self, index: usize, result: &FetchResult) {
        self.sink.emit(FetchEvent::ResultReady {
            index,
            result: result.clone(),
        });
    }
}

fn fetch_one(fetcher: &dyn PageFetcher, url: &str) -> Result<FetchResult, FetchError> {
    let body = fetcher.fetch(url)?;
    engine_debug!("fetched {} ({} bytes)", url, body.len());
    Ok(FetchResult::new(url, body.len() as u64))
}

fn settle(
    url: &str,
    joined: Result<Result<FetchResult, FetchError>, JoinError>,
) -> Result<FetchResult, FetchError> {
    joined.map_err(|err| FetchError::new(url, FailureKind::WorkerFailed, err.to_string()))?
}
