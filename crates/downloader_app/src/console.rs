use std::io::Write;
use std::sync::Mutex;

use downloader_engine::{FetchEvent, ProgressSink};
use engine_logging::engine_warn;

/// Prints each result line as soon as the aggregator reports it.
pub struct ConsoleSink<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner().unwrap()
    }
}

impl<W: Write + Send> ProgressSink for ConsoleSink<W> {
    fn emit(&self, event: FetchEvent) {
        let FetchEvent::ResultReady { result, .. } = event else {
            return;
        };
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(err) = writeln!(out, "{result}").and_then(|_| out.flush()) {
            engine_warn!("could not print result for {}: {}", result.url(), err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use downloader_core::{FetchResult, Strategy};
    use downloader_engine::{FailureKind, FetchError};

    #[test]
    fn prints_only_result_lines() {
        let sink = ConsoleSink::new(Vec::new());
        sink.emit(FetchEvent::BatchStarted {
            strategy: Strategy::Concurrent,
            url_count: 2,
        });
        sink.emit(FetchEvent::ResultReady {
            index: 0,
            result: FetchResult::new("https://a.example", 5),
        });
        sink.emit(FetchEvent::BatchFailed {
            error: FetchError::new("https://b.example", FailureKind::Network, "reset"),
        });

        let printed = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            printed,
            "Url: https://a.example, Downloaded Data Length: 5\n"
        );
    }
}
