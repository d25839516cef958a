use std::fmt;
use std::time::Duration;

use crate::Strategy;

/// Outcome of one completed fetch. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    url: String,
    content_length: u64,
}

impl FetchResult {
    pub fn new(url: impl Into<String>, content_length: u64) -> Self {
        Self {
            url: url.into(),
            content_length,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Size of the downloaded body in bytes.
    pub fn content_length(&self) -> u64 {
        self.content_length
    }
}

impl fmt::Display for FetchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Url: {}, Downloaded Data Length: {}",
            self.url, self.content_length
        )
    }
}

/// A finished run: results in input order plus total wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub strategy: Strategy,
    pub results: Vec<FetchResult>,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn new(strategy: Strategy, results: Vec<FetchResult>, elapsed: Duration) -> Self {
        Self {
            strategy,
            results,
            elapsed,
        }
    }

    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.results {
            writeln!(f, "{result}")?;
        }
        write!(f, "Total Elapsed Time: {}", self.elapsed_millis())
    }
}
