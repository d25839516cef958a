//! Downloader engine: page fetching and the three aggregation strategies.
mod aggregate;
mod fetch;
mod sink;
mod types;

pub use aggregate::FetchAggregator;
pub use fetch::{FetchSettings, PageFetcher, ReqwestPageFetcher};
pub use sink::{FetchEvent, NullSink, ProgressSink};
pub use types::{FailureKind, FetchError};
