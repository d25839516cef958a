use downloader_core::{FetchResult, Strategy};

use crate::FetchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent {
    BatchStarted {
        strategy: Strategy,
        url_count: usize,
    },
    /// A result became reportable. `index` is its position in the input list.
    ResultReady { index: usize, result: FetchResult },
    BatchFailed { error: FetchError },
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: FetchEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn emit(&self, _event: FetchEvent) {}
}
