//! Downloader core: strategy selection, result types and the console menu.
mod menu;
mod report;
mod strategy;
mod urls;

pub use menu::{parse_selection, read_selection, InputError, INVALID_SELECTION_MESSAGE, PROMPT};
pub use report::{FetchResult, RunReport};
pub use strategy::Strategy;
pub use urls::default_urls;
