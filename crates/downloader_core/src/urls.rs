/// Demo url list handed to the aggregator by the binary.
pub fn default_urls() -> Vec<String> {
    [
        "https://www.google.com",
        "https://www.yahoo.com",
        "https://www.microsoft.com",
        "https://www.stackoverflow.com",
    ]
    .into_iter()
    .map(ToOwned::to_owned)
    .collect()
}
