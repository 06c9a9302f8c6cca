use std::io::Write;

use futures::future::try_join_all;
use reqwest::Client;
use tracing::debug;

use super::page::FetchedPage;
use crate::error::FetchError;

async fn fetch_one(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    debug!(url, "fetching");
    let body = client.get(url).send().await?.text().await?;
    let page = FetchedPage::new(url, body);
    debug!(url, chars = page.char_len(), "fetched");
    Ok(page)
}

/// Issues every GET at once over `client` and waits for the whole batch.
///
/// Results come back in `urls` order regardless of completion order. The first
/// failure fails the batch and drops the requests still in flight.
pub async fn fetch_all(client: &Client, urls: &[String]) -> Result<Vec<FetchedPage>, FetchError> {
    try_join_all(urls.iter().map(|url| fetch_one(client, url))).await
}

/// Runs the batch on a single-threaded runtime with one shared client, then
/// reports each result. Nothing is written unless the whole batch succeeds.
pub fn run_concurrent<W: Write>(urls: &[String], out: &mut W) -> Result<Vec<usize>, FetchError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(FetchError::Runtime)?;

    // The client is dropped with the block, releasing its pooled connections
    // whether or not the batch succeeded.
    let pages = runtime.block_on(async {
        let client = Client::builder().build()?;
        fetch_all(&client, urls).await
    })?;

    let mut counts = Vec::with_capacity(pages.len());
    for page in &pages {
        writeln!(out, "{}", page.concurrent_line())?;
        counts.push(page.char_len());
    }

    Ok(counts)
}
